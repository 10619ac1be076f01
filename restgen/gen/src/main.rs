//! Restgen Code Generator
//!
//! Generates a typed async Rust client from a service schema.

use std::path::PathBuf;

use clap::Parser;
use restgen_define::Schema;
use restgen_gen::config::{DEFAULT_BANNER, DEFAULT_RUNTIME, GeneratorOptions};
use restgen_gen::errors::GeneratorError;
use restgen_gen::output::generate_and_write;
use tracing::{debug, info};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Restgen code generator - turns service schemas into typed Rust REST clients
#[derive(Parser, Debug)]
#[command(name = "restgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Schema file (JSON)
    #[arg(short, long)]
    schema: PathBuf,

    /// Output file (`*.rs`) or directory; prints to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Name of the generated module, overriding the schema namespace
    #[arg(long)]
    namespace: Option<String>,

    /// Path the generated code imports runtime items from
    #[arg(long, default_value = DEFAULT_RUNTIME)]
    runtime: String,

    /// Prefix enum variants with their enum name
    #[arg(long)]
    prefix_enums: bool,

    /// Use `Option<T>` for every optional struct field
    #[arg(long)]
    precise: bool,

    /// Generator name written into the header comment
    #[arg(long, default_value = DEFAULT_BANNER)]
    banner: String,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> GeneratorOptions {
        GeneratorOptions {
            outdir: self.output.clone(),
            namespace: self.namespace.clone(),
            runtime: self.runtime.clone(),
            prefix_enums: self.prefix_enums,
            precise: self.precise,
            banner: self.banner.clone(),
        }
    }
}

/// Initialize tracing subscriber based on verbosity level.
///
/// Logs go to stderr so generated code on stdout stays clean.
fn init_tracing(verbose: u8) {
    if verbose == 0 {
        return;
    }

    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            1 => "warn,restgen=info,restgen_gen=info".to_string(),
            2 => "info,restgen=debug,restgen_gen=debug".to_string(),
            _ => "debug,restgen=trace,restgen_gen=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_file(verbose >= 4)
                .with_line_number(verbose >= 4)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = cli.options();
    options.validate()?;

    let schema = Schema::from_json_file(&cli.schema)?;
    debug!(
        path = %cli.schema.display(),
        resources = schema.resources.len(),
        "loaded schema"
    );
    for resource in &schema.resources {
        debug!(method = %resource.method, path = %resource.path, "resource");
    }

    generate_and_write(&schema, &options, cli.dry_run)?;

    if let Some(path) = options.output_path(&schema).filter(|_| !cli.dry_run) {
        info!(path = %path.display(), "generation complete");
    }
    Ok(())
}
