//! Generates the contacts client from `schema/contacts.json` into `OUT_DIR`.

use std::env;
use std::path::PathBuf;

use restgen_define::Schema;
use restgen_gen::config::GeneratorOptions;
use restgen_gen::output::generate_and_write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let schema_path = manifest_dir.join("schema/contacts.json");
    println!("cargo:rerun-if-changed={}", schema_path.display());

    let schema = Schema::from_json_file(&schema_path)?;
    let target = PathBuf::from(env::var("OUT_DIR")?).join("contacts_client.rs");
    let options = GeneratorOptions::default().with_outdir(target);
    generate_and_write(&schema, &options, false)?;
    Ok(())
}
