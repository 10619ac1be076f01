//! Output assembly and file writing for generated code.
//!
//! This module handles the final phase of code generation: assembling all
//! generated pieces into one Rust file, validating the output, formatting it,
//! and writing it to disk atomically.
//!
//! ## Output Structure
//!
//! ```text
//! // Code generated by restgen. DO NOT EDIT.
//!
//! pub mod contacts {
//!     use serde::{Deserialize, Serialize};
//!     use restgen_runtime::{ClientError, ResourceError, ...};
//!
//!     // model types
//!     // ContactsClient struct, constructors, transport helpers
//!     // one async method per resource
//!     // query encoder helpers
//! }
//! ```
//!
//! ## Safety Guarantees
//!
//! - **Validation**: the schema is validated before synthesis and the result is
//!   parsed with `syn` before anything is written
//! - **Formatting**: output is formatted with `prettyplease` for consistent style
//! - **Atomic writes**: temp file + rename, so a failed run never leaves a
//!   partial file behind

use std::fs;
use std::path::Path;

use proc_macro2::TokenStream;
use quote::quote;
use restgen_define::{Schema, TypeDef};
use tracing::info;

use crate::codegen::{
    Fragment, generate_client_struct, generate_encoders, generate_models, synthesize_method,
};
use crate::config::GeneratorOptions;
use crate::errors::GeneratorError;
use crate::naming;
use crate::resolver::TypeResolver;
use crate::validation::validate_schema;

/// Assembles the complete client module for `schema`.
///
/// Resources are emitted in schema order; the first failing resource aborts
/// the whole module.
pub fn assemble_client_module(
    schema: &Schema,
    options: &GeneratorOptions,
) -> Result<TokenStream, GeneratorError> {
    let resolver = TypeResolver::new(schema, options);
    let module = naming::ident(&options.module_name(schema));
    let runtime = options.runtime_path()?;
    let client = naming::client_ident(&schema.name);

    let models = generate_models(&resolver, schema)?;

    let mut fragment = Fragment::default();
    let mut methods = Vec::with_capacity(schema.resources.len());
    for resource in &schema.resources {
        let method = synthesize_method(&resolver, resource)?;
        methods.push(fragment.absorb(method));
    }
    let encoders = generate_encoders(&fragment.helpers);
    let client_struct = generate_client_struct(schema, &fragment.helpers);
    let encoders = fragment.absorb(encoders);

    let serde_import = if schema
        .types
        .iter()
        .any(|def| matches!(def, TypeDef::Struct(_) | TypeDef::Enum(_)))
    {
        quote!(use serde::{Deserialize, Serialize};)
    } else {
        TokenStream::new()
    };
    let runtime_import = if fragment.runtime.is_empty() {
        TokenStream::new()
    } else {
        let items = fragment.runtime.iter().map(|item| item.ident());
        quote!(use #runtime::{#(#items),*};)
    };
    let resource_impl = if methods.is_empty() {
        TokenStream::new()
    } else {
        quote! {
            impl #client {
                #(#methods)*
            }
        }
    };
    let docs = module_docs(schema);

    Ok(quote! {
        pub mod #module {
            #(#![doc = #docs])*

            #serde_import
            #runtime_import

            #models

            #client_struct

            #resource_impl

            #encoders
        }
    })
}

fn module_docs(schema: &Schema) -> Vec<String> {
    let mut lines = vec![match schema.version {
        Some(version) => format!(
            " Client for the `{}` service, schema version {}.",
            schema.name, version
        ),
        None => format!(" Client for the `{}` service.", schema.name),
    }];
    if let Some(comment) = schema.comment.as_deref().filter(|c| !c.trim().is_empty()) {
        lines.push(String::new());
        lines.extend(comment.lines().map(|line| format!(" {}", line.trim_end())));
    }
    lines
}

/// Validates generated code using syn.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGen` if the code fails to parse.
pub fn validate_code(tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone())
        .map_err(|e| GeneratorError::CodeGen(format!("Generated code is invalid: {}", e)))
}

/// Formats generated code using prettyplease, prepending the header comment.
pub fn format_code(file: &syn::File, banner: &str) -> String {
    let formatted = prettyplease::unparse(file);
    format!("// Code generated by {}. DO NOT EDIT.\n\n{}", banner, formatted)
}

/// Writes content to a file atomically using temp file + rename.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if:
/// - Parent directories cannot be created
/// - The temp file cannot be written
/// - The rename operation fails
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Generates the formatted client source for `schema` without writing it.
pub fn generate_code(
    schema: &Schema,
    options: &GeneratorOptions,
) -> Result<String, GeneratorError> {
    validate_schema(schema, options)?;
    info!(
        schema = %schema.name,
        types = schema.types.len(),
        resources = schema.resources.len(),
        "generating client"
    );
    let tokens = assemble_client_module(schema, options)?;
    let file = validate_code(&tokens)?;
    Ok(format_code(&file, &options.banner))
}

/// Generates the client and writes it to the configured destination.
///
/// The destination is [`GeneratorOptions::output_path`]; with no `outdir`,
/// or with `dry_run`, the code is printed to stdout instead. Nothing is
/// written when generation fails.
///
/// ## Returns
///
/// The formatted client source.
pub fn generate_and_write(
    schema: &Schema,
    options: &GeneratorOptions,
    dry_run: bool,
) -> Result<String, GeneratorError> {
    let code = generate_code(schema, options)?;

    match options.output_path(schema) {
        Some(path) if !dry_run => {
            write_atomic(&path, &code)?;
            info!(path = %path.display(), bytes = code.len(), "wrote client");
        }
        _ => println!("{}", code),
    }
    Ok(code)
}
