//! Restgen code generator library.
//!
//! This crate generates typed async Rust REST clients from service schemas
//! loaded with `restgen-define`. The generated module contains:
//!
//! - Model types for every schema type (structs, enums, aliases)
//! - A client struct with `new()`, `with_transport()` and `add_credentials()`
//! - One `pub async fn` per resource that builds the URL, sends the request
//!   and decodes the response or a structured resource error
//! - Only the query encoder and transport helpers those methods use
//!
//! ## Modules
//!
//! - [`codegen`] - Synthesis of individual parts (URL, signature, decoder, ...)
//! - [`output`] - Final assembly, validation, formatting and file writing
//! - [`validation`] - Schema checks run before synthesis
//! - [`resolver`] - Type name to Rust type resolution
//! - [`config`] - Generator options
//! - [`naming`] - Identifier conventions
//! - [`parser`] - Path template parsing
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use restgen_define::Schema;
//! use restgen_gen::config::GeneratorOptions;
//! use restgen_gen::output::generate_code;
//!
//! let schema = Schema::from_json_str(r#"{
//!     "name": "Contacts",
//!     "resources": [
//!         {
//!             "type": "String",
//!             "method": "GET",
//!             "path": "/contacts/{id}",
//!             "name": "getName",
//!             "inputs": [{"name": "id", "type": "String", "pathParam": true}]
//!         }
//!     ]
//! }"#).unwrap();
//!
//! let code = generate_code(&schema, &GeneratorOptions::default()).unwrap();
//! assert!(code.contains("pub async fn get_name(&self, id: &str)"));
//! ```

pub mod codegen;
pub mod config;
pub mod errors;
pub mod naming;
pub mod output;
pub mod parser;
pub mod resolver;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::GeneratorOptions;
pub use errors::GeneratorError;
pub use output::{generate_and_write, generate_code};
