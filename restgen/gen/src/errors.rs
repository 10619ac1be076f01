//! Error types for the restgen generator.

use restgen_define::DefineError;
use thiserror::Error;

/// Errors that can occur during code generation.
///
/// Every variant is fatal for the run: no output file is written.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Schema loading or type resolution failed
    #[error(transparent)]
    Define(#[from] DefineError),

    /// Failed to generate code
    #[error("Code generation failed: {0}")]
    CodeGen(String),

    /// A `{name}` placeholder in a path has no matching path input.
    #[error("Resource '{resource}': path placeholder '{{{param}}}' has no path input")]
    UnboundPathParam { resource: String, param: String },

    /// A path, query or header value whose type cannot be written as text.
    ///
    /// Path and header values must be scalars; query values may also be
    /// arrays of scalars.
    #[error("Resource '{resource}': {location} value '{name}' has unsupported type '{type_name}'")]
    UnsupportedParamType {
        resource: String,
        name: String,
        type_name: String,
        location: &'static str,
    },

    /// A declared default literal does not fit the input's type.
    #[error("Resource '{resource}': default for '{input}' is invalid: {reason}")]
    InvalidDefault {
        resource: String,
        input: String,
        reason: String,
    },

    /// Two resources (or a resource and a client helper) produce the same method name.
    #[error("Duplicate client method '{0}'")]
    DuplicateMethod(String),

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}
