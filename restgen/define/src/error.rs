//! Error types for schema loading and type resolution.

use thiserror::Error;

/// Errors raised while loading a schema or resolving its type names.
#[derive(Debug, Error)]
pub enum DefineError {
    /// The schema document is not valid JSON or does not match the schema shape.
    #[error("Failed to parse schema: {0}")]
    Json(#[from] serde_json::Error),

    /// The schema file could not be read.
    #[error("Failed to read schema file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A type name is neither built in nor defined by the schema.
    #[error("Unresolved type '{0}'")]
    UnresolvedType(String),

    /// A chain of type definitions refers back to itself.
    #[error("Type '{0}' is defined in terms of itself")]
    TypeCycle(String),
}
