//! The structured error body of a non-expected response.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A `{code, message}` error reported by a service.
///
/// Missing JSON fields deserialize to their zero values so a partial or
/// empty error body still yields a value the caller can patch up.
///
/// ## Examples
///
/// ```
/// use restgen_runtime::ResourceError;
///
/// let err: ResourceError = serde_json::from_str(r#"{"message": "gone"}"#).unwrap();
/// assert_eq!(err.code, 0);
/// assert_eq!(err.to_string(), "0 gone");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(default)]
#[error("{code} {message}")]
pub struct ResourceError {
    pub code: i32,
    pub message: String,
}

impl ResourceError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_body_decodes() {
        let err: ResourceError =
            serde_json::from_str(r#"{"code": 409, "message": "conflict"}"#).unwrap();
        assert_eq!(err, ResourceError::new(409, "conflict"));
    }

    #[test]
    fn test_empty_object_is_default() {
        let err: ResourceError = serde_json::from_str("{}").unwrap();
        assert_eq!(err, ResourceError::default());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let err: ResourceError =
            serde_json::from_str(r#"{"code": 400, "detail": "x"}"#).unwrap();
        assert_eq!(err.code, 400);
        assert!(err.message.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(ResourceError::new(404, "Not Found").to_string(), "404 Not Found");
    }
}
