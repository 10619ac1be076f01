//! Failures of a generated client call.

use thiserror::Error;

use super::ResourceError;

/// Errors a generated client method can return.
///
/// None of these are retried by the client.
///
/// ## Examples
///
/// ```rust,ignore
/// match client.get_contact("42", "").await {
///     Ok((contact, etag)) => println!("{contact:?} {etag}"),
///     Err(ClientError::Resource(e)) if e.code == 404 => println!("no such contact"),
///     Err(e) => return Err(e.into()),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or no response was received.
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The request body could not be encoded as JSON. Raised before any I/O.
    #[error("Failed to encode request body: {0}")]
    Marshal(#[source] serde_json::Error),

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    /// A success response carried a body that does not match the expected type.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The response status was outside the expected set.
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),
}

impl ClientError {
    /// Returns the service error, if this is one.
    pub fn resource_error(&self) -> Option<&ResourceError> {
        match self {
            Self::Resource(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the error code of a resource error.
    pub fn code(&self) -> Option<i32> {
        self.resource_error().map(|err| err.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_error_code() {
        let err: ClientError = ResourceError::new(404, "Not Found").into();
        assert_eq!(err.code(), Some(404));
        assert_eq!(err.to_string(), "Resource error: 404 Not Found");
    }

    #[test]
    fn test_decode_error_has_no_code() {
        let json_err = serde_json::from_str::<i32>("\"x\"").unwrap_err();
        let err = ClientError::Decode(json_err);
        assert_eq!(err.code(), None);
        assert!(err.resource_error().is_none());
        assert!(err.to_string().starts_with("Failed to decode response body"));
    }

    #[test]
    fn test_marshal_error_display() {
        let json_err = serde_json::from_str::<i32>("{").unwrap_err();
        let err = ClientError::Marshal(json_err);
        assert!(err.to_string().contains("encode request body"));
    }
}
