//! Error types for the mentor backend.

use thiserror::Error;

/// Result type alias using mentor's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for mentor operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Upstream data service rejected the bearer token
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed to access the resource
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Upstream data service unreachable or returned a non-2xx status
    #[error("Upstream unavailable: {0}")]
    Unavailable(String),

    /// Upstream data service returned a query-level error payload
    #[error("Upstream query error: {0}")]
    MalformedQuery(String),

    /// LLM call failed (network or provider error)
    #[error("Inference error: {0}")]
    Inference(String),

    /// LLM output could not be parsed or validated as the expected structure.
    /// This is the trust boundary where generative text was expected to be
    /// structured data and was not.
    #[error("Malformed model output: {0}")]
    MalformedOutput(String),

    /// Configuration error (startup-time, fatal)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid caller input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unauthorized() {
        let err = Error::Unauthorized("invalid token".to_string());
        assert_eq!(err.to_string(), "Unauthorized: invalid token");
    }

    #[test]
    fn test_error_display_unavailable() {
        let err = Error::Unavailable("connection refused".to_string());
        assert_eq!(err.to_string(), "Upstream unavailable: connection refused");
    }

    #[test]
    fn test_error_display_malformed_query() {
        let err = Error::MalformedQuery("unknown field".to_string());
        assert_eq!(err.to_string(), "Upstream query error: unknown field");
    }

    #[test]
    fn test_error_display_inference() {
        let err = Error::Inference("model timeout".to_string());
        assert_eq!(err.to_string(), "Inference error: model timeout");
    }

    #[test]
    fn test_error_display_malformed_output() {
        let err = Error::MalformedOutput("no JSON object found".to_string());
        assert_eq!(
            err.to_string(),
            "Malformed model output: no JSON object found"
        );
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("missing API key".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing API key");
    }

    #[test]
    fn test_error_display_invalid_input() {
        let err = Error::InvalidInput("empty prompt".to_string());
        assert_eq!(err.to_string(), "Invalid input: empty prompt");
    }

    #[test]
    fn test_error_display_request() {
        let err = Error::Request("network unreachable".to_string());
        assert_eq!(err.to_string(), "Request error: network unreachable");
    }

    #[test]
    fn test_error_display_internal() {
        let err = Error::Internal("unexpected state".to_string());
        assert_eq!(err.to_string(), "Internal error: unexpected state");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("not a number");
        assert!(json_err.is_err());

        let err: Error = json_err.unwrap_err().into();
        match err {
            Error::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: Error = io_err.into();
        match err {
            Error::Io(_) => {}
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_result_type_ok() {
        fn get_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(get_result().unwrap(), 42);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn test_error_debug_format() {
        let err = Error::MalformedOutput("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("MalformedOutput"));
    }
}
