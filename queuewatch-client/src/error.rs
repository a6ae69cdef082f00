//! Error types for the Jenkins client

use queuewatch_core::CiError;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to Jenkins
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Jenkins returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if the server rejected the credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::ApiError { status: 401 | 403, .. })
    }
}

impl From<ClientError> for CiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::RequestFailed(e) => CiError::Request(e.to_string()),
            ClientError::ApiError { status, message } => CiError::Api { status, message },
            ClientError::ParseError(msg) => CiError::Parse(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_unauthorized() {
        assert!(ClientError::api_error(401, "").is_unauthorized());
        assert!(ClientError::api_error(403, "").is_unauthorized());
        assert!(!ClientError::api_error(404, "missing").is_unauthorized());
        assert!(!ClientError::ParseError("bad".into()).is_unauthorized());
    }

    #[test]
    fn test_converts_into_ci_error() {
        let err: CiError = ClientError::api_error(500, "boom").into();
        assert!(matches!(err, CiError::Api { status: 500, .. }));

        let err: CiError = ClientError::ParseError("bad json".into()).into();
        assert!(matches!(err, CiError::Parse(_)));
    }
}
