//! Client error types.

use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ClientError {
    /// Returns true when the server rejected the request itself (4xx).
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::NotFound { .. } | Self::InvalidInput(_) => true,
            Self::ServerError { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display() {
        let err = ClientError::ServerError {
            status: 503,
            message: "Store unavailable: locked".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Server returned 503: Store unavailable: locked"
        );
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_bad_request_is_client_error() {
        let err = ClientError::ServerError {
            status: 400,
            message: "Constraint violation: course name must not be empty".to_string(),
        };

        assert!(err.is_client_error());
        assert!(ClientError::NotFound {
            resource: "Course".to_string()
        }
        .is_client_error());
    }
}
