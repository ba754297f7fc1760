//! API Error Types
//!
//! The client reports exactly one kind of failure. A refused connection, a
//! 500, and a body that does not decode all surface the same way; the message
//! is carried for logs and never shown to the user.

use thiserror::Error;

/// Failure of a single backend call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport error, non-success status, or undecodable response
    #[error("Request failed: {0}")]
    RequestFailed(String),
}

impl ApiError {
    pub fn request_failed(message: impl Into<String>) -> Self {
        ApiError::RequestFailed(message.into())
    }

    /// Log-friendly detail behind the failure
    pub fn message(&self) -> &str {
        match self {
            ApiError::RequestFailed(message) => message,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::RequestFailed(e.to_string())
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
