//! Errors raised while talking to the completion provider

use thiserror::Error;

/// Upstream completion failures.
///
/// None of these are recovered from; the HTTP layer turns every variant into
/// a 500 response.
#[derive(Error, Debug)]
pub enum LlmError {
    /// Provider answered with a non-success status
    #[error("Completion provider returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Body could not be decoded as a completion response
    #[error("Invalid completion response: {0}")]
    InvalidResponse(String),

    /// Could not reach the provider
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request timed out")]
    Timeout,

    /// Any other transport failure
    #[error("Completion request failed: {0}")]
    RequestFailed(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else if err.is_connect() {
            LlmError::ConnectionError(err.to_string())
        } else if err.is_decode() {
            LlmError::InvalidResponse(err.to_string())
        } else {
            LlmError::RequestFailed(err.to_string())
        }
    }
}
