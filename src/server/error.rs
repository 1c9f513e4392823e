use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::llm::LlmError;

/// Failure of a request after it passed task validation.
#[derive(Debug)]
pub struct ApiError(LlmError);

impl From<LlmError> for ApiError {
    fn from(err: LlmError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Analyze request failed: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
