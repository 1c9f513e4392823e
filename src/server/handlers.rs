//! HTTP request handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::llm::{analyze, AnalyzeRequest, AnalyzeResponse, CompletionProvider};
use crate::server::error::ApiError;

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CompletionProvider>,
}

/// POST /analyze
pub async fn analyze_transcript(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let response = analyze(state.provider.as_ref(), &request).await?;
    Ok(Json(response))
}
