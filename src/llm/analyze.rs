//! Transcript analysis: task lookup, prompt, single upstream completion

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::llm::client::CompletionProvider;
use crate::llm::error::LlmError;
use crate::llm::prompts::build_prompt;
use crate::llm::task::Task;

const INVALID_TASK_MESSAGE: &str = "Invalid task type";

/// Caller payload for `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub transcript: String,
    /// "summary", "sentiment" or "action_items", any case
    pub task: String,
}

/// Body returned to the caller. An unknown task is reported here rather than
/// through the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    Output { output: String },
    Error { error: String },
}

impl AnalyzeResponse {
    pub fn invalid_task() -> Self {
        AnalyzeResponse::Error {
            error: INVALID_TASK_MESSAGE.to_string(),
        }
    }
}

/// Run one analysis. Unknown tasks never reach the provider; upstream
/// failures are returned untouched.
pub async fn analyze(
    provider: &dyn CompletionProvider,
    request: &AnalyzeRequest,
) -> Result<AnalyzeResponse, LlmError> {
    let Some(task) = Task::parse(&request.task) else {
        debug!("Rejecting unknown task {:?}", request.task);
        return Ok(AnalyzeResponse::invalid_task());
    };

    debug!(
        "Analyzing transcript ({} bytes) for {} with {} ({})",
        request.transcript.len(),
        task,
        provider.name(),
        provider.model()
    );

    let prompt = build_prompt(task, &request.transcript);
    let output = provider.complete(&prompt).await?;

    Ok(AnalyzeResponse::Output { output })
}
