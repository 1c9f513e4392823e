use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::config::Settings;
use crate::llm::error::LlmError;
use crate::llm::together::TogetherClient;

/// A chat-completion backend. One call, one prompt, one generated text.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> std::result::Result<String, LlmError>;

    /// Provider name for logs
    fn name(&self) -> &'static str;

    /// Model identifier sent upstream
    fn model(&self) -> &str;
}

/// Build the Together completion client from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Arc<dyn CompletionProvider>> {
    Ok(Arc::new(TogetherClient::from_settings(settings)?))
}
