use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Settings;
use crate::llm::client::CompletionProvider;
use crate::llm::error::LlmError;

pub const DEFAULT_TOGETHER_ENDPOINT: &str = "https://api.together.xyz/v1";
pub const DEFAULT_TOGETHER_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.3";

const TEMPERATURE: f32 = 0.5;
const MAX_TOKENS: u32 = 200;

/// Together AI chat-completions client.
pub struct TogetherClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl TogetherClient {
    pub fn new(api_key: &str, model: &str, endpoint: &str) -> Result<Self> {
        Ok(Self {
            http: Client::builder()
                .user_agent(concat!("jotbot/", env!("CARGO_PKG_VERSION")))
                .build()
                .context("Failed to build Together HTTP client")?,
            api_key: api_key.trim().to_string(),
            model: model.trim().to_string(),
            endpoint: endpoint.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        // A missing key is not fatal; the provider rejects the first call instead.
        if settings.llm.api_key.trim().is_empty() {
            warn!("Together API key is missing. Set llm.api_key in config or TOGETHER_API_KEY.");
        }

        let model = if settings.llm.model.trim().is_empty() {
            DEFAULT_TOGETHER_MODEL
        } else {
            settings.llm.model.as_str()
        };

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            DEFAULT_TOGETHER_ENDPOINT
        } else {
            settings.llm.endpoint.as_str()
        };

        Self::new(&settings.llm.api_key, model, endpoint)
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }
}

#[async_trait]
impl CompletionProvider for TogetherClient {
    async fn complete(&self, prompt: &str) -> std::result::Result<String, LlmError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        debug!("Sending chat completion to {}", self.request_url());

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Together API error: {} - {}", status, body);
            return Err(LlmError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        let payload: ChatCompletionResponse = serde_json::from_slice(&bytes)
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        payload.into_output()
    }

    fn name(&self) -> &'static str {
        "Together"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Option<Vec<ChatChoice>>,
}

#[derive(Debug, Default, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: ChatChoiceMessage,
}

#[derive(Debug, Default, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl ChatCompletionResponse {
    /// First choice's content. A missing `choices`, `message` or `content`
    /// reads as empty text; a present but empty `choices` is an error.
    fn into_output(self) -> std::result::Result<String, LlmError> {
        let Some(choices) = self.choices else {
            return Ok(String::new());
        };

        let choice = choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("Empty choices".to_string()))?;

        Ok(choice.message.content.unwrap_or_default())
    }
}
