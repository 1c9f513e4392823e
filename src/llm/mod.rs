//! LLM module for jotbot
//!
//! Turns an analysis task into a prompt and sends it to a chat-completion
//! provider (Together AI).

mod analyze;
mod client;
mod error;
mod prompts;
mod task;
mod together;

pub use analyze::{analyze, AnalyzeRequest, AnalyzeResponse};
pub use client::{build_provider, CompletionProvider};
pub use error::LlmError;
pub use task::Task;
pub use together::{TogetherClient, DEFAULT_TOGETHER_ENDPOINT, DEFAULT_TOGETHER_MODEL};
