//! jotbot - turns meeting transcripts into summaries, sentiment and action items
//!
//! A thin HTTP front for a chat-completion provider: one route, three prompt
//! templates, one upstream call per request.

pub mod cli;
pub mod config;
pub mod llm;
pub mod server;

