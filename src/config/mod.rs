//! Configuration module for jotbot
//!
//! Handles loading settings from a TOML file and the environment.

mod settings;

pub use settings::{LlmSettings, ServerSettings, Settings, API_KEY_ENV};
