//! CLI command implementations

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::llm::{analyze, build_provider, AnalyzeRequest};

/// Run the HTTP API, applying command-line overrides on top of the settings
pub async fn serve(settings: &Settings, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut settings = settings.clone();
    if let Some(host) = host {
        settings.server.host = host;
    }
    if let Some(port) = port {
        settings.server.port = port;
    }

    crate::server::serve(&settings).await
}

/// Analyze a transcript from a file or stdin and print the response body
pub async fn analyze_transcript(
    settings: &Settings,
    task: &str,
    file: Option<PathBuf>,
) -> Result<()> {
    let transcript = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read transcript: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read transcript from stdin")?;
            buf
        }
    };

    let request = AnalyzeRequest {
        transcript,
        task: task.to_string(),
    };

    let provider = build_provider(settings)?;
    let response = analyze(provider.as_ref(), &request)
        .await
        .context("Analysis failed")?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

/// Handle config commands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let mut shown = settings.clone();
            if !shown.llm.api_key.is_empty() {
                shown.llm.api_key = mask_secret(&shown.llm.api_key);
            }
            let toml = toml::to_string_pretty(&shown)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

// Helper functions

fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_secret_keeps_last_four_chars() {
        assert_eq!(mask_secret("sk-1234567890abcd"), "****abcd");
    }

    #[test]
    fn mask_secret_hides_short_values_entirely() {
        assert_eq!(mask_secret("short"), "****");
    }
}
