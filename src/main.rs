//! jotbot - Transcript analysis over HTTP
//!
//! Entry point for the jotbot server and CLI.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jotbot::cli::{Cli, Commands};
use jotbot::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            jotbot::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                Commands::Serve { host, port } => {
                    jotbot::cli::commands::serve(&settings, host, port).await?;
                }
                Commands::Analyze { task, file } => {
                    jotbot::cli::commands::analyze_transcript(&settings, &task, file).await?;
                }
                Commands::Config(config_cmd) => {
                    jotbot::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
