//! vidsum - Summarize YouTube videos from their transcripts
//!
//! Entry point for the vidsum CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vidsum::cli::{Cli, Commands};
use vidsum::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            vidsum::cli::completions::print(shell);
        }
        Commands::Link { video_id, start } => {
            vidsum::cli::commands::print_link(&video_id, start)?;
        }
        Commands::Config(config_cmd) => {
            let settings = Settings::load()?;
            vidsum::cli::commands::config_command(&settings, config_cmd)?;
        }
        Commands::Summarize {
            url,
            language,
            provider,
            detailed,
            output,
        } => {
            // Generation needs provider credentials from the config file.
            let settings = Settings::load_with_credentials()?;
            vidsum::cli::commands::summarize_video(
                &settings, &url, language, provider, detailed, output,
            )
            .await?;
        }
        Commands::Session => {
            let settings = Settings::load_with_credentials()?;
            vidsum::cli::commands::run_session(&settings).await?;
        }
    }

    Ok(())
}
