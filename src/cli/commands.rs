//! CLI command implementations

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::cli::args::ConfigCommand;
use crate::cli::interactive::{drive_session, print_summary};
use crate::config::Settings;
use crate::export::{render_html, write_html};
use crate::llm::{youtube_link, Language, LlmError, ProviderKind, ProviderRouter, SummaryMode, Timestamp};
use crate::session::{Outcome, SessionController, SessionState, FETCH_ERROR_MESSAGE};
use crate::transcript::HttpTranscriptFetcher;
use crate::{VidsumError, APP_NAME, VERSION};

type LiveController = SessionController<HttpTranscriptFetcher, ProviderRouter>;

fn build_controller(settings: &Settings) -> Result<LiveController> {
    let fetcher =
        HttpTranscriptFetcher::from_settings(settings).context("Failed to build transcript client")?;
    let router = ProviderRouter::from_settings(settings).context("Failed to build LLM providers")?;
    Ok(SessionController::new(fetcher, router))
}

/// Generate one summary and print it
pub async fn summarize_video(
    settings: &Settings,
    url: &str,
    language: Option<Language>,
    provider: Option<ProviderKind>,
    detailed: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let controller = build_controller(settings)?;

    let state = SessionState::new(
        url,
        language.unwrap_or(settings.session.language),
        provider.unwrap_or(settings.session.provider),
    );
    let mode = if detailed {
        SummaryMode::Detailed
    } else {
        SummaryMode::Quick
    };

    let (_, outcome) = controller.generate(state, mode).await;

    let result = match outcome {
        Outcome::Generated { result, notices } => {
            print_summary(&mut io::stdout().lock(), &result, &notices)?;
            result
        }
        Outcome::FetchFailed { detail } => {
            let detail = detail.map(|d| format!(" ({})", d)).unwrap_or_default();
            anyhow::bail!("{}{}", FETCH_ERROR_MESSAGE, detail);
        }
        Outcome::LlmFailed { error } => {
            if let LlmError::MalformedResponse { raw } = &error {
                tracing::debug!(raw = %raw, "Raw provider response");
            }
            return Err(VidsumError::Llm(error)).context("Error generating summary");
        }
    };

    if let Some(path) = output {
        let written = write_html(&path, &render_html(&result.title, &result.summary))?;
        println!();
        println!("Exported to: {}", written.display());
    }

    Ok(())
}

/// Run the interactive session on stdin/stdout
pub async fn run_session(settings: &Settings) -> Result<()> {
    let controller = build_controller(settings)?;
    let state = SessionState::from_settings(settings);

    println!("{} {} session. Type 'help' for commands.", APP_NAME, VERSION);

    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut out = io::stdout();
    let state = drive_session(&controller, state, input, &mut out, &settings.export_path()).await?;

    if let Some(latest) = state.latest {
        tracing::debug!(title = %latest.title, "Session ended with a summary");
    }

    Ok(())
}

/// Print a watch link for a timestamp
pub fn print_link(video_id: &str, start: Timestamp) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", youtube_link(video_id, start))?;
    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(&redacted(settings))?;
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

fn redacted(settings: &Settings) -> Settings {
    let mut settings = settings.clone();
    for key in [
        &mut settings.providers.github.api_key,
        &mut settings.providers.openrouter.api_key,
    ] {
        if !key.is_empty() {
            *key = "********".to_string();
        }
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacted_hides_only_present_keys() {
        let mut settings = Settings::default();
        settings.providers.github.api_key = "ghp_secret".to_string();
        settings.providers.openrouter.api_key = String::new();

        let shown = redacted(&settings);
        assert_eq!(shown.providers.github.api_key, "********");
        assert!(shown.providers.openrouter.api_key.is_empty());
        assert_eq!(settings.providers.github.api_key, "ghp_secret");
    }
}
