//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::llm::{Language, ProviderKind, Timestamp};

/// vidsum - Summarize YouTube videos from their transcripts
#[derive(Parser, Debug)]
#[command(name = "vidsum")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a single video
    Summarize {
        /// YouTube watch URL
        url: String,

        /// Summary language (defaults to session.language)
        #[arg(short, long, ignore_case = true)]
        language: Option<Language>,

        /// LLM provider (defaults to session.provider)
        #[arg(short, long, ignore_case = true)]
        provider: Option<ProviderKind>,

        /// Split the summary into timestamped sessions
        #[arg(short, long)]
        detailed: bool,

        /// Also export the summary as HTML to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start an interactive session
    Session,

    /// Print a watch link that starts at a timestamp
    Link {
        /// Video ID
        video_id: String,

        /// Start position (mm:ss)
        start: Timestamp,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn summarize_parses_language_and_provider() {
        let cli = Cli::parse_from([
            "vidsum",
            "summarize",
            "https://www.youtube.com/watch?v=abc123",
            "--language",
            "zh-tw",
            "--provider",
            "openrouter",
            "--detailed",
        ]);

        match cli.command {
            Commands::Summarize {
                language,
                provider,
                detailed,
                ..
            } => {
                assert_eq!(language, Some(Language::ZhTw));
                assert_eq!(provider, Some(ProviderKind::Openrouter));
                assert!(detailed);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn link_parses_timestamp() {
        let cli = Cli::parse_from(["vidsum", "link", "abc123", "1:30"]);
        match cli.command {
            Commands::Link { start, .. } => assert_eq!(start, Timestamp::new(1, 30)),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
