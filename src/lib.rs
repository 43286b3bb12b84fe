//! vidsum - Summarize YouTube videos from their transcripts using hosted LLMs
//!
//! Fetches a transcript, builds bounded prompts, asks an LLM provider for a
//! summary and optionally exports it as a static HTML page.

pub mod cli;
pub mod config;
pub mod export;
pub mod llm;
pub mod session;
pub mod transcript;

use thiserror::Error;

/// Main error type for vidsum
#[derive(Error, Debug)]
pub enum VidsumError {
    #[error("Credentials error: {0}")]
    Credentials(String),

    #[error("Transcript error: {0}")]
    Fetch(#[from] transcript::FetchError),

    #[error("LLM error: {0}")]
    Llm(#[from] llm::LlmError),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VidsumError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "vidsum";
