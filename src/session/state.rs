//! Session state and its pure transitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::{Language, ProviderKind, SummaryMode};

/// The most recent generated summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub title: String,
    pub summary: String,
    pub video_id: String,
    pub mode: SummaryMode,
    pub generated_at: DateTime<Utc>,
}

/// Everything one interactive session remembers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub video_url: String,
    pub language: Language,
    pub provider: ProviderKind,
    /// Only the latest result is kept
    pub latest: Option<SummaryResult>,
}

/// User input that only touches session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    SetUrl(String),
    SetLanguage(Language),
    SetProvider(ProviderKind),
    Show,
}

/// Text to show the user after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply(pub String);

impl SessionState {
    pub fn new(video_url: impl Into<String>, language: Language, provider: ProviderKind) -> Self {
        Self {
            video_url: video_url.into(),
            language,
            provider,
            latest: None,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.session.video_url.clone(),
            settings.session.language,
            settings.session.provider,
        )
    }

    /// Apply a state-only input.
    pub fn apply(self, input: SessionInput) -> (Self, Reply) {
        match input {
            SessionInput::SetUrl(url) => {
                let url = url.trim().to_string();
                let reply = Reply(format!("Video URL: {}", url));
                (Self { video_url: url, ..self }, reply)
            }
            SessionInput::SetLanguage(language) => {
                let reply = Reply(format!("Language: {}", language));
                (Self { language, ..self }, reply)
            }
            SessionInput::SetProvider(provider) => {
                let reply = Reply(format!("Provider: {}", provider));
                (Self { provider, ..self }, reply)
            }
            SessionInput::Show => {
                let reply = Reply(self.describe());
                (self, reply)
            }
        }
    }

    /// Replace the latest result.
    pub fn with_latest(self, result: SummaryResult) -> Self {
        Self {
            latest: Some(result),
            ..self
        }
    }

    fn describe(&self) -> String {
        let latest = match &self.latest {
            Some(result) => format!(
                "{} of '{}' ({}, {})",
                result.mode.label(),
                result.title,
                result.video_id,
                result.generated_at.format("%Y-%m-%d %H:%M")
            ),
            None => "none".to_string(),
        };

        format!(
            "Video URL: {}\nLanguage: {}\nProvider: {}\nLatest: {}",
            self.video_url, self.language, self.provider, latest
        )
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
