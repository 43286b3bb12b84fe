use async_trait::async_trait;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::Settings;
use crate::llm::openai::OpenAiCompatClient;

/// Selectable LLM backend profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// GitHub Models
    #[default]
    Github,
    /// OpenRouter
    Openrouter,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Openrouter => "openrouter",
        }
    }

    pub fn default_endpoint(&self) -> &'static str {
        match self {
            Self::Github => "https://models.inference.ai.azure.com",
            Self::Openrouter => "https://openrouter.ai/api/v1",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Self::Github => "gpt-4o-mini",
            Self::Openrouter => "meta-llama/llama-3.3-70b-instruct:free",
        }
    }

    /// Environment variable that can supply the API key
    pub fn key_env_var(&self) -> &'static str {
        match self {
            Self::Github => "VIDSUM_GITHUB_TOKEN",
            Self::Openrouter => "VIDSUM_OPENROUTER_API_KEY",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "github" => Ok(Self::Github),
            "openrouter" => Ok(Self::Openrouter),
            other => Err(format!(
                "Unsupported provider '{}'. Supported providers: github, openrouter",
                other
            )),
        }
    }
}

/// Prompts for one generation and the provider that should answer them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub provider: ProviderKind,
}

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Received an invalid JSON response from the API. Check the raw response.")]
    MalformedResponse { raw: String },

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send the prompts and return the raw completion text.
    async fn answer(&self, request: &SummaryRequest) -> Result<String, LlmError>;
}

/// Dispatches each request to the profile named by `request.provider`.
pub struct ProviderRouter {
    github: Option<Box<dyn LlmProvider>>,
    openrouter: Option<Box<dyn LlmProvider>>,
}

impl ProviderRouter {
    pub fn new(
        github: Option<Box<dyn LlmProvider>>,
        openrouter: Option<Box<dyn LlmProvider>>,
    ) -> Self {
        Self { github, openrouter }
    }

    /// Build a client for every profile that has an API key.
    pub fn from_settings(settings: &Settings) -> Result<Self, LlmError> {
        let mut router = Self::new(None, None);

        for kind in [ProviderKind::Github, ProviderKind::Openrouter] {
            let profile = settings.providers.profile(kind);
            if profile.api_key.trim().is_empty() {
                tracing::debug!(provider = %kind, "No API key configured, provider disabled");
                continue;
            }

            let client: Box<dyn LlmProvider> = Box::new(OpenAiCompatClient::from_profile(kind, profile)?);
            match kind {
                ProviderKind::Github => router.github = Some(client),
                ProviderKind::Openrouter => router.openrouter = Some(client),
            }
        }

        Ok(router)
    }

    fn provider(&self, kind: ProviderKind) -> Option<&dyn LlmProvider> {
        match kind {
            ProviderKind::Github => self.github.as_deref(),
            ProviderKind::Openrouter => self.openrouter.as_deref(),
        }
    }
}

#[async_trait]
impl LlmProvider for ProviderRouter {
    async fn answer(&self, request: &SummaryRequest) -> Result<String, LlmError> {
        let provider = self.provider(request.provider).ok_or_else(|| {
            LlmError::InvalidValue(format!(
                "API key for provider '{}' is missing. Set providers.{}.api_key in config or {}.",
                request.provider,
                request.provider,
                request.provider.key_env_var()
            ))
        })?;

        provider.answer(request).await
    }
}
