//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::llm::{Language, ProviderKind};
use crate::VidsumError;

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Session defaults
    #[serde(default)]
    pub session: SessionSettings,

    /// Transcript service settings
    #[serde(default)]
    pub transcript: TranscriptSettings,

    /// LLM provider profiles
    #[serde(default)]
    pub providers: ProvidersSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Directory HTML exports are written to when no path is given
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Output language (en, zh-CN, zh-TW)
    #[serde(default)]
    pub language: Language,

    /// LLM provider (github, openrouter)
    #[serde(default)]
    pub provider: ProviderKind,

    /// Video URL a new session starts with
    #[serde(default = "default_video_url")]
    pub video_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSettings {
    /// Transcript service endpoint
    #[serde(default = "default_transcript_endpoint")]
    pub endpoint: String,

    /// Shared secret expected by the transcript service
    #[serde(default = "default_transcript_password")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersSettings {
    #[serde(default = "default_github_profile")]
    pub github: ProviderProfile,

    #[serde(default = "default_openrouter_profile")]
    pub openrouter: ProviderProfile,
}

/// Endpoint, model and credentials for one provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderProfile {
    /// API key or token
    #[serde(default)]
    pub api_key: String,

    /// Model name
    #[serde(default)]
    pub model: String,

    /// OpenAI-compatible API base URL
    #[serde(default)]
    pub endpoint: String,
}

// Default value functions

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_video_url() -> String {
    "https://www.youtube.com/watch?v=rv4LlmLmVWk".to_string()
}

fn default_transcript_endpoint() -> String {
    "https://yt.vl.comp.polyu.edu.hk/transcript".to_string()
}

fn default_transcript_password() -> String {
    "for_demo".to_string()
}

fn default_github_profile() -> ProviderProfile {
    ProviderProfile {
        api_key: String::new(),
        model: ProviderKind::Github.default_model().to_string(),
        endpoint: ProviderKind::Github.default_endpoint().to_string(),
    }
}

fn default_openrouter_profile() -> ProviderProfile {
    ProviderProfile {
        api_key: String::new(),
        model: ProviderKind::Openrouter.default_model().to_string(),
        endpoint: ProviderKind::Openrouter.default_endpoint().to_string(),
    }
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            provider: ProviderKind::default(),
            video_url: default_video_url(),
        }
    }
}

impl Default for TranscriptSettings {
    fn default() -> Self {
        Self {
            endpoint: default_transcript_endpoint(),
            password: default_transcript_password(),
        }
    }
}

impl Default for ProvidersSettings {
    fn default() -> Self {
        Self {
            github: default_github_profile(),
            openrouter: default_openrouter_profile(),
        }
    }
}

impl ProvidersSettings {
    /// Profile for the given provider
    pub fn profile(&self, kind: ProviderKind) -> &ProviderProfile {
        match kind {
            ProviderKind::Github => &self.github,
            ProviderKind::Openrouter => &self.openrouter,
        }
    }
}

impl Settings {
    /// Load settings from the configuration file, falling back to defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::debug!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        Self::load_from(&config_path)
    }

    /// Load settings for commands that talk to the LLM providers.
    ///
    /// The config file is the credentials source, so it must exist.
    pub fn load_with_credentials() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Err(VidsumError::Credentials(format!(
                "Credentials file not found at {}. Run 'vidsum config init' and add your API keys.",
                config_path.display()
            ))
            .into());
        }

        Self::load_from(&config_path)
    }

    /// Load and parse a specific config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        override_key(&mut self.providers.github.api_key, ProviderKind::Github.key_env_var());
        override_key(
            &mut self.providers.openrouter.api_key,
            ProviderKind::Openrouter.key_env_var(),
        );
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "vidsum", "vidsum")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &Path) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default path for an HTML export
    pub fn export_path(&self) -> PathBuf {
        self.general.export_dir.join(crate::export::DEFAULT_EXPORT_FILE)
    }
}

fn override_key(slot: &mut String, var: &str) {
    if !slot.trim().is_empty() {
        return;
    }
    if let Ok(key) = std::env::var(var) {
        if !key.trim().is_empty() {
            *slot = key;
        }
    }
}
