use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use crate::config::Settings;
use crate::transcript::TranscriptRecord;

const DEFAULT_TRANSCRIPT_ENDPOINT: &str = "https://yt.vl.comp.polyu.edu.hk/transcript";
const DEFAULT_TRANSCRIPT_PASSWORD: &str = "for_demo";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid transcript payload: {0}")]
    Payload(String),
}

/// Source of video transcripts.
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    /// Fetch the transcript for `video_id`.
    ///
    /// Returns `Ok(None)` when the service answers with anything other than
    /// `200 OK`. Transport failures are reported as errors.
    async fn fetch(&self, video_id: &str) -> Result<Option<TranscriptRecord>, FetchError>;
}

/// Transcript service client over HTTP.
pub struct HttpTranscriptFetcher {
    http: Client,
    endpoint: String,
    password: String,
}

impl HttpTranscriptFetcher {
    pub fn new(endpoint: impl Into<String>, password: impl Into<String>) -> Result<Self, FetchError> {
        Ok(Self {
            http: Client::builder().timeout(Duration::from_secs(30)).build()?,
            endpoint: endpoint.into(),
            password: password.into(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        let endpoint = if settings.transcript.endpoint.trim().is_empty() {
            DEFAULT_TRANSCRIPT_ENDPOINT.to_string()
        } else {
            settings.transcript.endpoint.trim().to_string()
        };

        let password = if settings.transcript.password.is_empty() {
            DEFAULT_TRANSCRIPT_PASSWORD.to_string()
        } else {
            settings.transcript.password.clone()
        };

        Self::new(endpoint, password)
    }
}

#[async_trait]
impl TranscriptFetcher for HttpTranscriptFetcher {
    async fn fetch(&self, video_id: &str) -> Result<Option<TranscriptRecord>, FetchError> {
        tracing::debug!(video_id, endpoint = %self.endpoint, "Fetching transcript");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("password", self.password.as_str()), ("video_id", video_id)])
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Transcript request failed"))?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(video_id, status = status.as_u16(), "Transcript service returned an error status");
            return Ok(None);
        }

        let body = response.text().await?;
        let payload: TranscriptResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Payload(e.to_string()))?;

        Ok(Some(TranscriptRecord {
            title: payload.video_title,
            transcript: payload.transcript,
            video_id: payload.video_id,
        }))
    }
}

#[derive(Debug, Deserialize)]
struct TranscriptResponse {
    #[serde(default)]
    video_title: String,
    #[serde(default)]
    transcript: String,
    #[serde(default)]
    video_id: String,
}
