//! Generation flow: fetch, build prompts, request, store

use chrono::Utc;

use crate::llm::prompts::TRUNCATION_WARNING;
use crate::llm::{
    build_prompts, LlmError, LlmProvider, PromptInput, SummaryMode, SummaryRequest,
    TruncationPolicy,
};
use crate::session::state::{SessionState, SummaryResult};
use crate::transcript::{extract_video_id, TranscriptFetcher};

/// Message shown when the transcript cannot be fetched
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching transcript.";

/// What happened during one generation attempt
#[derive(Debug)]
pub enum Outcome {
    /// A new summary was stored in the session
    Generated {
        result: SummaryResult,
        notices: Vec<String>,
    },
    /// The transcript could not be fetched; no request was sent
    FetchFailed { detail: Option<String> },
    /// The provider call failed; the session is unchanged
    LlmFailed { error: LlmError },
}

impl Outcome {
    /// User-facing error text, if the attempt failed
    pub fn error_message(&self) -> Option<String> {
        match self {
            Outcome::Generated { .. } => None,
            Outcome::FetchFailed { .. } => Some(FETCH_ERROR_MESSAGE.to_string()),
            Outcome::LlmFailed {
                error: error @ LlmError::MalformedResponse { .. },
            } => Some(error.to_string()),
            Outcome::LlmFailed { error } => Some(format!("Error generating summary: {}", error)),
        }
    }
}

/// Runs generations against a transcript source and an LLM provider.
pub struct SessionController<F, P> {
    fetcher: F,
    provider: P,
}

impl<F, P> SessionController<F, P>
where
    F: TranscriptFetcher,
    P: LlmProvider,
{
    pub fn new(fetcher: F, provider: P) -> Self {
        Self { fetcher, provider }
    }

    /// Generate a summary for the session's current video.
    ///
    /// On success the returned state holds the new result in place of any
    /// previous one. On failure the state is returned unchanged.
    pub async fn generate(&self, state: SessionState, mode: SummaryMode) -> (SessionState, Outcome) {
        let video_id = extract_video_id(&state.video_url);
        tracing::info!(video_id = %video_id, mode = ?mode, "Generating summary");

        let record = match self.fetcher.fetch(&video_id).await {
            Ok(Some(record)) => record,
            Ok(None) => return (state, Outcome::FetchFailed { detail: None }),
            Err(e) => {
                tracing::error!(error = %e, "Transcript fetch failed");
                let detail = Some(e.to_string());
                return (state, Outcome::FetchFailed { detail });
            }
        };

        let prompts = build_prompts(
            mode,
            &PromptInput {
                title: &record.title,
                transcript: &record.transcript,
                video_id: &video_id,
                language: state.language,
            },
            &TruncationPolicy::for_mode(mode),
        );

        let mut notices = Vec::new();
        if prompts.truncated {
            notices.push(TRUNCATION_WARNING.to_string());
        }

        let request = SummaryRequest {
            system_prompt: prompts.system_prompt,
            user_prompt: prompts.user_prompt,
            provider: state.provider,
        };

        let summary = match self.provider.answer(&request).await {
            Ok(summary) => summary,
            Err(error) => {
                tracing::warn!(error = %error, provider = %request.provider, "Summary request failed");
                return (state, Outcome::LlmFailed { error });
            }
        };

        let result = SummaryResult {
            title: record.title,
            summary,
            video_id,
            mode,
            generated_at: Utc::now(),
        };

        (
            state.with_latest(result.clone()),
            Outcome::Generated { result, notices },
        )
    }
}
