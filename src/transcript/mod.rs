//! Transcript module for vidsum
//!
//! Resolves video ids from URLs and fetches transcripts from the remote
//! transcript service.

mod fetcher;

pub use fetcher::{FetchError, HttpTranscriptFetcher, TranscriptFetcher};

use serde::{Deserialize, Serialize};

/// A transcript as returned by the transcript service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    /// Video title
    pub title: String,

    /// Full transcript text
    pub transcript: String,

    /// Canonical video id reported by the service
    pub video_id: String,
}

/// Extract the video id from a watch URL.
///
/// Takes whatever follows the last `v=`. Input without `v=` is returned as is,
/// so malformed URLs produce a wrong id rather than an error.
pub fn extract_video_id(url: &str) -> String {
    url.trim()
        .rsplit("v=")
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Build the canonical watch URL for a video id.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}
