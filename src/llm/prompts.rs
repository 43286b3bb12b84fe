//! Prompt construction for the quick and detailed summary modes.
//!
//! Transcripts are cut to a short prefix before they are embedded. A word
//! count guard then checks the combined prompt size and rebuilds the prompts
//! from a longer prefix of the full transcript when the limit is exceeded.
//! With the default prefix lengths the guard cannot fire.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::transcript::watch_url;

const QUICK_SYSTEM_PROMPT: &str = "You are an assistant that summarizes video transcripts.";

/// Warning surfaced when the token guard rebuilds the prompts.
pub const TRUNCATION_WARNING: &str = "Transcript is too long. It will be truncated.";

/// Summary language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    #[value(name = "en")]
    En,
    #[serde(rename = "zh-CN")]
    #[value(name = "zh-CN")]
    ZhCn,
    #[serde(rename = "zh-TW")]
    #[value(name = "zh-TW")]
    ZhTw,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::ZhCn, Language::ZhTw];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhCn => "zh-CN",
            Self::ZhTw => "zh-TW",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unsupported language '{}'. Supported: en, zh-CN, zh-TW", s))
    }
}

/// Which kind of summary to ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMode {
    /// Plain summary of the whole video
    Quick,
    /// Summary split into timestamped sessions
    Detailed,
}

impl SummaryMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Quick => "summary",
            Self::Detailed => "detailed summary",
        }
    }
}

/// Size limits applied while building prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncationPolicy {
    /// Characters of transcript embedded up front
    pub pre_truncate_chars: usize,
    /// Word count above which the prompts are rebuilt
    pub token_limit: usize,
    /// Characters of the full transcript used when rebuilding
    pub fallback_chars: usize,
}

impl TruncationPolicy {
    pub const QUICK: TruncationPolicy = TruncationPolicy {
        pre_truncate_chars: 100,
        token_limit: 2000,
        fallback_chars: 1000,
    };

    pub const DETAILED: TruncationPolicy = TruncationPolicy {
        pre_truncate_chars: 50,
        token_limit: 2000,
        fallback_chars: 1000,
    };

    pub fn for_mode(mode: SummaryMode) -> Self {
        match mode {
            SummaryMode::Quick => Self::QUICK,
            SummaryMode::Detailed => Self::DETAILED,
        }
    }
}

/// Everything the prompt templates need
#[derive(Debug, Clone, Copy)]
pub struct PromptInput<'a> {
    pub title: &'a str,
    pub transcript: &'a str,
    pub video_id: &'a str,
    pub language: Language,
}

/// Output of [`build_prompts`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPrompts {
    pub system_prompt: String,
    pub user_prompt: String,
    /// Transcript prefix embedded in the prompts
    pub transcript_slice: String,
    /// Word count of the first build
    pub total_tokens: usize,
    /// Whether the token guard rebuilt the prompts
    pub truncated: bool,
}

/// A position in a video
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timestamp {
    pub minutes: u32,
    pub seconds: u32,
}

impl Timestamp {
    pub fn new(minutes: u32, seconds: u32) -> Self {
        Self { minutes, seconds }
    }

    pub fn total_seconds(&self) -> u64 {
        u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }
}

impl FromStr for Timestamp {
    type Err = String;

    /// Parse `mm:ss`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (minutes, seconds) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| format!("Invalid timestamp '{}', expected mm:ss", s))?;

        let minutes = minutes
            .parse()
            .map_err(|_| format!("Invalid minutes in timestamp '{}'", s))?;
        let seconds = seconds
            .parse()
            .map_err(|_| format!("Invalid seconds in timestamp '{}'", s))?;

        Ok(Self { minutes, seconds })
    }
}

/// Watch URL that starts playback at `start`.
pub fn youtube_link(video_id: &str, start: Timestamp) -> String {
    format!("{}&t={}", watch_url(video_id), start.total_seconds())
}

/// Approximate token count: whitespace-delimited words.
pub fn count_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}

/// First `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Build the system and user prompts for `mode`.
pub fn build_prompts(
    mode: SummaryMode,
    input: &PromptInput<'_>,
    policy: &TruncationPolicy,
) -> BuiltPrompts {
    let slice = truncate_chars(input.transcript, policy.pre_truncate_chars);
    let (system_prompt, user_prompt) = render(mode, input, slice, false);

    let total_tokens = count_tokens(&system_prompt) + count_tokens(&user_prompt);

    if total_tokens > policy.token_limit {
        tracing::warn!(total_tokens, limit = policy.token_limit, "{}", TRUNCATION_WARNING);

        // Rebuild from the full transcript, not from the pre-truncated slice.
        let slice = truncate_chars(input.transcript, policy.fallback_chars);
        let (system_prompt, user_prompt) = render(mode, input, slice, true);
        return BuiltPrompts {
            system_prompt,
            user_prompt,
            transcript_slice: slice.to_string(),
            total_tokens,
            truncated: true,
        };
    }

    BuiltPrompts {
        system_prompt,
        user_prompt,
        transcript_slice: slice.to_string(),
        total_tokens,
        truncated: false,
    }
}

fn render(mode: SummaryMode, input: &PromptInput<'_>, slice: &str, truncated: bool) -> (String, String) {
    match mode {
        SummaryMode::Quick => (
            QUICK_SYSTEM_PROMPT.to_string(),
            quick_user_prompt(input.title, slice, input.language, truncated),
        ),
        SummaryMode::Detailed => (
            detailed_system_prompt(slice, input.language),
            detailed_user_prompt(input.video_id, slice, input.language, truncated),
        ),
    }
}

fn quick_user_prompt(title: &str, slice: &str, language: Language, truncated: bool) -> String {
    let framing = if truncated { "a truncated transcript" } else { "the transcript" };
    format!("Here is {framing} of '{title}': {slice}. Please summarize it in {language}.")
}

fn detailed_system_prompt(slice: &str, language: Language) -> String {
    format!(
        "You are an assistant that separates the sessions of video transcripts {slice} \
(at least 2 sessions or more), provides timestamps with their starting time YouTube URL, and summarizes \
each session with {language}."
    )
}

fn detailed_user_prompt(video_id: &str, slice: &str, language: Language, truncated: bool) -> String {
    let framing = if truncated { "a truncated formatting example" } else { "a formatting example" };
    let example_link = youtube_link(video_id, Timestamp::default());
    format!(
        "Here is {framing} and summarize in {language}:\n\
Session ..: ..\n\
Timestamp: ... - ... (in mm:ss)\n\
Timestamp URL: {example_link} (in mm:ss)\n\
Transcript: {slice} and showing the text within the corresponding Timestamp\n\
Summary: ..."
    )
}
