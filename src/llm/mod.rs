//! LLM module for vidsum
//!
//! Builds summary prompts and sends them to OpenAI-compatible providers.

mod client;
mod openai;
pub mod prompts;

pub use client::{LlmError, LlmProvider, ProviderKind, ProviderRouter, SummaryRequest};
pub use openai::OpenAiCompatClient;
pub use prompts::{
    build_prompts, youtube_link, BuiltPrompts, Language, PromptInput, SummaryMode, Timestamp,
    TruncationPolicy,
};
