use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ProviderProfile;
use crate::llm::client::{LlmError, LlmProvider, ProviderKind, SummaryRequest};

/// Chat completions client for OpenAI-compatible APIs (GitHub Models, OpenRouter).
pub struct OpenAiCompatClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenAiCompatClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self, LlmError> {
        let api_key: String = api_key.into();
        let api_key = api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(LlmError::InvalidValue("API key is empty".to_string()));
        }
        let endpoint: String = endpoint.into();

        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()?,
            api_key,
            model: model.into(),
            endpoint: endpoint.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_profile(kind: ProviderKind, profile: &ProviderProfile) -> Result<Self, LlmError> {
        let model = if profile.model.trim().is_empty() {
            kind.default_model()
        } else {
            profile.model.trim()
        };

        let endpoint = if profile.endpoint.trim().is_empty() {
            kind.default_endpoint()
        } else {
            profile.endpoint.as_str()
        };

        Self::new(profile.api_key.as_str(), model, endpoint)
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatClient {
    async fn answer(&self, request: &SummaryRequest) -> Result<String, LlmError> {
        if request.user_prompt.trim().is_empty() {
            return Err(LlmError::InvalidValue("user prompt is empty".to_string()));
        }

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_prompt,
                },
            ],
        };

        tracing::info!(provider = %request.provider, model = %self.model, "Requesting summary");

        let resp = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(LlmError::Api { status, message });
        }

        let raw = resp.text().await?;
        let payload: ChatCompletionResponse = serde_json::from_str(&raw).map_err(|e| {
            tracing::warn!(error = %e, "Completion response is not valid JSON");
            LlmError::MalformedResponse { raw: raw.clone() }
        })?;

        payload
            .choices
            .iter()
            .filter_map(|c| c.message.content.as_deref())
            .map(str::trim)
            .find(|t| !t.is_empty())
            .map(str::to_string)
            .ok_or_else(|| LlmError::InvalidValue("completion did not contain any text".to_string()))
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}
