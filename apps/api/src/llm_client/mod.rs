/// LLM Client — the single point of entry for all completion API calls.
///
/// ARCHITECTURAL RULE: No other module may call the completion API directly.
/// Handlers depend on the `ChatCompletion` trait; `LlmClient` is the reqwest
/// implementation wired in at startup.
///
/// Exactly one HTTP request per call: no retries, no caching, and the
/// reqwest default timeouts.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

/// OpenAI-compatible chat completions endpoint used unless `COMPLETION_API_URL` overrides it.
pub const DEFAULT_COMPLETION_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// The model used for every chat request. Hardcoded to prevent drift.
pub const MODEL: &str = "llama3-8b-8192";
pub const TEMPERATURE: f64 = 0.7;
pub const MAX_TOKENS: u32 = 1024;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Completion response contained no choices")]
    EmptyChoices,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

/// Request body sent to the completion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: &'static str,
    pub messages: Vec<ChatTurn>,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl ChatCompletionRequest {
    /// Builds the two-turn conversation: the fixed system instruction followed
    /// by the visitor's message, untouched.
    pub fn new(system: &str, user_message: &str) -> Self {
        Self {
            model: MODEL,
            messages: vec![
                ChatTurn {
                    role: Role::System,
                    content: system.to_string(),
                },
                ChatTurn {
                    role: Role::User,
                    content: user_message.to_string(),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

/// Token accounting. Only logged; providers disagree on its fields.
#[derive(Debug, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: Option<u32>,
    #[serde(default)]
    pub completion_tokens: Option<u32>,
}

impl ChatCompletionResponse {
    /// Consumes the response, returning the first choice's text.
    pub fn into_reply(self) -> Result<String, LlmError> {
        self.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(LlmError::EmptyChoices)
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Anything that can turn a chat request into reply text.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<String, LlmError>;
}

/// reqwest-backed client for an OpenAI-compatible chat completions endpoint.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    endpoint: String,
}

impl LlmClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatCompletion for LlmClient {
    async fn complete(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<String, LlmError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&body)?;

        if let Some(usage) = &parsed.usage {
            debug!(
                "Completion succeeded: prompt_tokens={:?}, completion_tokens={:?}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        parsed.into_reply()
    }
}
