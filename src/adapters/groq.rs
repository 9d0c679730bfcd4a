use crate::domain::model::{CompletionRequest, RawCompletion};
use crate::domain::ports::{CompletionClient, ConfigProvider};
use crate::utils::error::{PassphraseError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";

// OpenAI 相容的請求與回應格式
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ChatMessageResponse>,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

/// Chat-completions client for Groq (or any OpenAI-compatible endpoint).
///
/// A missing API key is not an error until the first call, so the HTTP
/// surface can still start and answer with a configuration failure.
#[derive(Debug, Clone)]
pub struct GroqClient {
    api_base: String,
    api_key: Option<String>,
    client: Client,
}

impl GroqClient {
    pub fn new(api_base: impl Into<String>, api_key: Option<String>) -> Self {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            api_key,
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.api_base(), config.api_key().map(str::to_string))
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<RawCompletion> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| PassphraseError::MissingConfigError {
                field: "GROQ_API_KEY".to_string(),
            })?;

        let body = ChatRequest {
            model: &request.sampling.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            temperature: request.sampling.temperature,
            max_tokens: request.sampling.max_tokens,
            top_p: request.sampling.top_p,
            stream: false,
        };

        tracing::debug!("Making completion request to: {}", self.endpoint());
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| PassphraseError::upstream(format!("Groq request failed: {}", e)))?;

        let status = response.status();
        tracing::debug!("Completion response status: {}", status);

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(PassphraseError::upstream(format!(
                "Groq API error {}: {}",
                status, detail
            )));
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            PassphraseError::upstream(format!("Groq response parse failed: {}", e))
        })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| PassphraseError::upstream("No response content from Groq API"))?;

        Ok(RawCompletion::new(content))
    }
}
