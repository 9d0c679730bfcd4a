use crate::core::fallback::FallbackGenerator;
use crate::core::random::ThreadRandom;
use crate::domain::model::{Generation, GenerationOptions, GenerationRequest};
use crate::domain::ports::RandomSource;
use crate::utils::error::{PassphraseError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const GENERATE_PATH: &str = "/api/generate-passphrases";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateBody<'a> {
    keywords: &'a str,
    #[serde(flatten)]
    options: &'a GenerationOptions,
}

#[derive(Deserialize)]
struct GenerateReply {
    #[serde(default)]
    passphrases: Vec<String>,
    #[serde(default)]
    success: bool,
}

/// Client for a deployed `/api/generate-passphrases` endpoint.
///
/// `generate` reports every failure with its kind; `generate_or_fallback`
/// swaps in local template phrases so the caller always gets a list.
pub struct PassphraseApiClient {
    base_url: String,
    client: Client,
    fallback: FallbackGenerator,
    random: Arc<dyn RandomSource>,
}

impl PassphraseApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
            fallback: FallbackGenerator::default(),
            random: Arc::new(ThreadRandom),
        }
    }

    pub fn with_fallback(mut self, fallback: FallbackGenerator) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<Vec<String>> {
        let url = format!("{}{}", self.base_url, GENERATE_PATH);
        let body = GenerateBody {
            keywords: request.keywords(),
            options: request.options(),
        };

        tracing::debug!("Posting generation request to: {}", url);
        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(PassphraseError::upstream(format!(
                "Passphrase API returned {}",
                status
            )));
        }

        let reply: GenerateReply = response.json().await?;
        if !reply.success || reply.passphrases.is_empty() {
            return Err(PassphraseError::EmptyResultError);
        }

        Ok(reply.passphrases)
    }

    /// 空白關鍵字在任何網路呼叫前就回報
    pub async fn generate_or_fallback(
        &self,
        keywords: &str,
        options: GenerationOptions,
    ) -> Result<Generation> {
        let request = GenerationRequest::new(keywords, options)?;

        match self.generate(&request).await {
            Ok(passphrases) => Ok(Generation::remote(passphrases)),
            Err(e) if !e.triggers_fallback() => Err(e),
            Err(e) => {
                tracing::warn!(
                    "⚠️ Passphrase API failed ({:?}): {}. Using fallback templates",
                    e.category(),
                    e
                );
                let mut rng = self.random.rng();
                let passphrases = self.fallback.generate(&request, &mut *rng);
                Ok(Generation::fallback(passphrases, e.category()))
            }
        }
    }
}
