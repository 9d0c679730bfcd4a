use crate::core::fallback::FallbackGenerator;
use crate::core::normalizer::normalize;
use crate::core::prompt::{build_prompt, sampling_for, PromptMode};
use crate::core::random::ThreadRandom;
use crate::domain::model::{CompletionRequest, Generation, GenerationRequest, SamplingParams};
use crate::domain::ports::{CompletionClient, ConfigProvider, RandomSource};
use crate::utils::error::Result;
use std::sync::Arc;

/// Prompt → completion → normalize, with an explicit fallback decision.
pub struct PassphraseEngine {
    client: Arc<dyn CompletionClient>,
    random: Arc<dyn RandomSource>,
    mode: PromptMode,
    sampling: SamplingParams,
    fallback: FallbackGenerator,
}

impl PassphraseEngine {
    pub fn new(client: Arc<dyn CompletionClient>, mode: PromptMode, sampling: SamplingParams) -> Self {
        Self {
            client,
            random: Arc::new(ThreadRandom),
            mode,
            sampling,
            fallback: FallbackGenerator::default(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(
        client: Arc<dyn CompletionClient>,
        config: &C,
    ) -> Result<Self> {
        let fallback = FallbackGenerator::from_config(config)?;
        Ok(Self::new(client, config.prompt_mode(), sampling_for(config)).with_fallback(fallback))
    }

    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackGenerator) -> Self {
        self.fallback = fallback;
        self
    }

    /// Remote path only. Any failure is returned to the caller as-is.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<Vec<String>> {
        let completion_request = CompletionRequest {
            prompt: build_prompt(self.mode, request.keywords()),
            sampling: self.sampling.clone(),
        };

        tracing::debug!(
            "Requesting completion for '{}' (mode: {}, model: {})",
            request.keywords(),
            self.mode,
            self.sampling.model
        );
        let raw = self.client.complete(&completion_request).await?;
        tracing::debug!("Raw completion: {:?}", raw.as_str());

        // RNG 在 await 之後才建立
        let mut rng = self.random.rng();
        normalize(&raw, request.options(), &mut *rng)
    }

    pub fn fallback(&self, request: &GenerationRequest) -> Vec<String> {
        let mut rng = self.random.rng();
        self.fallback.generate(request, &mut *rng)
    }

    /// 遠端失敗時改用範本，並保留失敗類別
    pub async fn generate_or_fallback(&self, request: &GenerationRequest) -> Generation {
        match self.generate(request).await {
            Ok(passphrases) => Generation::remote(passphrases),
            Err(e) => {
                tracing::warn!(
                    "⚠️ Remote generation failed ({:?}): {}. Using fallback templates",
                    e.category(),
                    e
                );
                Generation::fallback(self.fallback(request), e.category())
            }
        }
    }
}
