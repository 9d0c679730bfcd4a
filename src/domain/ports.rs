use crate::core::prompt::PromptMode;
use crate::domain::model::{CompletionRequest, RawCompletion};
use crate::utils::error::Result;
use async_trait::async_trait;
use rand::RngCore;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn model(&self) -> &str;
    fn prompt_mode(&self) -> PromptMode;
    fn temperature(&self) -> Option<f32>;
    fn max_tokens(&self) -> Option<u32>;
    fn top_p(&self) -> Option<f32>;
    fn fallback_templates(&self) -> &[String];
}

/// Remote text-completion service. One attempt per call, no retries.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<RawCompletion>;
}

/// 隨機來源；每次轉換取得一個新的 RNG，不跨 await 持有
pub trait RandomSource: Send + Sync {
    fn rng(&self) -> Box<dyn RngCore>;
}
