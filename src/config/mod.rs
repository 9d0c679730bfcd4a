#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::adapters::groq::DEFAULT_API_BASE;
use crate::core::prompt::{PromptMode, DEFAULT_MODEL};
use crate::domain::model::PASSPHRASE_COUNT;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_templates,
    validate_url, Validate,
};
use std::env;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Runtime configuration shared by the CLI, the HTTP server and the lambda.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub api_key: Option<String>,
    pub model: String,
    pub prompt_mode: PromptMode,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub top_p: Option<f32>,
    pub bind_addr: String,
    pub fallback_templates: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            prompt_mode: PromptMode::default(),
            temperature: None,
            max_tokens: None,
            top_p: None,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            fallback_templates: Vec::new(),
        }
    }
}

impl AppConfig {
    /// 從環境變數載入；未設定 GROQ_API_KEY 不算錯誤，呼叫時才回報
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let prompt_mode = match env::var("PROMPT_MODE") {
            Ok(value) => value.parse()?,
            Err(_) => defaults.prompt_mode,
        };

        Ok(Self {
            api_base: env::var("GROQ_API_BASE").unwrap_or(defaults.api_base),
            api_key: env::var("GROQ_API_KEY")
                .ok()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            model: env::var("GROQ_MODEL").unwrap_or(defaults.model),
            prompt_mode,
            bind_addr: env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            ..defaults
        })
    }
}

impl ConfigProvider for AppConfig {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn prompt_mode(&self) -> PromptMode {
        self.prompt_mode
    }

    fn temperature(&self) -> Option<f32> {
        self.temperature
    }

    fn max_tokens(&self) -> Option<u32> {
        self.max_tokens
    }

    fn top_p(&self) -> Option<f32> {
        self.top_p
    }

    fn fallback_templates(&self) -> &[String] {
        &self.fallback_templates
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)?;
        validate_non_empty_string("model", &self.model)?;
        validate_non_empty_string("bind_addr", &self.bind_addr)?;

        if let Some(temperature) = self.temperature {
            validate_range("temperature", temperature, 0.0, 2.0)?;
        }
        if let Some(top_p) = self.top_p {
            validate_range("top_p", top_p, f32::EPSILON, 1.0)?;
        }
        if let Some(max_tokens) = self.max_tokens {
            validate_positive_number("max_tokens", max_tokens as usize, 1)?;
        }

        // 空的範本庫代表使用內建範本
        if !self.fallback_templates.is_empty() {
            validate_templates("fallback.templates", &self.fallback_templates, PASSPHRASE_COUNT)?;
        }

        if self.api_key.is_none() {
            tracing::warn!("⚠️ GROQ_API_KEY is not set; remote generation will fail until it is");
        }

        Ok(())
    }
}
