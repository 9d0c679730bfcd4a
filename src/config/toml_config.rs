use crate::config::AppConfig;
use crate::core::prompt::PromptMode;
use crate::utils::error::{PassphraseError, Result};
use crate::utils::validation::Validate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env reference pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub completion: CompletionConfig,
    #[serde(default)]
    pub fallback: FallbackConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub bind_addr: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionConfig {
    pub api_base: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub mode: Option<PromptMode>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub top_p: Option<f32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FallbackConfig {
    #[serde(default)]
    pub templates: Vec<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PassphraseError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PassphraseError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GROQ_API_KEY})；找不到的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_REFERENCE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    /// 套用到基礎配置上（通常來自環境變數）
    pub fn apply_to(&self, base: AppConfig) -> AppConfig {
        let completion = &self.completion;

        // 未解析的 ${VAR} 視為未設定
        let api_key = completion
            .api_key
            .clone()
            .filter(|key| !ENV_REFERENCE.is_match(key) && !key.trim().is_empty())
            .or(base.api_key);

        AppConfig {
            api_base: completion.api_base.clone().unwrap_or(base.api_base),
            api_key,
            model: completion.model.clone().unwrap_or(base.model),
            prompt_mode: completion.mode.unwrap_or(base.prompt_mode),
            temperature: completion.temperature.or(base.temperature),
            max_tokens: completion.max_tokens.or(base.max_tokens),
            top_p: completion.top_p.or(base.top_p),
            bind_addr: self.service.bind_addr.clone().unwrap_or(base.bind_addr),
            fallback_templates: if self.fallback.templates.is_empty() {
                base.fallback_templates
            } else {
                self.fallback.templates.clone()
            },
        }
    }

    pub fn into_app_config(self) -> AppConfig {
        self.apply_to(AppConfig::default())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_app_config().validate()
    }
}
