use crate::utils::error::{ErrorCategory, PassphraseError, Result};
use serde::{Deserialize, Serialize};

/// 每次請求的目標數量
pub const PASSPHRASE_COUNT: usize = 5;

/// 附加數字的範圍（含兩端）
pub const NUMBER_MIN: u8 = 10;
pub const NUMBER_MAX: u8 = 99;

pub const SPECIAL_CHARS: [char; 8] = ['!', '@', '#', '$', '%', '&', '*', '?'];

/// Decoration toggles shared by the normalizer and the fallback generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationOptions {
    pub add_number: bool,
    pub add_special_char: bool,
    pub include_spaces: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            add_number: false,
            add_special_char: false,
            include_spaces: true,
        }
    }
}

/// A validated request. Keywords are trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    keywords: String,
    options: GenerationOptions,
}

impl GenerationRequest {
    pub fn new(keywords: &str, options: GenerationOptions) -> Result<Self> {
        let keywords = keywords.trim();
        if keywords.is_empty() {
            return Err(PassphraseError::validation("Keywords are required"));
        }

        Ok(Self {
            keywords: keywords.to_string(),
            options,
        })
    }

    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }
}

/// 模型回傳的原始文字，可能含編號、引號、空行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCompletion(String);

impl RawCompletion {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Sampling parameters sent with every completion call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

/// 單一 user 訊息加上取樣參數
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub sampling: SamplingParams,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassphraseSource {
    Remote,
    Fallback,
}

/// Result of a generation that always succeeds from the caller's point of view.
/// `fallback_reason` keeps the category of the remote failure when templates were used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generation {
    pub passphrases: Vec<String>,
    pub source: PassphraseSource,
    pub fallback_reason: Option<ErrorCategory>,
}

impl Generation {
    pub fn remote(passphrases: Vec<String>) -> Self {
        Self {
            passphrases,
            source: PassphraseSource::Remote,
            fallback_reason: None,
        }
    }

    pub fn fallback(passphrases: Vec<String>, reason: ErrorCategory) -> Self {
        Self {
            passphrases,
            source: PassphraseSource::Fallback,
            fallback_reason: Some(reason),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == PassphraseSource::Fallback
    }
}

/// 跨次執行保留的使用者設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(rename = "musicPassphrase_keywords", default)]
    pub keywords: String,
    #[serde(rename = "musicPassphrase_addNumber", default = "default_true")]
    pub add_number: bool,
    #[serde(rename = "musicPassphrase_addSpecialChar", default = "default_true")]
    pub add_special_char: bool,
    #[serde(rename = "musicPassphrase_includeSpaces", default = "default_true")]
    pub include_spaces: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            keywords: String::new(),
            add_number: true,
            add_special_char: true,
            include_spaces: true,
        }
    }
}

impl Preferences {
    pub fn options(&self) -> GenerationOptions {
        GenerationOptions {
            add_number: self.add_number,
            add_special_char: self.add_special_char,
            include_spaces: self.include_spaces,
        }
    }
}
