use crate::domain::model::{SamplingParams, PASSPHRASE_COUNT};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::PassphraseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Which product behaviour the prompt asks the model for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptMode {
    /// 4-10 consecutive words taken verbatim from the artist's song titles.
    #[default]
    SongTitles,
    /// 5-8 lowercase everyday words related to the keyword.
    Keyword,
}

impl PromptMode {
    /// 各模式的取樣預設值
    pub fn default_sampling(&self, model: &str) -> SamplingParams {
        match self {
            PromptMode::SongTitles => SamplingParams {
                model: model.to_string(),
                temperature: 0.1,
                max_tokens: 200,
                top_p: Some(0.9),
            },
            PromptMode::Keyword => SamplingParams {
                model: model.to_string(),
                temperature: 0.8,
                max_tokens: 500,
                top_p: None,
            },
        }
    }
}

impl fmt::Display for PromptMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptMode::SongTitles => write!(f, "song-titles"),
            PromptMode::Keyword => write!(f, "keyword"),
        }
    }
}

impl FromStr for PromptMode {
    type Err = PassphraseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "song-titles" | "song_titles" | "songs" => Ok(PromptMode::SongTitles),
            "keyword" | "keywords" => Ok(PromptMode::Keyword),
            other => Err(PassphraseError::InvalidConfigValueError {
                field: "prompt_mode".to_string(),
                value: other.to_string(),
                reason: "Expected 'song-titles' or 'keyword'".to_string(),
            }),
        }
    }
}

/// Builds the single user message sent to the model. `keywords` must already be trimmed.
pub fn build_prompt(mode: PromptMode, keywords: &str) -> String {
    match mode {
        PromptMode::SongTitles => format!(
            r#"Generate {count} unique short phrases (MINIMUM 4 words, maximum 10 words each) from the artist "{keywords}".

Requirements:
- Use ACTUAL CONSECUTIVE WORDS from published song titles
- Do NOT invent or modify titles
- Do NOT change the order of words
- Do NOT provide duplicates
- Each phrase must be exactly as it appears in the original public song titles

RESPONSE FORMAT: Return ONLY the phrases, one per line, with NO explanatory text, NO introductions, NO headers.

If you're not certain about exact lyrics, don't guess."#,
            count = PASSPHRASE_COUNT,
            keywords = keywords,
        ),
        PromptMode::Keyword => format!(
            r#"Given the keyword: "{keywords}"

Generate {count} passphrases that:
- Are 5 to 8 words long
- Use natural, everyday English
- Words are lowercase and space-separated
- Do not include punctuation or quotation marks

Return only the {count} passphrases, one per line."#,
            count = PASSPHRASE_COUNT,
            keywords = keywords,
        ),
    }
}

/// 模式預設值加上設定覆蓋
pub fn sampling_for<C: ConfigProvider + ?Sized>(config: &C) -> SamplingParams {
    let mut sampling = config.prompt_mode().default_sampling(config.model());

    if let Some(temperature) = config.temperature() {
        sampling.temperature = temperature;
    }
    if let Some(max_tokens) = config.max_tokens() {
        sampling.max_tokens = max_tokens;
    }
    if let Some(top_p) = config.top_p() {
        sampling.top_p = Some(top_p);
    }

    sampling
}
