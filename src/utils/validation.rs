use crate::utils::error::{PassphraseError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PassphraseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PassphraseError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PassphraseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(PassphraseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PassphraseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PassphraseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 範本必須包含 `{keyword}` 佔位符，且不能以它開頭（首字會被大寫）
pub fn validate_templates(field_name: &str, templates: &[String], min_count: usize) -> Result<()> {
    validate_positive_number(field_name, templates.len(), min_count)?;

    for template in templates {
        if !template.contains(crate::core::fallback::KEYWORD_PLACEHOLDER) {
            return Err(PassphraseError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: template.clone(),
                reason: format!(
                    "Template must contain the {} placeholder",
                    crate::core::fallback::KEYWORD_PLACEHOLDER
                ),
            });
        }

        if template.trim_start().starts_with(crate::core::fallback::KEYWORD_PLACEHOLDER) {
            return Err(PassphraseError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: template.clone(),
                reason: format!(
                    "Template must not start with the {} placeholder",
                    crate::core::fallback::KEYWORD_PLACEHOLDER
                ),
            });
        }
    }

    Ok(())
}
