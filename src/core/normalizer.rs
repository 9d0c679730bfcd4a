use crate::core::decoration::finish_phrase;
use crate::domain::model::{GenerationOptions, RawCompletion, PASSPHRASE_COUNT};
use crate::utils::error::{PassphraseError, Result};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use std::collections::HashSet;

/// Straight and curly quotes, single and double.
const QUOTE_CHARS: [char; 6] = ['"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}'];

// "1. ", "2) ", "3- ", "4 "
static ENUMERATION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+[.)\-\s]+").expect("enumeration pattern is valid"));

/// Splits a completion into candidate lines.
///
/// Lines are trimmed, empty ones dropped, exact duplicates removed keeping the
/// first occurrence. Truncation to five happens in [`normalize`], after
/// cleanup. Deduplication is case-sensitive: `Love Story` and
/// `love story` both survive.
pub fn extract_lines(raw: &str) -> Vec<&str> {
    let mut seen = HashSet::new();

    raw.trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(*line))
        .collect()
}

/// 移除引號與行首編號
pub fn clean_phrase(line: &str) -> String {
    let unquoted: String = line.chars().filter(|c| !QUOTE_CHARS.contains(c)).collect();
    ENUMERATION_MARKER
        .replace(unquoted.trim(), "")
        .trim()
        .to_string()
}

/// Turns a raw completion into the final, decorated passphrases.
///
/// Fails with [`PassphraseError::EmptyResultError`] when no usable line
/// remains; callers treat that like an upstream failure.
pub fn normalize<R: Rng + ?Sized>(
    raw: &RawCompletion,
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<Vec<String>> {
    let lines = extract_lines(raw.as_str());
    if lines.is_empty() {
        return Err(PassphraseError::EmptyResultError);
    }

    let passphrases: Vec<String> = lines
        .into_iter()
        .map(clean_phrase)
        .filter(|phrase| !phrase.is_empty())
        .take(PASSPHRASE_COUNT)
        .map(|phrase| finish_phrase(&phrase, options, &mut *rng))
        .collect();

    if passphrases.is_empty() {
        // 只有編號或引號的行
        return Err(PassphraseError::EmptyResultError);
    }

    tracing::debug!("Processed passphrases: {:?}", passphrases);
    Ok(passphrases)
}
