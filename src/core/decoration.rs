use crate::domain::model::{GenerationOptions, NUMBER_MAX, NUMBER_MIN, SPECIAL_CHARS};
use rand::seq::SliceRandom;
use rand::Rng;

/// Uppercases the first character and lowercases everything after it.
/// Title-cased input loses its internal capitals on purpose.
pub fn recapitalize(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => {
            let mut capitalized: String = first.to_uppercase().collect();
            capitalized.push_str(&chars.as_str().to_lowercase());
            capitalized
        }
        None => String::new(),
    }
}

/// 套用空白移除、數字與特殊字元後綴
pub fn decorate<R: Rng + ?Sized>(phrase: &str, options: &GenerationOptions, rng: &mut R) -> String {
    let mut decorated = if options.include_spaces {
        phrase.to_string()
    } else {
        phrase.chars().filter(|c| !c.is_whitespace()).collect()
    };

    if options.add_number {
        let number = rng.gen_range(NUMBER_MIN..=NUMBER_MAX);
        if options.include_spaces {
            decorated.push(' ');
        }
        decorated.push_str(&number.to_string());
    }

    if options.add_special_char {
        if let Some(symbol) = SPECIAL_CHARS.choose(rng) {
            decorated.push(*symbol);
        }
    }

    decorated
}

/// Recapitalize, then decorate. Shared by the normalizer and the fallback path
/// so both produce the same output shape.
pub fn finish_phrase<R: Rng + ?Sized>(
    phrase: &str,
    options: &GenerationOptions,
    rng: &mut R,
) -> String {
    decorate(&recapitalize(phrase), options, rng)
}
