use music_passphrase::core::normalizer::normalize;
use music_passphrase::domain::model::{RawCompletion, NUMBER_MAX, NUMBER_MIN, SPECIAL_CHARS};
use music_passphrase::{FallbackGenerator, GenerationOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;

const COMPLETION: &str = "Sure! Here are five songs:\n\u{201C}\u{201D}\n1. \"Bohemian Rhapsody\"\n2. Don\u{2019}t Stop Me Now\n3) 'Somebody To Love'\n4 - \u{2018}Killer Queen\u{2019}\n5. Radio Ga Ga\n6. Under Pressure";

const QUOTES: [char; 6] = ['"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}'];

/// 首字大寫，其餘小寫
fn assert_capitalized(body: &str) {
    let mut chars = body.chars();
    let first = chars.next().unwrap();
    assert!(first.is_uppercase(), "first char not uppercase in {body}");
    let rest = chars.as_str();
    assert_eq!(rest, rest.to_lowercase(), "tail not lowercase in {body}");
}

fn all_options() -> Vec<GenerationOptions> {
    let mut combos = Vec::new();
    for add_number in [false, true] {
        for add_special_char in [false, true] {
            for include_spaces in [false, true] {
                combos.push(GenerationOptions {
                    add_number,
                    add_special_char,
                    include_spaces,
                });
            }
        }
    }
    combos
}

/// 檢查裝飾後綴並回傳去掉後綴的主體
fn strip_suffix(phrase: &str, options: &GenerationOptions) -> String {
    let mut body = phrase.to_string();

    if options.add_special_char {
        let symbol = body.pop().unwrap();
        assert!(SPECIAL_CHARS.contains(&symbol), "bad symbol in {phrase}");
    }

    if options.add_number {
        let digits: String = body.split_off(body.len() - 2);
        let number: u8 = digits.parse().unwrap();
        assert!((NUMBER_MIN..=NUMBER_MAX).contains(&number), "bad number in {phrase}");
        if options.include_spaces {
            assert_eq!(body.pop(), Some(' '), "missing space before number in {phrase}");
        }
    }

    body
}

#[test]
fn test_normalized_phrases_hold_shape_across_seeds() {
    let raw = RawCompletion::new(COMPLETION);

    for options in all_options() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let phrases = normalize(&raw, &options, &mut rng).unwrap();

            assert_eq!(phrases.len(), 5);
            for phrase in &phrases {
                let body = strip_suffix(phrase, &options);
                assert!(!body.contains(QUOTES), "quote left in {body}");
                assert!(!body.chars().next().unwrap().is_ascii_digit());
                assert_capitalized(&body);
                if !options.include_spaces {
                    assert!(!body.contains(' '));
                }
            }
        }
    }
}

#[test]
fn test_fallback_phrases_hold_shape_across_seeds() {
    let generator = FallbackGenerator::default();

    for options in all_options() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let phrases = generator.generate_for("Queen", &options, &mut rng);

            assert_eq!(phrases.len(), 5);
            let mut bodies: Vec<String> = phrases
                .iter()
                .map(|p| strip_suffix(p, &options))
                .collect();
            for body in &bodies {
                assert!(body.contains("queen"), "keyword missing in {body}");
                assert_capitalized(body);
            }

            // 同一批不會重複使用範本
            bodies.sort();
            bodies.dedup();
            assert_eq!(bodies.len(), 5);
        }
    }
}
