use crate::core::decoration::finish_phrase;
use crate::domain::model::{GenerationOptions, GenerationRequest, PASSPHRASE_COUNT};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::validate_templates;
use rand::seq::SliceRandom;
use rand::Rng;

pub const KEYWORD_PLACEHOLDER: &str = "{keyword}";

pub const DEFAULT_TEMPLATES: [&str; 10] = [
    "bright {keyword} morning coffee ritual",
    "dancing {keyword} under silver moonlight",
    "old {keyword} whispers ancient forest secrets",
    "golden {keyword} sunset painting memories",
    "wild {keyword} flows through mountain streams",
    "purple {keyword} dreams floating softly",
    "every {keyword} creates magical garden moments",
    "singing {keyword} birds welcome dawn",
    "quiet {keyword} rain on window glass",
    "distant {keyword} echoes across empty city streets",
];

/// Template-based passphrases for when the remote path is unavailable.
///
/// Output goes through the same recapitalize/decorate step as the normalizer,
/// so callers cannot tell the two apart by shape.
#[derive(Debug, Clone)]
pub struct FallbackGenerator {
    templates: Vec<String>,
}

impl FallbackGenerator {
    pub fn new(templates: Vec<String>) -> Result<Self> {
        validate_templates("fallback.templates", &templates, PASSPHRASE_COUNT)?;
        Ok(Self { templates })
    }

    /// 設定中沒有範本時使用內建範本庫
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        if config.fallback_templates().is_empty() {
            Ok(Self::default())
        } else {
            Self::new(config.fallback_templates().to_vec())
        }
    }

    pub fn generate<R: Rng + ?Sized>(&self, request: &GenerationRequest, rng: &mut R) -> Vec<String> {
        self.generate_for(request.keywords(), request.options(), rng)
    }

    /// 不會失敗：範本庫在建構時已驗證
    pub fn generate_for<R: Rng + ?Sized>(
        &self,
        keywords: &str,
        options: &GenerationOptions,
        rng: &mut R,
    ) -> Vec<String> {
        let keyword = keywords.to_lowercase();

        let mut bank: Vec<&String> = self.templates.iter().collect();
        bank.shuffle(&mut *rng);

        bank.into_iter()
            .take(PASSPHRASE_COUNT)
            .map(|template| template.replace(KEYWORD_PLACEHOLDER, &keyword))
            .map(|phrase| finish_phrase(&phrase, options, &mut *rng))
            .collect()
    }
}

impl Default for FallbackGenerator {
    fn default() -> Self {
        Self {
            templates: DEFAULT_TEMPLATES.iter().map(|t| t.to_string()).collect(),
        }
    }
}
