pub mod decoration;
pub mod engine;
pub mod fallback;
pub mod normalizer;
pub mod prompt;
pub mod random;

pub use crate::domain::model::{Generation, GenerationOptions, GenerationRequest, RawCompletion};
pub use crate::domain::ports::{CompletionClient, ConfigProvider, RandomSource, Storage};
pub use crate::utils::error::Result;
