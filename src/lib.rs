pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{api_client::PassphraseApiClient, groq::GroqClient, local_storage::LocalStorage};
pub use config::AppConfig;
pub use core::{engine::PassphraseEngine, fallback::FallbackGenerator};
pub use domain::model::{Generation, GenerationOptions, GenerationRequest, PassphraseSource};
pub use utils::error::{PassphraseError, Result};
