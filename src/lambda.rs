#[cfg(feature = "lambda")]
use lambda_http::{run, Error};
#[cfg(feature = "lambda")]
use music_passphrase::app::{router, AppState};
#[cfg(feature = "lambda")]
use music_passphrase::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use music_passphrase::{AppConfig, GroqClient, PassphraseEngine};
#[cfg(feature = "lambda")]
use std::sync::Arc;

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    logger::init_lambda_logger();

    let config = AppConfig::from_env()?;
    config.validate()?;

    let client = GroqClient::from_config(&config);
    if !client.has_credentials() {
        tracing::warn!("⚠️ GROQ_API_KEY missing; generation requests will return 500");
    }
    let engine = PassphraseEngine::from_config(Arc::new(client), &config)?;
    let state = AppState::new(engine);

    tracing::info!(
        "🚀 Passphrase lambda ready ({}, {})",
        state.build.short_version(),
        state.build.environment
    );

    // 與 serve 子命令共用同一個 router
    run(router(state)).await
}

#[cfg(not(feature = "lambda"))]
fn main() {
    eprintln!("lambda binary requires the `lambda` feature");
}
