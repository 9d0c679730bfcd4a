use clap::Parser;
use music_passphrase::adapters::preferences::PreferencesStore;
use music_passphrase::app::{server, AppState};
use music_passphrase::config::cli::{Command, GenerateArgs, ServeArgs};
use music_passphrase::domain::model::Preferences;
use music_passphrase::utils::error::ErrorSeverity;
use music_passphrase::utils::{logger, validation::Validate};
use music_passphrase::{
    AppConfig, CliConfig, FallbackGenerator, Generation, GenerationRequest, GroqClient,
    LocalStorage, PassphraseApiClient, PassphraseEngine, Result,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting music-passphrase CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let outcome = match load_config(&cli) {
        Ok(config) => run(&cli.command, config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn load_config(cli: &CliConfig) -> Result<AppConfig> {
    let config = cli.app_config()?;
    config.validate()?;
    tracing::info!(
        "✅ Configuration loaded (mode: {}, model: {})",
        config.prompt_mode,
        config.model
    );
    Ok(config)
}

async fn run(command: &Command, config: AppConfig) -> Result<()> {
    match command {
        Command::Generate(args) => generate(args, &config).await,
        Command::Serve(args) => serve(args, config).await,
    }
}

async fn generate(args: &GenerateArgs, config: &AppConfig) -> Result<()> {
    let store = PreferencesStore::new(LocalStorage::new(&args.state_dir));
    let saved = store.load().await?;
    let (keywords, options) = args.resolve(&saved);

    let generation = match &args.endpoint {
        Some(endpoint) => {
            tracing::info!("🔗 Using passphrase API at {}", endpoint);
            PassphraseApiClient::new(endpoint.as_str())
                .with_fallback(FallbackGenerator::from_config(config)?)
                .generate_or_fallback(&keywords, options)
                .await?
        }
        None => {
            let request = GenerationRequest::new(&keywords, options)?;
            let client = Arc::new(GroqClient::from_config(config));
            PassphraseEngine::from_config(client, config)?
                .generate_or_fallback(&request)
                .await
        }
    };

    if args.remember {
        store
            .save(&Preferences {
                keywords: keywords.trim().to_string(),
                add_number: options.add_number,
                add_special_char: options.add_special_char,
                include_spaces: options.include_spaces,
            })
            .await?;
    }

    print_generation(&generation);
    Ok(())
}

fn print_generation(generation: &Generation) {
    for (index, passphrase) in generation.passphrases.iter().enumerate() {
        println!("{}. {}", index + 1, passphrase);
    }

    if let Some(reason) = generation.fallback_reason {
        eprintln!(
            "ℹ️  Remote generation unavailable ({:?}); showing template passphrases",
            reason
        );
    }
}

async fn serve(args: &ServeArgs, config: AppConfig) -> Result<()> {
    let bind_addr = args.bind.clone().unwrap_or_else(|| config.bind_addr.clone());
    let client = GroqClient::from_config(&config);
    if !client.has_credentials() {
        tracing::warn!("⚠️ Serving without GROQ_API_KEY; generation requests will return 500");
    }
    let engine = PassphraseEngine::from_config(Arc::new(client), &config)?;

    tracing::info!("🚀 Starting passphrase server on {}", bind_addr);
    server::serve(AppState::new(engine), &bind_addr).await
}
