use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 輸出格式：終端機用精簡格式，Lambda 用 JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "music_passphrase=debug,info"
    } else {
        "music_passphrase=info,warn"
    }
}

/// RUST_LOG overrides the built-in directives.
pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    // 重複初始化（例如測試中）時忽略
    let result = match format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(layer.without_time().json())
            .try_init(),
    };

    if let Err(e) = result {
        eprintln!("Logger already initialised: {}", e);
    }
}

pub fn init_cli_logger(verbose: bool) {
    init_logger(LogFormat::Compact, verbose);
}

/// CloudWatch 自帶時間戳
pub fn init_lambda_logger() {
    init_logger(LogFormat::Json, false);
}
