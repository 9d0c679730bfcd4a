use crate::config::toml_config::TomlConfig;
use crate::config::AppConfig;
use crate::domain::model::{GenerationOptions, Preferences};
use crate::utils::error::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "passphrase")]
#[command(about = "Generate memorable passphrases from a music artist's song titles")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Generate five passphrases
    Generate(GenerateArgs),
    /// Serve the HTTP API
    Serve(ServeArgs),
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Music artist name; defaults to the last one used
    pub keywords: Option<String>,

    #[arg(long)]
    pub add_number: Option<bool>,

    #[arg(long)]
    pub add_special_char: Option<bool>,

    #[arg(long)]
    pub include_spaces: Option<bool>,

    /// Call a deployed API instead of the completion service directly
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Save keywords and toggles for the next run
    #[arg(long)]
    pub remember: bool,

    #[arg(long, default_value = ".passphrase")]
    pub state_dir: String,
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Overrides BIND_ADDR and the config file
    #[arg(long)]
    pub bind: Option<String>,
}

impl CliConfig {
    /// 環境變數為基礎，設定檔覆蓋
    pub fn app_config(&self) -> Result<AppConfig> {
        let base = AppConfig::from_env()?;
        match &self.config {
            Some(path) => Ok(TomlConfig::from_file(path)?.apply_to(base)),
            None => Ok(base),
        }
    }
}

impl GenerateArgs {
    /// 命令列參數優先，其次是上次儲存的設定
    pub fn resolve(&self, saved: &Preferences) -> (String, GenerationOptions) {
        let keywords = self
            .keywords
            .clone()
            .unwrap_or_else(|| saved.keywords.clone());

        let options = GenerationOptions {
            add_number: self.add_number.unwrap_or(saved.add_number),
            add_special_char: self.add_special_char.unwrap_or(saved.add_special_char),
            include_spaces: self.include_spaces.unwrap_or(saved.include_spaces),
        };

        (keywords, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_args_parse() {
        let cli = CliConfig::parse_from([
            "passphrase",
            "generate",
            "Taylor Swift",
            "--add-number",
            "false",
            "--remember",
        ]);

        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.keywords.as_deref(), Some("Taylor Swift"));
        assert_eq!(args.add_number, Some(false));
        assert_eq!(args.add_special_char, None);
        assert!(args.remember);
    }

    #[test]
    fn test_resolve_falls_back_to_saved() {
        let cli = CliConfig::parse_from(["passphrase", "generate", "--include-spaces", "false"]);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };

        let saved = Preferences {
            keywords: "Adele".to_string(),
            add_number: false,
            add_special_char: true,
            include_spaces: true,
        };
        let (keywords, options) = args.resolve(&saved);

        assert_eq!(keywords, "Adele");
        assert!(!options.add_number);
        assert!(options.add_special_char);
        assert!(!options.include_spaces);
    }

    #[test]
    fn test_serve_args_parse() {
        let cli = CliConfig::parse_from(["passphrase", "-v", "serve", "--bind", "127.0.0.1:9000"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Serve(ServeArgs { bind: Some(ref b) }) if b == "127.0.0.1:9000"));
    }
}
