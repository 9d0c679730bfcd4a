use serde::Serialize;

pub const UNKNOWN: &str = "unknown";

/// 編譯期注入的建置資訊
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    pub commit_hash: String,
    pub build_time: String,
    pub build_version: String,
    pub environment: String,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            commit_hash: option_env!("PASSPHRASE_COMMIT_HASH")
                .unwrap_or(UNKNOWN)
                .to_string(),
            build_time: option_env!("PASSPHRASE_BUILD_TIME")
                .unwrap_or(UNKNOWN)
                .to_string(),
            build_version: env!("CARGO_PKG_VERSION").to_string(),
            environment: option_env!("PASSPHRASE_ENV")
                .unwrap_or("development")
                .to_string(),
        }
    }

    /// Commit hash, or `dev` for local builds.
    pub fn short_version(&self) -> &str {
        if self.commit_hash == UNKNOWN {
            "dev"
        } else {
            &self.commit_hash
        }
    }
}
