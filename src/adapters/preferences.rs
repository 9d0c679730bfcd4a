use crate::domain::model::Preferences;
use crate::domain::ports::Storage;
use crate::utils::error::{PassphraseError, Result};

pub const PREFERENCES_FILE: &str = "preferences.json";

/// Persists the last keywords and the three decoration toggles.
pub struct PreferencesStore<S: Storage> {
    storage: S,
}

impl<S: Storage> PreferencesStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// 檔案不存在時回傳預設值；內容損毀時記錄警告並使用預設值
    pub async fn load(&self) -> Result<Preferences> {
        let data = match self.storage.read_file(PREFERENCES_FILE).await {
            Ok(data) => data,
            Err(PassphraseError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No saved preferences, using defaults");
                return Ok(Preferences::default());
            }
            Err(e) => return Err(e),
        };

        match serde_json::from_slice(&data) {
            Ok(prefs) => Ok(prefs),
            Err(e) => {
                tracing::warn!("⚠️ Ignoring unreadable preferences file: {}", e);
                Ok(Preferences::default())
            }
        }
    }

    pub async fn save(&self, preferences: &Preferences) -> Result<()> {
        let data = serde_json::to_vec_pretty(preferences)?;
        self.storage.write_file(PREFERENCES_FILE, &data).await?;
        tracing::debug!("Preferences saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                PassphraseError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_missing_file_gives_defaults() {
        let store = PreferencesStore::new(MockStorage::new());
        assert_eq!(store.load().await.unwrap(), Preferences::default());
    }

    #[tokio::test]
    async fn test_save_uses_original_keys() {
        let storage = MockStorage::new();
        let store = PreferencesStore::new(storage.clone());
        let prefs = Preferences {
            keywords: "Adele".to_string(),
            add_number: false,
            add_special_char: true,
            include_spaces: false,
        };

        store.save(&prefs).await.unwrap();

        let raw = storage.files.lock().await.get(PREFERENCES_FILE).cloned().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&raw).unwrap();
        assert_eq!(json["musicPassphrase_keywords"], "Adele");
        assert_eq!(json["musicPassphrase_addNumber"], false);
        assert_eq!(store.load().await.unwrap(), prefs);
    }

    #[tokio::test]
    async fn test_corrupt_file_gives_defaults() {
        let storage = MockStorage::new();
        storage
            .write_file(PREFERENCES_FILE, b"{not json")
            .await
            .unwrap();

        let store = PreferencesStore::new(storage);
        assert_eq!(store.load().await.unwrap(), Preferences::default());
    }
}
