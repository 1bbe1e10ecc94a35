use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{CaterError, Result};
use crate::types::Language;

/// Top-level configuration for the catering assistant.
///
/// Loaded from `~/.cater/config.toml` by default. Missing sections and
/// fields fall back to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaterConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl CaterConfig {
    /// Read and parse `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CaterConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Like [`load`](Self::load), but any failure is logged and yields the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Could not load config from {}: {}. Falling back to defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Write the configuration as pretty TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| CaterError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// Paths and logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Data directory for the preferences database.
    pub data_dir: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: "~/.cater/data".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Conversation engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Artificial "thinking" delay before each reply, in milliseconds.
    pub response_delay_ms: u64,
    /// Utterances shorter than this (in characters, after trimming) get the
    /// "please elaborate" reply when nothing else matched.
    pub short_utterance_chars: usize,
    /// Language used when none has been persisted yet. When unset, the
    /// system locale decides.
    pub default_language: Option<Language>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: 800,
            short_utterance_chars: 5,
            default_language: None,
        }
    }
}

/// Persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite file name, relative to `general.data_dir`.
    pub database_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_file: "preferences.db".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = CaterConfig::default();
        assert_eq!(config.general.data_dir, "~/.cater/data");
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.chat.response_delay_ms, 800);
        assert_eq!(config.chat.short_utterance_chars, 5);
        assert!(config.chat.default_language.is_none());
        assert_eq!(config.storage.database_file, "preferences.db");
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
data_dir = "/custom/data"
log_level = "debug"

[chat]
response_delay_ms = 0
short_utterance_chars = 3
default_language = "tr"

[storage]
database_file = "chat.db"
"#;
        let file = create_temp_config(content);
        let config = CaterConfig::load(file.path()).unwrap();
        assert_eq!(config.general.data_dir, "/custom/data");
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.chat.response_delay_ms, 0);
        assert_eq!(config.chat.short_utterance_chars, 3);
        assert_eq!(config.chat.default_language, Some(Language::Tr));
        assert_eq!(config.storage.database_file, "chat.db");
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let content = r#"
[general]
log_level = "warn"
"#;
        let file = create_temp_config(content);
        let config = CaterConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "warn");
        assert_eq!(config.general.data_dir, "~/.cater/data");
        assert_eq!(config.chat.response_delay_ms, 800);
    }

    #[test]
    fn test_load_invalid_language_is_config_error() {
        let content = r#"
[chat]
default_language = "de"
"#;
        let file = create_temp_config(content);
        let err = CaterConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, CaterError::Config(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = CaterConfig::load_or_default(Path::new("/nonexistent/config.toml"));
        assert_eq!(config.general.data_dir, "~/.cater/data");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = CaterConfig::default();
        config.chat.default_language = Some(Language::En);
        config.save(&path).unwrap();

        let reloaded = CaterConfig::load(&path).unwrap();
        assert_eq!(reloaded.general.data_dir, config.general.data_dir);
        assert_eq!(reloaded.chat.response_delay_ms, config.chat.response_delay_ms);
        assert_eq!(reloaded.chat.default_language, Some(Language::En));
    }
}
