//! CLI argument definitions for the catering assistant.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

use cater_core::error::CaterError;
use cater_core::types::Language;

/// Bilingual catering assistant for the terminal.
#[derive(Parser, Debug)]
#[command(name = "cater", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Data directory for the preferences database.
    #[arg(short = 'd', long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Conversation language (tr, en). Overrides the remembered choice.
    #[arg(long = "lang")]
    pub lang: Option<String>,

    /// Reply immediately instead of simulating a thinking delay.
    #[arg(long = "no-delay")]
    pub no_delay: bool,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > CATER_CONFIG env var > ~/.cater/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("CATER_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the data directory string (may still start with `~`).
    ///
    /// Priority: --data-dir flag > config file value.
    pub fn resolve_data_dir(&self, config_data_dir: &str) -> String {
        self.data_dir
            .as_ref()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|| config_data_dir.to_string())
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_log_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_log_level.to_string())
    }

    /// Resolve an explicit language override.
    ///
    /// Priority: --lang flag > CATER_LANG env var. `None` leaves the choice to
    /// the stored preference, the config file and the system locale.
    pub fn resolve_language(&self) -> Result<Option<Language>, CaterError> {
        if let Some(ref raw) = self.lang {
            return raw.parse().map(Some);
        }
        match std::env::var("CATER_LANG") {
            Ok(raw) if !raw.trim().is_empty() => raw.parse().map(Some),
            _ => Ok(None),
        }
    }

    /// Reply delay in milliseconds; zero with --no-delay.
    pub fn resolve_delay_ms(&self, config_delay_ms: u64) -> u64 {
        if self.no_delay {
            0
        } else {
            config_delay_ms
        }
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".cater").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".cater").join("config.toml");
    }
    PathBuf::from("config.toml")
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        #[cfg(target_os = "windows")]
        let home = std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string());
        #[cfg(not(target_os = "windows"))]
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(rest)
    } else {
        PathBuf::from(path)
    }
}

/// The user's locale from the usual environment variables, if any is set.
pub fn system_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
}
