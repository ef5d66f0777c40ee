//! Configuration management for KeiX
//!
//! Configuration is read from a platform-specific config file. A missing
//! file means defaults; nothing is ever written back automatically.
//!
//! ## Config File Locations
//!
//! | Platform | Path |
//! |----------|------|
//! | Linux | `~/.config/keix/config.toml` |
//! | macOS | `~/Library/Application Support/keix/config.toml` |
//! | Windows | `%APPDATA%\keix\config.toml` |
//!
//! ## Example
//!
//! ```no_run
//! use keix::Config;
//!
//! let config = Config::load_or_default();
//! let corpus = config.typing.corpus().unwrap_or_default();
//! println!("{} passages", corpus.len());
//! ```

use crate::typing::{Corpus, CorpusError};
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Error type for configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to determine config directory
    #[error("Could not determine config directory")]
    NoConfigDir,
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Failed to parse config file
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Returns the path to the config file.
///
/// The directory is not created; a missing file simply means defaults.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(config_dir.join("keix").join("config.toml"))
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct Config {
    /// UI settings
    #[serde(default)]
    pub ui: UiConfig,
    /// Typing exercise settings
    #[serde(default)]
    pub typing: TypingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Refresh rate for UI updates (in Hz)
    pub refresh_rate_hz: u32,
    /// Seconds a status message stays visible
    pub status_duration_secs: u64,
    /// Color theme (dark/light)
    pub theme: Theme,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_hz: 60,
            status_duration_secs: 3,
            theme: Theme::Dark,
        }
    }
}

/// Color theme options
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Typing exercise configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct TypingConfig {
    /// Replaces the built-in passages when non-empty
    #[serde(default)]
    pub passages: Vec<String>,
}

impl TypingConfig {
    /// Build the passage corpus, falling back to the built-in passages
    /// when none are configured.
    pub fn corpus(&self) -> Result<Corpus, CorpusError> {
        if self.passages.is_empty() {
            Ok(Corpus::default())
        } else {
            Corpus::new(self.passages.iter().cloned())
        }
    }
}

impl Config {
    /// Load configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration, logging and falling back to defaults on any error
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => {
                info!("configuration loaded");
                config
            }
            Err(e) => {
                warn!("using default configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Get UI refresh interval as Duration
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.ui.refresh_rate_hz.max(1) as u64)
    }

    /// How long status messages stay visible
    pub fn status_duration(&self) -> Duration {
        Duration::from_secs(self.ui.status_duration_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_config_path() -> PathBuf {
        env::temp_dir().join(format!("keix-test-{}.toml", std::process::id()))
    }

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert_eq!(config.ui.refresh_rate_hz, 60);
        assert_eq!(config.ui.status_duration_secs, 3);
        assert_eq!(config.ui.theme, Theme::Dark);
        assert!(config.typing.passages.is_empty());
    }

    #[test]
    fn config_refresh_interval() {
        let config = Config::default();
        // 60 Hz = 16666 microseconds per frame
        assert_eq!(config.refresh_interval().as_micros(), 16666);
    }

    #[test]
    fn config_refresh_interval_zero_hz_clamped() {
        let mut config = Config::default();
        config.ui.refresh_rate_hz = 0;
        assert_eq!(config.refresh_interval().as_micros(), 1_000_000);
    }

    #[test]
    fn config_load_from_file() {
        let path = temp_config_path();
        fs::write(
            &path,
            "[ui]\ntheme = \"Light\"\n\n[typing]\npassages = [\"the quick brown fox\"]\n",
        )
        .expect("Failed to write config");

        let loaded = Config::load_from(&path).expect("Failed to load config");
        assert_eq!(loaded.ui.theme, Theme::Light);
        assert_eq!(loaded.ui.refresh_rate_hz, 60);
        assert_eq!(loaded.typing.passages, vec!["the quick brown fox".to_string()]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn config_load_missing_file_errors() {
        let path = PathBuf::from("/nonexistent/path/config.toml");
        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn config_deserializes_partial_toml() {
        let toml_str = r#"
[typing]
passages = ["first passage", "second passage"]
"#;

        let config: Config = toml::from_str(toml_str).expect("Failed to deserialize");
        assert_eq!(config.ui, UiConfig::default());
        assert_eq!(config.typing.passages.len(), 2);
    }

    #[test]
    fn config_deserializes_ui_section() {
        let toml_str = r#"
[ui]
refresh_rate_hz = 144
status_duration_secs = 5
theme = "Light"
"#;

        let config: Config = toml::from_str(toml_str).expect("Failed to deserialize");
        assert_eq!(config.ui.refresh_rate_hz, 144);
        assert_eq!(config.status_duration(), Duration::from_secs(5));
        assert_eq!(config.ui.theme, Theme::Light);
    }

    #[test]
    fn config_parse_error_reported() {
        let result: Result<Config, _> = toml::from_str("[ui]\ntheme = 3\n");
        let err = ConfigError::from(result.unwrap_err());
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::NoConfigDir;
        assert_eq!(err.to_string(), "Could not determine config directory");

        let io_err = ConfigError::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        assert!(io_err.to_string().contains("IO error"));
    }

    #[test]
    fn corpus_defaults_when_no_passages() {
        let typing = TypingConfig::default();
        assert_eq!(typing.corpus().unwrap(), Corpus::default());
    }

    #[test]
    fn corpus_from_configured_passages() {
        let typing = TypingConfig {
            passages: vec!["alpha".into(), "beta".into()],
        };
        let corpus = typing.corpus().unwrap();
        assert_eq!(corpus.len(), 2);
        assert!(corpus.contains("beta"));
    }

    #[test]
    fn corpus_rejects_blank_passage() {
        let typing = TypingConfig {
            passages: vec!["alpha".into(), String::new()],
        };
        assert_eq!(typing.corpus(), Err(CorpusError::EmptyPassage(1)));
    }
}
