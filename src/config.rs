//! User configuration
//!
//! Read from `~/.config/wordle-daily/config.toml` (platform config dir). A
//! missing file means defaults; a file that exists but does not parse is an
//! error so typos are not silently ignored.

use crate::core::{Word, WordError};
use crate::provider::{DEFAULT_FALLBACK, DEFAULT_URL_TEMPLATE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Directory name used under the platform config and data dirs
pub const APP_DIR: &str = "wordle-daily";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file at {path:?}")]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),

    #[error("fallback_word {word:?} is not usable")]
    InvalidFallback { word: String, source: WordError },

    #[error("cannot determine a data directory; set data_dir in the config")]
    NoDataDir,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Solution URL, `{date}` is replaced by `YYYY-MM-DD`
    pub url_template: String,
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            timeout_secs: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fallback_word: String,
    pub data_dir: Option<PathBuf>,
    pub fetch: FetchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_word: DEFAULT_FALLBACK.to_string(),
            data_dir: None,
            fetch: FetchConfig::default(),
        }
    }
}

impl Config {
    /// Platform default location of the config file
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Load from `path`, or from [`Config::default_path`] when `None`
    ///
    /// An explicitly given path must exist; the default path may be absent.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, does not parse, or
    /// names an invalid fallback word.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        match fs::read_to_string(&path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound && !required => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io { path, source }),
        }
    }

    /// Parse and validate a TOML document
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` or `ConfigError::InvalidFallback`.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.fallback()?;
        Ok(config)
    }

    /// The fallback word as a validated `Word`
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidFallback` if it is not five letters.
    pub fn fallback(&self) -> Result<Word, ConfigError> {
        Word::new(&self.fallback_word).map_err(|source| ConfigError::InvalidFallback {
            word: self.fallback_word.clone(),
            source,
        })
    }

    /// Where game state and logs are kept
    ///
    /// # Errors
    /// Returns `ConfigError::NoDataDir` if neither the config nor the
    /// platform provides a directory.
    pub fn data_dir(&self) -> Result<PathBuf, ConfigError> {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR)))
            .ok_or(ConfigError::NoDataDir)
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.fetch.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = Config::from_toml(
            r#"
            fallback_word = "SLATE"

            [fetch]
            timeout_secs = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.fallback().unwrap().text(), "slate");
        assert_eq!(config.timeout(), Duration::from_secs(2));
        assert_eq!(config.fetch.url_template, DEFAULT_URL_TEMPLATE);
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn invalid_fallback_is_rejected() {
        assert!(matches!(
            Config::from_toml(r#"fallback_word = "abc""#),
            Err(ConfigError::InvalidFallback { .. })
        ));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(matches!(
            Config::from_toml("fallback_word = "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "data_dir = \"/tmp/wordle-test\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/tmp/wordle-test"));
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::load(Some(&missing)),
            Err(ConfigError::Io { .. })
        ));
    }
}
