//! Engine configuration.

use crate::persistence::DEFAULT_STATE_KEY;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Where and under which key the game state is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Directory holding the snapshot files.
    #[serde(default = "default_state_dir")]
    state_dir: PathBuf,

    /// Key the snapshot is stored under.
    #[serde(default = "default_state_key")]
    state_key: String,
}

#[instrument]
fn default_state_dir() -> PathBuf {
    PathBuf::from(".tictactoe")
}

#[instrument]
fn default_state_key() -> String {
    DEFAULT_STATE_KEY.to_string()
}

impl EngineConfig {
    /// Creates a configuration.
    #[instrument(skip(state_dir, state_key))]
    pub fn new(state_dir: PathBuf, state_key: String) -> Self {
        Self {
            state_dir,
            state_key,
        }
    }

    /// Loads configuration from TOML file. Missing fields take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            state_dir = %config.state_dir.display(),
            state_key = %config.state_key,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Replaces the state directory.
    pub fn with_state_dir(mut self, state_dir: PathBuf) -> Self {
        self.state_dir = state_dir;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(default_state_dir(), default_state_key())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.state_dir(), &PathBuf::from(".tictactoe"));
        assert_eq!(config.state_key(), DEFAULT_STATE_KEY);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "state_dir = \"/var/lib/tictactoe\"").unwrap();

        let config = EngineConfig::from_file(file.path()).expect("Config should parse");
        assert_eq!(config.state_dir(), &PathBuf::from("/var/lib/tictactoe"));
        assert_eq!(config.state_key(), DEFAULT_STATE_KEY);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "state_key = 7").unwrap();
        assert!(EngineConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = EngineConfig::from_file("/nonexistent/tictactoe.toml").unwrap_err();
        assert!(err.message.contains("Failed to read"));
    }
}
