//! Configuration file loading.
//!
//! Settings come from a TOML file, `tilechess.toml` in the current directory
//! unless `--config` names another one. Every field has a default, so an
//! absent file or an empty one is fine.

use chess_core::FenParser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up in the current directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tilechess.toml";

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for the external UCI engine.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EngineConfig {
    /// Path to the engine executable.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Arguments passed to the engine executable.
    #[serde(default)]
    pub args: Vec<String>,
    /// Parameters appended to `go` (e.g., "movetime 500", "depth 8").
    #[serde(default = "default_time_control")]
    pub time_control: String,
    /// How long to wait for each engine reply, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_time_control() -> String {
    "movetime 500".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            path: None,
            args: Vec::new(),
            time_control: default_time_control(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Position used when a command is given no `--fen`.
    #[serde(default = "default_start_fen")]
    pub start_fen: String,
    /// Log filter used when neither `RUST_LOG` nor `--verbose` is set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub engine: EngineConfig,
}

fn default_start_fen() -> String {
    FenParser::STARTPOS.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            start_fen: default_start_fen(),
            log_level: default_log_level(),
            engine: EngineConfig::default(),
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Loads configuration from `path`, or from [`DEFAULT_CONFIG_FILE`] if it
    /// exists, or falls back to defaults.
    ///
    /// Returns the file the settings came from, if any.
    pub fn load(path: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        match path {
            Some(path) => Ok((Self::load_from(path)?, Some(path.to_path_buf()))),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Ok((Self::load_from(default)?, Some(default.to_path_buf())))
                } else {
                    Ok((Self::default(), None))
                }
            }
        }
    }
}
