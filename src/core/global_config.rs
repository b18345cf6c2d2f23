//! Global configuration management
//!
//! Reads settings from `config.toml` in the config directory: where `list`
//! looks for device nodes and the default log filter.

use crate::config::defaults::{DEFAULT_INPUT_DIR, DEFAULT_LOG_FILTER, DEFAULT_NODE_PREFIX};
use crate::infra::dirs::AppDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Global configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },
}

/// Global configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Device discovery settings
    #[serde(default)]
    pub devices: DevicesConfig,

    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
}

/// Device discovery settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DevicesConfig {
    /// Directory scanned by `list`
    pub input_dir: Option<PathBuf>,

    /// File name prefix of device nodes
    pub node_prefix: Option<String>,
}

/// Logging settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive used without `--verbose` or `RUST_LOG`
    pub filter: Option<String>,
}

impl GlobalConfig {
    /// Load global configuration from the config directory
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the file exists but is not valid
    /// TOML for this schema.
    pub fn load(dirs: &AppDirs) -> Result<Self, ConfigError> {
        Self::load_from_path(&dirs.global_config_path())
    }

    /// Load global configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config file at '{}', using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Effective input directory
    #[must_use]
    pub fn input_dir(&self) -> PathBuf {
        self.devices
            .input_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR))
    }

    /// Effective device node prefix
    #[must_use]
    pub fn node_prefix(&self) -> &str {
        self.devices
            .node_prefix
            .as_deref()
            .unwrap_or(DEFAULT_NODE_PREFIX)
    }

    /// Effective default log filter
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
