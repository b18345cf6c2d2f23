//! Platform-specific directory management
//!
//! Provides the configuration directory, following the XDG Base Directory
//! Specification on Linux and standard locations on macOS.
//!
//! `RATBAG_COMMAND_CONFIG_DIR` overrides the default location.

use std::env;
use std::path::PathBuf;

use crate::config::defaults::CONFIG_FILE_NAME;

/// Environment variable overriding the config directory
pub const ENV_CONFIG_DIR: &str = "RATBAG_COMMAND_CONFIG_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "ratbag-command";

/// Platform-specific directory provider
#[derive(Debug, Clone)]
pub struct AppDirs {
    config_dir: PathBuf,
}

impl AppDirs {
    /// Resolve directories from the environment, then platform defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Use `config_dir` regardless of the environment
    #[must_use]
    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Get the config directory path
    ///
    /// - Linux: `$XDG_CONFIG_HOME/ratbag-command` or `~/.config/ratbag-command`
    /// - macOS: `~/Library/Application Support/ratbag-command`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Path of `config.toml` in the config directory
    #[must_use]
    pub fn global_config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    fn resolve_config_dir() -> PathBuf {
        match env::var_os(ENV_CONFIG_DIR) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => Self::platform_config_dir(),
        }
    }

    fn platform_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }
}

impl Default for AppDirs {
    fn default() -> Self {
        Self::new()
    }
}
