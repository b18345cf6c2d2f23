//! File-backed device service
//!
//! Each device is described by a TOML file holding the full [`Device`] model.
//! Opening reads and parses the file, committing writes the model back.
//! Only regular files are considered; anything else at a path (character
//! devices, directories) is reported as unsupported without being read.

use std::path::{Path, PathBuf};

use crate::core::device::Device;
use crate::core::global_config::GlobalConfig;
use crate::core::service::DeviceService;
use crate::error::DeviceError;
use crate::infra::filesystem;

/// Device service over TOML description files
#[derive(Debug, Clone)]
pub struct DescriptionService {
    input_dir: PathBuf,
    node_prefix: String,
}

impl DescriptionService {
    /// Create a service scanning `input_dir` for `node_prefix*` entries
    pub fn new(input_dir: impl Into<PathBuf>, node_prefix: impl Into<String>) -> Self {
        Self {
            input_dir: input_dir.into(),
            node_prefix: node_prefix.into(),
        }
    }

    /// Create a service from the configured discovery settings
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self::new(config.input_dir(), config.node_prefix())
    }
}

impl DeviceService for DescriptionService {
    fn open(&self, path: &Path) -> Result<Device, DeviceError> {
        let is_file = std::fs::metadata(path).is_ok_and(|m| m.is_file());
        if !is_file {
            tracing::debug!("'{}' is not a regular file", path.display());
            return Err(DeviceError::NotSupported {
                path: path.to_path_buf(),
            });
        }

        let content = filesystem::read_file(path).map_err(|e| DeviceError::Open {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| DeviceError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    fn commit(&self, path: &Path, device: &Device) -> Result<(), DeviceError> {
        let commit_error = |error: String| DeviceError::Commit {
            path: path.to_path_buf(),
            error,
        };

        let content = toml::to_string_pretty(device).map_err(|e| commit_error(e.to_string()))?;
        tracing::trace!("Writing description of '{}':\n{content}", path.display());
        filesystem::write_file(path, &content).map_err(|e| commit_error(e.to_string()))?;

        tracing::debug!("Committed changes to '{}'", path.display());
        Ok(())
    }

    fn discover(&self) -> Result<Vec<PathBuf>, DeviceError> {
        filesystem::scan_dir(&self.input_dir, &self.node_prefix).map_err(|e| DeviceError::Open {
            path: self.input_dir.clone(),
            error: e.to_string(),
        })
    }
}
