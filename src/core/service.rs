//! Device service interface
//!
//! The boundary between the command engine and whatever actually talks to a
//! device. Commands only ever see the [`Device`] model; a service turns a path
//! into a model and writes a changed model back.

use std::path::{Path, PathBuf};

use super::device::Device;
use crate::error::DeviceError;

/// A device opened for this invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDevice {
    /// Path the device was opened from
    pub path: PathBuf,
    /// Current state of the device
    pub model: Device,
}

/// Opens, commits and releases devices
pub trait DeviceService {
    /// Open the device at `path`
    ///
    /// Returns [`DeviceError::NotSupported`] when `path` exists but is not a
    /// device this service can drive.
    fn open(&self, path: &Path) -> Result<Device, DeviceError>;

    /// Write `device` back to the hardware at `path`
    fn commit(&self, path: &Path, device: &Device) -> Result<(), DeviceError>;

    /// Candidate device paths for listing, in display order
    ///
    /// Candidates are not guaranteed to open; the caller skips those that
    /// don't.
    fn discover(&self) -> Result<Vec<PathBuf>, DeviceError> {
        Ok(Vec::new())
    }

    /// Release a device opened by [`open`](Self::open)
    fn release(&self, device: OpenDevice) {
        tracing::debug!("Releasing device '{}'", device.path.display());
    }
}
