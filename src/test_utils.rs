//! Test utilities
//!
//! An in-memory device service that counts what it is asked to do, a sample
//! device, and a few helpers shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use proptest::prelude::*;

use crate::core::action::ButtonAction;
use crate::core::device::{Button, ButtonType, Capability, Device, DpiRange, Profile, Resolution};
use crate::core::service::{DeviceService, OpenDevice};
use crate::error::DeviceError;

/// Path the default [`FakeService`] serves [`sample_device`] from
pub const SAMPLE_PATH: &str = "/dev/input/event0";

/// Turn string literals into an owned token list
pub fn tokens(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

/// Top-level command names of the real command tree
const COMMAND_NAMES: [&str; 8] = [
    "info",
    "list",
    "change-button",
    "switch-etekcity",
    "button",
    "resolution",
    "profile",
    "dpi",
];

/// Lowercase words that are not top-level command names
pub fn arb_unknown_command() -> impl Strategy<Value = String> {
    "[a-z-]{1,16}".prop_filter("must not be a command name", |name| {
        !COMMAND_NAMES.contains(&name.as_str())
    })
}

fn resolution(dpi: u32, active: bool) -> Resolution {
    Resolution {
        dpi,
        rate: 1000,
        active,
        default: active,
        ..Resolution::default()
    }
}

fn buttons() -> Vec<Button> {
    let mut buttons = vec![
        Button {
            kind: ButtonType::Left,
            action: ButtonAction::Button { button: 1 },
        },
        Button {
            kind: ButtonType::Right,
            action: ButtonAction::Button { button: 2 },
        },
        Button {
            kind: ButtonType::Middle,
            action: ButtonAction::Button { button: 3 },
        },
    ];
    buttons.extend((0..5).map(|_| Button {
        kind: ButtonType::Thumb,
        action: ButtonAction::None,
    }));
    buttons
}

/// A fully capable device: two profiles, three resolutions each, eight buttons
///
/// Profile 0 is active with resolution 0 active; profile 1 has resolution 1
/// active.
pub fn sample_device() -> Device {
    Device {
        name: "Test Mouse".to_string(),
        capabilities: Capability::ALL.to_vec(),
        buttons: 8,
        dpi_range: Some(DpiRange { min: 100, max: 8000 }),
        profiles: vec![
            Profile {
                active: true,
                default: true,
                resolutions: vec![
                    resolution(800, true),
                    resolution(1600, false),
                    resolution(3200, false),
                ],
                buttons: buttons(),
            },
            Profile {
                active: false,
                default: false,
                resolutions: vec![
                    resolution(400, false),
                    resolution(1200, true),
                    resolution(0, false),
                ],
                buttons: buttons(),
            },
        ],
    }
}

/// In-memory [`DeviceService`] recording opens, commits and releases
pub struct FakeService {
    devices: HashMap<PathBuf, Device>,
    opens: Cell<usize>,
    commits: Cell<usize>,
    releases: Cell<usize>,
    last_commit: RefCell<Option<Device>>,
    fail_commits: Cell<bool>,
}

impl FakeService {
    /// Serve [`sample_device`] at [`SAMPLE_PATH`]
    pub fn new() -> Self {
        Self::with_device(SAMPLE_PATH, sample_device())
    }

    /// Serve `device` at `path`
    pub fn with_device(path: &str, device: Device) -> Self {
        Self::with_devices(vec![(path, device)])
    }

    /// Serve several devices
    pub fn with_devices(list: Vec<(&str, Device)>) -> Self {
        let devices = list
            .into_iter()
            .map(|(path, device)| (PathBuf::from(path), device))
            .collect::<HashMap<_, _>>();
        Self {
            devices,
            opens: Cell::new(0),
            commits: Cell::new(0),
            releases: Cell::new(0),
            last_commit: RefCell::new(None),
            fail_commits: Cell::new(false),
        }
    }

    /// Make every following commit fail
    pub fn fail_commits(&self) {
        self.fail_commits.set(true);
    }

    pub fn opens(&self) -> usize {
        self.opens.get()
    }

    pub fn commits(&self) -> usize {
        self.commits.get()
    }

    pub fn releases(&self) -> usize {
        self.releases.get()
    }

    /// The device state passed to the most recent commit
    pub fn last_commit(&self) -> Option<Device> {
        self.last_commit.borrow().clone()
    }
}

impl Default for FakeService {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceService for FakeService {
    fn open(&self, path: &Path) -> Result<Device, DeviceError> {
        self.opens.set(self.opens.get() + 1);
        self.devices
            .get(path)
            .cloned()
            .ok_or_else(|| DeviceError::NotSupported {
                path: path.to_path_buf(),
            })
    }

    fn commit(&self, path: &Path, device: &Device) -> Result<(), DeviceError> {
        if self.fail_commits.get() {
            return Err(DeviceError::Commit {
                path: path.to_path_buf(),
                error: "device busy".to_string(),
            });
        }
        self.commits.set(self.commits.get() + 1);
        *self.last_commit.borrow_mut() = Some(device.clone());
        Ok(())
    }

    fn discover(&self) -> Result<Vec<PathBuf>, DeviceError> {
        let mut paths: Vec<PathBuf> = self.devices.keys().cloned().collect();
        paths.sort();
        Ok(paths)
    }

    fn release(&self, _device: OpenDevice) {
        self.releases.set(self.releases.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_device_shape() {
        let device = sample_device();
        assert_eq!(device.num_profiles(), 2);
        assert_eq!(device.active_profile_index(), Some(0));
        assert_eq!(device.profiles[1].active_resolution_index(), Some(1));
        assert_eq!(device.profiles[0].buttons.len(), device.buttons);
    }

    #[test]
    fn test_fake_service_counts() {
        let service = FakeService::new();
        assert!(service.open(Path::new(SAMPLE_PATH)).is_ok());
        assert!(service.open(Path::new("/nope")).is_err());
        assert_eq!(service.opens(), 2);
    }
}
