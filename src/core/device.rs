//! Device model
//!
//! In-memory view of a device: its capabilities, profiles, resolutions and
//! buttons. The model is what command handlers read and mutate; getting it
//! from and back to the hardware is the job of a
//! [`DeviceService`](super::service::DeviceService).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::action::ButtonAction;

/// Optional device features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    /// Active resolution and dpi can be changed
    SwitchableResolution,
    /// Active profile can be changed
    SwitchableProfile,
    /// Buttons can be remapped to keys
    ButtonKey,
    /// Buttons can be remapped to macros
    ButtonMacros,
}

impl Capability {
    /// Every capability, in the order `info` lists them
    pub const ALL: [Self; 4] = [
        Self::SwitchableResolution,
        Self::SwitchableProfile,
        Self::ButtonKey,
        Self::ButtonMacros,
    ];

    /// Short name printed by `info`
    pub fn short_name(self) -> &'static str {
        match self {
            Self::SwitchableResolution => "res",
            Self::SwitchableProfile => "profile",
            Self::ButtonKey => "btn-key",
            Self::ButtonMacros => "btn-macros",
        }
    }
}

/// Optional resolution features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionCapability {
    /// X and Y dpi can differ
    SeparateXyResolution,
}

/// Physical role of a button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonType {
    #[default]
    Unknown,
    Left,
    Middle,
    Right,
    Thumb,
    Thumb2,
    Thumb3,
    Thumb4,
    WheelLeft,
    WheelRight,
    WheelClick,
    WheelUp,
    WheelDown,
    Extra,
    Side,
    Pinkie,
    ResolutionCycleUp,
    ResolutionUp,
    ResolutionDown,
    ProfileCycleUp,
    ProfileUp,
    ProfileDown,
}

impl fmt::Display for ButtonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Left => "left",
            Self::Middle => "middle",
            Self::Right => "right",
            Self::Thumb => "thumb",
            Self::Thumb2 => "thumb2",
            Self::Thumb3 => "thumb3",
            Self::Thumb4 => "thumb4",
            Self::WheelLeft => "wheel left",
            Self::WheelRight => "wheel right",
            Self::WheelClick => "wheel click",
            Self::WheelUp => "wheel up",
            Self::WheelDown => "wheel down",
            Self::Extra => "extra (forward)",
            Self::Side => "side (backward)",
            Self::Pinkie => "pinkie",
            Self::ResolutionCycleUp => "resolution cycle up",
            Self::ResolutionUp => "resolution up",
            Self::ResolutionDown => "resolution down",
            Self::ProfileCycleUp => "profile cycle up",
            Self::ProfileUp => "profile up",
            Self::ProfileDown => "profile down",
        };
        f.write_str(name)
    }
}

/// Supported dpi bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DpiRange {
    pub min: u32,
    pub max: u32,
}

impl DpiRange {
    /// Whether `dpi` lies within the bounds (inclusive)
    pub fn contains(&self, dpi: u32) -> bool {
        (self.min..=self.max).contains(&dpi)
    }
}

/// A device: capabilities plus an ordered list of profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Human readable device name
    pub name: String,

    /// Optional features this device supports
    #[serde(default)]
    pub capabilities: Vec<Capability>,

    /// Number of physical buttons
    #[serde(default)]
    pub buttons: usize,

    /// Dpi values the sensor accepts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpi_range: Option<DpiRange>,

    /// Profiles in index order
    #[serde(default, rename = "profile")]
    pub profiles: Vec<Profile>,
}

impl Device {
    /// Whether the device supports `capability`
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Number of profiles
    pub fn num_profiles(&self) -> usize {
        self.profiles.len()
    }

    /// Profile at `index`, if it exists
    pub fn profile(&self, index: usize) -> Option<&Profile> {
        self.profiles.get(index)
    }

    /// Mutable profile at `index`, if it exists
    pub fn profile_mut(&mut self, index: usize) -> Option<&mut Profile> {
        self.profiles.get_mut(index)
    }

    /// Index of the first profile flagged active
    pub fn active_profile_index(&self) -> Option<usize> {
        self.profiles.iter().position(|p| p.active)
    }

    /// Make profile `index` the only active one
    ///
    /// Returns `false` and leaves the device untouched when `index` is out of
    /// range.
    pub fn set_active_profile(&mut self, index: usize) -> bool {
        if index >= self.profiles.len() {
            return false;
        }
        for (i, profile) in self.profiles.iter_mut().enumerate() {
            profile.active = i == index;
        }
        true
    }
}

/// A profile: resolutions and button mappings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Currently in use
    #[serde(default)]
    pub active: bool,

    /// Used after a device reset
    #[serde(default)]
    pub default: bool,

    /// Resolutions in index order
    #[serde(default, rename = "resolution")]
    pub resolutions: Vec<Resolution>,

    /// Button mappings in index order
    #[serde(default, rename = "button")]
    pub buttons: Vec<Button>,
}

impl Profile {
    /// Resolution at `index`, if it exists
    pub fn resolution(&self, index: usize) -> Option<&Resolution> {
        self.resolutions.get(index)
    }

    /// Mutable resolution at `index`, if it exists
    pub fn resolution_mut(&mut self, index: usize) -> Option<&mut Resolution> {
        self.resolutions.get_mut(index)
    }

    /// Index of the first resolution flagged active
    pub fn active_resolution_index(&self) -> Option<usize> {
        self.resolutions.iter().position(|r| r.active)
    }

    /// Make resolution `index` the only active one
    pub fn set_active_resolution(&mut self, index: usize) -> bool {
        if index >= self.resolutions.len() {
            return false;
        }
        for (i, resolution) in self.resolutions.iter_mut().enumerate() {
            resolution.active = i == index;
        }
        true
    }

    /// Button at `index`, if it exists
    pub fn button(&self, index: usize) -> Option<&Button> {
        self.buttons.get(index)
    }

    /// Mutable button at `index`, if it exists
    pub fn button_mut(&mut self, index: usize) -> Option<&mut Button> {
        self.buttons.get_mut(index)
    }
}

/// One sensor resolution setting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Dpi, or X dpi when the resolution has separate axes; 0 means disabled
    pub dpi: u32,

    /// Y dpi when it differs from X
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpi_y: Option<u32>,

    /// Report rate in Hz
    #[serde(default)]
    pub rate: u32,

    /// Currently in use
    #[serde(default)]
    pub active: bool,

    /// Used after a device reset
    #[serde(default)]
    pub default: bool,

    /// Optional resolution features
    #[serde(default)]
    pub capabilities: Vec<ResolutionCapability>,
}

impl Resolution {
    /// Dpi; for separate axes, the X value
    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// X dpi
    pub fn dpi_x(&self) -> u32 {
        self.dpi
    }

    /// Y dpi
    pub fn dpi_y(&self) -> u32 {
        self.dpi_y.unwrap_or(self.dpi)
    }

    /// Set both axes to `dpi`
    pub fn set_dpi(&mut self, dpi: u32) {
        self.dpi = dpi;
        self.dpi_y = None;
    }

    /// Whether the resolution supports `capability`
    pub fn has_capability(&self, capability: ResolutionCapability) -> bool {
        self.capabilities.contains(&capability)
    }
}

/// A button and its mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    /// Physical role
    #[serde(default, rename = "type")]
    pub kind: ButtonType,

    /// What pressing it does
    #[serde(default)]
    pub action: ButtonAction,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_device;

    #[test]
    fn test_active_profile_index() {
        let device = sample_device();
        assert_eq!(device.active_profile_index(), Some(0));
    }

    #[test]
    fn test_set_active_profile_clears_others() {
        let mut device = sample_device();
        assert!(device.set_active_profile(1));
        assert_eq!(device.active_profile_index(), Some(1));
        assert_eq!(device.profiles.iter().filter(|p| p.active).count(), 1);
    }

    #[test]
    fn test_set_active_profile_out_of_range() {
        let mut device = sample_device();
        assert!(!device.set_active_profile(5));
        assert_eq!(device.active_profile_index(), Some(0));
    }

    #[test]
    fn test_set_active_resolution() {
        let mut device = sample_device();
        let profile = device.profile_mut(0).unwrap();
        assert!(profile.set_active_resolution(1));
        assert_eq!(profile.active_resolution_index(), Some(1));
        assert!(!profile.set_active_resolution(9));
    }

    #[test]
    fn test_dpi_axes() {
        let mut resolution = Resolution {
            dpi: 800,
            dpi_y: Some(400),
            ..Resolution::default()
        };
        assert_eq!(resolution.dpi_x(), 800);
        assert_eq!(resolution.dpi_y(), 400);

        resolution.set_dpi(1600);
        assert_eq!(resolution.dpi_y(), 1600);
    }

    #[test]
    fn test_dpi_range() {
        let range = DpiRange { min: 100, max: 8000 };
        assert!(range.contains(100));
        assert!(range.contains(8000));
        assert!(!range.contains(50));
    }

    #[test]
    fn test_device_parses_from_toml() {
        let content = r#"
name = "Test Mouse"
capabilities = ["switchable-profile", "button-key"]
buttons = 2

[[profile]]
active = true

[[profile.resolution]]
dpi = 800
rate = 1000
active = true

[[profile.button]]
type = "left"
action = { kind = "button", button = 1 }

[[profile.button]]
type = "thumb"
action = { kind = "key", key = "KEY_VOLUMEUP" }
"#;
        let device: Device = toml::from_str(content).unwrap();
        assert_eq!(device.name, "Test Mouse");
        assert!(device.has_capability(Capability::ButtonKey));
        assert!(!device.has_capability(Capability::SwitchableResolution));
        let profile = device.profile(0).unwrap();
        assert_eq!(profile.resolution(0).unwrap().dpi(), 800);
        assert_eq!(profile.button(1).unwrap().kind, ButtonType::Thumb);
        assert_eq!(
            profile.button(1).unwrap().action.to_string(),
            "key KEY_VOLUMEUP"
        );
    }
}
