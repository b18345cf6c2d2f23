//! Per-invocation context
//!
//! The [`Context`] carries everything resolved so far during one dispatch
//! walk: the open device and the selected profile, resolution and button.
//! Each selection is made at most once per invocation. Dropping the context
//! releases what it holds in reverse acquisition order.

use std::path::Path;

use super::device::{Device, Profile, Resolution};
use super::service::{DeviceService, OpenDevice};
use crate::error::{CommandError, DeviceError};

/// Logging detail requested on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Warnings and errors only
    #[default]
    Normal,
    /// Debug output
    Verbose,
    /// Debug output plus raw device data
    Raw,
}

/// State threaded through one dispatch walk
pub struct Context<'s> {
    service: &'s dyn DeviceService,
    verbosity: Verbosity,
    device: Option<OpenDevice>,
    profile: Option<usize>,
    resolution: Option<usize>,
    button: Option<usize>,
}

impl<'s> Context<'s> {
    /// Create an empty context backed by `service`
    pub fn new(service: &'s dyn DeviceService) -> Self {
        Self {
            service,
            verbosity: Verbosity::Normal,
            device: None,
            profile: None,
            resolution: None,
            button: None,
        }
    }

    /// Set the verbosity requested on the command line
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Requested verbosity
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Device service used to open and commit devices
    pub fn service(&self) -> &'s dyn DeviceService {
        self.service
    }

    /// Whether a device has been opened
    pub fn has_device(&self) -> bool {
        self.device.is_some()
    }

    /// Index of the selected profile
    pub fn profile_index(&self) -> Option<usize> {
        self.profile
    }

    /// Index of the selected resolution
    pub fn resolution_index(&self) -> Option<usize> {
        self.resolution
    }

    /// Index of the selected button
    pub fn button_index(&self) -> Option<usize> {
        self.button
    }

    /// The open device
    pub fn device(&self) -> Result<&Device, CommandError> {
        self.device
            .as_ref()
            .map(|open| &open.model)
            .ok_or(CommandError::Device(DeviceError::NotResolved("device")))
    }

    /// The open device, mutably
    pub fn device_mut(&mut self) -> Result<&mut Device, CommandError> {
        self.device
            .as_mut()
            .map(|open| &mut open.model)
            .ok_or(CommandError::Device(DeviceError::NotResolved("device")))
    }

    /// Path the device was opened from
    pub fn device_path(&self) -> Result<&Path, CommandError> {
        self.device
            .as_ref()
            .map(|open| open.path.as_path())
            .ok_or(CommandError::Device(DeviceError::NotResolved("device")))
    }

    /// The selected profile
    pub fn profile(&self) -> Result<&Profile, CommandError> {
        let index = self.profile.ok_or(DeviceError::NotResolved("profile"))?;
        self.device()?
            .profile(index)
            .ok_or(CommandError::Device(DeviceError::NotResolved("profile")))
    }

    /// The selected profile, mutably
    pub fn profile_mut(&mut self) -> Result<&mut Profile, CommandError> {
        let index = self.profile.ok_or(DeviceError::NotResolved("profile"))?;
        self.device_mut()?
            .profile_mut(index)
            .ok_or(CommandError::Device(DeviceError::NotResolved("profile")))
    }

    /// The selected resolution
    pub fn resolution(&self) -> Result<&Resolution, CommandError> {
        let index = self
            .resolution
            .ok_or(DeviceError::NotResolved("resolution"))?;
        self.profile()?
            .resolution(index)
            .ok_or(CommandError::Device(DeviceError::NotResolved("resolution")))
    }

    /// The selected resolution, mutably
    pub fn resolution_mut(&mut self) -> Result<&mut Resolution, CommandError> {
        let index = self
            .resolution
            .ok_or(DeviceError::NotResolved("resolution"))?;
        self.profile_mut()?
            .resolution_mut(index)
            .ok_or(CommandError::Device(DeviceError::NotResolved("resolution")))
    }

    /// Select profile `index` of the open device explicitly
    pub fn select_profile(&mut self, index: usize) -> Result<(), CommandError> {
        if self.device()?.profile(index).is_none() {
            return Err(CommandError::unsupported(format!(
                "Unable to find profile {index}"
            )));
        }
        tracing::debug!("Selected profile {index}");
        self.profile = Some(index);
        Ok(())
    }

    /// Select resolution `index` of the selected profile explicitly
    pub fn select_resolution(&mut self, index: usize) -> Result<(), CommandError> {
        if self.profile()?.resolution(index).is_none() {
            return Err(CommandError::unsupported(format!(
                "Unable to retrieve resolution {index}"
            )));
        }
        tracing::debug!("Selected resolution {index}");
        self.resolution = Some(index);
        Ok(())
    }

    /// Select button `index`; bounds are checked by the command using it
    pub fn select_button(&mut self, index: usize) {
        tracing::debug!("Selected button {index}");
        self.button = Some(index);
    }

    pub(crate) fn set_device(&mut self, device: OpenDevice) {
        self.device = Some(device);
    }

    pub(crate) fn set_profile(&mut self, index: usize) {
        self.profile = Some(index);
    }

    pub(crate) fn set_resolution(&mut self, index: usize) {
        self.resolution = Some(index);
    }

    /// Write the device's current state back through the service
    pub fn commit(&self) -> Result<(), CommandError> {
        let open = self
            .device
            .as_ref()
            .ok_or(DeviceError::NotResolved("device"))?;
        self.service.commit(&open.path, &open.model)?;
        Ok(())
    }

    /// Release everything held, resolution first and device last
    ///
    /// Safe to call more than once; later calls find nothing to release.
    pub fn release(&mut self) {
        if let Some(index) = self.resolution.take() {
            tracing::debug!("Releasing resolution {index}");
        }
        if let Some(index) = self.profile.take() {
            tracing::debug!("Releasing profile {index}");
        }
        self.button = None;
        if let Some(device) = self.device.take() {
            self.service.release(device);
        }
    }
}

impl Drop for Context<'_> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_device, FakeService};
    use std::path::PathBuf;

    fn open_context(service: &FakeService) -> Context<'_> {
        let mut ctx = Context::new(service);
        ctx.set_device(OpenDevice {
            path: PathBuf::from("/dev/input/event0"),
            model: sample_device(),
        });
        ctx
    }

    #[test]
    fn test_verbosity_defaults_to_normal() {
        let service = FakeService::new();
        assert_eq!(Context::new(&service).verbosity(), Verbosity::Normal);
        let ctx = Context::new(&service).with_verbosity(Verbosity::Raw);
        assert_eq!(ctx.verbosity(), Verbosity::Raw);
    }

    #[test]
    fn test_accessors_fail_before_resolution() {
        let service = FakeService::new();
        let ctx = Context::new(&service);
        assert!(matches!(
            ctx.device(),
            Err(CommandError::Device(DeviceError::NotResolved("device")))
        ));
        assert!(ctx.profile().is_err());
        assert!(ctx.resolution().is_err());
    }

    #[test]
    fn test_select_profile_out_of_range_is_unsupported() {
        let service = FakeService::new();
        let mut ctx = open_context(&service);
        let err = ctx.select_profile(7).unwrap_err();
        assert!(matches!(err, CommandError::Unsupported(_)));
        assert_eq!(ctx.profile_index(), None);
    }

    #[test]
    fn test_select_resolution_uses_selected_profile() {
        let service = FakeService::new();
        let mut ctx = open_context(&service);
        ctx.select_profile(1).unwrap();
        ctx.select_resolution(1).unwrap();
        assert_eq!(
            ctx.resolution().unwrap(),
            &sample_device().profiles[1].resolutions[1]
        );
    }

    #[test]
    fn test_drop_releases_device_once() {
        let service = FakeService::new();
        {
            let mut ctx = open_context(&service);
            ctx.select_profile(0).unwrap();
            ctx.release();
        }
        assert_eq!(service.releases(), 1);
    }

    #[test]
    fn test_commit_goes_through_service() {
        let service = FakeService::new();
        let mut ctx = open_context(&service);
        ctx.device_mut().unwrap().set_active_profile(1);
        ctx.commit().unwrap();
        assert_eq!(service.commits(), 1);
        assert_eq!(
            service.last_commit().unwrap().active_profile_index(),
            Some(1)
        );
    }
}
