//! Resource resolution
//!
//! Fills in whatever a command needs that the context does not hold yet, in
//! dependency order: device, then active profile, then active resolution.
//! Anything already present is reused, so resolving twice is a no-op.

use std::path::PathBuf;

use super::args::Args;
use super::context::{Context, Verbosity};
use super::device::{Device, Profile};
use super::node::Requirement;
use super::service::OpenDevice;
use crate::error::{CommandResult, DeviceError};

/// Resolve `requirement` into `ctx`
///
/// A device is opened from the last remaining token, which is consumed from
/// `args` on success. Profile and resolution are the active ones. The first
/// failing step stops resolution; later steps are not attempted.
pub fn resolve(ctx: &mut Context<'_>, requirement: Requirement, args: &mut Args<'_>) -> CommandResult {
    if requirement.needs_device() && !ctx.has_device() {
        let device = open_from_args(ctx, args)?;
        ctx.set_device(device);
    }

    if requirement.needs_profile() && ctx.profile_index().is_none() {
        let index = active_profile(ctx.device()?)?;
        tracing::debug!("Resolved active profile {index}");
        ctx.set_profile(index);
    }

    if requirement.needs_resolution() && ctx.resolution_index().is_none() {
        let index = active_resolution(ctx.profile()?)?;
        tracing::debug!("Resolved active resolution {index}");
        ctx.set_resolution(index);
    }

    Ok(())
}

fn open_from_args(ctx: &Context<'_>, args: &mut Args<'_>) -> Result<OpenDevice, DeviceError> {
    let mut remaining = *args;
    let path = remaining.pop_back().ok_or(DeviceError::MissingPath)?;
    let path = PathBuf::from(path);

    tracing::debug!("Opening device '{}'", path.display());
    let model = ctx.service().open(&path)?;
    if ctx.verbosity() >= Verbosity::Raw {
        tracing::debug!("Raw description of '{}':\n{model:#?}", path.display());
    }

    *args = remaining;
    Ok(OpenDevice { path, model })
}

/// Index of the active profile of `device`
pub fn active_profile(device: &Device) -> Result<usize, DeviceError> {
    device
        .active_profile_index()
        .ok_or(DeviceError::NoActiveProfile)
}

/// Index of the active resolution of `profile`
pub fn active_resolution(profile: &Profile) -> Result<usize, DeviceError> {
    profile
        .active_resolution_index()
        .ok_or(DeviceError::NoActiveResolution)
}
