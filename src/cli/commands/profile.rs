//! The `profile` router and active profile commands

use super::{button, expect_args, resolution};
use crate::core::args::Args;
use crate::core::context::Context;
use crate::core::device::Capability;
use crate::core::dispatch::{dispatch, parse_index, take_index};
use crate::core::node::{CommandNode, Requirement};
use crate::core::resolver;
use crate::error::{CommandError, CommandResult};

pub fn node() -> CommandNode {
    CommandNode::new("profile")
        .args("<idx>")
        .requires(Requirement::Device)
        .handler(route)
        .child(
            CommandNode::new("active")
                .requires(Requirement::Device)
                .child(
                    CommandNode::new("get")
                        .help("Get the active profile number")
                        .requires(Requirement::Device)
                        .handler(active_get),
                )
                .child(
                    CommandNode::new("set")
                        .args("N")
                        .help("Set the active profile number")
                        .requires(Requirement::Device)
                        .handler(active_set),
                ),
        )
        .child(resolution::node())
        .child(button::node())
}

/// Select the given or active profile, then dispatch to the children
fn route(node: &CommandNode, ctx: &mut Context<'_>, args: Args<'_>) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::usage(format!(
            "Missing subcommand for '{}'",
            node.name()
        )));
    }
    let mut args = args;
    let index = match take_index(&mut args) {
        Some(index) => index,
        None => resolver::active_profile(ctx.device()?)?,
    };
    ctx.select_profile(index)?;
    dispatch(node, ctx, args)
}

fn active_get(node: &CommandNode, ctx: &mut Context<'_>, args: Args<'_>) -> CommandResult {
    expect_args(node.name(), args, 0)?;
    let device = ctx.device()?;

    let active = if device.has_capability(Capability::SwitchableProfile) && device.num_profiles() > 1 {
        resolver::active_profile(device)?
    } else {
        0
    };
    println!("{active}");
    Ok(())
}

fn active_set(node: &CommandNode, ctx: &mut Context<'_>, args: Args<'_>) -> CommandResult {
    expect_args(node.name(), args, 1)?;
    let token = args.first().unwrap_or_default();
    let index = parse_index(token)
        .ok_or_else(|| CommandError::usage(format!("Invalid profile number '{token}'")))?;

    let device = ctx.device_mut()?;
    if !device.has_capability(Capability::SwitchableProfile) {
        return Err(CommandError::unsupported(format!(
            "Device '{}' has no switchable profiles",
            device.name
        )));
    }
    if index >= device.num_profiles() {
        return Err(CommandError::unsupported(format!(
            "'{index}' is not a valid profile"
        )));
    }
    if device.active_profile_index() == Some(index) {
        println!("'{}' is already in profile '{index}'", device.name);
        return Ok(());
    }

    device.set_active_profile(index);
    let name = device.name.clone();
    ctx.commit()?;
    println!("Switched '{name}' to profile '{index}'");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::testing::run;
    use super::*;
    use crate::error::DeviceError;
    use crate::test_utils::{sample_device, FakeService, SAMPLE_PATH};

    #[test]
    fn test_active_get() {
        let service = FakeService::new();
        run(&service, &["profile", "active", "get", SAMPLE_PATH]).unwrap();
        run(&service, &["profile", "1", "active", "get", SAMPLE_PATH]).unwrap();
        assert_eq!(service.commits(), 0);
    }

    #[test]
    fn test_active_set_switches_and_commits() {
        let service = FakeService::new();
        run(&service, &["profile", "active", "set", "1", SAMPLE_PATH]).unwrap();
        let committed = service.last_commit().unwrap();
        assert_eq!(committed.active_profile_index(), Some(1));
        assert!(!committed.profiles[0].active);
    }

    #[test]
    fn test_active_set_already_active_does_not_commit() {
        let service = FakeService::new();
        run(&service, &["profile", "active", "set", "0", SAMPLE_PATH]).unwrap();
        assert_eq!(service.commits(), 0);
    }

    #[test]
    fn test_active_set_out_of_range() {
        let service = FakeService::new();
        let err = run(&service, &["profile", "active", "set", "2", SAMPLE_PATH]).unwrap_err();
        assert!(matches!(err, CommandError::Unsupported(_)));
        assert_eq!(service.commits(), 0);
    }

    #[test]
    fn test_active_set_not_a_number() {
        let service = FakeService::new();
        let err = run(&service, &["profile", "active", "set", "two", SAMPLE_PATH]).unwrap_err();
        assert!(matches!(err, CommandError::Usage(_)));
    }

    #[test]
    fn test_active_set_needs_capability() {
        let mut device = sample_device();
        device.capabilities.retain(|c| *c != Capability::SwitchableProfile);
        let service = FakeService::with_device(SAMPLE_PATH, device);
        let err = run(&service, &["profile", "active", "set", "1", SAMPLE_PATH]).unwrap_err();
        assert!(matches!(err, CommandError::Unsupported(_)));
    }

    #[test]
    fn test_unknown_profile_index() {
        let service = FakeService::new();
        let err = run(&service, &["profile", "5", "active", "get", SAMPLE_PATH]).unwrap_err();
        assert!(matches!(err, CommandError::Unsupported(ref msg) if msg.contains("profile 5")));
    }

    #[test]
    fn test_no_active_profile_is_device_error() {
        let mut device = sample_device();
        device.profiles[0].active = false;
        let service = FakeService::with_device(SAMPLE_PATH, device);
        let err = run(&service, &["profile", "active", "get", SAMPLE_PATH]).unwrap_err();
        assert!(matches!(err, CommandError::Device(DeviceError::NoActiveProfile)));
    }

    #[test]
    fn test_missing_subcommand_is_usage_without_active_profile() {
        let mut device = sample_device();
        for profile in &mut device.profiles {
            profile.active = false;
        }
        let service = FakeService::with_device(SAMPLE_PATH, device);
        let err = run(&service, &["profile", SAMPLE_PATH]).unwrap_err();
        assert!(matches!(err, CommandError::Usage(ref msg) if msg.contains("'profile'")));
        assert_eq!(err.exit_code(), crate::error::EXIT_USAGE);
    }

    #[test]
    fn test_nested_resolution_dpi() {
        let service = FakeService::new();
        run(
            &service,
            &["profile", "1", "resolution", "0", "dpi", "set", "900", SAMPLE_PATH],
        )
        .unwrap();
        let committed = service.last_commit().unwrap();
        assert_eq!(committed.profiles[1].resolutions[0].dpi, 900);
        assert_eq!(committed.profiles[0].resolutions[0].dpi, 800);
    }
}
