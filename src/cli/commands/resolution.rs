//! The `resolution` router, active resolution and dpi commands

use super::expect_args;
use crate::core::args::Args;
use crate::core::context::Context;
use crate::core::device::Capability;
use crate::core::dispatch::{dispatch, parse_index, take_index};
use crate::core::node::{CommandNode, Requirement};
use crate::core::resolver;
use crate::error::{CommandError, CommandResult};

pub fn node() -> CommandNode {
    CommandNode::new("resolution")
        .args("N")
        .requires(Requirement::Profile)
        .handler(route)
        .child(
            CommandNode::new("active")
                .requires(Requirement::Profile)
                .child(
                    CommandNode::new("get")
                        .help("Get the active resolution number")
                        .requires(Requirement::Profile)
                        .handler(active_get),
                )
                .child(
                    CommandNode::new("set")
                        .args("M")
                        .help("Set the active resolution number")
                        .requires(Requirement::Profile)
                        .handler(active_set),
                ),
        )
        .child(dpi_node())
}

/// Dpi of the selected resolution; also mounted at the top level
pub fn dpi_node() -> CommandNode {
    CommandNode::new("dpi")
        .requires(Requirement::Resolution)
        .child(
            CommandNode::new("get")
                .help("Get the resolution in dpi")
                .requires(Requirement::Resolution)
                .handler(dpi_get),
        )
        .child(
            CommandNode::new("set")
                .args("<dpi>")
                .help("Set the resolution in dpi")
                .requires(Requirement::Resolution)
                .handler(dpi_set),
        )
}

/// Select the given or active resolution, then dispatch to the children
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
        None => resolver::active_resolution(ctx.profile()?)?,
    };
    ctx.select_resolution(index)?;
    dispatch(node, ctx, args)
}

fn active_get(node: &CommandNode, ctx: &mut Context<'_>, args: Args<'_>) -> CommandResult {
    expect_args(node.name(), args, 0)?;
    println!("{}", resolver::active_resolution(ctx.profile()?)?);
    Ok(())
}

fn active_set(node: &CommandNode, ctx: &mut Context<'_>, args: Args<'_>) -> CommandResult {
    expect_args(node.name(), args, 1)?;
    let token = args.first().unwrap_or_default();
    let index = parse_index(token)
        .ok_or_else(|| CommandError::usage(format!("Invalid resolution number '{token}'")))?;

    let device = ctx.device()?;
    if !device.has_capability(Capability::SwitchableResolution) {
        return Err(no_switchable_resolution(&device.name));
    }
    let name = device.name.clone();

    if !ctx.profile_mut()?.set_active_resolution(index) {
        return Err(CommandError::unsupported(format!(
            "'{index}' is not a valid resolution"
        )));
    }
    ctx.commit()?;
    println!("Switched '{name}' to resolution '{index}'");
    Ok(())
}

fn dpi_get(node: &CommandNode, ctx: &mut Context<'_>, args: Args<'_>) -> CommandResult {
    expect_args(node.name(), args, 0)?;
    println!("{}", ctx.resolution()?.dpi());
    Ok(())
}

fn dpi_set(node: &CommandNode, ctx: &mut Context<'_>, args: Args<'_>) -> CommandResult {
    expect_args(node.name(), args, 1)?;
    let token = args.first().unwrap_or_default();
    let dpi: u32 = token
        .parse()
        .map_err(|_| CommandError::usage(format!("Invalid dpi value '{token}'")))?;

    let device = ctx.device()?;
    if !device.has_capability(Capability::SwitchableResolution) {
        return Err(no_switchable_resolution(&device.name));
    }
    if let Some(range) = device.dpi_range.filter(|range| !range.contains(dpi)) {
        return Err(CommandError::unsupported(format!(
            "{dpi} dpi is outside the supported range {}-{}",
            range.min, range.max
        )));
    }

    tracing::debug!("Setting resolution to {dpi} dpi");
    ctx.resolution_mut()?.set_dpi(dpi);
    ctx.commit()
}

fn no_switchable_resolution(name: &str) -> CommandError {
    CommandError::unsupported(format!("Device '{name}' has no switchable resolution"))
}
