//! `info`: print everything known about a device

use std::fmt::Write as _;

use super::expect_args;
use crate::core::args::Args;
use crate::core::context::Context;
use crate::core::device::{Capability, Device, Resolution, ResolutionCapability};
use crate::core::node::{CommandNode, Requirement};
use crate::error::CommandResult;

pub fn node() -> CommandNode {
    CommandNode::new("info")
        .help("Show information about the device's capabilities")
        .requires(Requirement::Device)
        .handler(execute)
}

fn execute(node: &CommandNode, ctx: &mut Context<'_>, args: Args<'_>) -> CommandResult {
    expect_args(node.name(), args, 0)?;
    print!("{}", describe(ctx.device()?));
    Ok(())
}

/// Render the device report
pub fn describe(device: &Device) -> String {
    let mut out = String::new();

    let capabilities: Vec<&str> = Capability::ALL
        .iter()
        .filter(|c| device.has_capability(**c))
        .map(|c| c.short_name())
        .collect();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Device '{}'", device.name);
    let _ = writeln!(out, "Capabilities: {}", capabilities.join(" "));
    let _ = writeln!(out, "Number of buttons: {}", device.buttons);
    let _ = writeln!(out, "Profiles supported: {}", device.num_profiles());

    for (index, profile) in device.profiles.iter().enumerate() {
        let _ = writeln!(
            out,
            "  Profile {index}{}{}",
            flag(profile.active, " (active)"),
            flag(profile.default, " (default)")
        );

        let _ = writeln!(out, "    Resolutions:");
        for (res_index, resolution) in profile.resolutions.iter().enumerate() {
            let _ = writeln!(out, "      {res_index}: {}", describe_resolution(resolution));
        }

        for button_index in 0..device.buttons {
            if let Some(button) = profile.button(button_index) {
                let _ = writeln!(
                    out,
                    "    Button: {button_index} type {} is mapped to '{}'",
                    button.kind, button.action
                );
            }
        }
    }

    out
}

fn describe_resolution(resolution: &Resolution) -> String {
    if resolution.dpi() == 0 {
        return "<disabled>".to_string();
    }

    let dpi = if resolution.has_capability(ResolutionCapability::SeparateXyResolution) {
        format!("{}x{}dpi", resolution.dpi_x(), resolution.dpi_y())
    } else {
        format!("{}dpi", resolution.dpi())
    };

    format!(
        "{dpi} @ {}Hz{}{}",
        resolution.rate,
        flag(resolution.active, " (active)"),
        flag(resolution.default, " (default)")
    )
}

fn flag(set: bool, text: &'static str) -> &'static str {
    if set {
        text
    } else {
        ""
    }
}
