//! `switch-etekcity`: toggle the volume keys on Etekcity mice
//!
//! These mice switch profiles with buttons 6 and 7. Mapping them to the
//! volume keys makes them report key presses instead; mapping them to nothing
//! hands them back to the firmware.

use super::expect_args;
use crate::core::action::ButtonAction;
use crate::core::args::Args;
use crate::core::context::Context;
use crate::core::device::{Capability, Profile};
use crate::core::node::{CommandNode, Requirement};
use crate::error::{CommandError, CommandResult};

const VOLUME_UP_BUTTON: usize = 6;
const VOLUME_DOWN_BUTTON: usize = 7;
const VOLUME_UP_KEY: &str = "KEY_VOLUMEUP";
const VOLUME_DOWN_KEY: &str = "KEY_VOLUMEDOWN";

pub fn node() -> CommandNode {
    CommandNode::new("switch-etekcity")
        .help("Switch the Etekcity mouse active profile")
        .requires(Requirement::Profile)
        .handler(execute)
}

/// Outcome of a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Volume keys were mapped
    Enabled,
    /// Volume key mappings were removed
    Disabled,
    /// The buttons carry some other mapping and were left alone
    Unchanged,
}

fn key(name: &str) -> ButtonAction {
    ButtonAction::Key {
        key: name.to_string(),
    }
}

/// Flip buttons 6 and 7 of `profile` between the volume keys and nothing
pub fn toggle(profile: &mut Profile) -> Option<Toggle> {
    let up = profile.button(VOLUME_UP_BUTTON)?.action.clone();
    let down = profile.button(VOLUME_DOWN_BUTTON)?.action.clone();

    let (new_up, new_down, outcome) = if up == key(VOLUME_UP_KEY) && down == key(VOLUME_DOWN_KEY) {
        (ButtonAction::None, ButtonAction::None, Toggle::Disabled)
    } else if up == ButtonAction::None && down == ButtonAction::None {
        (key(VOLUME_UP_KEY), key(VOLUME_DOWN_KEY), Toggle::Enabled)
    } else {
        return Some(Toggle::Unchanged);
    };

    profile.button_mut(VOLUME_UP_BUTTON)?.action = new_up;
    profile.button_mut(VOLUME_DOWN_BUTTON)?.action = new_down;
    Some(outcome)
}

fn execute(node: &CommandNode, ctx: &mut Context<'_>, args: Args<'_>) -> CommandResult {
    expect_args(node.name(), args, 0)?;

    let device = ctx.device()?;
    let name = device.name.clone();
    if !device.has_capability(Capability::SwitchableProfile) {
        return Err(CommandError::unsupported(format!(
            "Device '{name}' has no switchable profiles"
        )));
    }

    let outcome = toggle(ctx.profile_mut()?).ok_or_else(|| {
        CommandError::unsupported(format!(
            "Device '{name}' has no button {VOLUME_DOWN_BUTTON}"
        ))
    })?;

    match outcome {
        Toggle::Enabled | Toggle::Disabled => {
            ctx.commit()?;
            let negation = if outcome == Toggle::Disabled { "not " } else { "" };
            println!("Switched the current profile of '{name}' to {negation}report the volume keys");
        }
        Toggle::Unchanged => {
            println!("Buttons {VOLUME_UP_BUTTON} and {VOLUME_DOWN_BUTTON} of '{name}' have custom mappings, leaving them alone");
        }
    }
    Ok(())
}
