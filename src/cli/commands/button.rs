//! Button remapping: `change-button` and the `button` router

use super::expect_args;
use crate::core::action::ButtonAction;
use crate::core::args::Args;
use crate::core::context::Context;
use crate::core::device::Capability;
use crate::core::dispatch::{dispatch, parse_index, take_index};
use crate::core::node::{CommandNode, Requirement};
use crate::error::{CommandError, CommandResult};

const ACTION_KINDS: &str = "<button|key|special|macro>";

pub fn change_button_node() -> CommandNode {
    CommandNode::new("change-button")
        .args("X <button|key|special|macro> <number|KEY_FOO|special|macro name:KEY_FOO,KEY_BAR,...>")
        .help("Remap button X to the given action in the active profile")
        .requires(Requirement::Profile)
        .handler(change_button)
}

pub fn node() -> CommandNode {
    CommandNode::new("button")
        .args("N")
        .requires(Requirement::Profile)
        .handler(route)
        .child(
            CommandNode::new("get")
                .help("Show the mapping of button N")
                .requires(Requirement::Profile)
                .handler(get),
        )
        .child(
            CommandNode::new("set")
                .args("<button|key|special|macro> <arg>")
                .help("Remap button N")
                .requires(Requirement::Profile)
                .handler(set),
        )
}

fn change_button(node: &CommandNode, ctx: &mut Context<'_>, args: Args<'_>) -> CommandResult {
    expect_args(node.name(), args, 3)?;
    let (Some(button), Some(kind), Some(arg)) = (args.get(0), args.get(1), args.get(2)) else {
        return Err(CommandError::usage(format!("Expected X {ACTION_KINDS} <arg>")));
    };

    let index = parse_index(button)
        .ok_or_else(|| CommandError::usage(format!("Invalid button number '{button}'")))?;
    let action = parse_action(kind, arg)?;
    apply(ctx, index, action)
}

fn route(node: &CommandNode, ctx: &mut Context<'_>, args: Args<'_>) -> CommandResult {
    let mut args = args;
    if let Some(index) = take_index(&mut args) {
        ctx.select_button(index);
    }
    dispatch(node, ctx, args)
}

fn get(node: &CommandNode, ctx: &mut Context<'_>, args: Args<'_>) -> CommandResult {
    expect_args(node.name(), args, 0)?;
    let index = selected_button(ctx)?;
    let button = ctx
        .profile()?
        .button(index)
        .ok_or_else(|| CommandError::unsupported(format!("Invalid button number {index}")))?;

    println!(
        "Button: {index} type {} is mapped to '{}'",
        button.kind, button.action
    );
    Ok(())
}

fn set(node: &CommandNode, ctx: &mut Context<'_>, args: Args<'_>) -> CommandResult {
    expect_args(node.name(), args, 2)?;
    let index = selected_button(ctx)?;
    let (Some(kind), Some(arg)) = (args.get(0), args.get(1)) else {
        return Err(CommandError::usage(format!("Expected {ACTION_KINDS} <arg>")));
    };

    let action = parse_action(kind, arg)?;
    apply(ctx, index, action)
}

fn selected_button(ctx: &Context<'_>) -> Result<usize, CommandError> {
    ctx.button_index()
        .ok_or_else(|| CommandError::usage("Missing button number"))
}

fn parse_action(kind: &str, arg: &str) -> Result<ButtonAction, CommandError> {
    ButtonAction::parse(kind, arg).map_err(|e| CommandError::usage(e.to_string()))
}

/// Map button `index` of the selected profile to `action` and commit
fn apply(ctx: &mut Context<'_>, index: usize, action: ButtonAction) -> CommandResult {
    let device = ctx.device()?;
    if !device.has_capability(Capability::ButtonKey) {
        return Err(CommandError::unsupported(format!(
            "Device '{}' has no programmable buttons",
            device.name
        )));
    }
    if action.is_macro() && !device.has_capability(Capability::ButtonMacros) {
        return Err(CommandError::unsupported(format!(
            "Device '{}' does not support macros",
            device.name
        )));
    }

    let button = ctx
        .profile_mut()?
        .button_mut(index)
        .ok_or_else(|| CommandError::unsupported(format!("Invalid button number {index}")))?;
    tracing::debug!("Mapping button {index} to '{action}'");
    button.action = action;

    ctx.commit()
}
