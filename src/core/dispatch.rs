//! Command dispatch
//!
//! Walks the command line down the command tree. At each level the first
//! remaining token names a child of the current node; the child's
//! requirements are resolved and then its handler runs with the tokens that
//! follow. Routers re-enter [`dispatch`] with themselves as the node, so each
//! level strips exactly the tokens it consumed.

use super::args::Args;
use super::context::Context;
use super::node::CommandNode;
use super::resolver;
use crate::error::{CommandError, CommandResult};

/// Dispatch the first token of `args` against the children of `node`
pub fn dispatch(node: &CommandNode, ctx: &mut Context<'_>, args: Args<'_>) -> CommandResult {
    let mut rest = args;
    let Some(command) = rest.pop_front() else {
        return Err(CommandError::usage(format!(
            "Missing subcommand for '{}'",
            node.name()
        )));
    };

    let Some(child) = node.find_child(command) else {
        return Err(CommandError::usage(format!(
            "Invalid subcommand '{command}'"
        )));
    };

    tracing::debug!("Matched command '{}'", child.name());
    resolver::resolve(ctx, child.requirement(), &mut rest)?;

    match child.handler_fn() {
        Some(handler) => handler(child, ctx, rest),
        None => dispatch(child, ctx, rest),
    }
}

/// Parse a router index token
///
/// The whole token must be ASCII digits; a sign, whitespace or any trailing
/// character makes it a command name instead.
pub fn parse_index(token: &str) -> Option<usize> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Split an optional leading index off `args`
///
/// Returns the parsed index (consumed from `args`) or `None` with `args`
/// untouched. Routers call this before dispatching into their children.
pub fn take_index(args: &mut Args<'_>) -> Option<usize> {
    let index = args.first().and_then(parse_index)?;
    args.pop_front();
    Some(index)
}
