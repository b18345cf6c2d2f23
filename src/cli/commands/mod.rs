//! Command implementations
//!
//! Each command family lives in its own submodule and contributes the nodes
//! it owns to the tree built by [`command_tree`].

pub mod button;
pub mod etekcity;
pub mod info;
pub mod list;
pub mod profile;
pub mod resolution;

use crate::core::args::Args;
use crate::core::node::{CommandNode, CommandTree};
use crate::error::{CommandError, CommandResult, TreeError};

/// Name of the root node, shown at the start of every usage line
pub const PROGRAM_NAME: &str = "ratbag-command";

/// Build the full command tree
///
/// `resolution` and `button` appear both at the top level (acting on the
/// active profile) and below `profile` (acting on the selected one).
pub fn command_tree() -> Result<CommandTree, TreeError> {
    let root = CommandNode::new(PROGRAM_NAME)
        .child(info::node())
        .child(list::node())
        .child(button::change_button_node())
        .child(etekcity::node())
        .child(button::node())
        .child(resolution::node())
        .child(profile::node())
        .child(resolution::dpi_node());
    CommandTree::new(root)
}

/// Fail with a usage error unless exactly `count` arguments remain
pub(crate) fn expect_args(command: &str, args: Args<'_>, count: usize) -> CommandResult {
    if args.len() == count {
        return Ok(());
    }
    let message = match count {
        0 => format!("'{command}' takes no arguments"),
        1 => format!("'{command}' expects 1 argument, got {}", args.len()),
        n => format!("'{command}' expects {n} arguments, got {}", args.len()),
    };
    Err(CommandError::usage(message))
}
