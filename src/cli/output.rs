//! Output formatting
//!
//! Usage text and error reporting. Command results go to stdout from the
//! handlers themselves; everything here goes wherever the caller points it.

use std::io::{self, Write};

use crate::core::help;
use crate::core::node::CommandTree;
use crate::error::CommandError;

/// Status message prefixes
pub mod status {
    /// Error prefix (red X)
    pub const ERROR: &str = "✗";
}

/// Global options, rendered after the command lines
const OPTIONS: [(&str, &str); 3] = [
    ("--verbose[=raw]", "Print debugging output, with protocol output if requested"),
    ("--help", "Print this help"),
    ("--version", "Print version information"),
];

/// Write the complete usage text for `tree`
pub fn write_usage(out: &mut impl Write, tree: &CommandTree) -> io::Result<()> {
    let root = tree.root();
    writeln!(
        out,
        "Usage: {} [options] [command] /path/to/device",
        root.name()
    )?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    for line in help::render(root, "") {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    writeln!(out, "Options:")?;
    for (flag, text) in OPTIONS {
        writeln!(out, "    {flag} {} {text}", ".".repeat(20 - flag.len()))?;
    }
    Ok(())
}

/// Report a failed command on stderr, followed by usage for usage errors
pub fn display_error(err: &CommandError, tree: &CommandTree) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    // Nothing sensible is left to do if stderr itself is gone.
    let _ = writeln!(out, "{} {err}", status::ERROR);
    if err.wants_usage() {
        let _ = writeln!(out);
        let _ = write_usage(&mut out, tree);
    }
}
