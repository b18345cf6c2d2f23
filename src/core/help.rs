//! Usage text generation
//!
//! Renders one line per documented command, walking the tree depth-first in
//! declaration order. Router nodes without help text do not get a line of
//! their own but their names become part of their children's lines.

use super::node::CommandNode;

/// Column the help text is aligned to
pub const HELP_WIDTH: usize = 40;

/// Minimum number of filler characters between a command and its help
pub const MIN_FILL: usize = 4;

const FILLER: char = '.';
const INDENT: &str = "    ";

/// Lazily render the usage lines for everything below `node`
///
/// `prefix` is prepended to every line, so a caller rendering a subtree can
/// pass the path that leads to it.
pub fn render<'a>(node: &'a CommandNode, prefix: &str) -> HelpLines<'a> {
    HelpLines {
        stack: vec![Frame {
            children: node.children().iter(),
            prefix: child_prefix(prefix, node),
        }],
    }
}

/// Iterator over rendered usage lines
pub struct HelpLines<'a> {
    stack: Vec<Frame<'a>>,
}

struct Frame<'a> {
    children: std::slice::Iter<'a, CommandNode>,
    prefix: String,
}

impl Iterator for HelpLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let frame = self.stack.last_mut()?;
            let Some(child) = frame.children.next() else {
                self.stack.pop();
                continue;
            };

            let line = child.help_text().map(|help| format_line(&frame.prefix, child, help));
            let prefix = child_prefix(&frame.prefix, child);
            if !child.is_leaf() {
                self.stack.push(Frame {
                    children: child.children().iter(),
                    prefix,
                });
            }

            if line.is_some() {
                return line;
            }
        }
    }
}

fn child_prefix(prefix: &str, node: &CommandNode) -> String {
    match node.args_hint() {
        Some(args) => format!("{prefix}{} {args} ", node.name()),
        None => format!("{prefix}{} ", node.name()),
    }
}

fn format_line(prefix: &str, node: &CommandNode, help: &str) -> String {
    let command = match node.args_hint() {
        Some(args) => format!("{prefix}{} {args}", node.name()),
        None => format!("{prefix}{}", node.name()),
    };
    let fill = HELP_WIDTH
        .saturating_sub(command.chars().count())
        .max(MIN_FILL);
    let dots: String = std::iter::repeat(FILLER).take(fill).collect();
    format!("{INDENT}{command} {dots} {help}")
}
