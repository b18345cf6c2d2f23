//! Command tree
//!
//! A command line is matched against a tree of [`CommandNode`]s. Each node
//! declares what it needs resolved before it runs (a [`Requirement`]) and
//! either a handler, child commands, or both. The tree is built once at start
//! up and never changes afterwards.

use std::collections::HashSet;
use std::fmt;

use super::args::Args;
use super::context::Context;
use crate::error::{CommandResult, TreeError};

/// Resources a command needs before its handler runs
///
/// Levels are ordered: needing a resolution implies needing a profile, which
/// implies needing a device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Requirement {
    /// Nothing to resolve
    #[default]
    Nothing,
    /// An open device
    Device,
    /// An open device and a selected profile
    Profile,
    /// An open device, a selected profile and a selected resolution
    Resolution,
}

impl Requirement {
    /// Whether a device has to be open
    pub fn needs_device(self) -> bool {
        self >= Self::Device
    }

    /// Whether a profile has to be selected
    pub fn needs_profile(self) -> bool {
        self >= Self::Profile
    }

    /// Whether a resolution has to be selected
    pub fn needs_resolution(self) -> bool {
        self >= Self::Resolution
    }
}

/// Function run when a node is the final match
///
/// Receives the matched node (so routers can dispatch into their own
/// children), the context and the tokens following the command name.
pub type Handler = for<'a, 's> fn(&CommandNode, &mut Context<'s>, Args<'a>) -> CommandResult;

/// One named command
#[derive(Clone)]
pub struct CommandNode {
    name: &'static str,
    args_hint: Option<&'static str>,
    help: Option<&'static str>,
    requirement: Requirement,
    handler: Option<Handler>,
    children: Vec<CommandNode>,
}

impl CommandNode {
    /// Create a node with no help, requirements, handler or children
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            args_hint: None,
            help: None,
            requirement: Requirement::Nothing,
            handler: None,
            children: Vec::new(),
        }
    }

    /// Set the argument placeholder shown in help
    #[must_use]
    pub fn args(mut self, hint: &'static str) -> Self {
        self.args_hint = Some(hint);
        self
    }

    /// Set the one-line description
    #[must_use]
    pub fn help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }

    /// Set what must be resolved before this node runs
    #[must_use]
    pub fn requires(mut self, requirement: Requirement) -> Self {
        self.requirement = requirement;
        self
    }

    /// Set the handler
    #[must_use]
    pub fn handler(mut self, handler: Handler) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Append a child command; declaration order is match and help order
    #[must_use]
    pub fn child(mut self, child: CommandNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn args_hint(&self) -> Option<&'static str> {
        self.args_hint
    }

    pub fn help_text(&self) -> Option<&'static str> {
        self.help
    }

    pub fn requirement(&self) -> Requirement {
        self.requirement
    }

    pub fn handler_fn(&self) -> Option<Handler> {
        self.handler
    }

    pub fn children(&self) -> &[CommandNode] {
        &self.children
    }

    /// Whether this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// First child named `name`
    pub fn find_child(&self, name: &str) -> Option<&CommandNode> {
        self.children.iter().find(|child| child.name == name)
    }
}

impl fmt::Debug for CommandNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandNode")
            .field("name", &self.name)
            .field("args_hint", &self.args_hint)
            .field("help", &self.help)
            .field("requirement", &self.requirement)
            .field("has_handler", &self.handler.is_some())
            .field("children", &self.children)
            .finish()
    }
}

/// A validated command tree
#[derive(Debug, Clone)]
pub struct CommandTree {
    root: CommandNode,
}

impl CommandTree {
    /// Validate `root` and everything below it
    ///
    /// Siblings must have distinct names, leaves must have a handler, and no
    /// child may require less than its parent. The root itself is exempt from
    /// the requirement check since it never runs.
    pub fn new(root: CommandNode) -> Result<Self, TreeError> {
        for child in &root.children {
            validate(child)?;
        }
        check_siblings(&root)?;
        Ok(Self { root })
    }

    /// The synthetic root node
    pub fn root(&self) -> &CommandNode {
        &self.root
    }
}

fn validate(node: &CommandNode) -> Result<(), TreeError> {
    if node.is_leaf() && node.handler.is_none() {
        return Err(TreeError::MissingHandler {
            name: node.name.to_string(),
        });
    }

    check_siblings(node)?;

    for child in &node.children {
        if child.requirement < node.requirement {
            return Err(TreeError::RequirementDecreases {
                parent: node.name.to_string(),
                child: child.name.to_string(),
            });
        }
        validate(child)?;
    }

    Ok(())
}

fn check_siblings(node: &CommandNode) -> Result<(), TreeError> {
    let mut seen = HashSet::new();
    for child in &node.children {
        if !seen.insert(child.name) {
            return Err(TreeError::DuplicateName {
                parent: node.name.to_string(),
                name: child.name.to_string(),
            });
        }
    }
    Ok(())
}
