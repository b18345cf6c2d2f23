//! ratbag-command - inspect and configure gaming mice
//!
//! Commands form a tree (`profile 1 resolution 0 dpi set 800`). Each node
//! declares what it needs, a device, profile or resolution, and the
//! dispatcher resolves those before the handler runs.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line parsing, the command set and output formatting
//! - [`core`] - Device model, command tree, resolution and dispatch (no I/O)
//! - [`infra`] - Infrastructure layer (device description files, directories)
//! - [`config`] - Configuration constants
//! - [`error`] - Error types and exit codes

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
