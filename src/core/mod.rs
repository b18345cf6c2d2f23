//! Core command engine
//!
//! Everything between a parsed command line and the device service: the
//! device model, the command tree, resource resolution, dispatch and help
//! rendering. It does no I/O of its own; devices are reached through a
//! [`service::DeviceService`].
//!
//! # Submodules
//!
//! - [`device`] - Device, profile, resolution and button model
//! - [`action`] - Button actions and their command-line syntax
//! - [`keys`] - Key name table
//! - [`service`] - Device service interface
//! - [`node`] - Command tree
//! - [`args`] - Argument window
//! - [`context`] - Per-invocation state
//! - [`resolver`] - Resource resolution
//! - [`dispatch`] - Command dispatch
//! - [`help`] - Usage text
//! - [`global_config`] - Global configuration management

pub mod action;
pub mod args;
pub mod context;
pub mod device;
pub mod dispatch;
pub mod global_config;
pub mod help;
pub mod keys;
pub mod node;
pub mod resolver;
pub mod service;
