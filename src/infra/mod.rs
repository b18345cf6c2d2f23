//! Infrastructure layer
//!
//! Handles all I/O: device description files, directory scans and platform
//! directories. This module is the only place where side effects occur.

pub mod description;
pub mod dirs;
pub mod filesystem;
