//! Error types for ratbag-command
//!
//! Domain-specific error types using thiserror. Every failure a command can
//! report maps onto one of the three [`CommandError`] classes, and each class
//! has a fixed process exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a successful command
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code when the device or an index cannot satisfy the request
pub const EXIT_UNSUPPORTED: u8 = 1;

/// Exit code for an invalid command line
pub const EXIT_USAGE: u8 = 2;

/// Exit code for an invalid or missing device, or a failed device operation
pub const EXIT_DEVICE: u8 = 3;

/// Errors reported by the device service and the device model
#[derive(Error, Debug)]
pub enum DeviceError {
    /// No device path was left on the command line
    #[error("Missing device path")]
    MissingPath,

    /// Path does not point at a device we can drive
    #[error("Device '{path}' is not supported")]
    NotSupported { path: PathBuf },

    /// Reading the device failed
    #[error("Failed to open device '{path}': {error}")]
    Open { path: PathBuf, error: String },

    /// Device description could not be parsed
    #[error("Invalid device description '{path}': {error}")]
    Parse { path: PathBuf, error: String },

    /// Writing changes back to the device failed
    #[error("Failed to commit changes to '{path}': {error}")]
    Commit { path: PathBuf, error: String },

    /// The device reports no active profile
    #[error("Failed to retrieve the active profile")]
    NoActiveProfile,

    /// The profile reports no active resolution
    #[error("Failed to retrieve the active resolution")]
    NoActiveResolution,

    /// A handler asked for a resource the dispatcher never resolved
    #[error("No {0} selected")]
    NotResolved(&'static str),
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to list a directory
    #[error("Failed to read directory '{path}': {error}")]
    ReadDir { path: PathBuf, error: String },
}

/// Command tree construction errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    /// Two siblings share a name
    #[error("Duplicate command '{name}' under '{parent}'")]
    DuplicateName { parent: String, name: String },

    /// A leaf has nothing to run
    #[error("Command '{name}' has no subcommands and no handler")]
    MissingHandler { name: String },

    /// A child needs fewer resources than its parent
    #[error("Command '{child}' requires less than its parent '{parent}'")]
    RequirementDecreases { parent: String, child: String },
}

/// Result classes of a dispatched command
#[derive(Error, Debug)]
pub enum CommandError {
    /// Malformed command line
    #[error("{0}")]
    Usage(String),

    /// Well-formed request the device cannot satisfy
    #[error("{0}")]
    Unsupported(String),

    /// Device failure or device-model invariant violation
    #[error(transparent)]
    Device(#[from] DeviceError),
}

impl CommandError {
    /// Build a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Build an unsupported error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }

    /// Process exit code for this error
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Unsupported(_) => EXIT_UNSUPPORTED,
            Self::Usage(_) => EXIT_USAGE,
            Self::Device(_) => EXIT_DEVICE,
        }
    }

    /// Whether the usage text should follow the error message
    #[must_use]
    pub fn wants_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

/// Result type returned by command handlers and the dispatcher
pub type CommandResult = Result<(), CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CommandError::unsupported("x").exit_code(), EXIT_UNSUPPORTED);
        assert_eq!(CommandError::usage("x").exit_code(), EXIT_USAGE);
        assert_eq!(
            CommandError::from(DeviceError::MissingPath).exit_code(),
            EXIT_DEVICE
        );
    }

    #[test]
    fn test_only_usage_errors_print_usage() {
        assert!(CommandError::usage("bad").wants_usage());
        assert!(!CommandError::unsupported("nope").wants_usage());
        assert!(!CommandError::from(DeviceError::NoActiveProfile).wants_usage());
    }

    #[test]
    fn test_device_error_message_is_transparent() {
        let err = CommandError::from(DeviceError::NotSupported {
            path: PathBuf::from("/dev/input/event3"),
        });
        assert_eq!(err.to_string(), "Device '/dev/input/event3' is not supported");
    }
}
