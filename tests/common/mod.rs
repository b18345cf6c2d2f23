//! Common test utilities and helpers
//!
//! Integration tests run the built binary against device description files in
//! a temporary directory. The config directory is always pointed into that
//! directory so a user's own configuration never leaks in.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

use assert_fs::prelude::*;
use assert_fs::TempDir;

/// Environment variable overriding the config directory
pub const ENV_CONFIG_DIR: &str = "RATBAG_COMMAND_CONFIG_DIR";

/// Temporary directory holding device descriptions and a config directory
pub struct TestDevices {
    pub dir: TempDir,
}

impl TestDevices {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write a device description and return its path
    pub fn add(&self, name: &str, content: &str) -> PathBuf {
        let child = self.dir.child(name);
        child.write_str(content).expect("Failed to write device");
        child.path().to_path_buf()
    }

    /// Read a device description back
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.child(name).path()).expect("Failed to read device")
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.child("config").path().to_path_buf()
    }

    /// Write `config.toml`
    pub fn write_config(&self, content: &str) {
        self.dir
            .child("config/config.toml")
            .write_str(content)
            .expect("Failed to write config");
    }

    /// Run ratbag-command with `args`
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_ratbag-command"))
            .env(ENV_CONFIG_DIR, self.config_dir())
            .env_remove("RUST_LOG")
            .args(args)
            .output()
            .expect("Failed to execute ratbag-command")
    }

    /// Run ratbag-command with `args` followed by the path of device `name`
    pub fn run_on(&self, name: &str, args: &[&str]) -> Output {
        let path = self.dir.child(name).path().display().to_string();
        let mut full: Vec<&str> = args.to_vec();
        full.push(&path);
        self.run(&full)
    }
}

impl Default for TestDevices {
    fn default() -> Self {
        Self::new()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Two profiles, four buttons, every capability
pub const MOUSE: &str = r#"
name = "Test Mouse"
capabilities = ["switchable-resolution", "switchable-profile", "button-key", "button-macros"]
buttons = 4

[dpi_range]
min = 100
max = 8000

[[profile]]
active = true
default = true

[[profile.resolution]]
dpi = 800
rate = 1000
active = true
default = true

[[profile.resolution]]
dpi = 1600
rate = 1000

[[profile.button]]
type = "left"
action = { kind = "button", button = 1 }

[[profile.button]]
type = "right"
action = { kind = "button", button = 2 }

[[profile.button]]
type = "middle"
action = { kind = "button", button = 3 }

[[profile.button]]
type = "thumb"

[[profile]]

[[profile.resolution]]
dpi = 400
rate = 500

[[profile.resolution]]
dpi = 3200
rate = 500
active = true

[[profile.button]]
type = "left"
action = { kind = "button", button = 1 }

[[profile.button]]
type = "right"
action = { kind = "button", button = 2 }

[[profile.button]]
type = "middle"
action = { kind = "special", special = "resolution-cycle-up" }

[[profile.button]]
type = "thumb"
action = { kind = "key", key = "KEY_VOLUMEUP" }
"#;

/// One profile, fixed resolution, no programmable buttons
pub const BASIC_MOUSE: &str = r#"
name = "Basic Mouse"
buttons = 2

[[profile]]
active = true

[[profile.resolution]]
dpi = 1000
rate = 125
active = true

[[profile.button]]
type = "left"
action = { kind = "button", button = 1 }

[[profile.button]]
type = "right"
action = { kind = "button", button = 2 }
"#;
