//! Default configuration values

/// Directory scanned by `list`
pub const DEFAULT_INPUT_DIR: &str = "/dev/input";

/// File name prefix of device nodes inside the input directory
pub const DEFAULT_NODE_PREFIX: &str = "event";

/// Log filter used when neither `RUST_LOG` nor `--verbose` is given
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Name of the configuration file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";
