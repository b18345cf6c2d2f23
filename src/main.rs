//! ratbag-command - inspect and configure gaming mice
//!
//! Entry point for the ratbag-command command-line application.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ratbag_command::cli::output::status;
use ratbag_command::cli::Cli;
use ratbag_command::core::context::Verbosity;
use ratbag_command::core::global_config::GlobalConfig;
use ratbag_command::error::{EXIT_DEVICE, EXIT_SUCCESS, EXIT_USAGE};
use ratbag_command::infra::dirs::AppDirs;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --version lands here too and is not an error.
            let code = if err.use_stderr() { EXIT_USAGE } else { EXIT_SUCCESS };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    let config = match setup(cli.verbosity()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e:#}", status::ERROR);
            return ExitCode::from(EXIT_DEVICE);
        }
    };

    ExitCode::from(cli.run(&config))
}

/// Load the configuration and install the log subscriber
fn setup(verbosity: Verbosity) -> Result<GlobalConfig> {
    let dirs = AppDirs::new();
    let config = GlobalConfig::load(&dirs).context("Failed to load configuration")?;

    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.is_empty() => EnvFilter::try_new(directives),
        _ => EnvFilter::try_new(match verbosity {
            Verbosity::Normal => config.log_filter(),
            Verbosity::Verbose => "debug",
            Verbosity::Raw => "trace",
        }),
    }
    .context("Invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("Failed to initialize logging")?;

    tracing::debug!("Using config directory '{}'", dirs.config_dir().display());
    Ok(config)
}
