//! Command-line interface module
//!
//! This module handles argument parsing and output formatting. Commands are
//! not clap subcommands: everything after the global options is handed to
//! the command tree as raw tokens.

pub mod commands;
pub mod output;

use clap::{Parser, ValueEnum};

use crate::core::args::Args;
use crate::core::context::{Context, Verbosity};
use crate::core::dispatch::dispatch;
use crate::core::global_config::GlobalConfig;
use crate::error::{EXIT_DEVICE, EXIT_SUCCESS};
use crate::infra::description::DescriptionService;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("VERGEN_CARGO_TARGET_TRIPLE"),
    ")"
);

/// Inspect and configure gaming mice
#[derive(Parser, Debug)]
#[command(name = "ratbag-command")]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Print debugging output, with protocol output if `raw` is given
    #[arg(
        long,
        value_enum,
        value_name = "raw",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "debug"
    )]
    pub verbose: Option<VerboseLevel>,

    /// Print help
    #[arg(short, long)]
    pub help: bool,

    /// Command, its arguments and the device path
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Value of `--verbose`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VerboseLevel {
    /// Debug output, the value implied by a bare `--verbose`
    Debug,
    /// Debug output plus raw device data
    Raw,
}

impl Cli {
    /// Requested verbosity
    pub fn verbosity(&self) -> Verbosity {
        match self.verbose {
            None => Verbosity::Normal,
            Some(VerboseLevel::Debug) => Verbosity::Verbose,
            Some(VerboseLevel::Raw) => Verbosity::Raw,
        }
    }

    /// Run the command line and return the process exit code
    pub fn run(self, config: &GlobalConfig) -> u8 {
        let tree = match commands::command_tree() {
            Ok(tree) => tree,
            Err(e) => {
                tracing::error!("Invalid command tree: {e}");
                return EXIT_DEVICE;
            }
        };

        if self.help {
            let stdout = std::io::stdout();
            return match output::write_usage(&mut stdout.lock(), &tree) {
                Ok(()) => EXIT_SUCCESS,
                Err(_) => EXIT_DEVICE,
            };
        }

        let service = DescriptionService::from_config(config);
        let mut ctx = Context::new(&service).with_verbosity(self.verbosity());
        let result = dispatch(tree.root(), &mut ctx, Args::new(&self.args));
        ctx.release();

        match result {
            Ok(()) => EXIT_SUCCESS,
            Err(err) => {
                output::display_error(&err, &tree);
                err.exit_code()
            }
        }
    }
}
