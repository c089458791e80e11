//! CLI module for streambank
//!
//! Provides the command-line interface:
//! - start: boot the engine, feed stdin, log words until Ctrl-C
//! - validate: load and validate a configuration file

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run_command, start, validate};
pub use errors::{CliError, CliResult};

/// Parse arguments and dispatch.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    commands::run_command(cli)
}
