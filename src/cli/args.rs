//! CLI argument definitions using clap
//!
//! Commands:
//! - streambank start --config <path>
//! - streambank validate --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// streambank - an in-memory chunked byte-stream engine with a periodic
/// word logger
#[derive(Parser, Debug)]
#[command(name = "streambank")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Boot the engine, stream stdin into the store and log one word per
    /// tick until Ctrl-C
    Start {
        /// Path to configuration file (defaults are used if it is absent)
        #[arg(long, default_value = "./streambank.json")]
        config: PathBuf,
    },

    /// Load and validate a configuration file, print the effective values
    Validate {
        /// Path to configuration file
        #[arg(long, default_value = "./streambank.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
