//! CLI command implementations
//!
//! `start` follows the engine lifecycle strictly: load config, init the
//! engine, feed stdin through a write-only session, keep the word logger
//! ticking until Ctrl-C, then shut down (cancel-and-wait) before exit.

use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::engine::{OpenMode, StreamEndpoint, StreamEngine};
use crate::observability::{Event, LogWordSink, Logger};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io;

/// Dispatch a parsed command line.
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Start { config } => start(&config),
        Command::Validate { config } => validate(&config),
    }
}

/// Boot the engine and serve until Ctrl-C.
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?;
    Logger::info(
        Event::ConfigLoaded,
        &[("path", &config_path.display().to_string())],
    );

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::io_error(format!("failed to start runtime: {}", e)))?;

    runtime.block_on(serve(config))
}

async fn serve(config: Config) -> CliResult<()> {
    let engine = StreamEngine::init(config, Arc::new(LogWordSink));

    // Overwrite semantics: the write-only open trims whatever was stored.
    let endpoint = StreamEndpoint::open(&engine, OpenMode::WriteOnly).await?;
    io::copy_stdin(&endpoint).await?;
    endpoint.release();

    // The word logger keeps emitting one word per tick until Ctrl-C.
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| CliError::io_error(format!("failed to wait for Ctrl-C: {}", e)))?;

    engine.shutdown().await;
    Ok(())
}

/// Load and validate a configuration file, print the effective values.
pub fn validate(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    Logger::info(
        Event::ConfigLoaded,
        &[("path", &config_path.display().to_string())],
    );
    io::print_config(&config)
}
