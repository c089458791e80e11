//! CLI stdin/stdout plumbing
//!
//! The glue between the terminal and the engine: streams stdin into the
//! store through an endpoint session and prints configuration values.
//! stdin/stdout failures here are the boundary faults of the endpoint
//! contract.

use tokio::io::AsyncReadExt;

use crate::config::Config;
use crate::engine::StreamEndpoint;

use super::errors::{CliError, CliResult};

/// Stream all of stdin into the store, starting at offset 0.
///
/// Writes advance one chunk-clipped call at a time. Returns the number of
/// bytes stored.
pub async fn copy_stdin(endpoint: &StreamEndpoint) -> CliResult<u64> {
    let mut stdin = tokio::io::stdin();
    let mut buf = vec![0u8; 4096];
    let mut offset = 0u64;

    loop {
        let n = stdin
            .read(&mut buf)
            .await
            .map_err(|e| CliError::io_error(format!("failed to read stdin: {}", e)))?;
        if n == 0 {
            break;
        }

        let mut done = 0;
        while done < n {
            let written = endpoint.write(offset, &buf[done..n]).await?;
            offset += written as u64;
            done += written;
        }
    }

    Ok(offset)
}

/// Print the effective configuration as pretty JSON.
pub fn print_config(config: &Config) -> CliResult<()> {
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| CliError::io_error(format!("failed to render config: {}", e)))?;
    println!("{}", json);
    Ok(())
}
