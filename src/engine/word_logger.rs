//! Periodic word-logger task
//!
//! Drives one tokenizer tick per period: sleep, acquire the guard, tick,
//! emit, repeat. The task ends when the shutdown signal fires; the engine
//! awaits the returned handle so no tick can run once shutdown completes.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::tokenizer::{TickOutcome, WordSink, WordTokenizer, NO_DATA_MESSAGE};

use super::guard::AccessGuard;

/// Spawn the periodic word logger.
///
/// Each iteration waits out the period first, mirroring the initial
/// delayed schedule at boot. A tick that cannot acquire the guard means
/// shutdown has begun and ends the task; everything else is absorbed so
/// the schedule never stalls.
pub(crate) fn spawn(
    guard: Arc<AccessGuard>,
    tokenizer: WordTokenizer,
    sink: Arc<dyn WordSink>,
    period: Duration,
    mut shutdown: broadcast::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = tokio::time::sleep(period) => {}
                _ = shutdown.recv() => break,
            }

            let outcome = match guard.acquire().await {
                Ok(mut store) => tokenizer.tick(&mut store),
                Err(_) => break,
            };

            match outcome {
                TickOutcome::Word(word) => sink.emit_word(&word),
                TickOutcome::Empty => sink.emit_diagnostic(NO_DATA_MESSAGE),
                TickOutcome::Skipped => {}
            }
        }
    })
}
