//! Engine lifecycle
//!
//! The engine is an explicit context: it owns the guarded store, the
//! configuration and the word-logger task, and is passed by reference to
//! endpoints. Construction starts the first tick's timer; shutdown
//! cancels the schedule, waits for any in-flight tick, then lets the
//! store drop.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::observability::{Event, Logger};
use crate::storage::ChunkedStore;
use crate::tokenizer::{WordSink, WordTokenizer};

use super::errors::EngineResult;
use super::guard::AccessGuard;
use super::word_logger;

/// The engine context: guarded store + periodic word logger.
pub struct StreamEngine {
    guard: Arc<AccessGuard>,
    config: Config,
    logger_task: JoinHandle<()>,
}

impl StreamEngine {
    /// Construct the store from `config` and start the word logger.
    ///
    /// The store allocates nothing up front (chunks are lazy), so
    /// construction itself cannot run out of memory; the first tick is
    /// scheduled one period out. Must be called within a tokio runtime.
    pub fn init(config: Config, sink: Arc<dyn WordSink>) -> Self {
        Logger::info(Event::BootStart, &[]);

        let (shutdown_tx, _) = broadcast::channel(1);
        let store = ChunkedStore::new(config.quantum_size, config.qset_size);
        let guard = Arc::new(AccessGuard::new(store, shutdown_tx.clone()));

        let tokenizer = WordTokenizer::new(config.max_word_len);
        let logger_task = word_logger::spawn(
            Arc::clone(&guard),
            tokenizer,
            sink,
            Duration::from_millis(config.tick_interval_ms),
            shutdown_tx.subscribe(),
        );

        Logger::info(
            Event::BootComplete,
            &[
                ("started_at", &Utc::now().to_rfc3339()),
                ("quantum_size", &config.quantum_size.to_string()),
                ("qset_size", &config.qset_size.to_string()),
                ("tick_interval_ms", &config.tick_interval_ms.to_string()),
            ],
        );

        Self {
            guard,
            config,
            logger_task,
        }
    }

    /// The engine configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The guard serializing all store access.
    pub(crate) fn access_guard(&self) -> &Arc<AccessGuard> {
        &self.guard
    }

    /// Read up to `max_len` bytes at `offset` under the guard.
    pub async fn read(&self, offset: u64, max_len: usize) -> EngineResult<Vec<u8>> {
        let store = self.guard.acquire().await?;
        Ok(store.read_at(offset, max_len).to_vec())
    }

    /// Write `bytes` at `offset` under the guard; returns the
    /// chunk-clipped count actually written.
    pub async fn write(&self, offset: u64, bytes: &[u8]) -> EngineResult<usize> {
        let mut store = self.guard.acquire().await?;
        Ok(store.write_at(offset, bytes)?)
    }

    /// Empty out the store under the guard.
    pub async fn trim(&self) -> EngineResult<()> {
        let mut store = self.guard.acquire().await?;
        store.trim();
        drop(store);

        Logger::info(Event::StoreTrimmed, &[]);
        Ok(())
    }

    /// Amount of data currently stored.
    pub async fn size(&self) -> EngineResult<u64> {
        let store = self.guard.acquire().await?;
        Ok(store.size())
    }

    /// Cancel the word logger, wait for any in-flight tick, then destroy
    /// the store.
    ///
    /// Cancellation is awaited, not merely requested: when this returns,
    /// no tick is running and none will run again. Pending and future
    /// lock waiters fail with `Interrupted`.
    pub async fn shutdown(self) {
        Logger::info(Event::ShutdownStart, &[]);

        self.guard.begin_shutdown();
        let _ = self.logger_task.await;

        Logger::info(Event::ShutdownComplete, &[]);
        // The store drops with the last guard reference.
    }
}
