//! Sessioned I/O endpoint
//!
//! The open / read / write / release surface over the engine. Opening
//! write-only truncates the stream first: overwriting with a shorter
//! payload must not leave a tail of the previous content. Reads and
//! writes forward to the store under the guard, one chunk at a time.
//!
//! Copy failures against caller-supplied buffers are `Fault`s, distinct
//! from store-internal errors, and leave the store unchanged for the
//! failed call.

use std::io::{Read, Write};
use std::sync::Arc;

use uuid::Uuid;

use crate::observability::{Event, Logger};
use crate::storage::resolve;

use super::core::StreamEngine;
use super::errors::{EngineError, EngineResult};
use super::guard::AccessGuard;

/// Access mode requested at open time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    ReadOnly,
    WriteOnly,
    ReadWrite,
}

impl OpenMode {
    /// Returns the string used in session log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            OpenMode::ReadOnly => "read-only",
            OpenMode::WriteOnly => "write-only",
            OpenMode::ReadWrite => "read-write",
        }
    }
}

/// One open session against the engine.
pub struct StreamEndpoint {
    guard: Arc<AccessGuard>,
    mode: OpenMode,
    session_id: Uuid,
}

impl StreamEndpoint {
    /// Open a session.
    ///
    /// A write-only open trims the store before any write; other modes
    /// leave the stored content as is.
    pub async fn open(engine: &StreamEngine, mode: OpenMode) -> EngineResult<Self> {
        let guard = Arc::clone(engine.access_guard());

        if mode == OpenMode::WriteOnly {
            let mut store = guard.acquire().await?;
            store.trim();
            drop(store);
            Logger::info(Event::StoreTrimmed, &[("reason", "write-only open")]);
        }

        let session_id = Uuid::new_v4();
        Logger::info(
            Event::EndpointOpened,
            &[
                ("session_id", &session_id.to_string()),
                ("mode", mode.as_str()),
            ],
        );

        Ok(Self {
            guard,
            mode,
            session_id,
        })
    }

    /// The session identifier.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// The mode this session was opened with.
    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    /// Read up to `max_len` bytes at `offset`.
    ///
    /// Returns fewer bytes at a chunk boundary and nothing past the end
    /// of stored data or inside a hole.
    pub async fn read(&self, offset: u64, max_len: usize) -> EngineResult<Vec<u8>> {
        let store = self.guard.acquire().await?;
        Ok(store.read_at(offset, max_len).to_vec())
    }

    /// Copy up to `max_len` stored bytes at `offset` into `out`.
    ///
    /// A failure to write into `out` is a `Fault`: nothing counts as
    /// consumed and the store is untouched.
    pub async fn read_into(
        &self,
        offset: u64,
        max_len: usize,
        out: &mut dyn Write,
    ) -> EngineResult<usize> {
        let store = self.guard.acquire().await?;
        let bytes = store.read_at(offset, max_len);
        out.write_all(bytes).map_err(EngineError::Fault)?;
        Ok(bytes.len())
    }

    /// Write `bytes` at `offset`; returns the chunk-clipped count.
    pub async fn write(&self, offset: u64, bytes: &[u8]) -> EngineResult<usize> {
        let mut store = self.guard.acquire().await?;
        Ok(store.write_at(offset, bytes)?)
    }

    /// Pull the chunk-clipped count of bytes (at most `max_len`) from
    /// `src` and write them at `offset`.
    ///
    /// The bytes are staged before the store is touched, so a short or
    /// failing read from `src` is a `Fault` that leaves the store
    /// unchanged.
    pub async fn write_from(
        &self,
        offset: u64,
        src: &mut dyn Read,
        max_len: usize,
    ) -> EngineResult<usize> {
        let mut store = self.guard.acquire().await?;

        let addr = resolve(offset, store.quantum_size(), store.qset_size());
        let count = max_len.min(store.quantum_size() - addr.byte);

        let mut staged = vec![0u8; count];
        src.read_exact(&mut staged).map_err(EngineError::Fault)?;

        Ok(store.write_at(offset, &staged)?)
    }

    /// Close the session. No store state changes.
    pub fn release(self) {
        Logger::info(
            Event::EndpointReleased,
            &[("session_id", &self.session_id.to_string())],
        );
    }
}
