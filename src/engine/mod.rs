//! Engine wiring for the byte-stream store
//!
//! Owns the access guard that serializes every store operation, the
//! engine lifecycle (init / shutdown), the sessioned I/O endpoint and the
//! periodic word-logger task.
//!
//! # Invariants Enforced
//!
//! - At most one of {read, write, trim, tick} executes at a time
//! - A caller blocked on the guard can be interrupted with no side effects
//! - Shutdown cancels the word logger and waits for any in-flight tick
//!   before the store is destroyed

mod core;
mod endpoint;
mod errors;
mod guard;
mod word_logger;

pub use self::core::StreamEngine;
pub use endpoint::{OpenMode, StreamEndpoint};
pub use errors::{EngineError, EngineResult};
pub use guard::AccessGuard;
