//! Storage error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An allocation needed to grow the chunk chain, a slot array or a
    /// chunk itself failed. Structures allocated before the failure stay
    /// attached; the failed operation wrote nothing.
    #[error("out of memory allocating {0}")]
    OutOfMemory(&'static str),
}
