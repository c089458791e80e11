//! Engine error types

use thiserror::Error;

use crate::storage::StoreError;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine errors
#[derive(Debug, Error)]
pub enum EngineError {
    /// Storage allocation failed; the failed call wrote nothing.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Lock acquisition was interrupted by shutdown while the caller
    /// waited. No state was mutated; the caller may retry.
    #[error("interrupted while waiting for the access guard")]
    Interrupted,

    /// The caller-supplied buffer could not be copied to or from. The
    /// store is unchanged for the failed call.
    #[error("buffer copy fault: {0}")]
    Fault(#[source] std::io::Error),
}

impl EngineError {
    /// Whether the caller may simply retry the operation.
    pub fn is_retryable(&self) -> bool {
        matches!(self, EngineError::Interrupted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupted_is_retryable() {
        assert!(EngineError::Interrupted.is_retryable());
        assert!(!EngineError::Store(StoreError::OutOfMemory("chunk")).is_retryable());
    }

    #[test]
    fn test_store_error_passes_through() {
        let err = EngineError::from(StoreError::OutOfMemory("chunk group"));
        assert_eq!(err.to_string(), "out of memory allocating chunk group");
    }
}
