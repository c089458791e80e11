//! Chunked in-memory storage for the byte stream
//!
//! The store holds a single unbounded logical byte stream in fixed-size
//! chunks (quanta), grouped into fixed-capacity chunk groups.
//!
//! # Design Principles
//!
//! - Exclusive ownership: the store owns every group and every chunk
//! - Lazy allocation: a chunk exists only once a write touches its range
//! - Holes are never filled: reads into unwritten slots yield no data
//! - Single-chunk-at-a-time: reads and writes clip at chunk boundaries
//!
//! # Invariants Enforced
//!
//! - `size` is monotonically non-decreasing between trims
//! - The group sequence has no missing index below its highest one
//! - `0 <= cursor <= size` at all times

mod addressing;
mod chunk;
mod errors;
mod store;

pub use addressing::{resolve, ChunkAddress};
pub use chunk::{Chunk, ChunkGroup};
pub use errors::{StoreError, StoreResult};
pub use store::ChunkedStore;
