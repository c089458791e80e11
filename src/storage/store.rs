//! The chunked store
//!
//! A single logical byte stream, offset-addressed, backed by lazily
//! allocated fixed-size chunks. The source of truth for `size` (highest
//! written offset + 1) and the tokenizer `cursor`.
//!
//! The store performs no locking of its own; callers serialize through the
//! engine's access guard.

use super::addressing::resolve;
use super::chunk::ChunkGroup;
use super::errors::{StoreError, StoreResult};

/// In-memory store for a single logical byte stream.
///
/// Groups are held in an owned growable sequence; a group at index `i`
/// exists only once addressing has reached `i`, and the sequence never has
/// a missing index below its highest one.
#[derive(Debug)]
pub struct ChunkedStore {
    /// Chunk groups, index 0 first. Owned exclusively by the store.
    groups: Vec<ChunkGroup>,
    /// Highest byte offset written + 1.
    size: u64,
    /// Tokenizer read position, `0 <= cursor <= size`.
    cursor: u64,
    /// Active bytes per chunk.
    quantum_size: usize,
    /// Active slots per group.
    qset_size: usize,
    /// Geometry restored by `trim`.
    default_quantum_size: usize,
    default_qset_size: usize,
}

impl ChunkedStore {
    /// Create an empty store with the given geometry.
    pub fn new(quantum_size: usize, qset_size: usize) -> Self {
        Self {
            groups: Vec::new(),
            size: 0,
            cursor: 0,
            quantum_size,
            qset_size,
            default_quantum_size: quantum_size,
            default_qset_size: qset_size,
        }
    }

    /// Amount of data (in bytes) stored.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// The tokenizer read position.
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    /// Move the tokenizer read position.
    pub(crate) fn set_cursor(&mut self, cursor: u64) {
        debug_assert!(cursor <= self.size);
        self.cursor = cursor;
    }

    /// Active bytes per chunk.
    pub fn quantum_size(&self) -> usize {
        self.quantum_size
    }

    /// Active slots per group.
    pub fn qset_size(&self) -> usize {
        self.qset_size
    }

    /// Number of chunk groups currently attached.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Empty out the store.
    ///
    /// Drops every chunk and chunk group, resets `size` and `cursor` to 0
    /// and restores the geometry configured at construction. Caller holds
    /// the access guard.
    pub fn trim(&mut self) {
        self.groups.clear();
        self.groups.shrink_to_fit();
        self.size = 0;
        self.cursor = 0;
        self.quantum_size = self.default_quantum_size;
        self.qset_size = self.default_qset_size;
    }

    /// Walk the group sequence out to `group_index`, creating empty groups
    /// as needed, and return the group at that index.
    ///
    /// Groups created before an allocation failure stay attached; partial
    /// progress is not rolled back.
    pub fn follow(&mut self, group_index: usize) -> StoreResult<&mut ChunkGroup> {
        if self.groups.len() <= group_index {
            let missing = group_index + 1 - self.groups.len();
            self.groups
                .try_reserve(missing)
                .map_err(|_| StoreError::OutOfMemory("chunk group"))?;
            for _ in 0..missing {
                self.groups.push(ChunkGroup::new());
            }
        }

        Ok(&mut self.groups[group_index])
    }

    /// Write `bytes` at `offset`, clipped to the end of the target chunk.
    ///
    /// Lazily allocates the group, its slot array and the chunk. Returns
    /// the number of bytes actually written, which may be less than
    /// `bytes.len()`; a caller with more data issues further calls at an
    /// advanced offset. Advances `size` when the write extends past the
    /// previous end.
    ///
    /// On `OutOfMemory` zero bytes are written for this call; structures
    /// allocated before the failure stay attached.
    pub fn write_at(&mut self, offset: u64, bytes: &[u8]) -> StoreResult<usize> {
        let quantum_size = self.quantum_size;
        let qset_size = self.qset_size;
        let addr = resolve(offset, quantum_size, qset_size);

        let group = self.follow(addr.group)?;
        let chunk = group.ensure_chunk(addr.slot, qset_size, quantum_size)?;

        // Write only up to the end of this chunk.
        let count = bytes.len().min(quantum_size - addr.byte);
        chunk.as_mut_slice()[addr.byte..addr.byte + count].copy_from_slice(&bytes[..count]);

        let end = offset + count as u64;
        if end > self.size {
            self.size = end;
        }

        Ok(count)
    }

    /// Read up to `max_len` bytes at `offset`, clipped to the stored size
    /// and to the end of the target chunk.
    ///
    /// Returns an empty slice when `offset >= size` or when the target
    /// group, slot array or chunk is absent: holes are never filled and
    /// the store fabricates no zero bytes. The read path never allocates.
    pub fn read_at(&self, offset: u64, max_len: usize) -> &[u8] {
        if offset >= self.size {
            return &[];
        }

        let remaining = self.size - offset;
        let count = (max_len as u64).min(remaining) as usize;
        let addr = resolve(offset, self.quantum_size, self.qset_size);

        let chunk = match self.groups.get(addr.group).and_then(|g| g.chunk(addr.slot)) {
            Some(chunk) => chunk,
            None => return &[],
        };

        // Read only up to the end of this chunk.
        let count = count.min(self.quantum_size - addr.byte);
        &chunk.as_slice()[addr.byte..addr.byte + count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_store() -> ChunkedStore {
        // 8-byte chunks, 4 slots per group: one group spans 32 bytes.
        ChunkedStore::new(8, 4)
    }

    /// Write the whole of `bytes` through successive chunk-clipped calls.
    fn write_all(store: &mut ChunkedStore, mut offset: u64, bytes: &[u8]) {
        let mut remaining = bytes;
        while !remaining.is_empty() {
            let written = store.write_at(offset, remaining).unwrap();
            assert!(written > 0);
            offset += written as u64;
            remaining = &remaining[written..];
        }
    }

    /// Read `len` bytes through successive chunk-clipped calls.
    fn read_all(store: &ChunkedStore, mut offset: u64, len: usize) -> Vec<u8> {
        let mut out = Vec::new();
        while out.len() < len {
            let bytes = store.read_at(offset, len - out.len());
            if bytes.is_empty() {
                break;
            }
            out.extend_from_slice(bytes);
            offset += bytes.len() as u64;
        }
        out
    }

    #[test]
    fn test_write_clips_to_chunk_boundary() {
        let mut store = small_store();

        // 12 bytes at offset 2 cross the first 8-byte chunk.
        let written = store.write_at(2, b"abcdefghijkl").unwrap();
        assert_eq!(written, 6);
        assert_eq!(store.size(), 8);
    }

    #[test]
    fn test_round_trip_across_chunks_and_groups() {
        let mut store = small_store();
        let payload: Vec<u8> = (0..=99).collect();

        // 100 bytes span three full groups' worth of chunks.
        write_all(&mut store, 0, &payload);
        assert_eq!(store.size(), 100);
        assert_eq!(read_all(&store, 0, 100), payload);
    }

    #[test]
    fn test_round_trip_at_nonzero_offset() {
        let mut store = small_store();

        write_all(&mut store, 37, b"stream content");
        assert_eq!(store.size(), 37 + 14);
        assert_eq!(read_all(&store, 37, 14), b"stream content");
    }

    #[test]
    fn test_read_clips_to_size() {
        let mut store = small_store();
        store.write_at(0, b"abc").unwrap();

        assert_eq!(store.read_at(0, 100), b"abc");
        assert_eq!(store.read_at(3, 100), b"");
    }

    #[test]
    fn test_read_past_end_is_empty() {
        let store = small_store();
        assert_eq!(store.read_at(0, 10), b"");
        assert_eq!(store.read_at(1000, 10), b"");
    }

    #[test]
    fn test_growth_on_write_past_end() {
        let mut store = small_store();

        // Offset 70 is in group 2; the chain lazily extends to reach it.
        let written = store.write_at(70, b"xy").unwrap();
        assert_eq!(written, 2);
        assert_eq!(store.size(), 72);
        assert_eq!(store.group_count(), 3);
    }

    #[test]
    fn test_sparse_write_leaves_holes() {
        let mut store = small_store();
        store.write_at(70, b"xy").unwrap();

        // Offsets below 70 are inside `size` but were never written:
        // no group slot holds them, and no zero bytes are fabricated.
        assert_eq!(store.read_at(0, 8), b"");
        assert_eq!(store.read_at(40, 8), b"");
        assert_eq!(store.read_at(70, 8), b"xy");
    }

    #[test]
    fn test_follow_creates_no_hole_groups() {
        let mut store = small_store();
        store.follow(2).unwrap();

        assert_eq!(store.group_count(), 3);
        assert!(!store.follow(0).unwrap().has_slots());
        assert!(!store.follow(1).unwrap().has_slots());
    }

    #[test]
    fn test_trim_resets_everything() {
        let mut store = small_store();
        write_all(&mut store, 0, b"some words here");
        store.set_cursor(5);

        store.trim();

        assert_eq!(store.size(), 0);
        assert_eq!(store.cursor(), 0);
        assert_eq!(store.group_count(), 0);
        assert_eq!(store.read_at(0, 100), b"");
    }

    #[test]
    fn test_empty_write_extends_size_only_to_offset() {
        let mut store = small_store();

        let written = store.write_at(5, b"").unwrap();
        assert_eq!(written, 0);
        assert_eq!(store.size(), 5);
    }

    #[test]
    fn test_overwrite_in_place() {
        let mut store = small_store();
        store.write_at(0, b"aaaa").unwrap();
        store.write_at(0, b"bb").unwrap();

        assert_eq!(store.read_at(0, 4), b"bbaa");
        assert_eq!(store.size(), 4);
    }
}
