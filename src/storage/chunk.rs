//! Chunk and chunk group containers

use super::errors::{StoreError, StoreResult};

/// Fixed-size byte buffer, the smallest unit of allocation.
///
/// A chunk is created lazily when a write first touches its range and never
/// shrinks afterwards. It is freed only when the owning store is trimmed or
/// dropped.
#[derive(Debug)]
pub struct Chunk {
    bytes: Vec<u8>,
}

impl Chunk {
    /// Allocate a zeroed chunk of `quantum_size` bytes.
    ///
    /// Allocation is fallible and surfaces as `OutOfMemory` instead of
    /// aborting the process.
    pub fn allocate(quantum_size: usize) -> StoreResult<Self> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(quantum_size)
            .map_err(|_| StoreError::OutOfMemory("chunk"))?;
        bytes.resize(quantum_size, 0);

        Ok(Self { bytes })
    }

    /// The chunk contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// The chunk contents, writable.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// The chunk length in bytes (always the quantum size it was
    /// allocated with).
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the chunk holds zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Fixed-capacity array of optional chunk slots.
///
/// The slot array itself is lazily allocated: a group freshly created by
/// `ChunkedStore::follow` holds no slots until a write touches its range.
/// An empty slot vector means "no slot array yet".
#[derive(Debug, Default)]
pub struct ChunkGroup {
    slots: Vec<Option<Chunk>>,
}

impl ChunkGroup {
    /// Create a group with no slot array.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Whether the slot array has been allocated.
    pub fn has_slots(&self) -> bool {
        !self.slots.is_empty()
    }

    /// The chunk at `slot`, if a write ever touched it.
    pub fn chunk(&self, slot: usize) -> Option<&Chunk> {
        self.slots.get(slot)?.as_ref()
    }

    /// The chunk at `slot`, allocating the slot array and the chunk as
    /// needed.
    ///
    /// On allocation failure the group keeps whatever was allocated before
    /// the failure; the slot stays absent.
    pub(crate) fn ensure_chunk(
        &mut self,
        slot: usize,
        qset_size: usize,
        quantum_size: usize,
    ) -> StoreResult<&mut Chunk> {
        if self.slots.is_empty() {
            self.slots
                .try_reserve_exact(qset_size)
                .map_err(|_| StoreError::OutOfMemory("slot array"))?;
            self.slots.resize_with(qset_size, || None);
        }

        let chunk = match self.slots[slot].take() {
            Some(chunk) => chunk,
            None => Chunk::allocate(quantum_size)?,
        };

        Ok(self.slots[slot].insert(chunk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_is_zeroed() {
        let chunk = Chunk::allocate(16).unwrap();
        assert_eq!(chunk.len(), 16);
        assert!(chunk.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_group_starts_without_slots() {
        let group = ChunkGroup::new();
        assert!(!group.has_slots());
        assert!(group.chunk(0).is_none());
    }

    #[test]
    fn test_ensure_chunk_allocates_slot_array_once() {
        let mut group = ChunkGroup::new();
        group.ensure_chunk(2, 4, 8).unwrap();

        assert!(group.has_slots());
        assert!(group.chunk(2).is_some());
        assert!(group.chunk(0).is_none());
        assert!(group.chunk(3).is_none());
    }

    #[test]
    fn test_ensure_chunk_is_idempotent() {
        let mut group = ChunkGroup::new();
        group.ensure_chunk(1, 4, 8).unwrap().as_mut_slice()[0] = 0xAB;
        let chunk = group.ensure_chunk(1, 4, 8).unwrap();

        // Re-ensuring must hand back the same chunk, not a fresh one.
        assert_eq!(chunk.as_slice()[0], 0xAB);
    }
}
