//! Opaque handles to live blocks.
//!
//! A [`BlockHandle`] is what callers hold instead of a payload pointer.
//! It is `Copy` and carries no ownership; the heap's live-block
//! registry decides whether a handle is still good. It encodes enough
//! identity (heap instance tag plus block id) for the heap to reject
//! stale and foreign handles deterministically.

use std::fmt;

use tagmem_core::{BlockId, HeapInstanceId};

/// Opaque handle to a block allocated by a sized heap.
///
/// Produced only by `SizedHeap::allocate`; presented back for payload
/// access and release. The handle never exposes an address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct BlockHandle {
    /// The heap instance that issued this handle.
    pub(crate) heap: HeapInstanceId,
    /// The block within that heap.
    pub(crate) id: BlockId,
    /// Rounded payload length in bytes.
    pub(crate) len: u32,
}

impl BlockHandle {
    /// Create a new handle.
    pub(crate) fn new(heap: HeapInstanceId, id: BlockId, len: u32) -> Self {
        Self { heap, id, len }
    }

    /// The block this handle names.
    pub fn id(&self) -> BlockId {
        self.id
    }

    /// Rounded payload length in bytes: the size the caller may
    /// actually use, which can exceed the size it requested.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Whether this is a zero-length allocation. Never true for handles
    /// issued by a sized heap, which rejects non-positive requests.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The heap instance that issued this handle.
    pub fn heap(&self) -> HeapInstanceId {
        self.heap
    }
}

impl fmt::Display for BlockHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BlockHandle(heap={}, block={}, len={})",
            self.heap, self.id, self.len
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_the_encoded_fields() {
        let heap = HeapInstanceId::next();
        let h = BlockHandle::new(heap, BlockId(7), 32);
        assert_eq!(h.id(), BlockId(7));
        assert_eq!(h.len(), 32);
        assert_eq!(h.heap(), heap);
        assert!(!h.is_empty());
    }

    #[test]
    fn handles_are_copy_and_comparable() {
        let heap = HeapInstanceId::next();
        let a = BlockHandle::new(heap, BlockId(1), 16);
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, BlockHandle::new(heap, BlockId(2), 16));
    }
}
