//! Strongly-typed identifiers for heaps and blocks.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies a block within a single sized heap.
///
/// Blocks are assigned sequential IDs at allocation time. `BlockId(n)`
/// is the n-th block ever allocated from its heap, released or not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u64);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BlockId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Counter for unique [`HeapInstanceId`] allocation.
static HEAP_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a sized heap.
///
/// Allocated from a monotonic atomic counter via [`HeapInstanceId::next`].
/// Two distinct heap instances always have different IDs, so a handle
/// presented to the wrong heap is rejected deterministically instead of
/// aliasing a block that happens to share its [`BlockId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeapInstanceId(u64);

impl HeapInstanceId {
    /// Allocate a fresh, unique instance ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(HEAP_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for HeapInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_ids_are_ordered_by_value() {
        assert!(BlockId(0) < BlockId(1));
        assert_eq!(BlockId::from(7), BlockId(7));
        assert_eq!(BlockId(42).to_string(), "42");
    }

    #[test]
    fn heap_instance_ids_are_unique() {
        let a = HeapInstanceId::next();
        let b = HeapInstanceId::next();
        assert_ne!(a, b);
    }
}
