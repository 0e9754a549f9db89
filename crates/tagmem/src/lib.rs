//! tagmem: an instructional length-prefixed allocator.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the tagmem sub-crates. For most users, adding `tagmem` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tagmem::prelude::*;
//!
//! let mut heap = SizedHeap::new();
//!
//! // Request 13 bytes; the heap reserves 16 (the next alignment
//! // multiple) and records that in a hidden header.
//! let handle = heap.allocate(13).unwrap();
//! assert_eq!(handle.len(), 16);
//! assert_eq!(heap.header(handle).unwrap(), 16);
//!
//! // The payload is zero-filled and fully writable up to the
//! // rounded size.
//! heap.payload_mut(handle).unwrap().fill(0xAB);
//!
//! // Release reads the size back out of the header; the caller
//! // never supplies it. A second release is a deterministic error.
//! assert_eq!(heap.release(Some(handle)).unwrap(), 32);
//! assert!(matches!(
//!     heap.release(Some(handle)),
//!     Err(AllocError::BlockReleased { .. })
//! ));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`heap`] | `tagmem-heap` | `RawHeap`, `SizedHeap`, handles, config |
//! | [`types`] | `tagmem-core` | IDs and the error taxonomy |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Allocator layers, handles, and configuration (`tagmem-heap`).
///
/// Most users only need [`heap::SizedHeap`] and [`heap::BlockHandle`]
/// from this module — they are also available in the [`prelude`].
pub use tagmem_heap as heap;

/// Core identifiers and error types (`tagmem-core`).
pub use tagmem_core as types;

/// Common imports for typical tagmem usage.
///
/// ```rust
/// use tagmem::prelude::*;
/// ```
pub mod prelude {
    // Allocator layers
    pub use tagmem_heap::{BlockHandle, HeapConfig, RawHeap, SizedHeap};

    // Core types and errors
    pub use tagmem_core::{AllocError, BlockId, HeapInstanceId};
}
