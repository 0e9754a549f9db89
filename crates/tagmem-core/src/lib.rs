//! Core types for the tagmem allocator workspace.
//!
//! This is the leaf crate with zero dependencies. It defines the
//! strongly-typed identifiers and the error taxonomy shared by the
//! allocator layers in `tagmem-heap`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::AllocError;
pub use id::{BlockId, HeapInstanceId};
