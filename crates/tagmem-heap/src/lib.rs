//! Length-prefixed allocation for the tagmem workspace.
//!
//! Two layers, dependency order leaves-first:
//!
//! - [`RawHeap`] — a thin validating wrapper over host allocation.
//!   Rejects non-positive and misaligned sizes; no bookkeeping of its
//!   own beyond outstanding-memory counters.
//! - [`SizedHeap`] — built on the raw layer. Prefixes every payload
//!   with a hidden header recording the rounded payload size, so
//!   release needs no size argument: it reads the header back.
//!
//! # Block layout
//!
//! ```text
//! One raw region per block (total = header + rounded payload):
//!
//! ┌────────────────────────┬─────────────────────────────────────┐
//! │  header (16 bytes)     │  payload (rounded size, zeroed)     │
//! │  ┌──────────────────┐  │                                     │
//! │  │ word 0: rounded  │  │   caller reads/writes this region   │
//! │  │ size, LE u32     │  │   through an opaque BlockHandle     │
//! │  │ words 1-3: zero  │  │                                     │
//! │  └──────────────────┘  │                                     │
//! └────────────────────────┴─────────────────────────────────────┘
//!
//! Header size and rounded payload size are each exact multiples of
//! the alignment boundary (16 by default), so the raw total is too.
//! ```
//!
//! Requested sizes round up with ceiling division: 1..=16 all reserve
//! 16 payload bytes, 17 reserves 32. Callers may use the full rounded
//! payload even when they asked for less.
//!
//! # What callers hold
//!
//! No addresses cross the API. `allocate` returns a `Copy`-able
//! [`BlockHandle`]; payload access and release go back through the
//! heap, which validates the handle against its live-block registry
//! and per-heap instance tag. Double release and release of a handle
//! from another heap are deterministic errors, not undefined behavior.
//!
//! Single-threaded by design: all mutating operations take `&mut self`
//! and there is no internal locking. Concurrent use, if ever needed,
//! is the caller's responsibility.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod block;
pub mod config;
pub mod handle;
pub mod raw;
pub mod sized;

pub use config::HeapConfig;
pub use handle::BlockHandle;
pub use raw::{RawHeap, RawRegion};
pub use sized::SizedHeap;
