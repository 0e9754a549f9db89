//! Error taxonomy for the allocator layers.
//!
//! Every failure is a programmer usage error or an internal contract
//! violation, reported synchronously to the immediate caller. Nothing
//! here is transient: no variant is ever retried, and a failed
//! operation leaves the heap unchanged.

use std::error::Error;
use std::fmt;

use crate::id::BlockId;

/// Errors from raw and sized allocation operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// A requested or computed size was not a positive integer, or its
    /// rounded form would not fit in the header word.
    InvalidSize {
        /// The offending size as supplied by the caller.
        requested: isize,
    },
    /// A raw-layer size is not a multiple of the alignment boundary.
    ///
    /// The sized layer always rounds before calling down, so seeing this
    /// from a sized operation signals an internal contract violation.
    MisalignedSize {
        /// The offending size.
        size: isize,
        /// The alignment boundary the size failed to satisfy.
        alignment: usize,
    },
    /// Release was called with nothing to release (the null pointer of
    /// the C-style discipline this crate models).
    NullRelease,
    /// The handle's block was already released. Terminal state: a
    /// released block never becomes live again.
    BlockReleased {
        /// The block that was released earlier.
        block: BlockId,
    },
    /// The handle was not produced by this heap, or names a block this
    /// heap never issued.
    ForeignBlock {
        /// The block the handle claims to name.
        block: BlockId,
    },
    /// A declared release size disagrees with the true length of the
    /// region being returned. Like [`AllocError::MisalignedSize`], this
    /// signals a bookkeeping bug, never a normal outcome.
    SizeMismatch {
        /// The size the caller declared.
        declared: isize,
        /// The actual length of the region in bytes.
        actual: usize,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { requested } => {
                write!(f, "invalid allocation size: {requested}")
            }
            Self::MisalignedSize { size, alignment } => {
                write!(f, "size {size} is not a multiple of alignment {alignment}")
            }
            Self::NullRelease => write!(f, "release of null"),
            Self::BlockReleased { block } => {
                write!(f, "block {block} was already released")
            }
            Self::ForeignBlock { block } => {
                write!(f, "block {block} does not belong to this heap")
            }
            Self::SizeMismatch { declared, actual } => {
                write!(
                    f,
                    "declared release size {declared} does not match region length {actual}"
                )
            }
        }
    }
}

impl Error for AllocError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_values() {
        let err = AllocError::InvalidSize { requested: -5 };
        assert_eq!(err.to_string(), "invalid allocation size: -5");

        let err = AllocError::MisalignedSize {
            size: 17,
            alignment: 16,
        };
        assert_eq!(err.to_string(), "size 17 is not a multiple of alignment 16");

        let err = AllocError::BlockReleased { block: BlockId(3) };
        assert_eq!(err.to_string(), "block 3 was already released");
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(AllocError::NullRelease, AllocError::NullRelease);
        assert_ne!(
            AllocError::ForeignBlock { block: BlockId(1) },
            AllocError::ForeignBlock { block: BlockId(2) }
        );
    }
}
