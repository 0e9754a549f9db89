//! The raw allocation primitive.
//!
//! [`RawHeap`] is a thin validating wrapper over host allocation. It
//! enforces the alignment discipline (every size must be a positive,
//! exact multiple of the alignment boundary) and keeps outstanding
//! byte/region counters, but does no other bookkeeping. Size recovery
//! is the sized layer's job.
//!
//! Allocations are handed out as [`RawRegion`]s: owned, contiguous,
//! zero-initialised byte regions. Ownership of the region *is* the
//! validity of the allocation; returning it via [`RawHeap::release`]
//! ends its lifetime. `release` works on a `&mut Option<RawRegion>`
//! slot because it models a nullable C-style free: `None` is rejected,
//! not ignored, and a successful release nulls the slot.

use tagmem_core::AllocError;

/// An owned raw allocation: exactly `len` contiguous, zero-initialised
/// bytes obtained from the host allocator.
#[derive(Debug, PartialEq)]
pub struct RawRegion {
    bytes: Vec<u8>,
}

impl RawRegion {
    /// Length of the region in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the region is empty. Never true for a region issued by
    /// [`RawHeap::allocate`], which rejects non-positive sizes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The region's bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// The region's bytes, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

/// Validating wrapper over the host's allocate/deallocate calls.
pub struct RawHeap {
    alignment: usize,
    outstanding_bytes: usize,
    outstanding_regions: usize,
}

impl RawHeap {
    /// Create a raw heap enforcing the given alignment boundary.
    ///
    /// # Panics
    ///
    /// Panics if `alignment` is not a nonzero power of two.
    pub fn new(alignment: usize) -> Self {
        assert!(
            alignment.is_power_of_two(),
            "alignment {alignment} is not a nonzero power of two",
        );
        Self {
            alignment,
            outstanding_bytes: 0,
            outstanding_regions: 0,
        }
    }

    /// Allocate a zero-initialised region of exactly `size` bytes.
    ///
    /// Fails with [`AllocError::InvalidSize`] when `size <= 0` and with
    /// [`AllocError::MisalignedSize`] when `size` is not a multiple of
    /// the alignment boundary.
    pub fn allocate(&mut self, size: isize) -> Result<RawRegion, AllocError> {
        if size <= 0 {
            return Err(AllocError::InvalidSize { requested: size });
        }
        let size = size as usize;
        if size % self.alignment != 0 {
            return Err(AllocError::MisalignedSize {
                size: size as isize,
                alignment: self.alignment,
            });
        }

        self.outstanding_bytes += size;
        self.outstanding_regions += 1;
        Ok(RawRegion {
            bytes: vec![0u8; size],
        })
    }

    /// Return a region to the host allocator.
    ///
    /// `size` must be the same multiple-of-alignment value the region
    /// was allocated with. Fails with [`AllocError::NullRelease`] when
    /// the slot holds `None`, [`AllocError::InvalidSize`] /
    /// [`AllocError::MisalignedSize`] when `size` violates the size
    /// discipline, and [`AllocError::SizeMismatch`] when `size` does not
    /// equal the region's true length.
    ///
    /// On success the region is taken out of the caller's slot and its
    /// memory returned to the host; the slot becoming `None` is the
    /// pointer invalidation of the discipline this models. On failure
    /// the region is left in place and the allocation stays live.
    pub fn release(
        &mut self,
        size: isize,
        region: &mut Option<RawRegion>,
    ) -> Result<(), AllocError> {
        let Some(held) = region.as_ref() else {
            return Err(AllocError::NullRelease);
        };
        let len = held.len();

        if size <= 0 {
            return Err(AllocError::InvalidSize { requested: size });
        }
        if (size as usize) % self.alignment != 0 {
            return Err(AllocError::MisalignedSize {
                size,
                alignment: self.alignment,
            });
        }
        if size as usize != len {
            return Err(AllocError::SizeMismatch {
                declared: size,
                actual: len,
            });
        }

        self.outstanding_bytes -= len;
        self.outstanding_regions -= 1;
        drop(region.take());
        Ok(())
    }

    /// The alignment boundary this heap enforces.
    pub fn alignment(&self) -> usize {
        self.alignment
    }

    /// Total bytes currently allocated and not yet released.
    pub fn outstanding_bytes(&self) -> usize {
        self.outstanding_bytes
    }

    /// Number of regions currently allocated and not yet released.
    pub fn outstanding_regions(&self) -> usize {
        self.outstanding_regions
    }
}
