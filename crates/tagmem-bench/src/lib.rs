//! Benchmark profiles and helpers for the tagmem allocator.
//!
//! Provides the shared size sweeps used by the criterion benches:
//!
//! - [`DEMO_SIZES`]: the mixed small/large request pattern from the
//!   original bookkeeping exercise
//! - [`sweep_sizes`]: a geometric sweep from 1 byte to ~64KiB

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The mixed request pattern of the original exercise: small odd sizes,
/// one multi-unit size, one large size.
pub const DEMO_SIZES: [isize; 7] = [1, 3, 7, 8, 24, 13, 1002];

/// Geometric size sweep: 1, 4, 16, ... up to 65536 bytes.
pub fn sweep_sizes() -> Vec<isize> {
    let mut sizes = Vec::new();
    let mut size = 1isize;
    while size <= 65_536 {
        sizes.push(size);
        size *= 4;
    }
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_covers_the_expected_range() {
        let sizes = sweep_sizes();
        assert_eq!(sizes.first(), Some(&1));
        assert_eq!(sizes.last(), Some(&65_536));
    }
}
