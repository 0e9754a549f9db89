//! Heap configuration parameters.

/// Configuration for the sized heap.
///
/// Controls the alignment boundary and the width of the size header.
/// Validated at heap construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeapConfig {
    /// Alignment boundary in bytes.
    ///
    /// Default: 16. Every raw allocation and release size must be an
    /// exact multiple of this value. Must be a nonzero power of two.
    pub alignment: usize,

    /// Width of the size header in 32-bit words.
    ///
    /// Default: 4, giving a 16-byte header: exactly one alignment unit
    /// at the default alignment, so the header needs no padding logic.
    /// The resulting [`header_size`](HeapConfig::header_size) must be a
    /// nonzero multiple of `alignment`.
    pub header_words: usize,
}

impl HeapConfig {
    /// Default alignment boundary in bytes.
    pub const DEFAULT_ALIGNMENT: usize = 16;

    /// Default header width: 4 × 32-bit words = 16 bytes.
    pub const DEFAULT_HEADER_WORDS: usize = 4;

    /// Create a config with the default alignment and header width.
    pub fn new() -> Self {
        Self {
            alignment: Self::DEFAULT_ALIGNMENT,
            header_words: Self::DEFAULT_HEADER_WORDS,
        }
    }

    /// Size of the header block in bytes.
    pub fn header_size(&self) -> usize {
        self.header_words * std::mem::size_of::<u32>()
    }

    /// Round a requested payload size up to the next alignment multiple.
    ///
    /// Ceiling division: sizes 1..=16 round to 16, 17 rounds to 32, and
    /// an exact multiple is returned unchanged.
    pub fn round_up(&self, requested: usize) -> usize {
        requested.div_ceil(self.alignment) * self.alignment
    }

    /// Whether this config satisfies the heap's construction contract:
    /// a nonzero power-of-two alignment and a header that is itself a
    /// nonzero multiple of the alignment.
    pub fn is_valid(&self) -> bool {
        self.alignment.is_power_of_two()
            && self.header_words != 0
            && self.header_size() % self.alignment == 0
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_header_is_one_alignment_unit() {
        let config = HeapConfig::new();
        assert_eq!(config.header_size(), 16);
        assert_eq!(config.header_size(), config.alignment);
        assert!(config.is_valid());
    }

    #[test]
    fn round_up_boundary_cases() {
        let config = HeapConfig::new();
        for (requested, expected) in [(1, 16), (15, 16), (16, 16), (17, 32), (31, 32), (32, 32)] {
            assert_eq!(config.round_up(requested), expected);
        }
    }

    #[test]
    fn round_up_respects_custom_alignment() {
        let config = HeapConfig {
            alignment: 32,
            header_words: 8,
        };
        assert!(config.is_valid());
        assert_eq!(config.round_up(1), 32);
        assert_eq!(config.round_up(33), 64);
    }

    #[test]
    fn invalid_configs_are_rejected() {
        // Non power-of-two alignment.
        let config = HeapConfig {
            alignment: 24,
            header_words: 6,
        };
        assert!(!config.is_valid());

        // Header shorter than the alignment unit.
        let config = HeapConfig {
            alignment: 16,
            header_words: 2,
        };
        assert!(!config.is_valid());

        // Zero-width header.
        let config = HeapConfig {
            alignment: 16,
            header_words: 0,
        };
        assert!(!config.is_valid());
    }
}
