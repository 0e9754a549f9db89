//! The block record: header and payload held together in one region.
//!
//! A [`Block`] wraps a single [`RawRegion`] of `header_size + rounded`
//! bytes. The first `header_size` bytes are the hidden header; the rest
//! is the caller-visible payload. The header stores the rounded payload
//! size as a little-endian `u32` in its first word, written once at
//! allocation and read once at release. The remaining header words stay
//! zero (the raw layer zero-fills every region).

use crate::raw::RawRegion;

/// Width of the header word that carries the rounded size.
pub(crate) const HEADER_WORD: usize = std::mem::size_of::<u32>();

/// Write `rounded` into the first word of `header`.
pub(crate) fn encode_header(header: &mut [u8], rounded: u32) {
    header[..HEADER_WORD].copy_from_slice(&rounded.to_le_bytes());
}

/// Read the rounded size back out of the first word of `header`.
pub(crate) fn decode_header(header: &[u8]) -> u32 {
    let mut word = [0u8; HEADER_WORD];
    word.copy_from_slice(&header[..HEADER_WORD]);
    u32::from_le_bytes(word)
}

/// A live allocation: one owned region, split into header and payload.
pub(crate) struct Block {
    region: RawRegion,
    header_size: usize,
}

impl Block {
    /// Take ownership of a freshly allocated region and stamp the
    /// rounded payload size into its header.
    ///
    /// The region must be exactly `header_size + rounded` bytes; the
    /// sized layer guarantees this by construction.
    pub(crate) fn new(mut region: RawRegion, header_size: usize, rounded: u32) -> Self {
        debug_assert_eq!(region.len(), header_size + rounded as usize);
        encode_header(&mut region.as_mut_slice()[..header_size], rounded);
        Self {
            region,
            header_size,
        }
    }

    /// The rounded payload size recorded in the header.
    pub(crate) fn rounded_len(&self) -> u32 {
        decode_header(&self.region.as_slice()[..self.header_size])
    }

    /// The caller-visible payload bytes.
    pub(crate) fn payload(&self) -> &[u8] {
        &self.region.as_slice()[self.header_size..]
    }

    /// The caller-visible payload bytes, mutably. Writes here can never
    /// touch the header: the slice starts after it.
    pub(crate) fn payload_mut(&mut self) -> &mut [u8] {
        &mut self.region.as_mut_slice()[self.header_size..]
    }

    /// Give the whole region back for release to the raw layer.
    pub(crate) fn into_region(self) -> RawRegion {
        self.region
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RawHeap;

    fn region_of(len: isize) -> RawRegion {
        RawHeap::new(16).allocate(len).unwrap()
    }

    #[test]
    fn header_round_trips_the_rounded_size() {
        let mut header = [0u8; 16];
        encode_header(&mut header, 1008);
        assert_eq!(decode_header(&header), 1008);
        // Only the first word carries data.
        assert!(header[HEADER_WORD..].iter().all(|&b| b == 0));
    }

    #[test]
    fn new_stamps_the_header() {
        let block = Block::new(region_of(32), 16, 16);
        assert_eq!(block.rounded_len(), 16);
    }

    #[test]
    fn payload_excludes_the_header() {
        let mut block = Block::new(region_of(48), 16, 32);
        assert_eq!(block.payload().len(), 32);

        block.payload_mut().fill(0xFF);
        // Sentinel writes across the whole payload leave the header intact.
        assert_eq!(block.rounded_len(), 32);
    }

    #[test]
    fn into_region_returns_the_full_region() {
        let block = Block::new(region_of(48), 16, 32);
        assert_eq!(block.into_region().len(), 48);
    }
}
