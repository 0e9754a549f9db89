//! The sized allocator: length-prefixed blocks behind opaque handles.
//!
//! [`SizedHeap`] layers size bookkeeping on top of [`RawHeap`]. Every
//! allocation reserves one region of `header + rounded payload` bytes,
//! stamps the rounded size into the header, and hands back a
//! [`BlockHandle`]. Release never takes a size: it recovers the size
//! from the header, which is the point of the exercise.
//!
//! Per block the lifecycle is `Unallocated → Allocated → Released`,
//! with `Released` terminal. The live-block registry plus the per-heap
//! instance tag make release-after-release and release-of-foreign-handle
//! deterministic errors rather than undefined behavior.

use indexmap::IndexMap;

use tagmem_core::{AllocError, BlockId, HeapInstanceId};

use crate::block::Block;
use crate::config::HeapConfig;
use crate::handle::BlockHandle;
use crate::raw::RawHeap;

/// Length-prefixed sized allocator over a raw heap.
///
/// Single-threaded by construction: every mutating operation takes
/// `&mut self`, so the borrow checker supplies the one-logical-owner
/// discipline. No internal locking.
pub struct SizedHeap {
    config: HeapConfig,
    instance: HeapInstanceId,
    raw: RawHeap,
    blocks: IndexMap<BlockId, Block>,
    next_id: u64,
}

impl SizedHeap {
    /// Create a heap with the default configuration (16-byte alignment,
    /// 16-byte header).
    pub fn new() -> Self {
        Self::with_config(HeapConfig::default())
    }

    /// Create a heap with an explicit configuration.
    ///
    /// # Panics
    ///
    /// Panics if the config is invalid — see [`HeapConfig::is_valid`].
    pub fn with_config(config: HeapConfig) -> Self {
        assert!(
            config.is_valid(),
            "invalid heap config: alignment must be a nonzero power of two \
             and the header a nonzero multiple of it",
        );
        let raw = RawHeap::new(config.alignment);
        Self {
            config,
            instance: HeapInstanceId::next(),
            raw,
            blocks: IndexMap::new(),
            next_id: 0,
        }
    }

    /// Allocate a block whose payload holds at least `requested` bytes.
    ///
    /// The payload actually reserved is `requested` rounded up to the
    /// next alignment multiple; the handle's [`len`](BlockHandle::len)
    /// reports that rounded size and the caller may use all of it. The
    /// payload starts out zero-filled.
    ///
    /// Fails with [`AllocError::InvalidSize`] when `requested <= 0` or
    /// when the rounded size would not fit in the header word.
    pub fn allocate(&mut self, requested: isize) -> Result<BlockHandle, AllocError> {
        if requested <= 0 {
            return Err(AllocError::InvalidSize { requested });
        }

        let rounded = self.config.round_up(requested as usize);
        let Ok(rounded_word) = u32::try_from(rounded) else {
            return Err(AllocError::InvalidSize { requested });
        };
        let total = self.config.header_size() + rounded;
        let Ok(total_size) = isize::try_from(total) else {
            return Err(AllocError::InvalidSize { requested });
        };

        let region = self.raw.allocate(total_size)?;
        let block = Block::new(region, self.config.header_size(), rounded_word);

        let id = BlockId(self.next_id);
        self.next_id += 1;
        self.blocks.insert(id, block);
        Ok(BlockHandle::new(self.instance, id, rounded_word))
    }

    /// Release a block, returning the total bytes handed back to the
    /// host (header plus rounded payload).
    ///
    /// The release size is read from the block's header, never supplied
    /// by the caller. `None` models the null pointer and fails with
    /// [`AllocError::NullRelease`]; a handle from another heap fails
    /// with [`AllocError::ForeignBlock`]; a handle whose block was
    /// already released fails with [`AllocError::BlockReleased`].
    /// Release is terminal — the handle is dead for all future use.
    pub fn release(&mut self, handle: Option<BlockHandle>) -> Result<usize, AllocError> {
        let handle = handle.ok_or(AllocError::NullRelease)?;
        if handle.heap != self.instance {
            return Err(AllocError::ForeignBlock { block: handle.id });
        }
        let Some(block) = self.blocks.swap_remove(&handle.id) else {
            return Err(self.missing_block_error(handle.id));
        };

        let rounded = block.rounded_len() as usize;
        let total = self.config.header_size() + rounded;
        let mut region = Some(block.into_region());
        self.raw.release(total as isize, &mut region)?;
        Ok(total)
    }

    /// The live payload bytes of a block.
    pub fn payload(&self, handle: BlockHandle) -> Result<&[u8], AllocError> {
        Ok(self.lookup(handle)?.payload())
    }

    /// The live payload bytes of a block, mutably. The slice starts
    /// after the header, so payload writes can never corrupt it.
    pub fn payload_mut(&mut self, handle: BlockHandle) -> Result<&mut [u8], AllocError> {
        if handle.heap != self.instance {
            return Err(AllocError::ForeignBlock { block: handle.id });
        }
        let missing = self.missing_block_error(handle.id);
        match self.blocks.get_mut(&handle.id) {
            Some(block) => Ok(block.payload_mut()),
            None => Err(missing),
        }
    }

    /// The rounded size recorded in a block's header.
    ///
    /// For any live handle this equals the handle's
    /// [`len`](BlockHandle::len) — reading it back is how tests observe
    /// that payload writes left the header intact.
    pub fn header(&self, handle: BlockHandle) -> Result<usize, AllocError> {
        Ok(self.lookup(handle)?.rounded_len() as usize)
    }

    /// Number of blocks currently allocated and not yet released.
    pub fn live_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Total bytes (headers included) currently held from the host.
    pub fn outstanding_bytes(&self) -> usize {
        self.raw.outstanding_bytes()
    }

    /// The alignment boundary in force.
    pub fn alignment(&self) -> usize {
        self.config.alignment
    }

    /// The header size in bytes.
    pub fn header_size(&self) -> usize {
        self.config.header_size()
    }

    /// This heap's process-unique instance tag.
    pub fn instance_id(&self) -> HeapInstanceId {
        self.instance
    }

    fn lookup(&self, handle: BlockHandle) -> Result<&Block, AllocError> {
        if handle.heap != self.instance {
            return Err(AllocError::ForeignBlock { block: handle.id });
        }
        match self.blocks.get(&handle.id) {
            Some(block) => Ok(block),
            None => Err(self.missing_block_error(handle.id)),
        }
    }

    /// Classify a handle whose block is not in the registry: ids below
    /// the sequential counter were issued here and must have been
    /// released; ids at or above it were never issued by this heap.
    fn missing_block_error(&self, id: BlockId) -> AllocError {
        if id.0 < self.next_id {
            AllocError::BlockReleased { block: id }
        } else {
            AllocError::ForeignBlock { block: id }
        }
    }
}

impl Default for SizedHeap {
    fn default() -> Self {
        Self::new()
    }
}
