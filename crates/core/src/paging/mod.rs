//! Frame Table.
//!
//! This module models physical memory as a fixed array of page frames. It resolves each
//! traced access to a hit or a page fault, evicts through the configured replacement policy
//! when memory is full, and counts dirty writebacks. Counters belong to one table and one
//! run; comparing policies means building one table per policy.

/// Physical frame state.
pub mod frame;

/// Future-access index used by the optimal policy.
pub mod future;

/// Page replacement policy implementations (OPT, LRU, second chance).
pub mod policies;

use self::frame::FrameEntry;
use self::future::FutureAccessIndex;
use self::policies::{Evictor, ReplacementPolicy};
use crate::common::{AccessKind, PageNumber, SimError, SimResult, Timestamp};
use crate::config::{Config, EvictionPolicy, validate_geometry};

/// Fixed-size table of page frames driven by a replacement policy.
#[derive(Debug)]
pub struct FrameTable<'a> {
    frames: Vec<FrameEntry>,
    offset_bits: u32,
    evictor: Evictor<'a>,
    page_faults: u64,
    writes_to_disk: u64,
}

impl<'a> FrameTable<'a> {
    /// Creates a table of `frames` free frames.
    ///
    /// # Arguments
    ///
    /// * `frames` - Number of physical frames; fixed for the table's lifetime.
    /// * `offset_bits` - Page size exponent used to decompose addresses.
    /// * `policy` - Replacement policy.
    /// * `future` - Future-access index; required for OPT, ignored otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] for a zero frame count or an offset width of 64
    /// or more, and [`SimError::MissingFutureIndex`] for OPT without an index.
    pub fn new(
        frames: usize,
        offset_bits: u32,
        policy: EvictionPolicy,
        future: Option<&'a FutureAccessIndex>,
    ) -> SimResult<Self> {
        validate_geometry(frames, offset_bits)?;
        Ok(Self {
            frames: vec![FrameEntry::new(); frames],
            offset_bits,
            evictor: Evictor::new(policy, future)?,
            page_faults: 0,
            writes_to_disk: 0,
        })
    }

    /// Creates a table from a run configuration.
    ///
    /// # Errors
    ///
    /// As [`FrameTable::new`].
    pub fn from_config(config: &Config, future: Option<&'a FutureAccessIndex>) -> SimResult<Self> {
        Self::new(config.frames, config.offset_bits, config.policy, future)
    }

    /// Resolves one traced access.
    ///
    /// On a hit the frame's recency and clock bit are refreshed. On a miss a page fault is
    /// counted, a victim is evicted if memory is full, and the page is loaded into the freed
    /// frame.
    ///
    /// # Arguments
    ///
    /// * `addr` - Raw address accessed.
    /// * `kind` - Load or store.
    /// * `index` - Trace position of this access.
    ///
    /// # Returns
    ///
    /// `true` on a hit, `false` on a page fault.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the policy's bookkeeping is inconsistent.
    pub fn query(&mut self, addr: u64, kind: AccessKind, index: Timestamp) -> SimResult<bool> {
        let page = PageNumber::from_addr(addr, self.offset_bits);

        if let Some(pos) = self.lookup(page) {
            let frame = &mut self.frames[pos];
            frame.record_access(kind, index);
            frame.grant_second_chance();
            return Ok(true);
        }

        self.page_faults += 1;
        if self.is_full() {
            self.evict(index)?;
        }
        let pos = self.load(page)?;
        self.frames[pos].record_access(kind, index);
        Ok(false)
    }

    /// Frame holding `page`, if resident.
    fn lookup(&self, page: PageNumber) -> Option<usize> {
        self.frames.iter().position(|f| f.holds(page))
    }

    /// Asks the policy for a victim and clears it.
    fn evict(&mut self, index: Timestamp) -> SimResult<()> {
        let victim = self.evictor.victim(&mut self.frames, index)?;
        if let Some(frame) = self.frames.get(victim) {
            tracing::trace!(
                index,
                frame = victim,
                page = ?frame.page(),
                dirty = frame.is_dirty(),
                "evicting"
            );
        }
        self.clear_entry(victim)
    }

    /// Places `page` in the first free frame.
    fn load(&mut self, page: PageNumber) -> SimResult<usize> {
        let pos = self
            .frames
            .iter()
            .position(FrameEntry::is_free)
            .ok_or(SimError::InternalInvariantViolation(
                "no free frame available after eviction",
            ))?;
        self.frames[pos].occupy(page);
        Ok(pos)
    }

    /// Drops the page in frame `pos`, counting a writeback if it is dirty.
    fn clear_entry(&mut self, pos: usize) -> SimResult<()> {
        let frame = self
            .frames
            .get_mut(pos)
            .ok_or(SimError::InternalInvariantViolation(
                "policy selected a frame outside the table",
            ))?;
        if frame.is_dirty() {
            self.writes_to_disk += 1;
        }
        frame.clear();
        Ok(())
    }

    /// Returns `true` if every frame holds a page.
    pub fn is_full(&self) -> bool {
        self.frames.iter().all(|f| !f.is_free())
    }

    /// Returns `true` if `page` is resident.
    pub fn is_resident(&self, page: PageNumber) -> bool {
        self.lookup(page).is_some()
    }

    /// All frames, in table order.
    pub fn frames(&self) -> &[FrameEntry] {
        &self.frames
    }

    /// Number of frames (the configured capacity).
    pub const fn capacity(&self) -> usize {
        self.frames.len()
    }

    /// Number of frames currently holding a page.
    pub fn occupied(&self) -> usize {
        self.frames.iter().filter(|f| !f.is_free()).count()
    }

    /// Page faults counted so far.
    pub const fn page_faults(&self) -> u64 {
        self.page_faults
    }

    /// Dirty evictions counted so far.
    pub const fn writes_to_disk(&self) -> u64 {
        self.writes_to_disk
    }

    /// Offset width used to decompose addresses.
    pub const fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    /// Replacement policy driving this table.
    pub const fn policy(&self) -> EvictionPolicy {
        self.evictor.policy()
    }
}
