//! Future-access index for Belady's optimal policy.
//!
//! Built in one forward pass over the trace before replay starts, then only read. Each page
//! maps to the strictly ascending list of trace positions that reference it, so the next use
//! after any position is a binary search away.
//!
//! # Performance
//!
//! - **Construction:** O(N) for a trace of N records.
//! - **`next_use_after()`:** O(log k) for a page referenced k times.
//! - **Space:** O(N).

use std::collections::HashMap;

use crate::common::{PageNumber, SimError, SimResult, Timestamp, TraceRecord};

/// Page number to ascending reference positions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FutureAccessIndex {
    positions: HashMap<PageNumber, Vec<Timestamp>>,
}

impl FutureAccessIndex {
    /// Builds the index from raw addresses, assigning positions in iteration order.
    ///
    /// # Arguments
    ///
    /// * `addrs` - Addresses in replay order.
    /// * `offset_bits` - Page size exponent used to decompose each address.
    pub fn from_addrs<I>(addrs: I, offset_bits: u32) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let mut positions: HashMap<PageNumber, Vec<Timestamp>> = HashMap::new();
        for (index, addr) in addrs.into_iter().enumerate() {
            positions
                .entry(PageNumber::from_addr(addr, offset_bits))
                .or_default()
                .push(index);
        }
        Self { positions }
    }

    /// Builds the index from parsed trace records.
    pub fn build(records: &[TraceRecord], offset_bits: u32) -> Self {
        Self::from_addrs(records.iter().map(|r| r.addr), offset_bits)
    }

    /// Number of distinct pages referenced by the trace.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the trace referenced no pages.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// All positions referencing `page`, ascending.
    pub fn positions(&self, page: PageNumber) -> Option<&[Timestamp]> {
        self.positions.get(&page).map(Vec::as_slice)
    }

    /// Last position referencing `page`.
    pub fn last_use(&self, page: PageNumber) -> Option<Timestamp> {
        self.positions(page).and_then(<[Timestamp]>::last).copied()
    }

    /// Returns `true` if `page` is referenced at no position after `index`.
    ///
    /// Pages the trace never mentions are treated as never used again.
    pub fn is_never_used_after(&self, page: PageNumber, index: Timestamp) -> bool {
        self.last_use(page).is_none_or(|last| last <= index)
    }

    /// First position strictly greater than `index` that references `page`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::FutureLookupUnreachable`] if no such position exists. Callers are
    /// expected to have filtered those pages out with [`Self::is_never_used_after`].
    pub fn next_use_after(&self, page: PageNumber, index: Timestamp) -> SimResult<Timestamp> {
        let unreachable = || SimError::FutureLookupUnreachable { page, index };
        let positions = self.positions(page).ok_or_else(unreachable)?;
        positions
            .get(positions.partition_point(|&pos| pos <= index))
            .copied()
            .ok_or_else(unreachable)
    }
}
