//! Least Recently Used (LRU) Replacement Policy.
//!
//! Evicts the resident page whose most recent access is oldest. Recency is read straight
//! from each frame's `last_access` timestamp, so the policy itself carries no state.
//!
//! # Performance
//!
//! - **Time Complexity:** `victim()` is O(F) where F is the number of frames.
//! - **Space Complexity:** O(1).
//! - **Best Case:** Workloads with strong temporal locality.
//! - **Worst Case:** Cyclic scans one page larger than memory (every access faults).

use super::ReplacementPolicy;
use crate::common::{SimError, SimResult, Timestamp};
use crate::paging::frame::FrameEntry;

/// LRU policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct LruPolicy;

impl LruPolicy {
    /// Creates a new LRU policy instance.
    pub const fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Returns the occupied frame with the smallest `last_access`.
    fn victim(&mut self, frames: &mut [FrameEntry], _index: Timestamp) -> SimResult<usize> {
        least_recently_used(frames.iter().enumerate().filter(|(_, f)| !f.is_free()))
            .ok_or(SimError::InternalInvariantViolation(
                "eviction requested with no resident pages",
            ))
    }
}

/// Picks the candidate with the oldest `last_access`; the first minimum wins ties.
pub(crate) fn least_recently_used<'f, I>(candidates: I) -> Option<usize>
where
    I: IntoIterator<Item = (usize, &'f FrameEntry)>,
{
    let mut oldest: Option<(usize, Timestamp)> = None;
    for (pos, frame) in candidates {
        let stamp = frame.last_access();
        if oldest.is_none_or(|(_, best)| stamp < best) {
            oldest = Some((pos, stamp));
        }
    }
    oldest.map(|(pos, _)| pos)
}
