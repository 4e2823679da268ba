//! Optimal (Belady) Replacement Policy.
//!
//! Evicts the resident page whose next use lies furthest in the future. Pages that are
//! never referenced again are preferred outright; among those the least recently used goes
//! first. Knowledge of the future comes from a [`FutureAccessIndex`] built before replay.
//!
//! # Performance
//!
//! - **Time Complexity:** `victim()` is O(F log k) where F is the number of frames and k
//!   the number of references to a page.
//! - **Space Complexity:** O(1) beyond the shared index.
//! - OPT gives the lower bound on page faults for any trace, so it serves as the oracle
//!   the other policies are compared against.

use super::ReplacementPolicy;
use super::lru::least_recently_used;
use crate::common::{SimError, SimResult, Timestamp};
use crate::paging::frame::FrameEntry;
use crate::paging::future::FutureAccessIndex;

/// OPT policy state: a shared borrow of the future-access index.
#[derive(Clone, Copy, Debug)]
pub struct OptPolicy<'a> {
    future: &'a FutureAccessIndex,
}

impl<'a> OptPolicy<'a> {
    /// Creates an OPT policy reading from `future`.
    pub const fn new(future: &'a FutureAccessIndex) -> Self {
        Self { future }
    }
}

impl ReplacementPolicy for OptPolicy<'_> {
    fn victim(&mut self, frames: &mut [FrameEntry], index: Timestamp) -> SimResult<usize> {
        let future = self.future;
        let frames: &[FrameEntry] = frames;
        let resident = || {
            frames
                .iter()
                .enumerate()
                .filter_map(|(pos, f)| f.page().map(|page| (pos, f, page)))
        };

        let dead = resident()
            .filter(|&(_, _, page)| future.is_never_used_after(page, index))
            .map(|(pos, f, _)| (pos, f));
        if let Some(pos) = least_recently_used(dead) {
            return Ok(pos);
        }

        let mut furthest: Option<(usize, Timestamp)> = None;
        for (pos, _, page) in resident() {
            let next = future.next_use_after(page, index)?;
            if furthest.is_none_or(|(_, best)| next > best) {
                furthest = Some((pos, next));
            }
        }
        furthest
            .map(|(pos, _)| pos)
            .ok_or(SimError::InternalInvariantViolation(
                "eviction requested with no resident pages",
            ))
    }
}
