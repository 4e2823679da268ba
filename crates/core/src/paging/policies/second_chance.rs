//! Second Chance (Clock) Replacement Policy.
//!
//! Frames are arranged in a circle with a hand that sweeps round-robin. A hit sets the
//! frame's clock bit; when the hand reaches a frame with the bit set it clears the bit and
//! moves on, so the frame survives one more sweep. The first frame found with the bit clear
//! is the victim. Newly loaded pages start with the bit clear.
//!
//! # Performance
//!
//! - **Time Complexity:** `victim()` is O(F) worst case (one full sweep clearing every bit).
//! - **Space Complexity:** O(1) (a single hand position).
//! - **Hardware Cost:** Minimal - one reference bit per frame plus the hand.

use super::ReplacementPolicy;
use crate::common::{SimError, SimResult, Timestamp};
use crate::paging::frame::FrameEntry;

/// Clock policy state.
#[derive(Clone, Copy, Debug, Default)]
pub struct SecondChancePolicy {
    /// Next frame the hand will examine. Starts at frame 0.
    hand: usize,
}

impl SecondChancePolicy {
    /// Creates a new clock policy with the hand at frame 0.
    pub const fn new() -> Self {
        Self { hand: 0 }
    }

    /// Frame the next sweep will start from.
    pub const fn hand(&self) -> usize {
        self.hand
    }
}

impl ReplacementPolicy for SecondChancePolicy {
    fn victim(&mut self, frames: &mut [FrameEntry], _index: Timestamp) -> SimResult<usize> {
        let len = frames.len();
        if len == 0 {
            return Err(SimError::InternalInvariantViolation(
                "eviction requested from an empty frame table",
            ));
        }
        loop {
            let pos = self.hand % len;
            self.hand = (pos + 1) % len;
            let frame = &mut frames[pos];
            if frame.has_second_chance() {
                frame.revoke_second_chance();
            } else {
                return Ok(pos);
            }
        }
    }
}
