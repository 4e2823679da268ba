//! Page Replacement Policies.
//!
//! Implements the algorithms that pick a victim frame when a page fault occurs and every
//! frame is occupied.
//!
//! # Policies
//!
//! - `Opt`: Belady's optimal policy (needs the future-access index).
//! - `Lru`: Least Recently Used.
//! - `SecondChance`: Clock / second chance.
//!
//! Policies only select. Clearing the victim, counting writebacks, and loading the new page
//! are done by the frame table. The clock policy is the only one that touches frame state,
//! and only the clock bit.

/// Belady's optimal replacement policy.
pub mod opt;

/// Least Recently Used replacement policy.
pub mod lru;

/// Second chance (clock) replacement policy.
pub mod second_chance;

pub use lru::LruPolicy;
pub use opt::OptPolicy;
pub use second_chance::SecondChancePolicy;

use super::frame::FrameEntry;
use super::future::FutureAccessIndex;
use crate::common::{SimError, SimResult, Timestamp};
use crate::config::EvictionPolicy;

/// Trait for page replacement policies.
pub trait ReplacementPolicy {
    /// Selects the frame to evict.
    ///
    /// # Arguments
    ///
    /// * `frames` - The full frame array. Every frame is occupied when this is called.
    /// * `index` - Trace position of the access that faulted.
    ///
    /// # Returns
    ///
    /// The position of the victim frame within `frames`.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the frame or index state is inconsistent.
    fn victim(&mut self, frames: &mut [FrameEntry], index: Timestamp) -> SimResult<usize>;
}

/// Enum dispatch over the closed set of replacement policies.
#[derive(Debug)]
pub enum Evictor<'a> {
    /// Belady's optimal policy, borrowing the shared future-access index.
    Opt(OptPolicy<'a>),
    /// Least Recently Used.
    Lru(LruPolicy),
    /// Second chance (clock).
    SecondChance(SecondChancePolicy),
}

impl<'a> Evictor<'a> {
    /// Creates the policy state for `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MissingFutureIndex`] if `policy` is OPT and `future` is `None`.
    pub fn new(policy: EvictionPolicy, future: Option<&'a FutureAccessIndex>) -> SimResult<Self> {
        Ok(match policy {
            EvictionPolicy::Opt => Self::Opt(OptPolicy::new(
                future.ok_or(SimError::MissingFutureIndex)?,
            )),
            EvictionPolicy::Lru => Self::Lru(LruPolicy::new()),
            EvictionPolicy::Second => Self::SecondChance(SecondChancePolicy::new()),
        })
    }

    /// Returns the configured policy this evictor implements.
    pub const fn policy(&self) -> EvictionPolicy {
        match self {
            Self::Opt(_) => EvictionPolicy::Opt,
            Self::Lru(_) => EvictionPolicy::Lru,
            Self::SecondChance(_) => EvictionPolicy::Second,
        }
    }
}

impl ReplacementPolicy for Evictor<'_> {
    fn victim(&mut self, frames: &mut [FrameEntry], index: Timestamp) -> SimResult<usize> {
        match self {
            Self::Opt(p) => p.victim(frames, index),
            Self::Lru(p) => p.victim(frames, index),
            Self::SecondChance(p) => p.victim(frames, index),
        }
    }
}
