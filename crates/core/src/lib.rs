//! Trace-driven virtual memory simulator library.
//!
//! This crate replays a trace of loads and stores against a fixed set of page frames and
//! counts page faults and dirty writebacks. It is organised as follows:
//! 1. **Common:** Page numbers, access kinds, constants, and the crate error type.
//! 2. **Paging:** Frame entries, the frame table, the future-access index, and the
//!    replacement policies (OPT, LRU, second chance).
//! 3. **Simulation:** Trace loading and the replay driver.
//! 4. **Configuration and statistics:** Run parameters and the final report.

/// Common types and constants (page numbers, access kinds, errors).
pub mod common;
/// Simulator configuration (frame count, policy, page size, trace path).
pub mod config;
/// Frame table, frame entries, future-access index, and replacement policies.
pub mod paging;
/// Trace loading and the replay driver.
pub mod sim;
/// Per-run statistics and reporting.
pub mod stats;

/// Root configuration type; use `Config::new` or deserialize from JSON.
pub use crate::config::{Config, EvictionPolicy};
/// Error type shared by every fallible operation in the crate.
pub use crate::common::{SimError, SimResult};
/// Replay driver; construct with `Simulator::new` or `Simulator::from_config`.
pub use crate::sim::Simulator;
/// Counters produced by a single run.
pub use crate::stats::SimStats;
