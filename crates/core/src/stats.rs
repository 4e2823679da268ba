//! Simulation statistics collection and reporting.
//!
//! This module summarises one replay. It provides:
//! 1. **Counters:** Total accesses, page faults, and writes to disk.
//! 2. **Derived metrics:** Hits and fault rate.
//! 3. **Reporting:** The plain-text report and a JSON form for scripting.

use serde::Serialize;

use crate::common::SimResult;
use crate::config::EvictionPolicy;
use crate::paging::FrameTable;

/// Statistics of a single simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Replacement policy used.
    pub policy: EvictionPolicy,
    /// Number of physical frames.
    pub frames: usize,
    /// Number of trace records replayed.
    pub memory_accesses: u64,
    /// Accesses whose page was not resident.
    pub page_faults: u64,
    /// Dirty pages written back on eviction.
    pub writes_to_disk: u64,
}

impl SimStats {
    /// Captures the final counters of `table` after `memory_accesses` records were replayed.
    pub fn from_table(table: &FrameTable<'_>, memory_accesses: u64) -> Self {
        Self {
            policy: table.policy(),
            frames: table.capacity(),
            memory_accesses,
            page_faults: table.page_faults(),
            writes_to_disk: table.writes_to_disk(),
        }
    }

    /// Accesses that found their page resident.
    pub const fn hits(&self) -> u64 {
        self.memory_accesses.saturating_sub(self.page_faults)
    }

    /// Fraction of accesses that faulted, or 0 for an empty trace.
    pub fn fault_rate(&self) -> f64 {
        if self.memory_accesses == 0 {
            0.0
        } else {
            self.page_faults as f64 / self.memory_accesses as f64
        }
    }

    /// Formats the plain-text report.
    pub fn report(&self) -> String {
        format!(
            "Algorithm: {}\n\
             Number of frames: {}\n\
             Total memory accesses: {}\n\
             Total page faults: {}\n\
             Total writes to disk: {}",
            self.policy.name().to_uppercase(),
            self.frames,
            self.memory_accesses,
            self.page_faults,
            self.writes_to_disk
        )
    }

    /// Prints the plain-text report to stdout.
    pub fn print(&self) {
        println!("{}", self.report());
    }

    /// Serializes the statistics as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SimError::Json`] if serialization fails.
    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
