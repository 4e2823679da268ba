//! Trace loading and replay.
//!
//! Provides the trace file parser and the driver that feeds records into a frame table.

/// Trace file parsing.
pub mod loader;
/// Replay driver.
pub mod simulator;

pub use loader::{load_trace, parse_record, parse_trace};
pub use simulator::{Simulator, replay};
