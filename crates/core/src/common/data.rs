//! Memory Access Types.
//!
//! This module defines the classification of trace records used throughout the simulator:
//! 1. **Access Kind:** Loads leave a frame clean; stores mark it dirty.
//! 2. **Timestamps:** The 0-based replay position of a record.
//! 3. **Trace Records:** A parsed `(kind, address)` pair.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::SimError;

/// Position of a record in replay order. Doubles as the logical clock.
pub type Timestamp = usize;

/// Type of memory access recorded in a trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessKind {
    /// Data read (`l`). Updates recency and the access counter.
    Load,
    /// Data write (`s`). Updates recency and marks the frame dirty.
    Store,
}

impl AccessKind {
    /// Returns the single-letter trace mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Load => "l",
            Self::Store => "s",
        }
    }
}

impl FromStr for AccessKind {
    type Err = SimError;

    /// Parses a trace mnemonic. Only `l` and `s` are accepted.
    ///
    /// The returned error carries line 0; the trace loader replaces it with the real line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "l" => Ok(Self::Load),
            "s" => Ok(Self::Store),
            other => Err(SimError::InvalidAccessKind {
                kind: other.to_string(),
                line: 0,
            }),
        }
    }
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A single parsed trace line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceRecord {
    /// Load or store.
    pub kind: AccessKind,
    /// Raw (byte) address accessed.
    pub addr: u64,
}

impl TraceRecord {
    /// Creates a new trace record.
    pub const fn new(kind: AccessKind, addr: u64) -> Self {
        Self { kind, addr }
    }

    /// Shorthand for a load record.
    pub const fn load(addr: u64) -> Self {
        Self::new(AccessKind::Load, addr)
    }

    /// Shorthand for a store record.
    pub const fn store(addr: u64) -> Self {
        Self::new(AccessKind::Store, addr)
    }
}
