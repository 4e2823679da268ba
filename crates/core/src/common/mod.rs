//! Common types shared by the paging core and the simulation driver.
//!
//! This module provides:
//! 1. **Page numbers:** Address decomposition into page numbers.
//! 2. **Constants:** Default page geometry.
//! 3. **Memory access:** Load/store classification and trace positions.
//! 4. **Error handling:** The crate-wide error enum.

/// Page number type and address decomposition.
pub mod addr;

/// Page geometry constants.
pub mod constants;

/// Memory access kinds and trace records.
pub mod data;

/// Error types.
pub mod error;

pub use addr::PageNumber;
pub use constants::{DEFAULT_OFFSET_BITS, MAX_OFFSET_BITS};
pub use data::{AccessKind, Timestamp, TraceRecord};
pub use error::{SimError, SimResult};
