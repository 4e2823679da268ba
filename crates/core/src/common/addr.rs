//! Page number type.
//!
//! This module defines a strong type for page numbers so that raw addresses and page
//! numbers cannot be mixed up. It provides the following:
//! 1. **Type Safety:** Frame lookups and the future-access index are keyed by `PageNumber`.
//! 2. **Address Decomposition:** Splits a raw address into its page number for a given
//!    offset width.

use std::fmt;

use serde::Serialize;

/// A virtual page number: an address with its page-offset bits shifted out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PageNumber(pub u64);

impl PageNumber {
    /// Decomposes a raw address into its page number.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw address from the trace.
    /// * `offset_bits` - Number of low-order offset bits (the page size exponent).
    ///   Must be below 64; `Config::validate` enforces this before any replay.
    ///
    /// # Returns
    ///
    /// The page containing `addr`.
    #[inline(always)]
    pub const fn from_addr(addr: u64, offset_bits: u32) -> Self {
        Self(addr >> offset_bits)
    }

    /// Returns the raw page number.
    #[inline(always)]
    pub const fn val(self) -> u64 {
        self.0
    }

    /// Returns the first address of this page for the given offset width.
    pub const fn base_addr(self, offset_bits: u32) -> u64 {
        self.0 << offset_bits
    }

    /// Returns `true` if `addr` falls inside this page.
    pub const fn contains(self, addr: u64, offset_bits: u32) -> bool {
        Self::from_addr(addr, offset_bits).0 == self.0
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
