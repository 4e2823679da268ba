//! Page geometry constants.

/// Default number of offset bits (4 KiB pages).
pub const DEFAULT_OFFSET_BITS: u32 = 12;

/// Page size in bytes for the default offset width.
pub const DEFAULT_PAGE_SIZE: u64 = 1 << DEFAULT_OFFSET_BITS;

/// Upper bound (exclusive) on the offset width; addresses are 64-bit.
pub const MAX_OFFSET_BITS: u32 = u64::BITS;
