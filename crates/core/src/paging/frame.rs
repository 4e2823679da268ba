//! Physical frame state.
//!
//! A `FrameEntry` cycles between free and occupied for the whole run. When free, every
//! field other than the clock bit is at its zero value.

use crate::common::{AccessKind, PageNumber, Timestamp};

/// State of one physical frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameEntry {
    page: Option<PageNumber>,
    dirty: bool,
    last_access: Timestamp,
    access_count: u64,
    second_chance: bool,
}

impl FrameEntry {
    /// Creates a free frame.
    pub const fn new() -> Self {
        Self {
            page: None,
            dirty: false,
            last_access: 0,
            access_count: 0,
            second_chance: false,
        }
    }

    /// Returns `true` if no page is resident.
    #[inline]
    pub const fn is_free(&self) -> bool {
        self.page.is_none()
    }

    /// Returns the resident page, if any.
    #[inline]
    pub const fn page(&self) -> Option<PageNumber> {
        self.page
    }

    /// Returns `true` if `page` is resident in this frame.
    #[inline]
    pub fn holds(&self, page: PageNumber) -> bool {
        self.page == Some(page)
    }

    /// Returns `true` if the resident page was stored to since it was loaded.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Trace position of the most recent access.
    pub const fn last_access(&self) -> Timestamp {
        self.last_access
    }

    /// Number of loads since the page was loaded. Stores are not counted.
    pub const fn access_count(&self) -> u64 {
        self.access_count
    }

    /// Returns `true` if the frame was touched since the clock hand last passed it.
    pub const fn has_second_chance(&self) -> bool {
        self.second_chance
    }

    /// Makes `page` resident. The frame must have been cleared first.
    pub const fn occupy(&mut self, page: PageNumber) {
        debug_assert!(self.is_free(), "occupying a frame that still holds a page");
        self.page = Some(page);
        self.second_chance = false;
    }

    /// Applies the effect of a load or store at trace position `index`.
    pub const fn record_access(&mut self, kind: AccessKind, index: Timestamp) {
        self.last_access = index;
        match kind {
            AccessKind::Load => self.access_count += 1,
            AccessKind::Store => self.dirty = true,
        }
    }

    /// Sets the clock bit. Called on every hit.
    pub const fn grant_second_chance(&mut self) {
        self.second_chance = true;
    }

    /// Clears the clock bit.
    pub const fn revoke_second_chance(&mut self) {
        self.second_chance = false;
    }

    /// Drops the resident page. The clock bit is left for the next `occupy` to reset.
    pub const fn clear(&mut self) {
        self.page = None;
        self.dirty = false;
        self.last_access = 0;
        self.access_count = 0;
    }
}
