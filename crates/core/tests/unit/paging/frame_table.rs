//! Frame Table Tests.
//!
//! Verifies hit/miss resolution, free-frame allocation, eviction through the configured
//! policy, and fault/writeback accounting. Tables are driven directly, without the
//! simulator.

use pretty_assertions::assert_eq;
use vmsim_core::SimError;
use vmsim_core::common::{AccessKind, PageNumber};
use vmsim_core::config::{Config, EvictionPolicy};
use vmsim_core::paging::FrameTable;
use vmsim_core::paging::future::FutureAccessIndex;

use crate::common::{OFFSET_BITS, access, init_tracing, loads, records, replay_outcomes, resident};

// ══════════════════════════════════════════════════════════
// 1. Construction
// ══════════════════════════════════════════════════════════

#[test]
fn new_table_is_empty() {
    let table = FrameTable::new(4, OFFSET_BITS, EvictionPolicy::Lru, None).unwrap();
    assert_eq!(table.capacity(), 4);
    assert_eq!(table.occupied(), 0);
    assert!(!table.is_full());
    assert_eq!(table.page_faults(), 0);
    assert_eq!(table.writes_to_disk(), 0);
    assert_eq!(table.policy(), EvictionPolicy::Lru);
    assert_eq!(table.offset_bits(), OFFSET_BITS);
}

#[test]
fn opt_without_index_is_rejected() {
    let err = FrameTable::new(2, OFFSET_BITS, EvictionPolicy::Opt, None).unwrap_err();
    assert!(matches!(err, SimError::MissingFutureIndex));
}

/// Non-OPT policies ignore an index if one is supplied.
#[test]
fn index_is_optional_for_other_policies() {
    let future = FutureAccessIndex::default();
    let table = FrameTable::new(2, OFFSET_BITS, EvictionPolicy::Second, Some(&future)).unwrap();
    assert_eq!(table.policy(), EvictionPolicy::Second);
}

#[test]
fn zero_frames_is_rejected() {
    let err = FrameTable::from_config(&Config::new(0, EvictionPolicy::Lru), None).unwrap_err();
    assert!(matches!(err, SimError::InvalidConfig(_)));
}

#[test]
fn direct_constructor_validates_geometry() {
    for (frames, offset_bits) in [(0, OFFSET_BITS), (4, 64), (4, 70)] {
        let err = FrameTable::new(frames, offset_bits, EvictionPolicy::Lru, None).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(_)), "got {err}");
    }
    let table = FrameTable::new(3, 63, EvictionPolicy::Second, None).unwrap();
    assert_eq!(table.capacity(), 3);
    assert_eq!(table.offset_bits(), 63);
    assert_eq!(table.policy(), EvictionPolicy::Second);
}

#[test]
fn both_constructors_build_the_same_table() {
    let mut config = Config::new(5, EvictionPolicy::Lru);
    config.offset_bits = 10;
    let from_config = FrameTable::from_config(&config, None).unwrap();
    let direct = FrameTable::new(5, 10, EvictionPolicy::Lru, None).unwrap();
    assert_eq!(from_config.frames(), direct.frames());
    assert_eq!(from_config.offset_bits(), direct.offset_bits());
    assert_eq!(from_config.policy(), direct.policy());
}

// ══════════════════════════════════════════════════════════
// 2. Hits and Misses
// ══════════════════════════════════════════════════════════

#[test]
fn cold_access_faults_and_fills_first_free_frame() {
    let mut table = FrameTable::new(3, OFFSET_BITS, EvictionPolicy::Lru, None).unwrap();
    assert!(!access(&mut table, AccessKind::Load, 0x5123, 0));
    assert_eq!(table.page_faults(), 1);
    assert_eq!(resident(&table), [Some(5), None, None]);
    assert!(table.is_resident(PageNumber(5)));
}

/// Any address in a resident page hits and refreshes recency and the clock bit.
#[test]
fn access_within_resident_page_hits() {
    let mut table = FrameTable::new(2, OFFSET_BITS, EvictionPolicy::Lru, None).unwrap();
    assert!(!access(&mut table, AccessKind::Load, 0x1000, 0));
    assert!(access(&mut table, AccessKind::Store, 0x1ffc, 1));

    let frame = &table.frames()[0];
    assert_eq!(table.page_faults(), 1);
    assert_eq!(frame.last_access(), 1);
    assert!(frame.is_dirty());
    assert!(frame.has_second_chance());
    assert_eq!(frame.access_count(), 1);
}

#[test]
fn faulting_page_starts_without_clock_bit() {
    let mut table = FrameTable::new(2, OFFSET_BITS, EvictionPolicy::Second, None).unwrap();
    assert!(!access(&mut table, AccessKind::Load, 0x1000, 0));
    assert!(!table.frames()[0].has_second_chance());
}

#[test]
fn no_eviction_until_table_is_full() {
    let mut table = FrameTable::new(3, OFFSET_BITS, EvictionPolicy::Lru, None).unwrap();
    let outcomes = replay_outcomes(&mut table, &loads(&[1, 2, 1, 3]));
    assert_eq!(outcomes, [false, false, true, false]);
    assert!(table.is_full());
    assert_eq!(resident(&table), [Some(1), Some(2), Some(3)]);
}

// ══════════════════════════════════════════════════════════
// 3. Eviction and Writebacks
// ══════════════════════════════════════════════════════════

/// The freed frame is reused in place, so other frames keep their positions.
#[test]
fn evicted_frame_is_refilled_in_place() {
    init_tracing();
    let mut table = FrameTable::new(3, OFFSET_BITS, EvictionPolicy::Lru, None).unwrap();
    let _ = replay_outcomes(&mut table, &loads(&[1, 2, 3, 1, 4]));
    // LRU victim at index 4 is page 2 (frame 1).
    assert_eq!(resident(&table), [Some(1), Some(4), Some(3)]);
    assert_eq!(table.page_faults(), 4);
}

#[test]
fn dirty_victim_counts_one_writeback() {
    let trace = records("s 0x1000\nl 0x2000\nl 0x2000\ns 0x3000\nl 0x4000\n");
    let mut table = FrameTable::new(1, OFFSET_BITS, EvictionPolicy::Lru, None).unwrap();
    let outcomes = replay_outcomes(&mut table, &trace);

    assert_eq!(outcomes, [false, false, true, false, false]);
    assert_eq!(table.page_faults(), 4);
    assert_eq!(table.writes_to_disk(), 2);
}

/// A dirty page that stays resident is never written back.
#[test]
fn resident_dirty_page_is_not_counted() {
    let trace = records("s 0x1000\ns 0x1000\nl 0x2000\n");
    let mut table = FrameTable::new(2, OFFSET_BITS, EvictionPolicy::Lru, None).unwrap();
    let _ = replay_outcomes(&mut table, &trace);
    assert_eq!(table.writes_to_disk(), 0);
    assert!(table.frames()[0].is_dirty());
}

/// A page written, evicted, and reloaded comes back clean.
#[test]
fn reloaded_page_is_clean() {
    let trace = records("s 0x1000\nl 0x2000\nl 0x1000\nl 0x2000\n");
    let mut table = FrameTable::new(1, OFFSET_BITS, EvictionPolicy::Lru, None).unwrap();
    let _ = replay_outcomes(&mut table, &trace);
    assert_eq!(table.page_faults(), 4);
    assert_eq!(table.writes_to_disk(), 1);
    assert!(!table.frames()[0].is_dirty());
}

#[test]
fn opt_table_uses_shared_index() {
    let trace = loads(&[1, 2, 3, 1]);
    let future = FutureAccessIndex::build(&trace, OFFSET_BITS);
    let mut table = FrameTable::new(2, OFFSET_BITS, EvictionPolicy::Opt, Some(&future)).unwrap();
    let outcomes = replay_outcomes(&mut table, &trace);
    assert_eq!(outcomes, [false, false, false, true]);
    assert_eq!(resident(&table), [Some(1), Some(3)]);
}

/// Page numbers depend on the configured offset width.
#[test]
fn offset_width_controls_page_granularity() {
    let trace = records("l 0x0\nl 0x10\nl 0x20\n");

    let mut coarse = FrameTable::new(1, 8, EvictionPolicy::Lru, None).unwrap();
    let _ = replay_outcomes(&mut coarse, &trace);
    assert_eq!(coarse.page_faults(), 1);

    let mut fine = FrameTable::new(1, 4, EvictionPolicy::Lru, None).unwrap();
    let _ = replay_outcomes(&mut fine, &trace);
    assert_eq!(fine.page_faults(), 3);
}
