//! Property Tests.
//!
//! Randomised traces over a small page universe (so that pages recur and memory is under
//! pressure) checked against the counting invariants, determinism, occupancy bounds, and
//! Belady's optimality bound.

use std::collections::HashSet;

use proptest::prelude::*;
use vmsim_core::common::{PageNumber, TraceRecord};
use vmsim_core::config::EvictionPolicy;
use vmsim_core::paging::FrameTable;
use vmsim_core::paging::future::FutureAccessIndex;

use crate::common::{OFFSET_BITS, access, simulate};

/// Traces of up to 200 records over 12 pages with random in-page offsets.
fn trace_strategy() -> impl Strategy<Value = Vec<TraceRecord>> {
    prop::collection::vec((any::<bool>(), 0_u64..12, 0_u64..4096), 0..200).prop_map(|raw| {
        raw.into_iter()
            .map(|(store, page, offset)| {
                let addr = PageNumber(page).base_addr(OFFSET_BITS) + offset;
                if store {
                    TraceRecord::store(addr)
                } else {
                    TraceRecord::load(addr)
                }
            })
            .collect()
    })
}

fn policy_strategy() -> impl Strategy<Value = EvictionPolicy> {
    prop::sample::select(EvictionPolicy::ALL.to_vec())
}

proptest! {
    #[test]
    fn counters_are_bounded(
        trace in trace_strategy(),
        frames in 1_usize..8,
        policy in policy_strategy(),
    ) {
        let stats = simulate(policy, frames, &trace);
        prop_assert_eq!(stats.memory_accesses, trace.len() as u64);
        prop_assert!(stats.page_faults <= stats.memory_accesses);
        prop_assert!(stats.writes_to_disk <= stats.page_faults);
    }

    #[test]
    fn runs_are_deterministic(
        trace in trace_strategy(),
        frames in 1_usize..8,
        policy in policy_strategy(),
    ) {
        prop_assert_eq!(simulate(policy, frames, &trace), simulate(policy, frames, &trace));
    }

    #[test]
    fn opt_is_a_lower_bound(trace in trace_strategy(), frames in 1_usize..8) {
        let opt = simulate(EvictionPolicy::Opt, frames, &trace);
        let lru = simulate(EvictionPolicy::Lru, frames, &trace);
        let second = simulate(EvictionPolicy::Second, frames, &trace);
        prop_assert!(opt.page_faults <= lru.page_faults);
        prop_assert!(opt.page_faults <= second.page_faults);
    }

    /// Occupancy never exceeds capacity or the distinct pages seen, and no page is resident twice.
    #[test]
    fn occupancy_stays_within_bounds(
        trace in trace_strategy(),
        frames in 1_usize..8,
        policy in policy_strategy(),
    ) {
        let future = FutureAccessIndex::build(&trace, OFFSET_BITS);
        let mut table = FrameTable::new(frames, OFFSET_BITS, policy, Some(&future)).unwrap();
        let mut seen = HashSet::new();
        for (i, record) in trace.iter().enumerate() {
            let page = PageNumber::from_addr(record.addr, OFFSET_BITS);
            let was_resident = table.is_resident(page);
            let hit = access(&mut table, record.kind, record.addr, i);
            let _ = seen.insert(page);

            prop_assert_eq!(hit, was_resident);
            prop_assert!(table.is_resident(page));
            prop_assert!(table.occupied() <= frames);
            prop_assert!(table.occupied() <= seen.len());

            let resident: Vec<PageNumber> =
                table.frames().iter().filter_map(|f| f.page()).collect();
            let unique: HashSet<&PageNumber> = resident.iter().collect();
            prop_assert_eq!(unique.len(), resident.len());
        }
    }

    /// With a single frame, an access faults exactly when its page differs from the previous one.
    #[test]
    fn single_frame_faults_on_every_page_change(
        trace in trace_strategy(),
        policy in policy_strategy(),
    ) {
        let pages: Vec<PageNumber> = trace
            .iter()
            .map(|r| PageNumber::from_addr(r.addr, OFFSET_BITS))
            .collect();
        let expected = pages
            .iter()
            .enumerate()
            .filter(|&(i, page)| i == 0 || pages[i - 1] != *page)
            .count() as u64;
        prop_assert_eq!(simulate(policy, 1, &trace).page_faults, expected);
    }
}
