/*!
 * Property Tests
 * Invariants that hold for every reachable pool state
 */

use mmu_sim::memory::{allocate, coalesce, deallocate, BlockList, Policy};
use mmu_sim::simulation::{initialize, process_event, Event};
use proptest::prelude::*;

fn policy_strategy() -> impl Strategy<Value = Policy> {
    prop_oneof![
        Just(Policy::FirstFit),
        Just(Policy::BestFit),
        Just(Policy::WorstFit),
    ]
}

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        5 => (1u32..8, 1usize..40).prop_map(|(pid, size)| Event::Allocate { pid, size }),
        3 => (1u32..8).prop_map(|pid| Event::Deallocate { pid }),
        1 => Just(Event::Coalesce),
    ]
}

fn covered_ranges(free: &BlockList) -> Vec<(usize, usize)> {
    coalesce(free.clone())
        .iter()
        .map(|b| (b.start, b.end))
        .collect()
}

/// Replay events, ignoring failures, and return the resulting pools
fn reach(partition_size: usize, policy: Policy, events: &[Event]) -> (BlockList, BlockList) {
    let (mut free, mut allocated) = initialize(partition_size);
    for event in events {
        let _ = process_event(event, &mut free, &mut allocated, policy);
    }
    (free, allocated)
}

proptest! {
    #[test]
    fn prop_pools_tile_partition(
        partition_size in 1usize..200,
        policy in policy_strategy(),
        events in prop::collection::vec(event_strategy(), 0..60),
    ) {
        let (mut free, mut allocated) = initialize(partition_size);

        for event in &events {
            let _ = process_event(event, &mut free, &mut allocated, policy);

            // Conservation
            prop_assert_eq!(free.total_size() + allocated.total_size(), partition_size);

            // No overlap, no gap
            let mut ranges: Vec<(usize, usize)> = free
                .iter()
                .chain(allocated.iter())
                .map(|b| (b.start, b.end))
                .collect();
            ranges.sort_unstable();
            let mut next = 0;
            for (start, end) in ranges {
                prop_assert!(start <= end);
                prop_assert_eq!(start, next);
                next = end + 1;
            }
            prop_assert_eq!(next, partition_size);

            prop_assert!(free.iter().all(|b| b.is_free()));
            prop_assert!(allocated.iter().all(|b| !b.is_free()));
        }
    }

    #[test]
    fn prop_coalesce_is_idempotent(
        partition_size in 1usize..200,
        policy in policy_strategy(),
        events in prop::collection::vec(event_strategy(), 0..60),
    ) {
        let (free, _) = reach(partition_size, policy, &events);

        let once = coalesce(free);
        let twice = coalesce(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_coalesced_free_list_has_no_touching_neighbours(
        partition_size in 1usize..200,
        policy in policy_strategy(),
        events in prop::collection::vec(event_strategy(), 0..60),
    ) {
        let (free, _) = reach(partition_size, policy, &events);
        let merged = coalesce(free);

        for pair in merged.as_slice().windows(2) {
            prop_assert!(pair[0].end + 1 < pair[1].start);
        }
    }

    #[test]
    fn prop_allocate_then_deallocate_restores_free_coverage(
        partition_size in 1usize..200,
        policy in policy_strategy(),
        events in prop::collection::vec(event_strategy(), 0..60),
        size in 1usize..50,
    ) {
        let (mut free, mut allocated) = reach(partition_size, policy, &events);
        let before = covered_ranges(&free);
        let allocated_before = allocated.clone();

        // Pids in the workload stay below 8, so 1000 owns nothing yet
        if allocate(&mut free, &mut allocated, 1000, size, policy).is_ok() {
            deallocate(&mut allocated, &mut free, 1000, policy).unwrap();
        }

        prop_assert_eq!(covered_ranges(&free), before);
        prop_assert_eq!(allocated, allocated_before);
    }

    #[test]
    fn prop_replay_is_deterministic(
        partition_size in 1usize..200,
        policy in policy_strategy(),
        events in prop::collection::vec(event_strategy(), 0..60),
    ) {
        let first = reach(partition_size, policy, &events);
        let second = reach(partition_size, policy, &events);
        prop_assert_eq!(first, second);
    }
}
