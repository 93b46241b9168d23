/*!
 * Allocation Scenario Tests
 * Worked examples for each policy, coalescing and failure handling
 */

use mmu_sim::memory::{allocate, coalesce, deallocate, Block, BlockList, MemoryError, Policy};
use mmu_sim::simulation::snapshot;
use pretty_assertions::assert_eq;

fn free_list(ranges: &[(usize, usize)]) -> BlockList {
    ranges.iter().map(|&(s, e)| Block::free(s, e)).collect()
}

fn owned_list(ranges: &[(usize, usize, u32)]) -> BlockList {
    ranges.iter().map(|&(s, e, pid)| Block::owned(s, e, pid)).collect()
}

#[test]
fn test_first_fit_splits_first_block() {
    let mut free = free_list(&[(0, 9), (20, 29)]);
    let mut allocated = BlockList::new();

    allocate(&mut free, &mut allocated, 1, 5, Policy::FirstFit).unwrap();

    assert_eq!(allocated, owned_list(&[(0, 4, 1)]));
    assert_eq!(free, free_list(&[(20, 29), (5, 9)]));
}

#[test]
fn test_first_fit_covers_expected_ranges() {
    // The remainder is appended, so compare the covered ranges by address
    let mut free = free_list(&[(0, 9), (20, 29)]);
    let mut allocated = BlockList::new();

    allocate(&mut free, &mut allocated, 1, 5, Policy::FirstFit).unwrap();

    assert_eq!(coalesce(free), free_list(&[(5, 9), (20, 29)]));
}

#[test]
fn test_best_fit_exact_match_leaves_no_remainder() {
    let mut free = free_list(&[(0, 9), (20, 24)]);
    let mut allocated = BlockList::new();

    allocate(&mut free, &mut allocated, 2, 5, Policy::BestFit).unwrap();

    assert_eq!(free, free_list(&[(0, 9)]));
    assert_eq!(allocated, owned_list(&[(20, 24, 2)]));
}

#[test]
fn test_worst_fit_takes_largest_block() {
    let mut free = free_list(&[(0, 9), (20, 24)]);
    let mut allocated = BlockList::new();

    allocate(&mut free, &mut allocated, 3, 5, Policy::WorstFit).unwrap();

    assert_eq!(allocated, owned_list(&[(0, 4, 3)]));
    // Equal sizes: the reinserted remainder goes ahead of the existing block
    assert_eq!(free, free_list(&[(5, 9), (20, 24)]));
}

#[test]
fn test_coalesce_merges_touching_blocks_only() {
    let free = free_list(&[(5, 9), (0, 4), (11, 15)]);
    assert_eq!(coalesce(free), free_list(&[(0, 9), (11, 15)]));
}

#[test]
fn test_coalesce_restores_whole_partition() {
    let mut free = free_list(&[(0, 99)]);
    let mut allocated = BlockList::new();

    for pid in 1..=4 {
        allocate(&mut free, &mut allocated, pid, 25, Policy::BestFit).unwrap();
    }
    assert!(free.is_empty());

    for pid in [2, 4, 1, 3] {
        deallocate(&mut allocated, &mut free, pid, Policy::BestFit).unwrap();
    }
    assert_eq!(free.len(), 4);

    assert_eq!(coalesce(free), free_list(&[(0, 99)]));
}

#[test]
fn test_deallocate_unknown_pid_changes_nothing() {
    let mut free = free_list(&[(5, 9)]);
    let mut allocated = owned_list(&[(0, 4, 1)]);
    let before = snapshot(&free, &allocated);

    let result = deallocate(&mut allocated, &mut free, 99, Policy::FirstFit);

    assert_eq!(result, Err(MemoryError::DeallocationFailure { pid: 99 }));
    assert_eq!(snapshot(&free, &allocated), before);
}

#[test]
fn test_allocation_failure_changes_nothing() {
    let mut free = free_list(&[(0, 3), (10, 13)]);
    let mut allocated = owned_list(&[(4, 9, 1)]);

    for policy in Policy::ALL {
        let before = snapshot(&free, &allocated);
        let result = allocate(&mut free, &mut allocated, 2, 5, policy);

        assert_eq!(result, Err(MemoryError::AllocationFailure { pid: 2, size: 5 }));
        assert_eq!(snapshot(&free, &allocated), before);
    }
}

#[test]
fn test_fragmentation_defeated_by_coalesce() {
    // 8 free addresses in two non-adjacent pieces cannot serve 8
    let mut free = free_list(&[(0, 15)]);
    let mut allocated = BlockList::new();
    allocate(&mut free, &mut allocated, 1, 4, Policy::FirstFit).unwrap();
    allocate(&mut free, &mut allocated, 2, 4, Policy::FirstFit).unwrap();
    allocate(&mut free, &mut allocated, 3, 4, Policy::FirstFit).unwrap();
    deallocate(&mut allocated, &mut free, 1, Policy::FirstFit).unwrap();

    assert!(allocate(&mut free, &mut allocated, 4, 8, Policy::FirstFit).is_err());

    deallocate(&mut allocated, &mut free, 2, Policy::FirstFit).unwrap();
    free = coalesce(free);
    assert_eq!(free, free_list(&[(0, 7), (12, 15)]));

    allocate(&mut free, &mut allocated, 4, 8, Policy::FirstFit).unwrap();
    assert_eq!(allocated, owned_list(&[(0, 7, 4), (8, 11, 3)]));
}
