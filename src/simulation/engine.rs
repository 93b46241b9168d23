/*!
 * Simulation Engine
 * Entry points that thread both pools through one event at a time
 */

use super::types::{Event, Snapshot};
use crate::core::types::Size;
use crate::memory::{
    allocate, coalesce, deallocate, Block, BlockList, MemoryResult, MemoryStats, Policy,
};

/// Fresh pools for a partition of `partition_size` addresses
///
/// Returns `(free, allocated)`. A zero-sized partition has no blocks at all.
pub fn initialize(partition_size: Size) -> (BlockList, BlockList) {
    let mut free = BlockList::new();
    if partition_size > 0 {
        free.prepend(Block::free(0, partition_size - 1));
    }
    (free, BlockList::new())
}

/// Apply one event to the pools
pub fn process_event(
    event: &Event,
    free: &mut BlockList,
    allocated: &mut BlockList,
    policy: Policy,
) -> MemoryResult<()> {
    match *event {
        Event::Allocate { pid, size } => allocate(free, allocated, pid, size, policy),
        Event::Deallocate { pid } => deallocate(allocated, free, pid, policy),
        Event::Coalesce => {
            *free = coalesce(std::mem::take(free));
            Ok(())
        }
    }
}

pub fn snapshot(free: &BlockList, allocated: &BlockList) -> Snapshot {
    Snapshot::capture(free, allocated)
}

/// Usage and fragmentation figures for the current pools
pub fn stats(free: &BlockList, allocated: &BlockList, partition_size: Size) -> MemoryStats {
    let used_memory = allocated.total_size();
    let available_memory = free.total_size();
    let largest_free_block = free.iter().map(Block::size).max().unwrap_or(0);

    let usage_percentage = if partition_size == 0 {
        0.0
    } else {
        (used_memory as f64 / partition_size as f64) * 100.0
    };
    let external_fragmentation = if available_memory == 0 {
        0.0
    } else {
        1.0 - largest_free_block as f64 / available_memory as f64
    };

    MemoryStats {
        total_memory: partition_size,
        used_memory,
        available_memory,
        usage_percentage,
        allocated_blocks: allocated.len(),
        free_blocks: free.len(),
        largest_free_block,
        external_fragmentation,
    }
}
