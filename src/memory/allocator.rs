/*!
 * Memory Allocator Implementation
 * Policy-driven block selection, splitting and bookkeeping
 */

use super::block_list::BlockList;
use super::policy::Policy;
use super::types::{MemoryError, MemoryResult};
use crate::core::types::{Pid, Size};
use tracing::{debug, warn};

/// Allocate `size` addresses from `free` to `pid`
///
/// The chosen block leaves `free`; any remainder goes back under the
/// policy's reinsertion rule, and the allocated part lands in `allocated` in
/// address order. On failure neither list is touched.
pub fn allocate(
    free: &mut BlockList,
    allocated: &mut BlockList,
    pid: Pid,
    size: Size,
    policy: Policy,
) -> MemoryResult<()> {
    let chosen = match size {
        0 => None,
        _ => policy.select(free, size),
    };

    let Some(index) = chosen else {
        warn!(
            pid,
            size,
            %policy,
            free_blocks = free.len(),
            "allocation failed: no free block large enough"
        );
        return Err(MemoryError::AllocationFailure { pid, size });
    };

    let Some(mut block) = free.remove_at(index) else {
        return Err(MemoryError::AllocationFailure { pid, size });
    };

    debug!(
        pid,
        size,
        %policy,
        start = block.start,
        end = block.end,
        "selected free block"
    );

    if let Some(fragment) = block.split_off(size) {
        debug!(
            start = fragment.start,
            end = fragment.end,
            "returning remainder to free list"
        );
        policy.reinsert(free, fragment);
    }

    block.assign(pid);
    allocated.insert_ascending_by_address(block);

    debug!(pid, start = block.start, end = block.end, "allocated");
    Ok(())
}
