/*!
 * Memory Deallocator
 * Returns a process's block to the free list
 */

use super::block_list::BlockList;
use super::policy::Policy;
use super::types::{MemoryError, MemoryResult};
use crate::core::types::Pid;
use tracing::{debug, warn};

/// Release the first block owned by `pid`
///
/// The block is cleared and reinserted into `free` under the policy's rule.
/// When `pid` owns nothing, neither list is touched.
pub fn deallocate(
    allocated: &mut BlockList,
    free: &mut BlockList,
    pid: Pid,
    policy: Policy,
) -> MemoryResult<()> {
    let Some(mut block) = allocated
        .position_by_owner(pid)
        .and_then(|index| allocated.remove_at(index))
    else {
        warn!(pid, "deallocation failed: no block owned by process");
        return Err(MemoryError::DeallocationFailure { pid });
    };

    block.release();
    debug!(
        pid,
        %policy,
        start = block.start,
        end = block.end,
        "released block to free list"
    );
    policy.reinsert(free, block);

    Ok(())
}
