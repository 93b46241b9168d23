/*!
 * Coalescer
 * Address-sorts the free list and merges touching blocks
 */

use super::block_list::BlockList;
use tracing::debug;

/// Build a new, address-ordered free list with adjacent blocks merged
///
/// The input is drained front to back through ascending-by-address
/// insertion, which is quadratic in the number of free blocks.
pub fn coalesce(mut free: BlockList) -> BlockList {
    let before = free.len();
    let mut sorted = BlockList::new();

    while let Some(block) = free.remove_front() {
        sorted.insert_ascending_by_address(block);
    }

    let merged = sorted.merge_adjacent();
    debug!(
        before,
        after = sorted.len(),
        merged,
        "coalesced free list"
    );

    sorted
}
