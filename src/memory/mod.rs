/*!
 * Memory Module
 * Fixed-partition allocation with first/best/worst-fit placement
 *
 * ## Pools
 *
 * The partition is always described by two [`BlockList`]s:
 * - **free**: ordered by the active [`Policy`] (arrival order, ascending size
 *   or descending size), or by address right after a coalesce
 * - **allocated**: always ordered by address
 *
 * Together they cover `[0, S-1]` with no gaps and no overlaps.
 *
 * ## Operations
 *
 * - [`allocate`]: select, split, record
 * - [`deallocate`]: release the first block a process owns
 * - [`coalesce`]: address-sort the free list and merge neighbours
 */

mod allocator;
mod block_list;
mod coalescer;
mod deallocator;
mod policy;
pub mod types;

// Re-export for convenience
pub use allocator::allocate;
pub use block_list::BlockList;
pub use coalescer::coalesce;
pub use deallocator::deallocate;
pub use policy::{Policy, PolicyParseError};
pub use types::*;
