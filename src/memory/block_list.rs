/*!
 * Block List
 * Ordered block collection backing the free and allocated pools
 *
 * The order of a list is meaningful: it decides which block a placement
 * policy reaches first. Each insertion discipline keeps its own ordering
 * invariant, so a list should be populated with a single discipline at a
 * time (the allocated pool is always address-ordered, the free pool follows
 * the active policy).
 *
 * Every fallible operation reports absence with `None` and leaves the list
 * untouched.
 */

use super::types::Block;
use crate::core::types::{Pid, Size};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockList {
    blocks: Vec<Block>,
}

impl BlockList {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn as_slice(&self) -> &[Block] {
        &self.blocks
    }

    /// Sum of the sizes of every block in the list
    pub fn total_size(&self) -> Size {
        self.blocks.iter().map(Block::size).sum()
    }

    // =========================================================================
    // Positional insertion
    // =========================================================================

    pub fn append(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn prepend(&mut self, block: Block) {
        self.blocks.insert(0, block);
    }

    /// Insert before the block currently at `index`
    ///
    /// An index at or past the end appends.
    pub fn insert_at(&mut self, block: Block, index: usize) {
        let index = index.min(self.blocks.len());
        self.blocks.insert(index, block);
    }

    // =========================================================================
    // Ordered insertion
    // =========================================================================

    /// Keep `start` non-decreasing; a block with an equal `start` goes before
    /// the existing one
    pub fn insert_ascending_by_address(&mut self, block: Block) {
        let index = self
            .blocks
            .iter()
            .position(|existing| existing.start >= block.start)
            .unwrap_or(self.blocks.len());
        self.blocks.insert(index, block);
    }

    /// Keep sizes non-decreasing; equal sizes keep insertion order
    pub fn insert_ascending_by_size(&mut self, block: Block) {
        let size = block.size();
        let index = self
            .blocks
            .iter()
            .position(|existing| existing.size() > size)
            .unwrap_or(self.blocks.len());
        self.blocks.insert(index, block);
    }

    /// Keep sizes non-increasing; the new block goes before existing blocks
    /// of equal size
    pub fn insert_descending_by_size(&mut self, block: Block) {
        let size = block.size();
        let index = self
            .blocks
            .iter()
            .position(|existing| existing.size() <= size)
            .unwrap_or(self.blocks.len());
        self.blocks.insert(index, block);
    }

    // =========================================================================
    // Removal and access
    // =========================================================================

    pub fn remove_front(&mut self) -> Option<Block> {
        self.remove_at(0)
    }

    pub fn remove_back(&mut self) -> Option<Block> {
        self.blocks.pop()
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Block> {
        (index < self.blocks.len()).then(|| self.blocks.remove(index))
    }

    pub fn front(&self) -> Option<&Block> {
        self.blocks.first()
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Index of the first block identical to `block` (range and owner)
    pub fn position_of(&self, block: &Block) -> Option<usize> {
        self.blocks.iter().position(|existing| existing == block)
    }

    /// Index of the first block able to hold `size` addresses
    pub fn position_by_min_size(&self, size: Size) -> Option<usize> {
        self.blocks.iter().position(|existing| existing.size() >= size)
    }

    pub fn position_by_owner(&self, pid: Pid) -> Option<usize> {
        self.blocks
            .iter()
            .position(|existing| existing.owner == Some(pid))
    }

    pub fn contains(&self, block: &Block) -> bool {
        self.position_of(block).is_some()
    }

    pub fn contains_min_size(&self, size: Size) -> bool {
        self.position_by_min_size(size).is_some()
    }

    pub fn contains_owner(&self, pid: Pid) -> bool {
        self.position_by_owner(pid).is_some()
    }

    // =========================================================================
    // Compaction
    // =========================================================================

    /// Merge neighbours whose ranges touch, in one left-to-right pass
    ///
    /// Only blocks adjacent in list order are compared, so the list must
    /// already be address-sorted. Returns the number of blocks absorbed.
    pub fn merge_adjacent(&mut self) -> usize {
        let before = self.blocks.len();
        let mut merged: Vec<Block> = Vec::with_capacity(before);

        for block in self.blocks.drain(..) {
            match merged.last_mut() {
                Some(last) if last.precedes(&block) => last.end = block.end,
                _ => merged.push(block),
            }
        }

        self.blocks = merged;
        before - self.blocks.len()
    }
}

impl FromIterator<Block> for BlockList {
    /// Collect in iteration order, as repeated `append`
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for BlockList {
    type Item = Block;
    type IntoIter = std::vec::IntoIter<Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a BlockList {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
