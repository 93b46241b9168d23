/*!
 * Placement Policies
 * Block selection and free-list reinsertion rules
 */

use super::block_list::BlockList;
use super::types::Block;
use crate::core::types::Size;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Placement policy, fixed for a whole simulation run
///
/// The policy governs both which free block serves a request and how blocks
/// returning to the free list are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// First block large enough, free list kept in arrival order
    FirstFit,
    /// Smallest block large enough, free list kept ascending by size
    BestFit,
    /// Largest block, free list kept descending by size
    WorstFit,
}

impl Policy {
    pub const ALL: [Policy; 3] = [Policy::FirstFit, Policy::BestFit, Policy::WorstFit];

    /// Index of the free block that should serve a request of `size`
    ///
    /// Ties go to the block seen first.
    pub fn select(self, free: &BlockList, size: Size) -> Option<usize> {
        let mut fits = free
            .iter()
            .enumerate()
            .map(|(index, block)| (index, block.size()))
            .filter(|&(_, capacity)| capacity >= size);

        match self {
            Policy::FirstFit => fits.next().map(|(index, _)| index),
            Policy::BestFit => fits
                .fold(None, |best: Option<(usize, Size)>, candidate| match best {
                    Some((_, best_size)) if candidate.1 >= best_size => best,
                    _ => Some(candidate),
                })
                .map(|(index, _)| index),
            Policy::WorstFit => fits
                .fold(None, |best: Option<(usize, Size)>, candidate| match best {
                    Some((_, best_size)) if candidate.1 <= best_size => best,
                    _ => Some(candidate),
                })
                .map(|(index, _)| index),
        }
    }

    /// Put a free block back on the free list in this policy's order
    pub fn reinsert(self, free: &mut BlockList, block: Block) {
        match self {
            Policy::FirstFit => free.append(block),
            Policy::BestFit => free.insert_ascending_by_size(block),
            Policy::WorstFit => free.insert_descending_by_size(block),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::FirstFit => "FIRSTFIT",
            Policy::BestFit => "BESTFIT",
            Policy::WorstFit => "WORSTFIT",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Policy flag that matches none of the known spellings
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
#[error("Unknown allocation policy '{0}'")]
#[diagnostic(
    code(policy::unknown),
    help("Use F/FIFO/FIRSTFIT, B/BESTFIT or W/WORSTFIT (case-insensitive).")
)]
pub struct PolicyParseError(pub String);

impl FromStr for Policy {
    type Err = PolicyParseError;

    /// Accepts the classic `-F`/`-FIFO` style flags as well as bare names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .trim_start_matches('-')
            .replace(['_', '-'], "")
            .to_ascii_uppercase();

        match normalized.as_str() {
            "F" | "FIFO" | "FIRSTFIT" => Ok(Policy::FirstFit),
            "B" | "BESTFIT" => Ok(Policy::BestFit),
            "W" | "WORSTFIT" => Ok(Policy::WorstFit),
            _ => Err(PolicyParseError(s.to_string())),
        }
    }
}
