/*!
 * Memory Types
 * Common types for partition management
 */

use crate::core::types::{Address, Pid, Size};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
///
/// Both variants are recoverable: the collections are left exactly as they
/// were before the failing call.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum MemoryError {
    #[error("Memory allocation failed: PID {pid} requested {size} blocks, no free block is large enough")]
    #[diagnostic(
        code(memory::allocation_failure),
        help("Free memory held by other processes or run a coalesce pass to merge fragments.")
    )]
    AllocationFailure { pid: Pid, size: Size },

    #[error("Can't locate memory used by PID {pid}")]
    #[diagnostic(
        code(memory::deallocation_failure),
        help("The process never allocated memory or has already released it.")
    )]
    DeallocationFailure { pid: Pid },
}

impl MemoryError {
    /// Process the failed request was made for
    pub fn pid(&self) -> Pid {
        match self {
            MemoryError::AllocationFailure { pid, .. } | MemoryError::DeallocationFailure { pid } => {
                *pid
            }
        }
    }
}

/// A contiguous, inclusive range `[start, end]` of the partition
///
/// `owner` is `None` while the block sits on the free list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub start: Address,
    pub end: Address,
    pub owner: Option<Pid>,
}

impl Block {
    pub fn free(start: Address, end: Address) -> Self {
        debug_assert!(start <= end, "block [{start}, {end}] is inverted");
        Self {
            start,
            end,
            owner: None,
        }
    }

    pub fn owned(start: Address, end: Address, pid: Pid) -> Self {
        Self {
            owner: Some(pid),
            ..Self::free(start, end)
        }
    }

    /// Number of addresses covered (both ends inclusive)
    #[inline]
    pub fn size(&self) -> Size {
        self.end - self.start + 1
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.owner.is_none()
    }

    pub fn assign(&mut self, pid: Pid) {
        self.owner = Some(pid);
    }

    pub fn release(&mut self) {
        self.owner = None;
    }

    /// True when `next` begins right after this block ends
    #[inline]
    pub fn precedes(&self, next: &Block) -> bool {
        self.end.checked_add(1) == Some(next.start)
    }

    pub fn overlaps(&self, other: &Block) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Shrink this block to `size` addresses and return the free remainder
    ///
    /// Returns `None` (and leaves the block untouched) when nothing would be
    /// left over.
    pub fn split_off(&mut self, size: Size) -> Option<Block> {
        if size == 0 || size >= self.size() {
            return None;
        }
        let remainder = Block::free(self.start + size, self.end);
        self.end = self.start + size - 1;
        Some(remainder)
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.owner {
            Some(pid) => write!(f, "[{}, {}] PID {}", self.start, self.end, pid),
            None => write!(f, "[{}, {}] free", self.start, self.end),
        }
    }
}

/// Memory statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_memory: Size,
    pub used_memory: Size,
    pub available_memory: Size,
    pub usage_percentage: f64,
    pub allocated_blocks: usize,
    pub free_blocks: usize,
    pub largest_free_block: Size,
    /// Share of free memory unusable by a request of `available_memory` size
    pub external_fragmentation: f64,
}

impl MemoryStats {
    pub fn memory_pressure(&self) -> MemoryPressure {
        if self.usage_percentage >= 95.0 {
            MemoryPressure::Critical
        } else if self.usage_percentage >= 80.0 {
            MemoryPressure::High
        } else if self.usage_percentage >= 60.0 {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Low
        }
    }
}

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryPressure {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::Medium => write!(f, "MEDIUM"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}
