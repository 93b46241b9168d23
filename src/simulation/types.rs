/*!
 * Simulation Types
 * Events, snapshots and per-step reports
 */

use crate::core::types::{Address, Pid, Size};
use crate::memory::{Block, BlockList, MemoryError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of a workload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    Allocate { pid: Pid, size: Size },
    Deallocate { pid: Pid },
    Coalesce,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Event::Allocate { pid, size } => write!(f, "ALLOCATE: {} FROM PID: {}", size, pid),
            Event::Deallocate { pid } => write!(f, "DEALLOCATE MEM: PID {}", pid),
            Event::Coalesce => write!(f, "COALESCE/COMPACT"),
        }
    }
}

/// Read-only view of a single block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockRecord {
    pub start: Address,
    pub end: Address,
    pub size: Size,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub owner: Option<Pid>,
}

impl From<&Block> for BlockRecord {
    fn from(block: &Block) -> Self {
        Self {
            start: block.start,
            end: block.end,
            size: block.size(),
            owner: block.owner,
        }
    }
}

/// Copy of both pools, in list order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub free: Vec<BlockRecord>,
    pub allocated: Vec<BlockRecord>,
}

impl Snapshot {
    pub fn capture(free: &BlockList, allocated: &BlockList) -> Self {
        Self {
            free: free.iter().map(BlockRecord::from).collect(),
            allocated: allocated.iter().map(BlockRecord::from).collect(),
        }
    }

    /// True when the two pools tile `[0, partition_size - 1]` exactly
    pub fn is_exact_partition(&self, partition_size: Size) -> bool {
        let mut ranges: Vec<(Address, Address)> = self
            .free
            .iter()
            .chain(self.allocated.iter())
            .map(|record| (record.start, record.end))
            .collect();
        ranges.sort_unstable();

        let mut next = 0;
        for (start, end) in ranges {
            if start != next || end < start {
                return false;
            }
            next = end + 1;
        }
        next == partition_size
    }
}

/// Outcome of a single event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    /// Zero-based position of the event in the workload
    pub index: usize,
    pub event: Event,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<MemoryError>,
    pub snapshot: Snapshot,
}

impl StepReport {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
