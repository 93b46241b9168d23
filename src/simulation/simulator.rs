/*!
 * Simulator
 * Owns the two pools for a run and replays workloads against them
 */

use super::engine::{initialize, process_event, snapshot, stats};
use super::types::{Event, Snapshot, StepReport};
use crate::core::types::Size;
use crate::memory::{BlockList, MemoryStats, Policy};
use tracing::{info, info_span, warn, Span};
use uuid::Uuid;

/// Event driver for a single fixed partition
#[derive(Debug)]
pub struct Simulator {
    free: BlockList,
    allocated: BlockList,
    policy: Policy,
    partition_size: Size,
    steps: usize,
    span: Span,
}

impl Simulator {
    pub fn new(partition_size: Size, policy: Policy) -> Self {
        let (free, allocated) = initialize(partition_size);
        let run_id = Uuid::new_v4();
        let span = info_span!(
            "simulation",
            run_id = %run_id,
            %policy,
            partition_size
        );
        span.in_scope(|| info!("partition initialized"));

        Self {
            free,
            allocated,
            policy,
            partition_size,
            steps: 0,
            span,
        }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn partition_size(&self) -> Size {
        self.partition_size
    }

    pub fn free(&self) -> &BlockList {
        &self.free
    }

    pub fn allocated(&self) -> &BlockList {
        &self.allocated
    }

    pub fn snapshot(&self) -> Snapshot {
        snapshot(&self.free, &self.allocated)
    }

    pub fn stats(&self) -> MemoryStats {
        stats(&self.free, &self.allocated, self.partition_size)
    }

    /// Apply one event and report its outcome with the resulting pools
    pub fn step(&mut self, event: &Event) -> StepReport {
        let _entered = self.span.enter();
        let index = self.steps;
        self.steps += 1;

        let error = match process_event(event, &mut self.free, &mut self.allocated, self.policy) {
            Ok(()) => None,
            Err(e) => {
                warn!(step = index, %event, error = %e, "event failed, continuing");
                Some(e)
            }
        };

        let snapshot = snapshot(&self.free, &self.allocated);
        debug_assert!(
            snapshot.is_exact_partition(self.partition_size),
            "pools no longer tile the partition after step {index}"
        );

        StepReport {
            index,
            event: *event,
            error,
            snapshot,
        }
    }

    /// Replay a whole sequence, one report per event
    pub fn run<'a, I>(&mut self, events: I) -> Vec<StepReport>
    where
        I: IntoIterator<Item = &'a Event>,
    {
        let reports: Vec<StepReport> = events.into_iter().map(|event| self.step(event)).collect();

        let failures = reports.iter().filter(|r| !r.is_ok()).count();
        let stats = self.stats();
        self.span.in_scope(|| {
            info!(
                events = reports.len(),
                failures,
                used = stats.used_memory,
                free_blocks = stats.free_blocks,
                pressure = %stats.memory_pressure(),
                "simulation finished"
            )
        });

        reports
    }
}
