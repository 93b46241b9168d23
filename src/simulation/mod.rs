/*!
 * Simulation Module
 * Event-at-a-time driver over the free and allocated pools
 *
 * Runs are single-threaded and deterministic: the same partition size,
 * policy and event sequence always yield identical snapshots.
 */

mod engine;
pub mod report;
mod simulator;
pub mod types;

pub use engine::{initialize, process_event, snapshot, stats};
pub use simulator::Simulator;
pub use types::*;
