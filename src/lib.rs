/*!
 * MMU Simulator Library
 * Fixed-partition memory allocation with first/best/worst-fit placement
 */

pub mod config;
pub mod core;
pub mod memory;
pub mod monitoring;
pub mod simulation;
pub mod workload;

// Re-exports
pub use config::{ConfigError, OutputFormat, SimulatorConfig};
pub use memory::{Block, BlockList, MemoryError, MemoryResult, MemoryStats, Policy};
pub use monitoring::init_tracing;
pub use simulation::{Event, Simulator, Snapshot, StepReport};
pub use workload::{Workload, WorkloadError};
