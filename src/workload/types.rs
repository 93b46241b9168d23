/*!
 * Workload Types
 * Parsed workload and parse errors
 */

use crate::core::types::Size;
use crate::simulation::Event;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Workload parse result
pub type WorkloadResult<T> = Result<T, WorkloadError>;

/// Partition size plus the ordered events to replay against it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    pub partition_size: Size,
    pub events: Vec<Event>,
}

/// Workload errors; line numbers are 1-based
#[derive(Error, Debug, Diagnostic)]
pub enum WorkloadError {
    #[error("Failed to read workload file {}", path.display())]
    #[diagnostic(code(workload::io), help("Check that the path exists and is readable."))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Workload is empty: expected the partition size first")]
    #[diagnostic(code(workload::missing_partition_size))]
    MissingPartitionSize,

    #[error("Line {line}: partition size must be a positive integer, got '{value}'")]
    #[diagnostic(code(workload::invalid_partition_size))]
    InvalidPartitionSize { line: usize, value: String },

    #[error("Line {line}: '{token}' is not an integer")]
    #[diagnostic(code(workload::invalid_number))]
    InvalidNumber { line: usize, token: String },

    #[error("Line {line}: PID 0 is reserved for free blocks")]
    #[diagnostic(
        code(workload::zero_pid),
        help("Use a positive PID to allocate, a negative PID to deallocate, or -99999 to coalesce.")
    )]
    ZeroPid { line: usize },

    #[error("Line {line}: PID {pid} is out of range")]
    #[diagnostic(code(workload::pid_out_of_range))]
    PidOutOfRange { line: usize, pid: i64 },

    #[error("Line {line}: allocation for PID {pid} has no size")]
    #[diagnostic(code(workload::missing_size), help("Allocation lines take the form '<pid> <size>'."))]
    MissingSize { line: usize, pid: i64 },

    #[error("Line {line}: allocation size must be positive, got {size}")]
    #[diagnostic(code(workload::invalid_size))]
    InvalidSize { line: usize, size: i64 },

    #[error("Line {line}: unexpected token '{token}'")]
    #[diagnostic(code(workload::unexpected_token))]
    UnexpectedToken { line: usize, token: String },
}
