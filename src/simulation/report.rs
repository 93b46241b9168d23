/*!
 * Report Rendering
 * Human-readable and JSON views of step reports
 */

use super::types::{BlockRecord, Event, Snapshot, StepReport};
use crate::core::limits::EVENT_BANNER;
use crate::memory::MemoryError;
use std::io::{self, Write};

/// Classic console line for a failed event
pub fn failure_line(error: &MemoryError) -> String {
    match error {
        MemoryError::AllocationFailure { size, .. } => {
            format!("Error: Memory Allocation {} blocks", size)
        }
        MemoryError::DeallocationFailure { pid } => {
            format!("Error: Can't locate Memory Used by PID: {}", pid)
        }
    }
}

fn write_blocks<W: Write>(out: &mut W, title: &str, blocks: &[BlockRecord]) -> io::Result<()> {
    writeln!(out, "{}:", title)?;
    for (i, block) in blocks.iter().enumerate() {
        write!(out, "Block {}:\t START: {}\t END: {}", i, block.start, block.end)?;
        match block.owner {
            Some(pid) => writeln!(out, "\t PID: {}", pid)?,
            None => writeln!(out)?,
        }
    }
    Ok(())
}

pub fn write_snapshot<W: Write>(out: &mut W, snapshot: &Snapshot) -> io::Result<()> {
    write_blocks(out, "Free Memory", &snapshot.free)?;
    writeln!(out)?;
    write_blocks(out, "Allocated Memory", &snapshot.allocated)
}

fn write_header<W: Write>(out: &mut W, event: &Event, error: Option<&MemoryError>) -> io::Result<()> {
    writeln!(out, "{}", EVENT_BANNER)?;
    writeln!(out, "{}", event)?;
    if let Some(error) = error {
        writeln!(out, "{}", failure_line(error))?;
    }
    writeln!(out, "{}", EVENT_BANNER)
}

/// Banner, event line, optional failure line, then both pools
pub fn write_step<W: Write>(out: &mut W, report: &StepReport) -> io::Result<()> {
    write_header(out, &report.event, report.error.as_ref())?;
    write_snapshot(out, &report.snapshot)?;
    writeln!(out, "\n")
}

/// Banner and failure line only; used when just the final pools are shown
pub fn write_step_summary<W: Write>(out: &mut W, report: &StepReport) -> io::Result<()> {
    write_header(out, &report.event, report.error.as_ref())
}

/// One JSON document per line
pub fn write_step_json<W: Write>(out: &mut W, report: &StepReport) -> io::Result<()> {
    serde_json::to_writer(&mut *out, report).map_err(io::Error::from)?;
    writeln!(out)
}
