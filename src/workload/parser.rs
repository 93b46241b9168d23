/*!
 * Workload Parser
 *
 * Text format:
 * - first value: partition size
 * - then one event per line, `<pid> <size>`:
 *   - `pid > 0` allocates `size` addresses to `pid`
 *   - `pid < 0` releases the memory held by `|pid|` (size optional, ignored)
 *   - `pid == -99999` coalesces the free list (size optional, ignored)
 * - blank lines and `#` comments are skipped
 */

use super::types::{Workload, WorkloadError, WorkloadResult};
use crate::core::limits::{COALESCE_MARKER, COMMENT_PREFIX};
use crate::core::types::{Pid, Size};
use crate::simulation::Event;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

impl Workload {
    pub fn from_path(path: impl AsRef<Path>) -> WorkloadResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| WorkloadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let workload: Workload = text.parse()?;
        debug!(
            path = %path.display(),
            partition_size = workload.partition_size,
            events = workload.events.len(),
            "loaded workload"
        );
        Ok(workload)
    }
}

impl FromStr for Workload {
    type Err = WorkloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s
            .lines()
            .enumerate()
            .map(|(i, text)| (i + 1, text.trim()))
            .filter(|(_, text)| !text.is_empty() && !text.starts_with(COMMENT_PREFIX));

        let (line, text) = lines.next().ok_or(WorkloadError::MissingPartitionSize)?;
        let partition_size = parse_partition_size(line, text)?;

        let events = lines
            .map(|(line, text)| parse_event(line, text))
            .collect::<WorkloadResult<Vec<_>>>()?;

        Ok(Workload {
            partition_size,
            events,
        })
    }
}

fn parse_int(line: usize, token: &str) -> WorkloadResult<i64> {
    token.parse().map_err(|_| WorkloadError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

fn parse_partition_size(line: usize, text: &str) -> WorkloadResult<Size> {
    let mut tokens = text.split_whitespace();
    let value = tokens.next().unwrap_or_default();
    if let Some(extra) = tokens.next() {
        return Err(WorkloadError::UnexpectedToken {
            line,
            token: extra.to_string(),
        });
    }

    value
        .parse::<Size>()
        .ok()
        .filter(|&size| size > 0)
        .ok_or_else(|| WorkloadError::InvalidPartitionSize {
            line,
            value: value.to_string(),
        })
}

fn parse_event(line: usize, text: &str) -> WorkloadResult<Event> {
    let mut tokens = text.split_whitespace();
    let pid = parse_int(line, tokens.next().unwrap_or_default())?;
    let size = tokens.next();
    if let Some(extra) = tokens.next() {
        return Err(WorkloadError::UnexpectedToken {
            line,
            token: extra.to_string(),
        });
    }

    if pid == COALESCE_MARKER {
        return Ok(Event::Coalesce);
    }
    if pid == 0 {
        return Err(WorkloadError::ZeroPid { line });
    }

    let process = Pid::try_from(pid.unsigned_abs())
        .map_err(|_| WorkloadError::PidOutOfRange { line, pid })?;

    if pid < 0 {
        return Ok(Event::Deallocate { pid: process });
    }

    let size = parse_int(line, size.ok_or(WorkloadError::MissingSize { line, pid })?)?;
    let size = Size::try_from(size)
        .ok()
        .filter(|&size| size > 0)
        .ok_or(WorkloadError::InvalidSize { line, size })?;

    Ok(Event::Allocate { pid: process, size })
}
