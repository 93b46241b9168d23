/*!
 * Workload File Tests
 * Loading workloads from disk and replaying them end to end
 */

use mmu_sim::simulation::{Event, Simulator};
use mmu_sim::{Policy, Workload, WorkloadError};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn workload_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write workload");
    file
}

#[test]
fn test_load_and_replay() {
    let file = workload_file("1000\n1 100\n2 200\n3 300\n-2 0\n4 150\n-99999 0\n-1 0\n-99999 0\n");

    let workload = Workload::from_path(file.path()).unwrap();
    assert_eq!(workload.partition_size, 1000);
    assert_eq!(workload.events.len(), 8);
    assert_eq!(workload.events[5], Event::Coalesce);

    let mut sim = Simulator::new(workload.partition_size, Policy::FirstFit);
    let reports = sim.run(&workload.events);
    assert!(reports.iter().all(|r| r.is_ok()));

    // First fit walks the free list in arrival order, so pid 4 lands in the
    // tail that was queued before pid 2's block came back
    let snapshot = sim.snapshot();
    let allocated: Vec<_> = snapshot
        .allocated
        .iter()
        .map(|r| (r.start, r.end, r.owner))
        .collect();
    assert_eq!(allocated, vec![(300, 599, Some(3)), (600, 749, Some(4))]);
    let free: Vec<_> = snapshot.free.iter().map(|r| (r.start, r.end)).collect();
    assert_eq!(free, vec![(0, 299), (750, 999)]);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Workload::from_path(dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, WorkloadError::Io { .. }));
}

#[test]
fn test_bad_file_reports_line() {
    let file = workload_file("64\n1 8\n2 eight\n");
    let err = Workload::from_path(file.path()).unwrap_err();
    assert!(matches!(err, WorkloadError::InvalidNumber { line: 3, .. }));
    assert!(err.to_string().contains("'eight'"));
}
