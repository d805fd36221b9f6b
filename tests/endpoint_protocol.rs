//! Engine tests against the live /proc of the test host.

#![cfg(target_os = "linux")]

use std::fs;

use proc_info::config::page_size;
use proc_info::{InfoFile, Selector};

/// A PID above the kernel's pid_max, guaranteed absent.
const ABSENT_PID: u32 = 4_000_000_000;

/// The comm of the calling process, straight from /proc/self/stat.
fn self_comm() -> String {
    let stat = fs::read_to_string("/proc/self/stat").unwrap();
    let open = stat.find('(').unwrap();
    let close = stat.rfind(')').unwrap();
    stat[open + 1..close].to_string()
}

fn read_report(file: &InfoFile) -> String {
    let mut handle = file.open();
    let mut buf = vec![0u8; page_size()];
    let n = handle.read(&mut buf).unwrap();
    assert!(n > 0, "first read must yield payload");
    String::from_utf8(buf[..n].to_vec()).unwrap()
}

#[test]
fn own_pid_reports_actual_attributes() {
    let pid = std::process::id();
    let file = InfoFile::new(Some(pid), None).unwrap();
    let report = read_report(&file);

    let pid_line = format!("PID: {pid}\n");
    assert_eq!(report.matches(&pid_line).count(), 1);
    assert!(report.starts_with(&format!("Name: {}\n", self_comm())));
    assert!(report.contains(&format!("Path: /proc/{pid}\n")));
    // The test process is on CPU while its own record is extracted.
    assert!(report.contains("State: Running\n"));
    assert!(report.contains("Memory usage: "));
    assert!(report.contains(" KB\n"));
}

#[test]
fn own_name_matches_byte_for_byte() {
    let comm = self_comm();
    let file = InfoFile::new(None, Some(comm.clone())).unwrap();
    let report = read_report(&file);
    // Another process may share the comm; whatever matched must carry the
    // exact queried name.
    assert!(report.starts_with(&format!("Name: {comm}\n")));
}

#[test]
fn init_process_has_no_parent() {
    let file = InfoFile::new(Some(1), None).unwrap();
    let report = read_report(&file);
    assert!(report.contains("PID: 1\n"));
    assert!(report.contains("PPID: -1\n"));
}

#[test]
fn absent_pid_yields_the_notice_with_a_positive_length() {
    let file = InfoFile::new(Some(ABSENT_PID), None).unwrap();
    let report = read_report(&file);
    assert_eq!(
        report,
        format!("Error: Process with ID {ABSENT_PID} not found.\n")
    );
}

#[test]
fn absent_name_yields_the_exact_notice() {
    let file = InfoFile::new(None, Some("zzz_not_here".into())).unwrap();
    let report = read_report(&file);
    assert_eq!(report, "Error: Process with name zzz_not_here not found.\n");
}

#[test]
fn drain_then_reopen_reproduces_the_report() {
    let pid = std::process::id();
    let file = InfoFile::new(Some(pid), None).unwrap();
    let mut buf = vec![0u8; page_size()];

    let mut handle = file.open();
    let first = handle.read(&mut buf).unwrap();
    assert!(first > 0);
    assert_eq!(handle.read(&mut buf).unwrap(), 0);
    assert_eq!(handle.read(&mut buf).unwrap(), 0);
    drop(handle);

    let reopened = read_report(&file);
    // Same shape on reopen: field values may move, the schema may not.
    assert!(reopened.contains(&format!("PID: {pid}\n")));
    assert!(reopened.contains("State: "));
}

#[test]
fn selector_is_fixed_at_activation() {
    let file = InfoFile::new(None, Some("bash".into())).unwrap();
    assert_eq!(file.selector(), &Selector::ByName("bash".into()));
}
