//! Scans the live process table for the first match of the active selector.
//!
//! The table is enumerated once per read cycle through the host's one-shot
//! PID listing. There is no global snapshot: a process may exit between
//! enumeration and extraction, in which case it is skipped, and the table
//! may change arbitrarily around the scan. Field values that were read for
//! a live process stay well-defined for the rest of the cycle.

use std::fs;
use std::io;
use std::os::unix::fs::MetadataExt;

use tracing::debug;

use crate::record::{ProcessRecord, ProcessState};
use crate::selector::Selector;

/// Find the first process matching `selector`, in the enumeration order of
/// the live process table, and stop scanning immediately on a hit.
///
/// Duplicate names are not disambiguated: first found wins.
pub fn find_process(selector: &Selector) -> io::Result<Option<ProcessRecord>> {
    let pids = psutil::process::pids().map_err(io::Error::other)?;
    for pid in pids {
        let Some(record) = snapshot(pid) else {
            // Vanished or unreadable between enumeration and extraction.
            continue;
        };
        if matches(selector, &record) {
            debug!(pid = record.pid, name = %record.name, "process matched");
            return Ok(Some(record));
        }
    }
    debug!(?selector, "no process matched");
    Ok(None)
}

/// Match predicate: numeric equality for PID selectors, byte-exact and
/// case-sensitive comparison for name selectors.
fn matches(selector: &Selector, record: &ProcessRecord) -> bool {
    match selector {
        Selector::ByPid(pid) => record.pid == *pid,
        Selector::ByName(name) => record.name.as_bytes() == name.as_bytes(),
    }
}

/// Extract a point-in-time record for `pid`, or `None` if the process is
/// already gone.
fn snapshot(pid: u32) -> Option<ProcessRecord> {
    let stat = fs::read_to_string(format!("/proc/{pid}/stat")).ok()?;
    let uid = fs::metadata(format!("/proc/{pid}")).ok()?.uid();
    parse_stat(pid, &stat, uid)
}

/// Parse `/proc/<pid>/stat`. The comm field is parenthesized and may itself
/// contain spaces or parentheses, so the field split keys off the last `)`.
fn parse_stat(pid: u32, stat: &str, uid: u32) -> Option<ProcessRecord> {
    let open = stat.find('(')?;
    let close = stat.rfind(')')?;
    let name = stat.get(open + 1..close)?.to_string();

    // Fields after the comm: [0] state, [1] ppid, [20] vsize in bytes.
    let rest: Vec<&str> = stat.get(close + 1..)?.split_ascii_whitespace().collect();
    let state = ProcessState::from_stat_char(rest.first()?.chars().next()?);
    let ppid: u32 = rest.get(1)?.parse().ok()?;
    let vsize: u64 = rest.get(20).and_then(|v| v.parse().ok()).unwrap_or(0);

    Some(ProcessRecord {
        name,
        pid,
        // PPID 0 (init, kernel threads) means no parent.
        parent_pid: (ppid != 0).then_some(ppid),
        uid,
        state,
        memory_kb: vsize / 1024,
    })
}
