//! Point-in-time view of one process.

use std::fmt;

/// Scheduling states the report can name.
///
/// The set and its display text mirror the kernel's task state table.
/// `StateMax` is the kernel's sentinel value; it never appears in procfs
/// but belongs to the fixed table. Any state character outside the table
/// maps to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    Running,
    InterruptibleSleep,
    UninterruptibleSleep,
    Stopped,
    Traced,
    Zombie,
    DeadExit,
    Dead,
    Wakekill,
    Waking,
    StateMax,
    Unknown,
}

impl ProcessState {
    /// Map the state character from `/proc/<pid>/stat`.
    pub fn from_stat_char(state: char) -> Self {
        match state {
            'R' => ProcessState::Running,
            'S' => ProcessState::InterruptibleSleep,
            'D' => ProcessState::UninterruptibleSleep,
            'T' => ProcessState::Stopped,
            't' => ProcessState::Traced,
            'Z' => ProcessState::Zombie,
            'X' => ProcessState::DeadExit,
            'x' => ProcessState::Dead,
            'K' => ProcessState::Wakekill,
            'W' => ProcessState::Waking,
            _ => ProcessState::Unknown,
        }
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ProcessState::Running => "Running",
            ProcessState::InterruptibleSleep => "Interruptible Sleep",
            ProcessState::UninterruptibleSleep => "Uninterruptible Sleep",
            ProcessState::Stopped => "Stopped",
            ProcessState::Traced => "Traced",
            ProcessState::Zombie => "Zombie",
            ProcessState::DeadExit => "Dead (Exit)",
            ProcessState::Dead => "Dead",
            ProcessState::Wakekill => "Wakekill",
            ProcessState::Waking => "Waking",
            ProcessState::StateMax => "State Max",
            ProcessState::Unknown => "Unknown",
        };
        f.write_str(text)
    }
}

/// A read-only snapshot of one process's reportable attributes.
///
/// Extracted while the process is known to exist; never persisted past the
/// read cycle that produced it.
#[derive(Debug, Clone)]
pub struct ProcessRecord {
    /// Process name (the comm field, at most 15 bytes).
    pub name: String,
    /// Process ID.
    pub pid: u32,
    /// Parent PID, `None` for processes without a parent (reported as -1).
    pub parent_pid: Option<u32>,
    /// UID owning the process.
    pub uid: u32,
    /// Scheduling state at snapshot time.
    pub state: ProcessState,
    /// Virtual memory size in KB; meaningful only when `state` is Running,
    /// and 0 for processes without an address space (kernel threads).
    pub memory_kb: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_chars_map_to_the_fixed_table() {
        assert_eq!(ProcessState::from_stat_char('R'), ProcessState::Running);
        assert_eq!(
            ProcessState::from_stat_char('S'),
            ProcessState::InterruptibleSleep
        );
        assert_eq!(
            ProcessState::from_stat_char('D'),
            ProcessState::UninterruptibleSleep
        );
        assert_eq!(ProcessState::from_stat_char('T'), ProcessState::Stopped);
        assert_eq!(ProcessState::from_stat_char('t'), ProcessState::Traced);
        assert_eq!(ProcessState::from_stat_char('Z'), ProcessState::Zombie);
        assert_eq!(ProcessState::from_stat_char('X'), ProcessState::DeadExit);
        assert_eq!(ProcessState::from_stat_char('x'), ProcessState::Dead);
        assert_eq!(ProcessState::from_stat_char('K'), ProcessState::Wakekill);
        assert_eq!(ProcessState::from_stat_char('W'), ProcessState::Waking);
    }

    #[test]
    fn characters_outside_the_table_are_unknown() {
        // Parked and idle kernel threads are not part of the report table.
        assert_eq!(ProcessState::from_stat_char('P'), ProcessState::Unknown);
        assert_eq!(ProcessState::from_stat_char('I'), ProcessState::Unknown);
        assert_eq!(ProcessState::from_stat_char('?'), ProcessState::Unknown);
    }

    #[test]
    fn display_text_matches_the_report_schema() {
        assert_eq!(ProcessState::Running.to_string(), "Running");
        assert_eq!(
            ProcessState::InterruptibleSleep.to_string(),
            "Interruptible Sleep"
        );
        assert_eq!(ProcessState::DeadExit.to_string(), "Dead (Exit)");
        assert_eq!(ProcessState::StateMax.to_string(), "State Max");
        assert_eq!(ProcessState::Unknown.to_string(), "Unknown");
    }
}
