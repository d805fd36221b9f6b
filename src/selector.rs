//! Selector configuration: which process the activation reports on.

use crate::error::{ProcInfoError, Result};

/// Width of the kernel comm field, including the trailing NUL.
pub const TASK_COMM_LEN: usize = 16;

/// The process selector fixed at activation.
///
/// Exactly one variant is active per activation. The selector is immutable
/// for the activation's lifetime and is read by every read cycle without
/// further synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match the process with this exact PID.
    ByPid(u32),
    /// Match the first process whose name equals this string, byte for byte.
    ByName(String),
}

impl Selector {
    /// Build a selector from the raw activation parameters.
    ///
    /// Valid iff exactly one parameter is supplied; an empty name string
    /// counts as unset. Both-set or neither-set refuses activation rather
    /// than silently picking one.
    pub fn from_params(pid: Option<u32>, name: Option<String>) -> Result<Self> {
        let name = name.filter(|n| !n.is_empty());
        match (pid, name) {
            (Some(pid), None) => Ok(Selector::ByPid(pid)),
            (None, Some(name)) => Ok(Selector::ByName(truncate_comm(name))),
            _ => Err(ProcInfoError::InvalidSelector),
        }
    }
}

/// Clamp a name selector to the comm field width (15 usable bytes), the
/// same truncation the kernel applies when it stores `task->comm`.
fn truncate_comm(mut name: String) -> String {
    while name.len() > TASK_COMM_LEN - 1 {
        name.pop();
    }
    name
}
