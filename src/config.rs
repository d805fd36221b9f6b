//! Fixed parameters of the engine.

/// Display name of the endpoint, used in lifecycle log lines.
pub const ENDPOINT_NAME: &str = "proc_info_module";

/// Fallback report bound when the host page size cannot be queried.
pub const DEFAULT_PAGE_SIZE: usize = 4096;

/// The bound on a rendered report: one page of bytes.
pub fn page_size() -> usize {
    // SAFETY: sysconf takes no pointers and has no preconditions.
    let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    if size > 0 {
        size as usize
    } else {
        DEFAULT_PAGE_SIZE
    }
}
