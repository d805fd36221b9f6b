//! The read-once virtual endpoint.
//!
//! Each open handle moves through two states: Fresh (cursor at zero) and
//! Drained (cursor past zero). The first read runs locate + render and
//! delivers the whole report; every later read on the same handle returns
//! zero bytes without touching the process table. Handles are independent,
//! so reopening always starts Fresh.

use tracing::{debug, info};

use crate::config::{page_size, ENDPOINT_NAME};
use crate::error::{ProcInfoError, Result};
use crate::locator;
use crate::report::ReportBuffer;
use crate::selector::Selector;

/// One activation of the engine: a selector fixed at construction and the
/// endpoint built around it.
#[derive(Debug)]
pub struct InfoFile {
    selector: Selector,
}

impl InfoFile {
    /// Activate with the raw selector parameters.
    ///
    /// Fails with `InvalidSelector` when both or neither parameter is
    /// supplied; the endpoint is never created in that case.
    pub fn new(pid: Option<u32>, name: Option<String>) -> Result<Self> {
        let selector = Selector::from_params(pid, name)?;
        info!(?selector, "{ENDPOINT_NAME} loaded");
        Ok(Self { selector })
    }

    /// The selector fixed at activation.
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Open a fresh read handle. Handles carry their own cursor, so any
    /// number may be open concurrently without affecting each other.
    pub fn open(&self) -> ReadHandle<'_> {
        ReadHandle {
            file: self,
            offset: 0,
        }
    }
}

impl Drop for InfoFile {
    fn drop(&mut self) {
        info!("{ENDPOINT_NAME} unloaded");
    }
}

/// A per-open-handle cursor over the endpoint.
#[derive(Debug)]
pub struct ReadHandle<'a> {
    file: &'a InfoFile,
    offset: u64,
}

impl ReadHandle<'_> {
    /// One read cycle.
    ///
    /// At offset zero this scans the table, renders the report, and copies
    /// it into `buf` whole; afterwards it returns `Ok(0)` immediately.
    /// Delivery is atomic with respect to the cursor: either the full
    /// payload lands in `buf` and the cursor advances past it, or nothing
    /// is delivered and the cursor is unchanged.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if self.offset != 0 {
            return Ok(0);
        }

        // Reserve the report storage before the scan so an allocation
        // failure surfaces before the table is touched.
        let buffer = ReportBuffer::with_capacity(page_size())?;
        let record = locator::find_process(self.file.selector())?;
        let report = buffer.render(record.as_ref(), self.file.selector());

        let needed = report.len();
        if needed > buf.len() {
            return Err(ProcInfoError::TransferFailure {
                needed,
                available: buf.len(),
            });
        }
        buf[..needed].copy_from_slice(report.as_bytes());
        self.offset += needed as u64;
        debug!(bytes = needed, "report delivered");
        Ok(needed)
    }
}
