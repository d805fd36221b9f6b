//! Renders a matched process record, or a not-found notice, into the fixed
//! report schema.

use std::fmt;
use std::fmt::Write as _;

use crate::error::{ProcInfoError, Result};
use crate::record::{ProcessRecord, ProcessState};
use crate::selector::Selector;

/// A rendered report. Bounded to the page budget it was rendered under and
/// discarded at the end of the read cycle that produced it.
#[derive(Debug)]
pub struct Report {
    text: String,
}

impl Report {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Line-oriented buffer with a fixed byte budget.
///
/// The backing storage is reserved up front so the read cycle can fail with
/// `ResourceExhaustion` before the table scan starts. A line that would
/// overflow the budget is dropped whole and rendering stops there; the
/// schema below stays far under one page for any real comm width.
#[derive(Debug)]
pub struct ReportBuffer {
    text: String,
    limit: usize,
    full: bool,
}

impl ReportBuffer {
    /// Reserve `limit` bytes of backing storage.
    pub fn with_capacity(limit: usize) -> Result<Self> {
        let mut text = String::new();
        text.try_reserve_exact(limit)
            .map_err(|_| ProcInfoError::ResourceExhaustion { requested: limit })?;
        Ok(Self {
            text,
            limit,
            full: false,
        })
    }

    /// Render the report for a completed scan.
    ///
    /// A miss renders as ordinary payload text, not a failure status: the
    /// launcher prints whatever the endpoint yields, so "not found" must
    /// look identical in kind to a hit. The original engine computed a
    /// not-found error code and then overwrote it with the message length;
    /// that observable contract is kept here.
    pub fn render(mut self, record: Option<&ProcessRecord>, selector: &Selector) -> Report {
        match record {
            Some(record) => self.render_record(record),
            None => match selector {
                Selector::ByPid(pid) => {
                    self.push_line(format_args!("Error: Process with ID {pid} not found."));
                }
                Selector::ByName(name) => {
                    self.push_line(format_args!("Error: Process with name {name} not found."));
                }
            },
        }
        Report { text: self.text }
    }

    fn render_record(&mut self, record: &ProcessRecord) {
        self.push_line(format_args!("Name: {}", record.name));
        self.push_line(format_args!("PID: {}", record.pid));
        self.push_line(format_args!(
            "PPID: {}",
            record.parent_pid.map_or(-1, |ppid| ppid as i64)
        ));
        self.push_line(format_args!("UID: {}", record.uid));
        self.push_line(format_args!("Path: /proc/{}", record.pid));
        self.push_line(format_args!("State: {}", record.state));
        if record.state == ProcessState::Running {
            self.push_line(format_args!("Memory usage: {} KB", record.memory_kb));
        } else {
            self.push_line(format_args!("Memory usage: State is not running."));
        }
    }

    /// Append one newline-terminated line, staying inside the byte budget.
    fn push_line(&mut self, line: fmt::Arguments<'_>) {
        if self.full {
            return;
        }
        let start = self.text.len();
        let _ = writeln!(self.text, "{line}");
        if self.text.len() > self.limit {
            self.text.truncate(start);
            self.full = true;
        }
    }
}
