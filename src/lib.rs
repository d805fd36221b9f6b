//! One-shot process information endpoint.
//!
//! Reports on a single process — selected once at activation, by PID or by
//! name — through a read-once virtual file: the first read on an open handle
//! yields the full report text, and every later read on that handle yields
//! end-of-data. Closing and reopening the endpoint starts the protocol over.
//!
//! The live process table is the host's `/proc`; records are extracted as
//! point-in-time snapshots and never outlive the read cycle that produced
//! them.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod locator;
pub mod record;
pub mod report;
pub mod selector;

// Re-export commonly used types for convenience
pub use endpoint::{InfoFile, ReadHandle};
pub use error::{ProcInfoError, Result};
pub use record::{ProcessRecord, ProcessState};
pub use selector::Selector;
