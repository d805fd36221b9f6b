//! Error types for the proc-info engine.
//!
//! Activation errors prevent the endpoint from being created at all; read
//! errors are local to the one read cycle that hit them and leave every
//! other handle untouched. A selector that matches no process is *not* an
//! error here — the formatter turns it into ordinary payload text.

use std::io;
use thiserror::Error;

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, ProcInfoError>;

/// Main error type for the engine.
#[derive(Error, Debug)]
pub enum ProcInfoError {
    /// Both selector parameters, or neither, were supplied at activation.
    #[error("invalid selector: supply exactly one of a PID or a process name")]
    InvalidSelector,

    /// The report buffer could not be allocated for this read cycle.
    #[error("failed to allocate the report buffer ({requested} bytes)")]
    ResourceExhaustion { requested: usize },

    /// The payload does not fit in the caller's buffer. The read cursor is
    /// left where it was; nothing is delivered.
    #[error("caller buffer too small for the report: {needed} bytes needed, {available} available")]
    TransferFailure { needed: usize, available: usize },

    /// The live process table could not be enumerated.
    #[error("failed to enumerate the process table")]
    ProcTable(#[from] io::Error),
}

impl From<ProcInfoError> for io::Error {
    fn from(err: ProcInfoError) -> Self {
        match err {
            ProcInfoError::InvalidSelector => io::Error::new(io::ErrorKind::InvalidInput, err),
            ProcInfoError::ResourceExhaustion { .. } => {
                io::Error::new(io::ErrorKind::OutOfMemory, err)
            }
            ProcInfoError::TransferFailure { .. } => {
                io::Error::new(io::ErrorKind::InvalidInput, err)
            }
            ProcInfoError::ProcTable(source) => source,
        }
    }
}
