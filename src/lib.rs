//! Batch Report Library
//!
//! This library stores the output of a source-code analysis pass as a directory
//! of length-delimited protobuf records, one file per (record kind, component)
//! pair, and reads it back lazily for downstream consumers.

pub mod cli;
pub mod io;
pub mod models;
pub mod services;

pub use io::codec::RecordIter;
pub use io::reader::{BatchReportReader, SourceLines};
pub use io::structure::{Domain, FileStructure};
pub use io::writer::BatchReportWriter;

use std::path::PathBuf;
use std::result;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// A file the protocol requires is not present in the report
    MissingFile { kind: &'static str, path: PathBuf },
    /// A frame could not be decoded
    Decode { path: PathBuf, reason: String },
    InvalidInput(String),
}

impl Error {
    /// Whether the report itself is corrupt or incomplete, as opposed to an
    /// environmental failure.
    #[must_use]
    pub fn is_protocol_violation(&self) -> bool {
        matches!(self, Error::MissingFile { .. } | Error::Decode { .. })
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::MissingFile { kind, path } => {
                write!(f, "Missing {kind} file: {}", path.display())
            }
            Error::Decode { path, reason } => {
                write!(f, "Corrupt record in {}: {reason}", path.display())
            }
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Default size of the buffers wrapping report files.
const DEFAULT_BUFFER_CAPACITY: usize = 64 * 1024;

/// Options shared by report writers and readers
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Capacity of the `BufWriter`/`BufReader` around each file
    pub buffer_capacity: usize,
    /// Call `sync_data` on every file before a write operation returns
    pub sync_on_write: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            sync_on_write: false,
        }
    }
}
