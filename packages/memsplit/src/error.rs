//! Error types for the splitter.
//!
//! Uses the dual-error pattern: `SplitError` for library consumers with the
//! offending file path attached, and `RecordError` for the path-agnostic
//! record loop that only knows line numbers and lanes.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitError {
    /// Input file name has no `.` to insert the lane digit in front of.
    #[error("Input file name has no extension: '{}'. Expected NAME.EXT (e.g., mem.txt)", .0.display())]
    MissingExtension(PathBuf),

    /// Input file could not be opened.
    #[error("Failed to open input {}: {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output file could not be created.
    #[error("Failed to create output {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a line of the input failed.
    #[error("Failed to read line {line} of {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },

    /// Writing or flushing an output failed.
    #[error("Failed to write output {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Error raised by the record loop, before file paths are known.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Reading the given 1-based line failed.
    #[error("read failed at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    /// Writing to the given lane failed.
    #[error("write failed on lane {lane}: {source}")]
    Write {
        lane: usize,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitError>;
