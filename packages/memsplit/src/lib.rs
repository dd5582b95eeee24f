//! memsplit - Split word-wide memory image files into byte lanes.
//!
//! A memory image text file holds one 32-bit word per line as eight hex
//! digits. Memories built from four byte-wide blocks need one image per
//! byte lane. This crate writes those four images: lane 0 gets the last
//! byte of every word, lane 3 the first.
//!
//! # Example
//!
//! ```
//! use memsplit::record::{reassemble, split_record};
//!
//! let lanes = split_record("abcdef12");
//! assert_eq!(lanes, ["12", "ef", "cd", "ab"]);
//! assert_eq!(reassemble(&lanes), "abcdef12");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Lane layout constants
//! - [`error`]: Error types and Result alias
//! - [`naming`]: Output filename derivation
//! - [`record`]: Slicing a record into lane fragments
//! - [`splitter`]: File-level split driver
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod naming;
pub mod record;
pub mod splitter;

// Re-export main functions
pub use splitter::{split_file, split_records, RecordStats, SplitSummary};

// Re-export commonly used items
pub use error::{RecordError, Result, SplitError};
pub use naming::OutputPaths;
