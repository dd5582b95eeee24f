//! Output filename derivation.
//!
//! The lane digit goes in front of the extension, where the extension is
//! everything after the *first* `.` of the file name: `image.v2.hex`
//! becomes `image0.v2.hex`, not `image.v20.hex`. This differs from
//! `Path::extension`, which splits on the last dot.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::config::LANE_COUNT;
use crate::error::{Result, SplitError};

/// The four output paths derived from one input path, indexed by lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    paths: [PathBuf; LANE_COUNT],
}

impl OutputPaths {
    /// Derive the lane output paths for `input`.
    ///
    /// Only the file name component is split; dots in parent directories
    /// are left alone. Outputs land next to the input. On Unix the name is
    /// split as raw bytes, so names that are not valid UTF-8 keep their
    /// bytes in every output name.
    ///
    /// # Returns
    /// * `Ok(OutputPaths)` for a file name containing at least one `.`
    /// * `Err(SplitError::MissingExtension)` otherwise
    ///
    /// # Examples
    /// ```
    /// use std::path::Path;
    /// use memsplit::naming::OutputPaths;
    ///
    /// let outputs = OutputPaths::derive(Path::new("mem.txt")).unwrap();
    /// assert_eq!(outputs.lane(0), Some(Path::new("mem0.txt")));
    /// assert_eq!(outputs.lane(3), Some(Path::new("mem3.txt")));
    /// assert_eq!(outputs.lane(4), None);
    ///
    /// assert!(OutputPaths::derive(Path::new("memfile")).is_err());
    /// ```
    pub fn derive(input: &Path) -> Result<Self> {
        let missing = || SplitError::MissingExtension(input.to_path_buf());

        let file_name = input.file_name().ok_or_else(missing)?;
        let (stem, extension) = split_first_dot(file_name).ok_or_else(missing)?;
        let parent = input.parent().unwrap_or(Path::new(""));

        let paths = std::array::from_fn(|lane| {
            let mut name = OsString::with_capacity(file_name.len() + 1);
            name.push(stem);
            name.push(lane.to_string());
            name.push(".");
            name.push(extension);
            parent.join(name)
        });

        Ok(Self { paths })
    }

    /// Output path for `lane`, or `None` past the last lane.
    #[must_use]
    pub fn lane(&self, lane: usize) -> Option<&Path> {
        self.paths.get(lane).map(PathBuf::as_path)
    }

    /// Iterate over the output paths in lane order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    /// All output paths in lane order.
    #[must_use]
    pub fn as_slice(&self) -> &[PathBuf] {
        &self.paths
    }
}

/// Split a file name at its first `.` into stem and extension.
#[cfg(unix)]
fn split_first_dot(name: &OsStr) -> Option<(&OsStr, &OsStr)> {
    use std::os::unix::ffi::OsStrExt;

    let bytes = name.as_bytes();
    let dot = bytes.iter().position(|&b| b == b'.')?;
    Some((
        OsStr::from_bytes(&bytes[..dot]),
        OsStr::from_bytes(&bytes[dot + 1..]),
    ))
}

/// Split a file name at its first `.` into stem and extension.
///
/// Names that are not valid UTF-8 are treated as having no extension.
#[cfg(not(unix))]
fn split_first_dot(name: &OsStr) -> Option<(&OsStr, &OsStr)> {
    let (stem, extension) = name.to_str()?.split_once('.')?;
    Some((OsStr::new(stem), OsStr::new(extension)))
}
