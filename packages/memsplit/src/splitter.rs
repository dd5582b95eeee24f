//! Splitting a memory image file into its byte-lane files.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{RecordError, Result, SplitError};
use crate::naming::OutputPaths;
use crate::record::{is_short, split_record};

/// Counters collected while streaming records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordStats {
    /// Records written to every lane.
    pub records: usize,
    /// Records shorter than a full word.
    pub short_records: usize,
}

/// Outcome of a successful [`split_file`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSummary {
    /// The memory image that was split.
    pub input: PathBuf,
    /// Lane files written next to the input.
    pub outputs: OutputPaths,
    /// Records written to every lane.
    pub records: usize,
    /// Records shorter than a full word.
    pub short_records: usize,
}

/// Split `input` into four lane files next to it.
///
/// Output names are derived with [`OutputPaths::derive`] before anything is
/// opened, so a malformed name never touches the filesystem. The input is
/// opened before the outputs are created; a missing input leaves no output
/// files behind. Existing outputs are truncated.
///
/// Outputs written before a failure are left on disk as they are.
///
/// # Arguments
/// * `input` - Path to the memory image text file
///
/// # Returns
/// A `SplitSummary` with the output paths and record counts
pub fn split_file(input: &Path) -> Result<SplitSummary> {
    let outputs = OutputPaths::derive(input)?;

    info!(input = %input.display(), "Splitting memory image");

    let reader = File::open(input).map(BufReader::new).map_err(|source| {
        SplitError::OpenInput {
            path: input.to_path_buf(),
            source,
        }
    })?;

    let mut writers = create_outputs(&outputs)?;

    let stats = split_records(reader, &mut writers).map_err(|e| match e {
        RecordError::Read { line, source } => SplitError::Read {
            path: input.to_path_buf(),
            line,
            source,
        },
        RecordError::Write { lane, source } => SplitError::Write {
            path: outputs.lane(lane).map(Path::to_path_buf).unwrap_or_default(),
            source,
        },
    })?;

    // BufWriter ignores flush errors on drop
    for (writer, path) in writers.iter_mut().zip(outputs.iter()) {
        writer.flush().map_err(|source| SplitError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    info!(
        records = stats.records,
        short_records = stats.short_records,
        "Split complete"
    );

    Ok(SplitSummary {
        input: input.to_path_buf(),
        outputs,
        records: stats.records,
        short_records: stats.short_records,
    })
}

/// Create (truncating) every lane output, in lane order.
///
/// Stops at the first failure; lanes created before it stay on disk.
fn create_outputs(outputs: &OutputPaths) -> Result<Vec<BufWriter<File>>> {
    outputs
        .iter()
        .map(|path| -> Result<BufWriter<File>> {
            let file = File::create(path).map_err(|source| SplitError::CreateOutput {
                path: path.to_path_buf(),
                source,
            })?;
            debug!(output = %path.display(), "Created lane output");
            Ok(BufWriter::new(file))
        })
        .collect()
}

/// Stream records from `reader` and append each lane fragment to its writer.
///
/// `writers` holds one writer per lane, in lane order; fragments for lanes
/// without a writer are dropped. Line terminators (`\n`, `\r\n`) are dropped before slicing and every
/// fragment is written with a single `\n`, so each writer receives exactly
/// one line per input line. Writers are not flushed.
pub fn split_records<R, W>(
    reader: R,
    writers: &mut [W],
) -> std::result::Result<RecordStats, RecordError>
where
    R: BufRead,
    W: Write,
{
    let mut stats = RecordStats::default();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| RecordError::Read {
            line: line_number,
            source,
        })?;

        if is_short(&line) {
            warn!(
                line = line_number,
                length = line.chars().count(),
                "Record shorter than a full word; missing bytes left empty"
            );
            stats.short_records += 1;
        }

        for (lane, (writer, fragment)) in writers.iter_mut().zip(split_record(&line)).enumerate() {
            writeln!(writer, "{fragment}").map_err(|source| RecordError::Write { lane, source })?;
        }

        stats.records += 1;
    }

    Ok(stats)
}
