//! Command-line interface for the splitter.

use std::path::{Path, PathBuf};

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;
use crate::splitter::split_file;

/// Split a word-wide memory image into four byte-lane files.
///
/// For NAME.EXT, writes NAME0.EXT (last byte of every word) through
/// NAME3.EXT (first byte) next to the input.
#[derive(Parser)]
#[command(name = "split-memfile")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Memory image text file, one 8-digit word per line (e.g., mem.txt)
    pub input: PathBuf,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    split_command(&cli.input)
}

/// Execute the split.
fn split_command(input: &Path) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(format!("Splitting {}...", input.display()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let summary = match split_file(input) {
        Ok(summary) => summary,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!(
        "{} {} into {} records per lane",
        style("Split").bold(),
        style(summary.input.display()).cyan(),
        style(summary.records).green()
    );
    if summary.short_records > 0 {
        println!(
            "  Short records: {}",
            style(summary.short_records).yellow().bold()
        );
    }
    for (lane, path) in summary.outputs.iter().enumerate() {
        println!("  Lane {lane}: {}", path.display());
    }

    Ok(())
}
