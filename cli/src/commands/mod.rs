//! Subcommand implementations
//!
//! Each command takes an already configured [`BowerFinder`] and writes its
//! result to the given writer, so tests can capture output without spawning
//! the binary.

pub mod deps;
pub mod files;
pub mod list;

use anyhow::{Context, Result};
use bower_finder::BowerFinder;
use serde::Serialize;
use std::io::Write;

use crate::types::OutputFormat;

/// Build a finder from the global CLI options
///
/// `components_dir` bypasses `.bowerrc` discovery entirely.
pub fn open_finder(root: Option<&str>, components_dir: Option<&str>) -> BowerFinder {
    let mut finder = BowerFinder::with_root(root.unwrap_or_default());
    if let Some(dir) = components_dir {
        finder.set_component_path(dir);
    }
    finder
}

/// Print `value` as JSON, or each of `lines` on its own line
pub(crate) fn emit<W, T>(
    out: &mut W,
    format: OutputFormat,
    value: &T,
    lines: impl IntoIterator<Item = String>,
) -> Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, value).context("Failed to serialize output")?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for line in lines {
                writeln!(out, "{}", line)?;
            }
        }
    }
    Ok(())
}
