//! `files`: entry-point files in load order

use anyhow::{Context, Result};
use bower_finder::{BowerFinder, ComponentNames, FileFilter};
use std::io::Write;

use super::emit;
use crate::types::OutputFormat;

/// File selection options for the `files` command
#[derive(Debug, Default, Clone)]
pub struct FilesOptions {
    /// Components to resolve; empty means the manifest's dependencies
    pub names: Vec<String>,
    /// Regular expression matched against each relative file path
    pub pattern: Option<String>,
    /// File extension shortcut, e.g. `js`
    pub extension: Option<String>,
}

impl FilesOptions {
    fn filter(&self) -> Result<FileFilter> {
        match (&self.pattern, &self.extension) {
            (Some(_), Some(_)) => anyhow::bail!("--filter and --ext cannot be combined"),
            (Some(pattern), None) => Ok(FileFilter::pattern(pattern)?),
            (None, Some(extension)) => Ok(FileFilter::extension(extension)),
            (None, None) => Ok(FileFilter::All),
        }
    }
}

pub fn run<W: Write>(
    finder: &BowerFinder,
    options: &FilesOptions,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let filter = options.filter()?;

    let files = if options.names.is_empty() {
        tracing::debug!("No components given, resolving manifest dependencies");
        finder
            .get_dependent_files_for_manifest(&filter)
            .context("Failed to resolve files for the project manifest")?
    } else {
        // Each argument may itself be a comma/semicolon separated list
        let names: ComponentNames = options
            .names
            .iter()
            .flat_map(|arg| ComponentNames::parse(arg))
            .collect();
        finder
            .get_dependent_files_for_components(names, &filter)
            .context("Failed to resolve component files")?
    };

    emit(out, format, &files, files.iter().cloned())
}
