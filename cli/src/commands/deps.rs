//! `deps`: transitive dependencies of one component

use anyhow::{Context, Result};
use bower_finder::BowerFinder;
use std::io::Write;

use super::emit;
use crate::types::OutputFormat;

pub fn run<W: Write>(
    finder: &BowerFinder,
    name: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let dependencies = finder
        .get_component_dependencies(name)
        .with_context(|| format!("Failed to resolve dependencies of {}", name))?;

    let lines = dependencies
        .iter()
        .map(|(dependency, version)| format!("{} {}", dependency, version));
    emit(out, format, &dependencies, lines)
}
