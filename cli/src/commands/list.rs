//! `list` and `path`: what is installed and where

use anyhow::{Context, Result};
use bower_finder::BowerFinder;
use serde::Serialize;
use std::io::Write;

use super::emit;
use crate::types::OutputFormat;

#[derive(Debug, Serialize)]
struct ListedComponent<'a> {
    key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    directory: &'a str,
    main: &'a [String],
}

/// Print every registry key with the directory it resolves to
pub fn run<W: Write>(finder: &BowerFinder, format: OutputFormat, out: &mut W) -> Result<()> {
    let registry = finder
        .get_installed_components()
        .context("Failed to load installed components")?;

    let listed: Vec<ListedComponent> = registry
        .iter()
        .map(|(key, component)| ListedComponent {
            key,
            name: component.name.as_deref(),
            directory: &component.directory,
            main: &component.main,
        })
        .collect();

    let lines = listed
        .iter()
        .map(|c| format!("{} {}", c.key, c.directory));
    emit(out, format, &listed, lines)
}

/// Print the resolved components directory
pub fn run_path<W: Write>(finder: &BowerFinder, format: OutputFormat, out: &mut W) -> Result<()> {
    let path = finder.get_component_path();
    emit(out, format, path, [path.to_string()])
}
