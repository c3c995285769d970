//! Import/export command handlers

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use epigraph_core::{export_all, import_all, Store, EXPORT_FILE_NAME};

use crate::output::Output;

/// Export the whole collection to a JSON file
pub fn export(store: &Store, file: Option<PathBuf>, output: &Output) -> Result<()> {
    let path = file.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));

    let blob = export_all(store)?;
    fs::write(&path, blob)
        .with_context(|| format!("Failed to write export file {:?}", path))?;

    output.success(&format!(
        "Exported {} quote(s) to {}",
        store.len(),
        path.display()
    ));

    Ok(())
}

/// Import quotes from a JSON file
///
/// All-or-nothing: a malformed file imports nothing.
pub fn import(store: &mut Store, file: &Path, output: &Output) -> Result<()> {
    let blob = fs::read_to_string(file)
        .with_context(|| format!("Failed to read import file {:?}", file))?;

    let count = import_all(store, &blob)?;

    output.success(&format!("Imported {} quote(s)", count));
    output.message(&format!("  Collection now holds {} quote(s)", store.len()));

    Ok(())
}
