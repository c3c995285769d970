//! Quote collection import/export
//!
//! Serializes the whole collection to a single JSON blob and back. Import is
//! all-or-nothing: either the entire blob parses as a list of quotes, or the
//! store is left untouched.

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::info;

use crate::models::Quote;
use crate::store::Store;

/// Fixed name for the export artifact
pub const EXPORT_FILE_NAME: &str = "quotes.json";

/// The import blob is not a well-formed list of quotes
#[derive(Error, Debug)]
#[error("import data is not a list of quotes: {source}")]
pub struct FormatError {
    #[source]
    source: serde_json::Error,
}

/// Serialize the full quote collection to a single JSON blob
///
/// The whole sequence is materialized at once; there is no chunking.
pub fn export_all(store: &Store) -> Result<String> {
    serde_json::to_string_pretty(store.quotes()).context("Failed to serialize quote collection")
}

/// Parse a JSON blob and append every quote in it to the store
///
/// Fails with `FormatError` if the blob is not a list of `{text, category}`
/// records; in that case no quote is added. No de-duplication is performed
/// against existing entries. Returns the number of quotes imported.
pub fn import_all(store: &mut Store, blob: &str) -> Result<usize> {
    let quotes: Vec<Quote> =
        serde_json::from_str(blob).map_err(|source| FormatError { source })?;

    let count = store.import_quotes(quotes)?;
    info!("Imported {} quote(s)", count);
    Ok(count)
}
