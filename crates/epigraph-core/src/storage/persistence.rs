//! Quote collection persistence
//!
//! Handles saving and loading the quote collection and the category filter
//! selection to/from the filesystem. Uses atomic writes (write to temp file,
//! then rename) to prevent corruption.
//!
//! Storage location: `~/.local/share/epigraph/` (configurable via `Config`)
//!
//! Files:
//! - `quotes.json` - The full quote collection as a JSON array
//! - `category_filter` - The selected category filter, a single string

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::models::Quote;

use super::error::{StorageError, StorageResult};

/// File-backed persistence for the quote collection
///
/// Every save overwrites the whole collection; there is no partial or
/// incremental write path.
pub struct JsonPersistence {
    config: Config,
}

impl JsonPersistence {
    /// Create a new persistence handler with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check if a quote collection exists on disk
    pub fn exists(&self) -> bool {
        self.config.quotes_path().exists()
    }

    /// Save the full quote collection, overwriting any previous content
    pub fn save_quotes(&self, quotes: &[Quote]) -> StorageResult<()> {
        let path = self.config.quotes_path();
        let json = serde_json::to_string_pretty(quotes).map_err(|e| {
            StorageError::InvalidFormat {
                path: path.clone(),
                source: e,
            }
        })?;

        atomic_write(&path, json.as_bytes())
    }

    /// Load the quote collection from disk
    ///
    /// Returns `None` if the collection file doesn't exist. Absence is a
    /// valid initial state, not an error.
    pub fn load_quotes(&self) -> StorageResult<Option<Vec<Quote>>> {
        let path = self.config.quotes_path();

        if !path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&path).map_err(|e| StorageError::from_io(e, path.clone()))?;

        let quotes = serde_json::from_str(&content).map_err(|e| StorageError::InvalidFormat {
            path: path.clone(),
            source: e,
        })?;

        Ok(Some(quotes))
    }

    /// Save the selected category filter
    pub fn save_filter(&self, filter: &str) -> StorageResult<()> {
        atomic_write(&self.config.filter_path(), filter.as_bytes())
    }

    /// Load the selected category filter
    ///
    /// Returns `None` if no filter has been persisted yet.
    pub fn load_filter(&self) -> StorageResult<Option<String>> {
        let path = self.config.filter_path();

        if !path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&path).map_err(|e| StorageError::from_io(e, path.clone()))?;

        Ok(Some(content.trim().to_string()))
    }

    /// Delete all stored data
    ///
    /// Removes the quote collection and the filter selection.
    /// Use with caution!
    pub fn delete_all(&self) -> StorageResult<()> {
        let paths = [self.config.quotes_path(), self.config.filter_path()];

        for path in paths {
            if path.exists() {
                fs::remove_file(&path).map_err(|e| StorageError::from_io(e, path.clone()))?;
            }
        }

        Ok(())
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
///
/// This ensures the target file is never left in a partially-written state.
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::CreateDirectory {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    // Create temp file in the same directory (for atomic rename)
    let temp_path = path.with_extension("tmp");

    let mut file =
        File::create(&temp_path).map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    file.write_all(data)
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| StorageError::from_io(e, path.to_path_buf()))?;

    Ok(())
}
