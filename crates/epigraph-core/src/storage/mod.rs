//! File-backed persistence for the quote collection
//!
//! The collection and the filter selection are plain text files under the
//! data directory, written atomically on every mutation.

mod error;
mod persistence;

pub use error::{StorageError, StorageResult};
pub use persistence::JsonPersistence;
