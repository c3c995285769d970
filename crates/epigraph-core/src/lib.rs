//! epigraph Core Library
//!
//! This crate provides the core functionality for epigraph, a local-first
//! quote collection with periodic sync against a remote endpoint.
//!
//! # Architecture
//!
//! - **Store**: owns the in-memory quote sequence and category filter,
//!   mirrored to disk on every mutation (write-through)
//! - **Transfer**: one-shot JSON import/export of the whole collection
//! - **Sync**: fetch-then-reconcile cycles with a remote-wins merge policy
//!
//! # Quick Start
//!
//! ```text
//! let mut store = Store::open()?;
//!
//! // Add a quote
//! store.add("Less is more.", "Design")?;
//!
//! // Query quotes
//! let quotes = store.filtered();
//! ```
//!
//! # Modules
//!
//! - `store`: quote collection and filter state (main entry point)
//! - `models`: the Quote data structure
//! - `storage`: file-backed persistence
//! - `transfer`: import/export serialization
//! - `sync`: remote reconciliation and the periodic sync service
//! - `config`: application configuration

pub mod config;
pub mod models;
pub mod storage;
pub mod store;
pub mod sync;
pub mod transfer;

pub use config::Config;
pub use models::{Quote, ValidationError, ALL_CATEGORY};
pub use storage::{JsonPersistence, StorageError};
pub use store::Store;
pub use transfer::{export_all, import_all, FormatError, EXPORT_FILE_NAME};
