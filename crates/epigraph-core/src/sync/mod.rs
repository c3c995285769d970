//! Remote sync
//!
//! Periodically reconciles the local quote collection against a remote
//! collection endpoint, applying a remote-wins merge policy.
//!
//! ## Cycle
//!
//! 1. GET the remote collection (fixed-size prefix, title field only)
//! 2. Map each item into a quote with the fixed "Server" category
//! 3. Merge into the local sequence, remote side winning on text match
//! 4. Persist once if anything changed
//!
//! Locally added quotes are additionally pushed to the endpoint as
//! fire-and-forget POSTs.
//!
//! ## Usage
//!
//! ```ignore
//! let service = SyncService::from_config(store.config()).unwrap();
//! service.sync_once(&mut store).await?;
//! ```

mod client;
mod reconcile;
mod remote;
mod service;

pub use client::SyncClient;
pub use reconcile::{merge_remote, MergeOutcome};
pub use remote::{RemoteItem, RemotePost, REMOTE_CATEGORY, REMOTE_FETCH_LIMIT};
pub use service::{apply_remote, SyncReport, SyncService, SyncStatus};
