//! Periodic sync service
//!
//! Runs the fetch-then-reconcile cycle: once at startup, then on a fixed
//! timer for the lifetime of the process. A failed cycle is logged and
//! leaves the store untouched; there is no retry, no backoff, no stop
//! condition short of process termination.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::{watch, Mutex};
use tracing::{info, warn};

use crate::config::Config;
use crate::models::Quote;
use crate::store::Store;

use super::client::SyncClient;
use super::reconcile::{merge_remote, MergeOutcome};

/// Sync cycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    /// No cycle in progress
    Idle,
    /// A fetch-then-reconcile cycle is running
    Syncing,
}

/// Result of one completed sync cycle
#[derive(Debug, Clone, Copy)]
pub struct SyncReport {
    /// Remote quotes fetched this cycle
    pub fetched: usize,
    /// What reconciliation did to the local sequence
    pub outcome: MergeOutcome,
}

/// Runs sync cycles against the remote endpoint
pub struct SyncService {
    /// HTTP client for the endpoint
    client: SyncClient,
    /// Time between periodic cycles
    interval: Duration,
    /// Current cycle status
    status: watch::Sender<SyncStatus>,
    /// Status receiver for external monitoring
    status_rx: watch::Receiver<SyncStatus>,
}

impl SyncService {
    /// Create a service for the given client and interval
    pub fn new(client: SyncClient, interval: Duration) -> Self {
        let (status_tx, status_rx) = watch::channel(SyncStatus::Idle);

        Self {
            client,
            interval,
            status: status_tx,
            status_rx,
        }
    }

    /// Build a service from configuration
    ///
    /// Returns `None` when sync is disabled or no endpoint URL is set.
    pub fn from_config(config: &Config) -> Option<Self> {
        if !config.sync_enabled {
            return None;
        }
        let url = config.sync_url.as_deref()?;

        Some(Self::new(
            SyncClient::new(url),
            Duration::from_secs(config.sync_interval_secs),
        ))
    }

    /// The client used for remote access
    pub fn client(&self) -> &SyncClient {
        &self.client
    }

    /// Get the current cycle status
    pub fn status(&self) -> SyncStatus {
        *self.status_rx.borrow()
    }

    /// Subscribe to status changes
    pub fn subscribe_status(&self) -> watch::Receiver<SyncStatus> {
        self.status_rx.clone()
    }

    /// Run one fetch-then-reconcile cycle
    ///
    /// On failure the store is left at its last-known-good state and the
    /// status returns to `Idle` either way.
    pub async fn sync_once(&self, store: &mut Store) -> Result<SyncReport> {
        self.set_status(SyncStatus::Syncing);

        let result = self.cycle(store).await;

        self.set_status(SyncStatus::Idle);
        match &result {
            Ok(report) => info!(
                "Sync complete: fetched {}, added {}, replaced {}",
                report.fetched, report.outcome.added, report.outcome.replaced
            ),
            Err(e) => warn!("Sync failed: {:#}", e),
        }

        result
    }

    async fn cycle(&self, store: &mut Store) -> Result<SyncReport> {
        let remote = self.client.fetch_remote().await?;
        apply_remote(store, remote)
    }

    /// Run the periodic sync loop
    ///
    /// The first cycle starts immediately; afterwards one cycle runs per
    /// interval tick until the process ends. Cycles are serialized through
    /// the store lock, so a cycle and a concurrent user edit never
    /// interleave mid-mutation.
    pub async fn run(self, store: Arc<Mutex<Store>>) {
        let mut interval = tokio::time::interval(self.interval);

        loop {
            interval.tick().await;
            let mut store = store.lock().await;
            // Failure is already logged by sync_once; the cycle is a no-op.
            let _ = self.sync_once(&mut store).await;
        }
    }

    fn set_status(&self, status: SyncStatus) {
        let _ = self.status.send(status);
    }
}

/// Reconcile fetched remote quotes into the store
///
/// Persists once when the merge changed anything, not at all otherwise.
pub fn apply_remote(store: &mut Store, remote: Vec<Quote>) -> Result<SyncReport> {
    let fetched = remote.len();

    let mut quotes = store.quotes().to_vec();
    let outcome = merge_remote(&mut quotes, remote);

    if outcome.changed() {
        store.replace_all(quotes)?;
    }

    Ok(SyncReport { fetched, outcome })
}
