//! Sync command handler

use std::sync::Arc;

use anyhow::{bail, Result};
use tokio::sync::Mutex;

use epigraph_core::sync::SyncService;
use epigraph_core::Store;

use crate::output::Output;

/// Sync with the remote endpoint
///
/// With `--watch`, keeps running a cycle per configured interval until the
/// process is terminated.
pub async fn sync(store: Store, watch: bool, output: &Output) -> Result<()> {
    let config = store.config().clone();

    if !config.sync_enabled {
        bail!(
            "Sync is not enabled. Enable it with:\n  \
             epigraph config set sync_enabled true\n  \
             epigraph config set sync_url https://your-endpoint/posts"
        );
    }

    let Some(service) = SyncService::from_config(&config) else {
        bail!(
            "Sync URL not configured. Set it with:\n  \
             epigraph config set sync_url https://your-endpoint/posts"
        );
    };

    if watch {
        output.message(&format!(
            "Syncing against {} every {}s (Ctrl-C to stop)...",
            service.client().url(),
            config.sync_interval_secs
        ));

        // Runs the immediate cycle, then the timer loop, until termination
        service.run(Arc::new(Mutex::new(store))).await;
        return Ok(());
    }

    output.message(&format!("Syncing against {}...", service.client().url()));

    let mut store = store;
    match service.sync_once(&mut store).await {
        Ok(report) => {
            if report.outcome.changed() {
                output.success(&format!(
                    "Sync complete - added {}, updated {}",
                    report.outcome.added, report.outcome.replaced
                ));
                output.message(&format!("  Collection now holds {} quote(s)", store.len()));
            } else {
                output.success("Sync complete - already up to date");
            }
            Ok(())
        }
        Err(e) => {
            output.message(&format!("Sync failed: {}", e));
            Err(e)
        }
    }
}
