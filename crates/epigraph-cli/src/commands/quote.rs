//! Quote command handlers

use std::time::SystemTime;

use anyhow::{Context, Result};

use epigraph_core::sync::SyncClient;
use epigraph_core::Store;

use crate::output::Output;

/// Show a random quote from the filtered collection
pub fn show(store: &mut Store, output: &Output) -> Result<()> {
    let eligible = store.filtered();
    if eligible.is_empty() {
        output.message("No quotes match the selected filter.");
        return Ok(());
    }
    let quote = eligible[random_index(eligible.len())].clone();

    output.print_quote(&quote);
    store.record_viewed(quote);

    Ok(())
}

/// Add a new quote
///
/// When sync is enabled the quote is also pushed to the remote endpoint,
/// fire-and-forget.
pub async fn add(store: &mut Store, text: &str, category: &str, output: &Output) -> Result<()> {
    let quote = store.add(text, category).context("Failed to add quote")?;

    output.success("Quote added");
    output.print_quote(&quote);

    let config = store.config();
    if config.sync_enabled {
        if let Some(ref url) = config.sync_url {
            SyncClient::new(url.as_str()).push_quiet(&quote).await;
        }
    }

    Ok(())
}

/// List quotes, honoring the selected filter unless a category is given
pub fn list(store: &Store, category: Option<String>, output: &Output) -> Result<()> {
    let quotes = match category {
        Some(ref c) => store
            .quotes()
            .iter()
            .filter(|q| q.category == *c)
            .cloned()
            .collect(),
        None => store.filtered(),
    };

    output.print_quotes(&quotes);
    Ok(())
}

/// Pseudo-random index from the clock, good enough for picking a quote
fn random_index(len: usize) -> usize {
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos() as usize;
    nanos % len
}
