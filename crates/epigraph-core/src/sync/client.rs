//! HTTP client for the remote quote endpoint
//!
//! The endpoint is a plain collection resource: GET returns a JSON list of
//! items, POST accepts a JSON body for one quote. No authentication.

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::models::Quote;

use super::remote::{map_remote_items, RemoteItem, RemotePost};

/// Client for the remote collection endpoint
pub struct SyncClient {
    /// Collection resource URL
    url: String,
    /// Shared HTTP client
    http: reqwest::Client,
}

impl SyncClient {
    /// Create a new client for the given endpoint URL
    pub fn new(url: impl Into<String>) -> Self {
        // No request deadline: a failed or slow cycle is simply a no-op
        // that waits for the next timer tick.
        Self {
            url: url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// The endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the remote collection and map it into quotes
    ///
    /// Network or parse failure is an error for the caller to log; no
    /// local state is touched here.
    pub async fn fetch_remote(&self) -> Result<Vec<Quote>> {
        debug!("Fetching remote quotes from {}", self.url);

        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch remote collection from {}", self.url))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Remote endpoint {} returned status {}",
                self.url,
                response.status()
            );
        }

        let items: Vec<RemoteItem> = response
            .json()
            .await
            .context("Failed to parse remote collection")?;

        Ok(map_remote_items(items))
    }

    /// Send a locally added quote to the remote endpoint
    pub async fn push(&self, quote: &Quote) -> Result<()> {
        debug!("Pushing quote to {}", self.url);

        let response = self
            .http
            .post(&self.url)
            .json(&RemotePost::from_quote(quote))
            .send()
            .await
            .with_context(|| format!("Failed to post quote to {}", self.url))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Remote endpoint {} returned status {}",
                self.url,
                response.status()
            );
        }

        Ok(())
    }

    /// Fire-and-forget push
    ///
    /// Failure is logged only - never retried, never surfaced to the store.
    pub async fn push_quiet(&self, quote: &Quote) {
        if let Err(e) = self.push(quote).await {
            warn!("Failed to push quote to remote: {:#}", e);
        }
    }
}
