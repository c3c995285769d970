//! Wire types for the remote quote endpoint
//!
//! The remote collection is a JSON list of items with a title-like field
//! and no category information. Only a fixed-size prefix of the list is
//! taken; each item maps to a quote with a fixed category label.

use serde::{Deserialize, Serialize};

use crate::models::Quote;

/// Category label assigned to quotes fetched from the remote endpoint
pub const REMOTE_CATEGORY: &str = "Server";

/// Number of items taken from the head of the remote collection
pub const REMOTE_FETCH_LIMIT: usize = 10;

/// One item of the remote collection
///
/// Other response fields (id, body, userId) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteItem {
    pub title: String,
}

impl RemoteItem {
    /// Map a remote item into a quote
    pub fn into_quote(self) -> Quote {
        Quote::new(self.title, REMOTE_CATEGORY)
    }
}

/// Map a fetched remote collection into quotes, taking the fixed prefix
pub fn map_remote_items(items: Vec<RemoteItem>) -> Vec<Quote> {
    items
        .into_iter()
        .take(REMOTE_FETCH_LIMIT)
        .map(RemoteItem::into_quote)
        .collect()
}

/// JSON body posted to the remote endpoint for a locally added quote
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePost {
    pub title: String,
    pub body: String,
    pub user_id: u32,
}

impl RemotePost {
    /// Build the post body for a quote
    pub fn from_quote(quote: &Quote) -> Self {
        Self {
            title: quote.text.clone(),
            body: quote.category.clone(),
            user_id: 1,
        }
    }
}
