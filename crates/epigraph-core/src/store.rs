//! Quote store
//!
//! The `Store` owns the authoritative in-memory quote sequence and the
//! selected category filter, and mirrors both to disk on every mutation
//! (write-through, no buffering).
//!
//! ## Lifecycle
//!
//! On first run the collection is initialized from a fixed seed set; on
//! subsequent runs it is loaded from disk. The collection is only ever
//! persisted as a whole.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = Store::open()?;
//!
//! store.add("Less is more.", "Design")?;
//! let quotes = store.filtered();
//! ```

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::Config;
use crate::models::{Quote, ALL_CATEGORY};
use crate::storage::JsonPersistence;

/// The fixed seed collection used when no persisted data exists
fn seed_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "The only way to do great work is to love what you do.",
            "Motivation",
        ),
        Quote::new(
            "Life is what happens when you're busy making other plans.",
            "Life",
        ),
        Quote::new("Get busy living or get busy dying.", "Inspiration"),
    ]
}

/// Owns the quote collection and the selected category filter
///
/// All mutating operations persist before returning, so the on-disk
/// collection always equals the in-memory one.
pub struct Store {
    /// The quote sequence, in insertion order
    quotes: Vec<Quote>,
    /// Selected category filter ("all" or a category label)
    filter: String,
    /// Most recently displayed quote; session-scoped, never persisted
    last_viewed: Option<Quote>,
    /// File persistence handler
    persistence: JsonPersistence,
    /// Configuration
    config: Config,
}

impl Store {
    /// Open the store, seeding the collection if none exists
    pub fn open() -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;
        Self::open_with_config(config)
    }

    /// Open the store with a specific configuration
    ///
    /// A missing collection file is the expected first-run state and
    /// initializes the seed set; a malformed file is an error.
    pub fn open_with_config(config: Config) -> Result<Self> {
        let persistence = JsonPersistence::new(config.clone());

        let quotes = match persistence
            .load_quotes()
            .context("Failed to load quote collection")?
        {
            Some(quotes) => quotes,
            None => {
                debug!("No quote collection found, initializing seed set");
                let quotes = seed_quotes();
                persistence
                    .save_quotes(&quotes)
                    .context("Failed to save seed collection")?;
                quotes
            }
        };

        let filter = persistence
            .load_filter()
            .context("Failed to load category filter")?
            .unwrap_or_else(|| ALL_CATEGORY.to_string());

        Ok(Self {
            quotes,
            filter,
            last_viewed: None,
            persistence,
            config,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The full quote sequence, in insertion order
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Number of quotes in the collection
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Persist the current collection, overwriting the stored one
    pub fn save(&mut self) -> Result<()> {
        self.persistence
            .save_quotes(&self.quotes)
            .context("Failed to save quote collection")
    }

    /// Add a quote from user input
    ///
    /// Text and category are trimmed and must both be non-empty; otherwise
    /// a `ValidationError` is signaled and the collection is unchanged.
    /// On success the new quote is appended and the collection persisted.
    pub fn add(&mut self, text: &str, category: &str) -> Result<Quote> {
        let quote = Quote::from_input(text, category)?;

        self.quotes.push(quote.clone());
        self.save()?;

        Ok(quote)
    }

    /// Distinct categories in order of first appearance
    ///
    /// The "all" sentinel is always the first entry.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORY.to_string()];

        for quote in &self.quotes {
            if !categories.contains(&quote.category) {
                categories.push(quote.category.clone());
            }
        }

        categories
    }

    /// Select a category filter and persist the selection
    ///
    /// Any value is accepted, even one absent from `categories()` - a
    /// previously selected category may have disappeared from the
    /// collection since the filter was last set.
    pub fn set_filter(&mut self, value: &str) -> Result<()> {
        self.filter = value.to_string();
        self.persistence
            .save_filter(&self.filter)
            .context("Failed to save category filter")
    }

    /// The selected category filter
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Quotes matching the selected filter
    ///
    /// All quotes when the filter is "all", otherwise those whose category
    /// matches exactly (case-sensitive).
    pub fn filtered(&self) -> Vec<Quote> {
        if self.filter == ALL_CATEGORY {
            self.quotes.clone()
        } else {
            self.quotes
                .iter()
                .filter(|q| q.category == self.filter)
                .cloned()
                .collect()
        }
    }

    /// Replace the whole collection and persist once
    ///
    /// Used by reconciliation, which rewrites the sequence in one pass.
    pub fn replace_all(&mut self, quotes: Vec<Quote>) -> Result<()> {
        self.quotes = quotes;
        self.save()
    }

    /// Append a batch of imported quotes and persist once
    ///
    /// No de-duplication against existing entries; returns the number of
    /// quotes appended.
    pub fn import_quotes(&mut self, quotes: Vec<Quote>) -> Result<usize> {
        let count = quotes.len();
        self.quotes.extend(quotes);
        self.save()?;
        Ok(count)
    }

    /// Record the quote most recently shown to the user
    ///
    /// Session-scoped: kept in memory only and gone when the process ends.
    pub fn record_viewed(&mut self, quote: Quote) {
        self.last_viewed = Some(quote);
    }

    /// The quote most recently shown this session, if any
    pub fn last_viewed(&self) -> Option<&Quote> {
        self.last_viewed.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValidationError;
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        Config {
            data_dir: temp_dir.path().to_path_buf(),
            ..Config::default()
        }
    }

    fn persisted_quotes(config: &Config) -> Vec<Quote> {
        let content = std::fs::read_to_string(config.quotes_path()).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    #[test]
    fn test_open_seeds_new_store() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        let store = Store::open_with_config(config.clone()).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.filter(), "all");
        // Seed set is persisted immediately
        assert_eq!(persisted_quotes(&config), store.quotes());
    }

    #[test]
    fn test_open_loads_existing_store() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        {
            let mut store = Store::open_with_config(config.clone()).unwrap();
            store.add("Less is more.", "Design").unwrap();
        }

        // Reopen - should load existing data, not re-seed
        let store = Store::open_with_config(config).unwrap();
        assert_eq!(store.len(), 4);
        assert_eq!(store.quotes()[3], Quote::new("Less is more.", "Design"));
    }

    #[test]
    fn test_add_persists_each_quote() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        let mut store = Store::open_with_config(config.clone()).unwrap();

        for i in 0..5 {
            let before = store.len();
            store.add(&format!("Quote {}", i), "Test").unwrap();
            assert_eq!(store.len(), before + 1);
            // Write-through: persisted collection equals in-memory
            assert_eq!(persisted_quotes(&config).len(), store.len());
        }
    }

    #[test]
    fn test_add_trims_input() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = Store::open_with_config(test_config(&temp_dir)).unwrap();

        let quote = store.add("  Less is more.  ", " Design ").unwrap();
        assert_eq!(quote.text, "Less is more.");
        assert_eq!(quote.category, "Design");
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = Store::open_with_config(test_config(&temp_dir)).unwrap();

        let before = store.len();
        let err = store.add("  ", "Design").unwrap_err();

        assert!(err.downcast_ref::<ValidationError>().is_some());
        assert_eq!(store.len(), before);
    }

    #[test]
    fn test_add_rejects_blank_category() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = Store::open_with_config(test_config(&temp_dir)).unwrap();

        let before = store.len();
        let err = store.add("Less is more.", "").unwrap_err();

        assert!(err.downcast_ref::<ValidationError>().is_some());
        assert_eq!(store.len(), before);
    }

    #[test]
    fn test_categories_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = Store::open_with_config(test_config(&temp_dir)).unwrap();

        // Seed categories in insertion order, "all" first
        assert_eq!(
            store.categories(),
            vec!["all", "Motivation", "Life", "Inspiration"]
        );

        // A new category appends exactly one entry
        store.add("Less is more.", "Design").unwrap();
        assert_eq!(
            store.categories(),
            vec!["all", "Motivation", "Life", "Inspiration", "Design"]
        );

        // A repeated category adds nothing
        store.add("Form follows function.", "Design").unwrap();
        assert_eq!(store.categories().len(), 5);
    }

    #[test]
    fn test_filtered_all_returns_everything_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = Store::open_with_config(test_config(&temp_dir)).unwrap();
        store.add("Less is more.", "Design").unwrap();

        let filtered = store.filtered();
        assert_eq!(filtered.as_slice(), store.quotes());
    }

    #[test]
    fn test_filtered_by_category() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = Store::open_with_config(test_config(&temp_dir)).unwrap();
        store.add("Less is more.", "Design").unwrap();
        store.add("Form follows function.", "Design").unwrap();

        store.set_filter("Design").unwrap();

        let filtered = store.filtered();
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|q| q.category == "Design"));
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = Store::open_with_config(test_config(&temp_dir)).unwrap();

        store.set_filter("motivation").unwrap();
        assert!(store.filtered().is_empty());
    }

    #[test]
    fn test_filter_persists_across_reopens() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        {
            let mut store = Store::open_with_config(config.clone()).unwrap();
            store.set_filter("Life").unwrap();
        }

        let store = Store::open_with_config(config).unwrap();
        assert_eq!(store.filter(), "Life");
    }

    #[test]
    fn test_filter_accepts_unknown_category() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = Store::open_with_config(test_config(&temp_dir)).unwrap();

        // A category removed since the filter was last set is tolerated
        store.set_filter("NoSuchCategory").unwrap();
        assert_eq!(store.filter(), "NoSuchCategory");
        assert!(store.filtered().is_empty());
    }

    #[test]
    fn test_replace_all_persists_once() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        let mut store = Store::open_with_config(config.clone()).unwrap();

        let replacement = vec![Quote::new("Only", "One")];
        store.replace_all(replacement.clone()).unwrap();

        assert_eq!(store.quotes(), replacement.as_slice());
        assert_eq!(persisted_quotes(&config), replacement);
    }

    #[test]
    fn test_import_quotes_appends_without_dedup() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        let mut store = Store::open_with_config(config.clone()).unwrap();

        let batch = vec![
            Quote::new("Get busy living or get busy dying.", "Inspiration"),
            Quote::new("Less is more.", "Design"),
        ];
        let count = store.import_quotes(batch).unwrap();

        assert_eq!(count, 2);
        // Duplicate of a seed quote is kept
        assert_eq!(store.len(), 5);
        assert_eq!(persisted_quotes(&config).len(), 5);
    }

    #[test]
    fn test_last_viewed_is_session_scoped() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        {
            let mut store = Store::open_with_config(config.clone()).unwrap();
            assert!(store.last_viewed().is_none());

            let quote = store.quotes()[0].clone();
            store.record_viewed(quote.clone());
            assert_eq!(store.last_viewed(), Some(&quote));
        }

        // A new session starts with no last-viewed quote
        let store = Store::open_with_config(config).unwrap();
        assert!(store.last_viewed().is_none());
    }

    #[test]
    fn test_malformed_collection_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        std::fs::write(config.quotes_path(), "\"just a string\"").unwrap();

        // A corrupt file must not be silently re-seeded
        assert!(Store::open_with_config(config).is_err());
    }
}
