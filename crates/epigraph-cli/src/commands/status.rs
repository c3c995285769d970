//! Status command handler

use anyhow::Result;

use epigraph_core::Store;

use crate::output::{Output, OutputFormat};

/// Show status information
pub fn show(store: &Store, output: &Output) -> Result<()> {
    let config = store.config();
    let categories = store.categories();

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "quotes": store.len(),
                    "categories": categories.len() - 1,
                    "filter": store.filter(),
                    "sync_enabled": config.sync_enabled,
                    "sync_url": config.sync_url,
                    "sync_interval_secs": config.sync_interval_secs,
                    "data_dir": config.data_dir
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", store.len());
        }
        OutputFormat::Human => {
            println!("epigraph Status");
            println!("===============");
            println!();
            println!("Collection:");
            println!("  Quotes:     {}", store.len());
            // "all" is a sentinel, not a category
            println!("  Categories: {}", categories.len() - 1);
            println!("  Filter:     {}", store.filter());
            println!();
            println!("Sync:");
            println!(
                "  Status: {}",
                if config.sync_enabled {
                    "enabled"
                } else {
                    "disabled"
                }
            );
            if let Some(ref url) = config.sync_url {
                println!("  Endpoint: {}", url);
                println!("  Interval: {}s", config.sync_interval_secs);
            }
            println!();
            println!("Storage:");
            println!("  Location: {}", config.data_dir.display());
        }
    }

    Ok(())
}
