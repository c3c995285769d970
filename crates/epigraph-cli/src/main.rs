//! epigraph CLI
//!
//! Command-line interface for epigraph - a local-first quote collection
//! with periodic sync against a remote endpoint.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use epigraph_core::sync::SyncService;
use epigraph_core::Store;

mod commands;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "epigraph")]
#[command(about = "epigraph - Local-first quote collection with remote sync")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a random quote from the filtered collection
    Show,
    /// Add a new quote
    Add {
        /// The quotation text
        text: String,
        /// Category label
        category: String,
    },
    /// List quotes
    #[command(alias = "ls")]
    List {
        /// Filter by category (overrides the selected filter)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List categories
    Categories,
    /// Show or set the category filter
    Filter {
        /// Category to select ("all" disables filtering)
        value: Option<String>,
    },
    /// Export the collection to a JSON file
    Export {
        /// Output file (defaults to quotes.json)
        file: Option<PathBuf>,
    },
    /// Import quotes from a JSON file
    Import {
        /// File to import
        file: PathBuf,
    },
    /// Sync with the remote endpoint
    Sync {
        /// Keep syncing on the configured interval
        #[arg(long)]
        watch: bool,
    },
    /// Show status (collection size, sync settings)
    Status,
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, sync_url, sync_enabled, sync_interval_secs)
        key: String,
        /// Configuration value
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config commands don't need the store
    if let Commands::Config { command } = &cli.command {
        return handle_config_command(command.clone(), &output);
    }

    let mut store = Store::open()?;

    // Sync before display commands when enabled (the page-load cycle)
    let is_display = matches!(
        &cli.command,
        Commands::Show | Commands::List { .. } | Commands::Categories
    );
    if is_display {
        auto_sync(&mut store, &output).await;
    }

    match cli.command {
        Commands::Show => commands::quote::show(&mut store, &output),
        Commands::Add { text, category } => {
            commands::quote::add(&mut store, &text, &category, &output).await
        }
        Commands::List { category } => commands::quote::list(&store, category, &output),
        Commands::Categories => commands::category::list(&store, &output),
        Commands::Filter { value } => commands::category::filter(&mut store, value, &output),
        Commands::Export { file } => commands::transfer::export(&store, file, &output),
        Commands::Import { file } => commands::transfer::import(&mut store, &file, &output),
        Commands::Sync { watch } => commands::sync::sync(store, watch, &output).await,
        Commands::Status => commands::status::show(&store, &output),
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn handle_config_command(command: Option<ConfigCommands>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(output),
        Some(ConfigCommands::Set { key, value }) => commands::config::set(key, value, output),
    }
}

/// Run a quiet sync cycle if sync is enabled; failures are not fatal
async fn auto_sync(store: &mut Store, output: &Output) {
    let Some(service) = SyncService::from_config(store.config()) else {
        return;
    };

    if let Err(e) = service.sync_once(store).await {
        if !output.is_quiet() {
            eprintln!("⚠ Auto-sync failed: {}", e);
        }
    }
}

/// Initialize logging to stderr, controlled by EPIGRAPH_LOG
fn init_logging() {
    let env_filter =
        EnvFilter::try_from_env("EPIGRAPH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
