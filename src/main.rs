//! typebridge CLI - resolve source → replicate → target type mappings from
//! vendor documentation tables.

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

use typebridge_lib::catalog::MappingStore;
use typebridge_lib::commands;
use typebridge_lib::db::parse;
use typebridge_lib::jobs::ScrapeProgress;
use typebridge_lib::scrape::HttpFetcher;
use typebridge_lib::AppConfig;

#[derive(Parser)]
#[command(name = "typebridge")]
#[command(about = "Condition-aware database type mapping from vendor documentation")]
#[command(version)]
struct Cli {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the mapping catalog path
    #[arg(long)]
    mappings_file: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the source and target databases in the catalog
    List,

    /// Resolve a source database against a target database
    Combine {
        #[arg(long)]
        source: String,

        #[arg(long)]
        target: String,

        /// Re-scrape the documentation pages first
        #[arg(long)]
        refresh: bool,
    },

    /// Re-scrape every configured documentation page
    Scrape,

    /// Show how a single mapping cell is split into guarded branches
    Parse {
        /// Cell text; a literal `\n` is read as a line break
        text: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.mappings_file {
        config.mappings_file = path;
    }
    let store = MappingStore::new(config.mappings_file.clone());

    match cli.command {
        Commands::List => print_json(&commands::list_databases(&store).map_err(|e| anyhow!(e))?),
        Commands::Combine {
            source,
            target,
            refresh,
        } => {
            let result = if refresh {
                let fetcher = HttpFetcher::new(&config).context("Failed to build HTTP client")?;
                let progress = ScrapeProgress::new();
                commands::update_mappings_and_get_combined_table(
                    &store, &fetcher, &config, &progress, &source, &target,
                )
                .await
            } else {
                commands::get_combined_table(&store, &source, &target)
            };
            let table = result.map_err(|e| anyhow!(e))?;

            let unresolved = table.table_data.iter().filter(|r| !r.is_resolved()).count();
            if unresolved > 0 {
                log::warn!(
                    "{} of {} rows have no target type",
                    unresolved,
                    table.table_data.len()
                );
            }
            print_json(&table)
        }
        Commands::Scrape => {
            let fetcher = HttpFetcher::new(&config).context("Failed to build HTTP client")?;
            let progress = ScrapeProgress::new();
            let catalog = commands::refresh_mappings(&store, &fetcher, &config, &progress)
                .await
                .map_err(|e| anyhow!(e))?;
            let snapshot = commands::get_progress(&progress);
            log::info!(
                "Scraped {}/{} pages: {} sources, {} targets",
                snapshot.completed,
                snapshot.total,
                catalog.sources.len(),
                catalog.targets.len()
            );
            Ok(())
        }
        Commands::Parse { text } => print_json(&parse(&text.replace("\\n", "\n"))),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
