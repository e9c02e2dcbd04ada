use serde::{Deserialize, Serialize};

use crate::catalog::{read_url_list, MappingStore};
use crate::config::AppConfig;
use crate::db::schema::{CombinedTable, MappingCatalog};
use crate::db::type_mapper::combine;
use crate::jobs::{ProgressSnapshot, ScrapeProgress};
use crate::scrape::{update_mappings, DocumentFetcher};

/// Database labels available on each side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatabaseLists {
    pub sources: Vec<String>,
    pub targets: Vec<String>,
}

/// Return the source and target database labels of the stored catalog.
pub fn list_databases(store: &MappingStore) -> Result<DatabaseLists, String> {
    let catalog = store.load().map_err(|e| e.to_string())?;
    Ok(DatabaseLists {
        sources: catalog.source_names(),
        targets: catalog.target_names(),
    })
}

/// Return the whole stored catalog.
pub fn get_mappings(store: &MappingStore) -> Result<MappingCatalog, String> {
    store.load().map_err(|e| e.to_string())
}

/// Resolve `source` against `target` from the stored catalog.
///
/// Unknown labels give an empty side rather than an error.
pub fn get_combined_table(
    store: &MappingStore,
    source: &str,
    target: &str,
) -> Result<CombinedTable, String> {
    let catalog = store.load().map_err(|e| e.to_string())?;
    if !catalog.sources.contains_key(source) {
        log::warn!("Source database '{}' not found in catalog", source);
    }
    if !catalog.targets.contains_key(target) {
        log::warn!("Target database '{}' not found in catalog", target);
    }
    Ok(combine(catalog.sources.get(source), catalog.targets.get(target)))
}

/// Re-scrape every configured URL and overwrite the stored catalog.
pub async fn refresh_mappings(
    store: &MappingStore,
    fetcher: &dyn DocumentFetcher,
    config: &AppConfig,
    progress: &ScrapeProgress,
) -> Result<MappingCatalog, String> {
    let sources = read_url_list(&config.sources_file);
    let targets = read_url_list(&config.targets_file);

    let catalog = update_mappings(fetcher, &sources, &targets, progress).await;
    store.save(&catalog).map_err(|e| e.to_string())?;
    Ok(catalog)
}

/// Re-scrape, then resolve `source` against `target` from the fresh catalog.
pub async fn update_mappings_and_get_combined_table(
    store: &MappingStore,
    fetcher: &dyn DocumentFetcher,
    config: &AppConfig,
    progress: &ScrapeProgress,
    source: &str,
    target: &str,
) -> Result<CombinedTable, String> {
    refresh_mappings(store, fetcher, config, progress).await?;
    get_combined_table(store, source, target)
}

pub fn get_progress(progress: &ScrapeProgress) -> ProgressSnapshot {
    progress.snapshot()
}
