pub mod fetcher;
pub mod html;

use chrono::Utc;
use std::collections::BTreeMap;

use crate::catalog::UrlSpec;
use crate::db::schema::{DatabaseMappings, MappingCatalog, MappingEntry};
use crate::error::Result;
use crate::jobs::ScrapeProgress;

pub use fetcher::{DocumentFetcher, HttpFetcher};
pub use html::extract_mappings_from_html;

/// Fetch one documentation page and read its mapping table.
pub async fn scrape_page(fetcher: &dyn DocumentFetcher, url: &str) -> Result<Vec<MappingEntry>> {
    let html = fetcher.fetch(url).await?;
    Ok(extract_mappings_from_html(&html))
}

/// Scrape every source and target page into a fresh catalog.
///
/// Pages that fail are logged and left out; the batch always completes.
/// `progress` is reset to the number of URLs and advanced once per URL.
pub async fn update_mappings(
    fetcher: &dyn DocumentFetcher,
    sources: &[UrlSpec],
    targets: &[UrlSpec],
    progress: &ScrapeProgress,
) -> MappingCatalog {
    progress.reset(sources.len() + targets.len());

    let mut catalog = MappingCatalog::default();

    scrape_side(fetcher, sources, "source", &mut catalog.sources, progress).await;
    log::info!("Scraping of source databases is now completed.");

    scrape_side(fetcher, targets, "target", &mut catalog.targets, progress).await;
    log::info!("Scraping of target databases is now completed.");

    catalog.updated_at = Some(Utc::now().to_rfc3339());
    progress.finish();
    catalog
}

async fn scrape_side(
    fetcher: &dyn DocumentFetcher,
    specs: &[UrlSpec],
    side: &str,
    into: &mut BTreeMap<String, DatabaseMappings>,
    progress: &ScrapeProgress,
) {
    for spec in specs {
        match scrape_page(fetcher, &spec.url).await {
            Ok(data_types) => {
                log::info!(
                    "Scraping {} was done successfully, {} will be included in the {} list.",
                    spec.url,
                    spec.db_type,
                    side
                );
                into.insert(
                    spec.db_type.clone(),
                    DatabaseMappings {
                        data_types,
                        url: spec.url.clone(),
                    },
                );
            }
            Err(e) => log::warn!("Error processing {} {}: {}", side, spec.url, e),
        }
        progress.advance();
    }
}
