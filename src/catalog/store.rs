use std::fs;
use std::path::{Path, PathBuf};

use crate::db::schema::MappingCatalog;
use crate::error::{MapperError, Result};

/// Persists the scraped [`MappingCatalog`] as a single pretty-printed JSON file.
pub struct MappingStore {
    path: PathBuf,
}

impl MappingStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the catalog. A missing file is `NotFound`, not an empty catalog.
    pub fn load(&self) -> Result<MappingCatalog> {
        if !self.path.exists() {
            return Err(MapperError::NotFound(self.path.display().to_string()));
        }
        let json = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Write the catalog, replacing any previous file.
    pub fn save(&self, catalog: &MappingCatalog) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(catalog)?;
        fs::write(&self.path, json)?;
        log::info!("Mapping catalog written to {}", self.path.display());
        Ok(())
    }
}
