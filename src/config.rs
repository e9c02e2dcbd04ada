use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the URL lists and the scraped catalog live, and how pages are fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// One documentation URL per line, optionally followed by `,<database>`.
    pub sources_file: PathBuf,
    pub targets_file: PathBuf,
    pub mappings_file: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sources_file: PathBuf::from("urls_sources.txt"),
            targets_file: PathBuf::from("urls_targets.txt"),
            mappings_file: PathBuf::from("mappings.json"),
            request_timeout_secs: 30,
            user_agent: format!("typebridge/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl AppConfig {
    /// Read a JSON config file. Missing keys fall back to the defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }
}
