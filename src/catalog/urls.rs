use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Label given to a URL listed without a database name.
pub const UNKNOWN_DATABASE: &str = "Unknown";

/// A documentation page to scrape and the database it describes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UrlSpec {
    pub url: String,
    pub db_type: String,
}

/// Read a URL list file. Each line is `url` or `url,database`; extra fields
/// are ignored. A missing file yields an empty list.
pub fn read_url_list(path: &Path) -> Vec<UrlSpec> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_url_list(&contents),
        Err(e) => {
            log::error!("Error: {} could not be read: {}", path.display(), e);
            Vec::new()
        }
    }
}

pub fn parse_url_list(contents: &str) -> Vec<UrlSpec> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let mut parts = line.split(',');
            let url = parts.next().unwrap_or_default().trim().to_string();
            let db_type = parts
                .next()
                .map(str::trim)
                .unwrap_or(UNKNOWN_DATABASE)
                .to_string();
            UrlSpec { url, db_type }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_url_with_database() {
        let specs = parse_url_list("https://docs.example/oracle,Oracle\n");
        assert_eq!(
            specs,
            vec![UrlSpec {
                url: "https://docs.example/oracle".to_string(),
                db_type: "Oracle".to_string(),
            }]
        );
    }

    #[test]
    fn test_url_without_database() {
        let specs = parse_url_list("https://docs.example/page");
        assert_eq!(specs[0].db_type, UNKNOWN_DATABASE);
    }

    #[test]
    fn test_extra_fields_and_blank_lines() {
        let specs = parse_url_list("\nhttps://a.example,DB2,ignored\n\n  https://b.example , SAP HANA \n");
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].db_type, "DB2");
        assert_eq!(specs[1].url, "https://b.example");
        assert_eq!(specs[1].db_type, "SAP HANA");
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        assert!(read_url_list(&dir.path().join("urls_sources.txt")).is_empty());
    }

    #[test]
    fn test_read_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("urls_targets.txt");
        fs::write(&path, "https://docs.example/pg,PostgreSQL\nhttps://docs.example/x\n").unwrap();
        let specs = read_url_list(&path);
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].db_type, "PostgreSQL");
        assert_eq!(specs[1].db_type, UNKNOWN_DATABASE);
    }
}
