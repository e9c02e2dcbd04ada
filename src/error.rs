use thiserror::Error;

/// Errors from the collaborators around the mapping engine.
///
/// Parsing and resolving never fail; only fetching, storing and configuration
/// do.
#[derive(Error, Debug)]
pub enum MapperError {
    #[error("Mapping store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Mapping serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid content type '{content_type}' from {url}. Please provide a valid URL to the documentation page.")]
    InvalidContentType { url: String, content_type: String },

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, MapperError>;
