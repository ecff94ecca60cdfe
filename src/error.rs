//! Error types for shipzone

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// shipzone errors
///
/// Quoting itself never fails; these cover loading catalogs and config.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog parse error: {0}")]
    CatalogParse(String),

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
