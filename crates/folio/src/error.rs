//! Error types for section requests

use thiserror::Error;

/// Errors raised while reading a section request
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("invalid JSON section request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML section request: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for Folio operations
pub type Result<T> = std::result::Result<T, FolioError>;
