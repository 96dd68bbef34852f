//! Theme error types

use thiserror::Error;

/// Errors raised while reading or validating theme overrides
///
/// Resolution itself never fails; these surface only from the parsing and
/// explicit registration entry points.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme override is missing required group `{group}`")]
    MissingGroup { group: &'static str },

    #[error("invalid TOML theme definition: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON theme definition: {0}")]
    Json(#[from] serde_json::Error),
}
