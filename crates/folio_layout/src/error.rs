use thiserror::Error;

/// Errors raised while parsing authored layout input
///
/// Placement and assembly never fail; only the parsing entry points return
/// this type.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid JSON layout input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML layout input: {0}")]
    Toml(#[from] toml::de::Error),
}
