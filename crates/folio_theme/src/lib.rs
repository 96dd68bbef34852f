//! Folio Theme System
//!
//! Design tokens for magazine pages and marketing emails, plus resolution of
//! named themes from a default tree and partial overrides.
//!
//! # Overview
//!
//! - **Design tokens**: colors, spacing, typography, radii, shadows
//! - **Overrides**: structurally-partial mirrors of every token group
//! - **Presets**: built-in named themes
//! - **Resolver**: explicit, cache-backed resolution by name
//!
//! # Quick Start
//!
//! ```rust
//! use folio_theme::{ThemeOverride, ThemeResolver};
//!
//! let resolver = ThemeResolver::new();
//!
//! let spring = ThemeOverride::from_toml_str(r##"
//!     [color.primary]
//!     main = "#16a34a"
//! "##).unwrap();
//!
//! let theme = resolver.resolve(Some("spring"), Some(&spring));
//! assert_eq!(theme.color.primary.main, "#16a34a");
//!
//! // Later calls hit the cache
//! assert!(resolver.is_cached("spring"));
//! ```
//!
//! # Merging
//!
//! Every token group is declared once and gets its override mirror and merge
//! semantics generated from that declaration: set leaves replace, unset
//! leaves keep the base value, lists are replaced wholesale.

#[macro_use]
pub mod merge;

pub mod catalog;
pub mod error;
pub mod presets;
pub mod resolver;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use catalog::ThemeCatalog;
pub use error::ThemeError;
pub use merge::{Merge, TokenTree, TokenValue};
pub use presets::ThemePreset;
pub use resolver::ThemeResolver;
pub use theme::{Theme, ThemeOverride, REQUIRED_GROUPS};
pub use tokens::*;
