//! Named override catalogs
//!
//! A catalog is the theme store's authoring format: a table of named
//! overrides, typically kept in TOML.
//!
//! ```toml
//! [themes.spring-sale.color.primary]
//! main = "#16a34a"
//!
//! [themes.spring-sale.typography.fontFamily]
//! heading = ["Playfair Display", "serif"]
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::theme::ThemeOverride;

/// Named theme overrides in declaration order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeCatalog {
    #[serde(default)]
    pub themes: IndexMap<String, ThemeOverride>,
}

impl ThemeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from TOML
    pub fn from_toml_str(input: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(input)?)
    }

    /// Parse a catalog from JSON
    pub fn from_json_str(input: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Add or replace a named override
    pub fn insert(&mut self, name: impl Into<String>, theme: ThemeOverride) {
        self.themes.insert(name.into(), theme);
    }

    pub fn get(&self, name: &str) -> Option<&ThemeOverride> {
        self.themes.get(name)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ThemeOverride)> {
        self.themes.iter().map(|(name, theme)| (name.as_str(), theme))
    }
}
