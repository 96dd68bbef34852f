//! Theme resolution with a per-instance name cache
//!
//! `ThemeResolver` owns the canonical default tree and a read-mostly cache of
//! resolved themes keyed by name. It is an ordinary value: create one per
//! application (or per test) and pass it to whatever renders.
//!
//! Resolution order for a named request:
//!
//! 1. cached theme under that name
//! 2. the supplied override merged onto the default (or onto the preset of
//!    the same name), validated and then cached
//! 3. the built-in preset of that name, cached
//! 4. the default theme
//!
//! A malformed override never fails the call; it is discarded and the pure
//! default is returned, leaving the cache untouched for that name.

use std::sync::{Arc, PoisonError, RwLock};

use rustc_hash::FxHashMap;

use crate::catalog::ThemeCatalog;
use crate::error::ThemeError;
use crate::merge::Merge;
use crate::presets::ThemePreset;
use crate::theme::{Theme, ThemeOverride};

/// Resolves themes by name, caching every successfully built theme
pub struct ThemeResolver {
    /// The canonical default tree
    default: Arc<Theme>,

    /// Resolved themes by name
    cache: RwLock<FxHashMap<String, Arc<Theme>>>,
}

impl ThemeResolver {
    /// Create a resolver around the built-in default theme
    pub fn new() -> Self {
        Self::with_default(Theme::default())
    }

    /// Create a resolver around a custom default theme
    pub fn with_default(default: Theme) -> Self {
        Self {
            default: Arc::new(default),
            cache: RwLock::new(FxHashMap::default()),
        }
    }

    /// The default theme
    pub fn default_theme(&self) -> Arc<Theme> {
        Arc::clone(&self.default)
    }

    /// Resolve a theme by optional name and optional override
    pub fn resolve(&self, name: Option<&str>, theme_override: Option<&ThemeOverride>) -> Arc<Theme> {
        let Some(name) = name else {
            return self.default_theme();
        };

        if let Some(theme) = self.cached(name) {
            tracing::trace!(theme = name, "theme cache hit");
            return theme;
        }

        match theme_override {
            Some(patch) => match self.register(name, patch) {
                Ok(theme) => theme,
                Err(err) => {
                    tracing::warn!(theme = name, %err, "discarding malformed theme override");
                    self.default_theme()
                }
            },
            None => match ThemePreset::from_id(name) {
                Some(preset) => {
                    let theme = Arc::new(self.default.merge(&preset.overrides()));
                    self.insert(name, Arc::clone(&theme));
                    theme
                }
                None => {
                    tracing::debug!(theme = name, "unknown theme name, using default");
                    self.default_theme()
                }
            },
        }
    }

    /// Validate an override, build it and cache it under `name`
    ///
    /// Re-registering a name overwrites the cached entry. When `name` is a
    /// built-in preset id the override is applied on top of that preset.
    pub fn register(&self, name: &str, theme_override: &ThemeOverride) -> Result<Arc<Theme>, ThemeError> {
        theme_override.validate()?;

        let base = match ThemePreset::from_id(name) {
            Some(preset) => self.default.merge(&preset.overrides()),
            None => (*self.default).clone(),
        };
        let theme = Arc::new(base.merge(theme_override));
        self.insert(name, Arc::clone(&theme));

        tracing::debug!(theme = name, "registered theme");
        Ok(theme)
    }

    /// Register every valid entry of a catalog, returning how many were accepted
    pub fn register_catalog(&self, catalog: &ThemeCatalog) -> usize {
        let mut accepted = 0;
        for (name, theme_override) in catalog.iter() {
            match self.register(name, theme_override) {
                Ok(_) => accepted += 1,
                Err(err) => {
                    tracing::warn!(theme = name, %err, "skipping catalog entry");
                }
            }
        }
        accepted
    }

    /// Check whether a theme is cached under `name`
    pub fn is_cached(&self, name: &str) -> bool {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Names currently cached, sorted
    pub fn cached_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort_unstable();
        names
    }

    /// Drop every cached theme
    pub fn clear(&self) {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn cached(&self, name: &str) -> Option<Arc<Theme>> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    fn insert(&self, name: &str, theme: Arc<Theme>) {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), theme);
    }
}

impl Default for ThemeResolver {
    fn default() -> Self {
        Self::new()
    }
}
