//! The resolved theme tree and its partial override

use indexmap::IndexMap;

use crate::error::ThemeError;
use crate::merge::{TokenTree, TokenValue};
use crate::tokens::*;

token_group! {
    /// A complete, immutable design-token tree
    ///
    /// Every leaf is always defined. Themes are only produced by the
    /// defaults or by merging a [`ThemeOverride`] onto a complete theme.
    pub struct Theme => ThemeOverride {
        color: ColorTokens,
        spacing: SpacingTokens,
        typography: TypographyTokens,
        radius: RadiusTokens,
        shadow: ShadowTokens,
    }
}

/// Top-level groups an override must carry to be accepted
pub const REQUIRED_GROUPS: &[&str] = &["color"];

impl Default for Theme {
    fn default() -> Self {
        Self {
            color: ColorTokens::default(),
            spacing: SpacingTokens::default(),
            typography: TypographyTokens::default(),
            radius: RadiusTokens::default(),
            shadow: ShadowTokens::default(),
        }
    }
}

impl Theme {
    /// Look up a leaf by dotted path, e.g. `"color.button.primary.background"`
    pub fn token(&self, path: &str) -> Option<TokenValue<'_>> {
        let segments: Vec<&str> = path.split('.').collect();
        self.lookup(&segments)
    }

    /// Flatten every leaf into CSS custom properties
    ///
    /// Keys include the `--` prefix and use `-` between path segments
    /// (`--color-primary-main`). Lists are joined with `", "`, except font
    /// families, which are rendered as quoted `font-family` stacks. Each
    /// gradient also gets a ready-made `linear-gradient()` value under its
    /// own name (`--color-gradient-hero`).
    pub fn to_css_variables(&self) -> IndexMap<String, String> {
        let mut vars = IndexMap::new();
        self.visit(&mut Vec::new(), &mut |path, value| {
            let name = path.join("-").replace('_', "-");
            vars.insert(format!("--{name}"), value.to_string());
        });

        let families = &self.typography.font_family;
        for (name, stack) in [
            ("heading", &families.heading),
            ("body", &families.body),
            ("mono", &families.mono),
        ] {
            vars.insert(format!("--typography-font-family-{name}"), font_stack(stack));
        }

        let gradients = &self.color.gradient;
        for (name, gradient) in [
            ("hero", &gradients.hero),
            ("accent", &gradients.accent),
            ("subtle", &gradients.subtle),
        ] {
            vars.insert(format!("--color-gradient-{name}"), gradient.to_css());
        }
        vars
    }
}

impl ThemeOverride {
    /// Parse an override from TOML
    pub fn from_toml_str(input: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(input)?)
    }

    /// Parse an override from JSON
    pub fn from_json_str(input: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Check that every required top-level group is present
    pub fn validate(&self) -> Result<(), ThemeError> {
        for &group in REQUIRED_GROUPS {
            if !self.has_group(group) {
                return Err(ThemeError::MissingGroup { group });
            }
        }
        Ok(())
    }

    fn has_group(&self, group: &str) -> bool {
        match group {
            "color" => self.color.is_some(),
            "spacing" => self.spacing.is_some(),
            "typography" => self.typography.is_some(),
            "radius" => self.radius.is_some(),
            "shadow" => self.shadow.is_some(),
            _ => false,
        }
    }
}
