//! Built-in named themes.
//!
//! Each preset is expressed as an override onto the default token tree so it
//! goes through the same merge path as author-supplied overrides.

use std::fmt::{Display, Formatter};

use crate::theme::ThemeOverride;
use crate::tokens::*;

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// The default editorial theme.
    Default,
    /// Dark surfaces with a teal accent.
    Midnight,
    /// Monochrome serif theme for long-form newsletters.
    Newsprint,
}

impl ThemePreset {
    /// Stable preset id, used as the theme name.
    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Midnight => "midnight",
            Self::Newsprint => "newsprint",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Midnight => "Midnight",
            Self::Newsprint => "Newsprint",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 3] = [
            ThemePreset::Default,
            ThemePreset::Midnight,
            ThemePreset::Newsprint,
        ];
        &PRESETS
    }

    /// Find a preset by id (ASCII case-insensitive).
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.id().eq_ignore_ascii_case(id))
    }

    /// The override this preset applies onto the default theme.
    pub fn overrides(self) -> ThemeOverride {
        match self {
            Self::Default => ThemeOverride {
                color: Some(ColorTokensOverride::default()),
                ..Default::default()
            },
            Self::Midnight => midnight(),
            Self::Newsprint => newsprint(),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn midnight() -> ThemeOverride {
    ThemeOverride {
        color: Some(ColorTokensOverride {
            background: Some(BackgroundColorsOverride {
                default: text("#0b1120"),
                paper: text("#111827"),
                muted: text("#1f2937"),
                inverse: text("#f9fafb"),
            }),
            text: Some(TextColorsOverride {
                primary: text("#f9fafb"),
                secondary: text("#d1d5db"),
                muted: text("#9ca3af"),
                inverse: text("#111827"),
                link: text("#7dd9e3"),
            }),
            border: Some(BorderColorsOverride {
                default: text("#1f2937"),
                light: text("#111827"),
                strong: text("#4b5563"),
            }),
            gradient: Some(GradientColorsOverride {
                hero: Some(GradientOverride {
                    stops: Some(vec!["#0b1120".into(), "#168896".into()]),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }),
        shadow: Some(ShadowTokensOverride {
            sm: text("0 1px 2px 0 rgba(0, 0, 0, 0.2)"),
            md: text("0 4px 6px -1px rgba(0, 0, 0, 0.3)"),
            lg: text("0 10px 15px -3px rgba(0, 0, 0, 0.3)"),
            xl: text("0 20px 25px -5px rgba(0, 0, 0, 0.3)"),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn newsprint() -> ThemeOverride {
    let serif = vec!["Georgia".to_string(), "serif".to_string()];
    ThemeOverride {
        color: Some(ColorTokensOverride {
            primary: Some(BrandColorOverride {
                main: text("#111111"),
                light: text("#444444"),
                dark: text("#000000"),
                contrast: text("#ffffff"),
            }),
            background: Some(BackgroundColorsOverride {
                paper: text("#f7f3ea"),
                ..Default::default()
            }),
            ..Default::default()
        }),
        typography: Some(TypographyTokensOverride {
            font_family: Some(FontFamiliesOverride {
                heading: Some(serif.clone()),
                body: Some(serif),
                ..Default::default()
            }),
            ..Default::default()
        }),
        radius: Some(RadiusTokensOverride {
            sm: text("0"),
            md: text("0"),
            lg: text("0"),
            ..Default::default()
        }),
        ..Default::default()
    }
}
