//! Color tokens for theming

token_group! {
    /// Four-step ramp for a brand color
    pub struct BrandColor => BrandColorOverride {
        main: String,
        light: String,
        dark: String,
        /// Foreground color readable on `main`
        contrast: String,
    }
}

token_group! {
    /// Page and surface backgrounds
    pub struct BackgroundColors => BackgroundColorsOverride {
        default: String,
        paper: String,
        muted: String,
        inverse: String,
    }
}

token_group! {
    /// Text colors
    pub struct TextColors => TextColorsOverride {
        primary: String,
        secondary: String,
        muted: String,
        inverse: String,
        link: String,
    }
}

token_group! {
    /// Border colors
    pub struct BorderColors => BorderColorsOverride {
        default: String,
        light: String,
        strong: String,
    }
}

token_group! {
    /// Colors for one button variant
    pub struct ButtonColors => ButtonColorsOverride {
        background: String,
        text: String,
        border: String,
        hover: String,
    }
}

token_group! {
    pub struct ButtonPalette => ButtonPaletteOverride {
        primary: ButtonColors,
        secondary: ButtonColors,
    }
}

token_group! {
    /// A linear gradient; `stops` is replaced wholesale by overrides
    pub struct Gradient => GradientOverride {
        angle: u16,
        stops: Vec<String>,
    }
}

impl Gradient {
    pub fn new(angle: u16, stops: &[&str]) -> Self {
        Self {
            angle,
            stops: stops.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Render as a CSS `linear-gradient()` expression
    pub fn to_css(&self) -> String {
        format!("linear-gradient({}deg, {})", self.angle, self.stops.join(", "))
    }
}

token_group! {
    pub struct GradientColors => GradientColorsOverride {
        hero: Gradient,
        accent: Gradient,
        subtle: Gradient,
    }
}

token_group! {
    /// Social network brand colors
    pub struct SocialColors => SocialColorsOverride {
        facebook: String,
        twitter: String,
        instagram: String,
        linkedin: String,
        youtube: String,
        pinterest: String,
    }
}

token_group! {
    /// Product and pricing colors
    pub struct CommerceColors => CommerceColorsOverride {
        price: String,
        sale: String,
        discount: String,
        in_stock: String,
        out_of_stock: String,
    }
}

token_group! {
    pub struct BadgeColors => BadgeColorsOverride {
        background: String,
        text: String,
    }
}

token_group! {
    pub struct BadgePalette => BadgePaletteOverride {
        new: BadgeColors,
        sale: BadgeColors,
        featured: BadgeColors,
        limited: BadgeColors,
    }
}

token_group! {
    /// Translucent overlays for text on imagery
    pub struct OverlayColors => OverlayColorsOverride {
        light: String,
        dark: String,
        scrim: String,
    }
}

token_group! {
    /// Complete set of semantic color tokens
    pub struct ColorTokens => ColorTokensOverride {
        primary: BrandColor,
        secondary: BrandColor,
        background: BackgroundColors,
        text: TextColors,
        border: BorderColors,
        button: ButtonPalette,
        gradient: GradientColors,
        social: SocialColors,
        commerce: CommerceColors,
        badge: BadgePalette,
        overlay: OverlayColors,
    }
}

fn badge(background: &str, text: &str) -> BadgeColors {
    BadgeColors {
        background: background.into(),
        text: text.into(),
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self {
            primary: BrandColor {
                main: "#22b8c8".into(),
                light: "#7dd9e3".into(),
                dark: "#168896".into(),
                contrast: "#ffffff".into(),
            },
            secondary: BrandColor {
                main: "#1f2a44".into(),
                light: "#46557a".into(),
                dark: "#111827".into(),
                contrast: "#ffffff".into(),
            },
            background: BackgroundColors {
                default: "#ffffff".into(),
                paper: "#fafaf7".into(),
                muted: "#f3f4f6".into(),
                inverse: "#111827".into(),
            },
            text: TextColors {
                primary: "#111827".into(),
                secondary: "#374151".into(),
                muted: "#6b7280".into(),
                inverse: "#ffffff".into(),
                link: "#168896".into(),
            },
            border: BorderColors {
                default: "#e5e7eb".into(),
                light: "#f3f4f6".into(),
                strong: "#9ca3af".into(),
            },
            button: ButtonPalette {
                primary: ButtonColors {
                    background: "#22b8c8".into(),
                    text: "#ffffff".into(),
                    border: "#22b8c8".into(),
                    hover: "#168896".into(),
                },
                secondary: ButtonColors {
                    background: "#ffffff".into(),
                    text: "#1f2a44".into(),
                    border: "#1f2a44".into(),
                    hover: "#f3f4f6".into(),
                },
            },
            gradient: GradientColors {
                hero: Gradient::new(135, &["#ffffff", "#22b8c8"]),
                accent: Gradient::new(90, &["#22b8c8", "#1f2a44"]),
                subtle: Gradient::new(180, &["#fafaf7", "#f3f4f6"]),
            },
            social: SocialColors {
                facebook: "#1877f2".into(),
                twitter: "#1da1f2".into(),
                instagram: "#e4405f".into(),
                linkedin: "#0a66c2".into(),
                youtube: "#ff0000".into(),
                pinterest: "#bd081c".into(),
            },
            commerce: CommerceColors {
                price: "#111827".into(),
                sale: "#dc2626".into(),
                discount: "#16a34a".into(),
                in_stock: "#16a34a".into(),
                out_of_stock: "#9ca3af".into(),
            },
            badge: BadgePalette {
                new: badge("#22b8c8", "#ffffff"),
                sale: badge("#dc2626", "#ffffff"),
                featured: badge("#1f2a44", "#ffffff"),
                limited: badge("#f59e0b", "#111827"),
            },
            overlay: OverlayColors {
                light: "rgba(255, 255, 255, 0.8)".into(),
                dark: "rgba(17, 24, 39, 0.6)".into(),
                scrim: "rgba(0, 0, 0, 0.4)".into(),
            },
        }
    }
}
