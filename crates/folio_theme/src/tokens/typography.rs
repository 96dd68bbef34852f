//! Typography tokens for theming

token_group! {
    /// Font stacks; each stack is replaced wholesale by overrides
    pub struct FontFamilies => FontFamiliesOverride {
        heading: Vec<String>,
        body: Vec<String>,
        mono: Vec<String>,
    }
}

token_group! {
    pub struct FontSizes => FontSizesOverride {
        xs: String,
        sm: String,
        base: String,
        lg: String,
        xl: String,
        xxl: String,
        xxxl: String,
    }
}

token_group! {
    pub struct FontWeights => FontWeightsOverride {
        regular: u16,
        medium: u16,
        semibold: u16,
        bold: u16,
    }
}

token_group! {
    /// Unitless line-height multipliers
    pub struct LineHeights => LineHeightsOverride {
        tight: f32,
        normal: f32,
        relaxed: f32,
    }
}

token_group! {
    /// Complete set of typography tokens
    pub struct TypographyTokens => TypographyTokensOverride {
        font_family: FontFamilies,
        font_size: FontSizes,
        font_weight: FontWeights,
        line_height: LineHeights,
    }
}

/// Render a font stack as a CSS `font-family` value, quoting names with spaces
pub fn font_stack(families: &[String]) -> String {
    families
        .iter()
        .map(|family| {
            if family.contains(' ') {
                format!("\"{family}\"")
            } else {
                family.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn stack(families: &[&str]) -> Vec<String> {
    families.iter().map(|f| f.to_string()).collect()
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_family: FontFamilies {
                heading: stack(&["Georgia", "Times New Roman", "serif"]),
                body: stack(&["Helvetica Neue", "Helvetica", "Arial", "sans-serif"]),
                mono: stack(&["Menlo", "Consolas", "monospace"]),
            },
            font_size: FontSizes {
                xs: "12px".into(),
                sm: "14px".into(),
                base: "16px".into(),
                lg: "18px".into(),
                xl: "22px".into(),
                xxl: "28px".into(),
                xxxl: "36px".into(),
            },
            font_weight: FontWeights {
                regular: 400,
                medium: 500,
                semibold: 600,
                bold: 700,
            },
            line_height: LineHeights {
                tight: 1.2,
                normal: 1.5,
                relaxed: 1.75,
            },
        }
    }
}
