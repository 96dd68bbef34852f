//! Shadow tokens for theming

token_group! {
    /// Box shadows, as CSS `box-shadow` values
    pub struct ShadowTokens => ShadowTokensOverride {
        none: String,
        sm: String,
        md: String,
        lg: String,
        xl: String,
    }
}

impl ShadowTokens {
    /// Shadows tuned for light surfaces
    pub fn light() -> Self {
        Self {
            none: "none".into(),
            sm: "0 1px 2px 0 rgba(0, 0, 0, 0.05)".into(),
            md: "0 4px 6px -1px rgba(0, 0, 0, 0.1)".into(),
            lg: "0 10px 15px -3px rgba(0, 0, 0, 0.1)".into(),
            xl: "0 20px 25px -5px rgba(0, 0, 0, 0.1)".into(),
        }
    }

    /// Shadows tuned for dark surfaces
    pub fn dark() -> Self {
        Self {
            none: "none".into(),
            sm: "0 1px 2px 0 rgba(0, 0, 0, 0.2)".into(),
            md: "0 4px 6px -1px rgba(0, 0, 0, 0.3)".into(),
            lg: "0 10px 15px -3px rgba(0, 0, 0, 0.3)".into(),
            xl: "0 20px 25px -5px rgba(0, 0, 0, 0.3)".into(),
        }
    }
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self::light()
    }
}
