//! Border radius tokens for theming

token_group! {
    /// Complete set of radius tokens
    pub struct RadiusTokens => RadiusTokensOverride {
        none: String,
        sm: String,
        md: String,
        lg: String,
        xl: String,
        full: String,
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            none: "0".into(),
            sm: "2px".into(),
            md: "6px".into(),
            lg: "12px".into(),
            xl: "20px".into(),
            full: "9999px".into(),
        }
    }
}
