//! Spacing tokens for theming

token_group! {
    /// Spacing scale, as CSS lengths
    pub struct SpacingTokens => SpacingTokensOverride {
        xs: String,
        sm: String,
        md: String,
        lg: String,
        xl: String,
        xxl: String,
        /// Vertical padding around a whole section
        section: String,
        /// Gap between stacked blocks
        block_gap: String,
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            xs: "4px".into(),
            sm: "8px".into(),
            md: "16px".into(),
            lg: "24px".into(),
            xl: "32px".into(),
            xxl: "48px".into(),
            section: "64px".into(),
            block_gap: "24px".into(),
        }
    }
}
