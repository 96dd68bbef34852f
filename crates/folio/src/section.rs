//! Section rendering entry point

use std::sync::Arc;

use folio_layout::{assemble_with_registry, AcceptAll, BlockRegistry, ContentBlock, LayoutConfig, RenderPlan};
use folio_theme::{Theme, ThemeOverride, ThemeResolver};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Everything needed to render one section
///
/// Layout settings sit at the top level next to `blocks`:
///
/// ```json
/// {
///   "layout": "two-column",
///   "theme": "midnight",
///   "blocks": [{"id": "intro", "category": "text", "type": "paragraph"}]
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionRequest {
    #[serde(flatten)]
    pub layout: LayoutConfig,
    pub blocks: Vec<ContentBlock>,
    /// Theme name; `None` selects the default theme
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_override: Option<ThemeOverride>,
}

impl SectionRequest {
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }
}

/// A resolved theme and the render plan built against it
#[derive(Clone, Debug)]
pub struct RenderedSection {
    pub theme: Arc<Theme>,
    pub plan: RenderPlan,
}

impl RenderedSection {
    /// CSS custom properties for the resolved theme
    pub fn css_variables(&self) -> IndexMap<String, String> {
        self.theme.to_css_variables()
    }
}

/// Resolve the section's theme once and assemble its plan
pub fn render_section(resolver: &ThemeResolver, request: &SectionRequest) -> RenderedSection {
    render_section_with_registry(resolver, request, &AcceptAll)
}

/// Like [`render_section`], with placeholders for blocks `registry` rejects
pub fn render_section_with_registry<R>(
    resolver: &ThemeResolver,
    request: &SectionRequest,
    registry: &R,
) -> RenderedSection
where
    R: BlockRegistry + ?Sized,
{
    let theme = resolver.resolve(request.theme.as_deref(), request.theme_override.as_ref());
    let plan = assemble_with_registry(&request.blocks, &request.layout, registry);
    tracing::debug!(
        theme = request.theme.as_deref().unwrap_or("default"),
        layout = %request.layout.layout,
        entries = plan.len(),
        "rendered section"
    );
    RenderedSection { theme, plan }
}
