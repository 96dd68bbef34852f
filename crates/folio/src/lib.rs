//! Folio
//!
//! Renders editorial pages and marketing emails from declarative content:
//! a list of authored blocks, a layout mode and a theme.
//!
//! This crate ties the two halves together. [`folio_theme`] resolves the
//! design-token tree, [`folio_layout`] computes the render plan, and
//! [`render_section`] does both for one section.
//!
//! # Example
//!
//! ```rust
//! use folio::{render_section, SectionRequest, ThemeResolver};
//!
//! let resolver = ThemeResolver::new();
//! let request = SectionRequest::from_json_str(r#"{
//!     "layout": "grid",
//!     "theme": "midnight",
//!     "blocks": [
//!         {"id": "lead", "category": "text", "type": "heading", "gridSpan": "full"},
//!         {"id": "body", "category": "text", "type": "paragraph"}
//!     ]
//! }"#).unwrap();
//!
//! let section = render_section(&resolver, &request);
//! assert_eq!(section.plan.len(), 2);
//! assert_eq!(section.theme.color.background.default, "#0b1120");
//! ```

mod error;
mod section;

pub use error::{FolioError, Result};
pub use section::{render_section, render_section_with_registry, RenderedSection, SectionRequest};

// Re-export the component crates
pub use folio_layout as layout;
pub use folio_theme as theme;

pub use folio_layout::{assemble, BlockRegistry, ContentBlock, KnownBlocks, LayoutConfig, RenderPlan, RenderPlanEntry};
pub use folio_theme::{Theme, ThemeOverride, ThemePreset, ThemeResolver};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::error::{FolioError, Result};
    pub use crate::section::{render_section, RenderedSection, SectionRequest};

    pub use folio_layout::{
        BackgroundSpec, Breakpoint, ContentBlock, Layout, LayoutConfig, RenderPlan, RenderPlanEntry,
        ResponsiveRule,
    };
    pub use folio_theme::{Theme, ThemeOverride, ThemePreset, ThemeResolver, TokenTree};
}
