//! Folio Layout Engine
//!
//! Computes how the content blocks of a page or email section are placed,
//! shown and styled, without rendering any of them.
//!
//! # Overview
//!
//! - **Strategies**: six container arrangements, from a single stacked
//!   column to float-based wrapping
//! - **Placement**: per-block spans, starts, columns and floats as
//!   breakpoint-scoped structural tags
//! - **Visibility**: per-block responsive rules
//! - **Backgrounds**: classification of authored background values
//! - **Render plans**: the ordered result the rendering layer consumes
//!
//! # Quick Start
//!
//! ```rust
//! use folio_layout::{assemble, ContentBlock, LayoutConfig};
//!
//! let config = LayoutConfig::from_json_str(r#"{"layout": "two-column"}"#).unwrap();
//! let blocks = ContentBlock::list_from_json(r#"[
//!     {"id": "intro", "category": "text", "type": "paragraph", "order": 1},
//!     {"id": "hero", "category": "media", "type": "image", "order": 0, "gridSpan": "full"}
//! ]"#).unwrap();
//!
//! let plan = assemble(&blocks, &config);
//! assert_eq!(plan.entries[0].block.id, "hero");
//! assert_eq!(plan.entries[0].class_list(), "col-span-full");
//! ```
//!
//! # Authoring input
//!
//! Blocks and layout settings are read from camelCase JSON or TOML. Keyword
//! fields are parsed leniently: numbers and strings are interchangeable, and
//! unrecognized values fall back to the field's default instead of failing.

#[macro_use]
mod token;

pub mod assemble;
pub mod background;
pub mod block;
pub mod breakpoint;
pub mod columns;
pub mod config;
pub mod error;
pub mod placement;
pub mod plan;
pub mod registry;
pub mod strategy;
pub mod style;
pub mod visibility;

// Re-export commonly used types
pub use assemble::{assemble, assemble_with_registry};
pub use background::{BackgroundDirective, BackgroundKind, BackgroundPaint, BackgroundSpec, BackgroundTarget};
pub use block::{
    BackgroundWidth, ColumnSlot, ContentBlock, DisplayMode, FloatDirection, GridColumn, GridRowSpan, GridSpan,
};
pub use breakpoint::{Breakpoint, ResponsiveRule, Threshold};
pub use columns::{arrange_columns, ColumnWidth, DesktopColumn};
pub use config::{GridFlow, Layout, LayoutConfig, MasonryColumns};
pub use error::LayoutError;
pub use placement::{place, Placement, PlacementKind, DEFAULT_FLOAT_WIDTH};
pub use plan::{BlockRef, EntryContent, RenderPlan, RenderPlanEntry};
pub use registry::{AcceptAll, BlockRegistry, KnownBlocks};
pub use strategy::{strategy_for, strategy_for_id, Arrangement, LayoutStrategy};
pub use style::{class_list, InlineStyle, Tag, Tags, Utility, BLOCK_GAP};
pub use token::{css_length, css_value};
pub use visibility::{visibility_for, visibility_tags};
