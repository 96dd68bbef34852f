//! Layout mode selection
//!
//! Maps a section's [`LayoutConfig`] to the [`LayoutStrategy`] that block
//! placement works against, along with the container's own tags.

use serde::Serialize;

use crate::breakpoint::{Breakpoint, ResponsiveRule};
use crate::config::{GridFlow, Layout, LayoutConfig};
use crate::style::{InlineStyle, Tag, Tags, Utility, BLOCK_GAP};

/// Breakpoint below which flex columns collapse into one stack
pub const FLEX_COLLAPSE: Breakpoint = Breakpoint::Md;

/// How blocks are arranged inside the section container
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Arrangement {
    /// One implicit column, vertical stack
    Stack,
    /// A track grid with up to `tracks` columns on wide viewports
    Tracks { tracks: u8, flow: GridFlow },
    /// CSS multi-column flow, blocks kept intact
    Masonry { columns: u8 },
    /// Up to three explicitly assigned columns
    Columns {
        /// Configured desktop widths in percent, clamped to `0..=100`
        widths: [Option<f32>; 3],
        collapse_below: Breakpoint,
    },
    /// Blocks float individually while `rule` holds
    Float { rule: ResponsiveRule },
}

/// Resolved layout mode for one section
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LayoutStrategy {
    pub layout: Layout,
    pub arrangement: Arrangement,
}

/// Pick the strategy for a section
pub fn strategy_for(config: &LayoutConfig) -> LayoutStrategy {
    let arrangement = match config.layout {
        Layout::SingleColumn => Arrangement::Stack,
        Layout::TwoColumn => Arrangement::Tracks {
            tracks: 2,
            flow: config.grid_flow,
        },
        Layout::Grid => Arrangement::Tracks {
            tracks: 3,
            flow: config.grid_flow,
        },
        Layout::Masonry => Arrangement::Masonry {
            columns: config.masonry_columns.count(),
        },
        Layout::FlexColumns => Arrangement::Columns {
            widths: config.column_widths().map(|width| width.map(clamp_percent)),
            collapse_below: FLEX_COLLAPSE,
        },
        Layout::FloatColumns => Arrangement::Float {
            rule: ResponsiveRule::from_threshold(config.float_breakpoint),
        },
    };
    LayoutStrategy {
        layout: config.layout,
        arrangement,
    }
}

/// Pick the strategy for a bare layout identifier
///
/// Unknown identifiers fall back to single-column.
pub fn strategy_for_id(id: &str) -> LayoutStrategy {
    let layout = Layout::parse(id).unwrap_or_else(|| {
        tracing::debug!(layout = id, "unknown layout, falling back to single-column");
        Layout::SingleColumn
    });
    strategy_for(&LayoutConfig::new(layout))
}

fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

impl LayoutStrategy {
    /// Desktop track count for track grids
    pub fn tracks(&self) -> Option<u8> {
        match self.arrangement {
            Arrangement::Tracks { tracks, .. } => Some(tracks),
            _ => None,
        }
    }

    /// Tags for the section container
    ///
    /// For flex columns this is the desktop wrapper; see
    /// [`mobile_container_tags`](Self::mobile_container_tags).
    pub fn container_tags(&self) -> Tags {
        let mut tags = Tags::new();
        match &self.arrangement {
            Arrangement::Stack => {
                tags.push(Tag::base(Utility::Flex));
                tags.push(Tag::base(Utility::FlexCol));
            }
            Arrangement::Tracks { tracks, flow } => {
                tags.push(Tag::base(Utility::Grid));
                tags.push(Tag::base(Utility::GridCols(1)));
                tags.push(Tag::at(Breakpoint::Md, Utility::GridCols(2)));
                if *tracks > 2 {
                    tags.push(Tag::at(Breakpoint::Lg, Utility::GridCols(*tracks)));
                }
                tags.push(Tag::base(Utility::GridFlow(*flow)));
            }
            Arrangement::Masonry { columns } => {
                tags.push(Tag::base(Utility::Columns(1)));
                tags.push(Tag::at(Breakpoint::Md, Utility::Columns(*columns)));
            }
            Arrangement::Columns { collapse_below, .. } => {
                tags = ResponsiveRule::AtOrAbove(*collapse_below).tags(Utility::Flex, Utility::Hidden);
                tags.push(Tag::at(*collapse_below, Utility::FlexRow));
            }
            Arrangement::Float { .. } => tags.push(Tag::base(Utility::FlowRoot)),
        }
        tags
    }

    /// Tags for the narrow-viewport stack that replaces flex columns
    pub fn mobile_container_tags(&self) -> Option<Tags> {
        let Arrangement::Columns { collapse_below, .. } = &self.arrangement else {
            return None;
        };
        let mut tags = Tags::new();
        tags.push(Tag::base(Utility::Flex));
        tags.push(Tag::base(Utility::FlexCol));
        tags.extend(ResponsiveRule::Below(*collapse_below).tags(Utility::Flex, Utility::Hidden));
        Some(tags)
    }

    /// Inline declarations for the section container
    pub fn container_style(&self) -> InlineStyle {
        let mut style = InlineStyle::new();
        match self.arrangement {
            Arrangement::Stack | Arrangement::Tracks { .. } | Arrangement::Columns { .. } => {
                style.set("gap", BLOCK_GAP);
            }
            Arrangement::Masonry { .. } => style.set("column-gap", BLOCK_GAP),
            Arrangement::Float { .. } => {}
        }
        style
    }
}
