//! Render plans
//!
//! A [`RenderPlan`] is the ordered, fully resolved description of a section:
//! the container's tags plus one [`RenderPlanEntry`] per enabled block. The
//! rendering layer wraps each leaf renderer's output with the entry's tags
//! and styles; nothing in the plan needs to be recomputed.

use serde::Serialize;

use crate::background::{BackgroundDirective, BackgroundTarget};
use crate::breakpoint::ResponsiveRule;
use crate::columns::{arrange_columns, DesktopColumn};
use crate::placement::{Placement, PlacementKind};
use crate::strategy::{Arrangement, LayoutStrategy};
use crate::style::{class_list, InlineStyle, Tags};

/// Identifies the block an entry was built from
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRef {
    pub id: String,
    pub category: String,
    #[serde(rename = "type")]
    pub block_type: String,
    /// Position in the caller's block list
    pub source_index: usize,
}

/// What the leaf renderer should draw for an entry
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum EntryContent {
    /// A supported block; `props` are forwarded as authored
    Block { props: serde_json::Value },
    /// A visible stand-in for a block nobody can render
    Unsupported { diagnostic: String },
}

/// Fully resolved placement, visibility and styling for one block
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlanEntry {
    pub block: BlockRef,
    pub content: EntryContent,
    pub placement: Placement,
    pub visibility: ResponsiveRule,
    pub visibility_tags: Tags,
    pub background: Option<BackgroundDirective>,
    /// Declarations for the outer wrapper
    pub outer_style: InlineStyle,
    /// Declarations for the content box: border, radius, padding
    pub inner_style: InlineStyle,
}

impl RenderPlanEntry {
    /// Placement and visibility tags as one class list
    pub fn class_list(&self) -> String {
        class_list(self.placement.tags.iter().chain(self.visibility_tags.iter()))
    }

    pub fn is_visible_at(&self, width: u32) -> bool {
        self.visibility.is_active(width)
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.content, EntryContent::Unsupported { .. })
    }

    /// Background class token for the given box, if any
    pub fn background_class(&self, target: BackgroundTarget) -> Option<&str> {
        self.background
            .as_ref()
            .filter(|directive| directive.target == target)
            .and_then(BackgroundDirective::class_token)
    }
}

/// Ordered render plan for one section
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderPlan {
    pub strategy: LayoutStrategy,
    pub container: Tags,
    pub container_style: InlineStyle,
    pub entries: Vec<RenderPlanEntry>,
}

impl RenderPlan {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenderPlanEntry> {
        self.entries.iter()
    }

    pub fn container_class(&self) -> String {
        class_list(&self.container)
    }

    /// Group entries into desktop rows
    ///
    /// Track layouts pack entries left to right using their desktop span and
    /// explicit start; an entry that would overflow the row, or whose start
    /// track is already taken, opens a new row. Row spans do not affect
    /// packing. Every other layout puts each entry on its own row.
    pub fn rows(&self) -> Vec<Vec<&RenderPlanEntry>> {
        let Some(tracks) = self.strategy.tracks() else {
            return self.entries.iter().map(|entry| vec![entry]).collect();
        };

        let mut rows: Vec<Vec<&RenderPlanEntry>> = Vec::new();
        let mut current: Vec<&RenderPlanEntry> = Vec::new();
        let mut used = 0u8;

        for entry in &self.entries {
            let (span, start) = match entry.placement.kind {
                PlacementKind::Track { span, start, .. } => (span.max(1), start),
                _ => (1, None),
            };
            let wraps = match start {
                Some(start) => start.saturating_sub(1) < used,
                None => used + span > tracks,
            };
            if wraps && !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                used = 0;
            }
            if let Some(start) = start {
                used = used.max(start.saturating_sub(1));
            }
            current.push(entry);
            used = used.saturating_add(span);
            if used >= tracks {
                rows.push(std::mem::take(&mut current));
                used = 0;
            }
        }
        if !current.is_empty() {
            rows.push(current);
        }
        rows
    }

    /// Desktop columns for flex-columns layouts; empty otherwise
    pub fn desktop_columns(&self) -> Vec<DesktopColumn> {
        let Arrangement::Columns { widths, .. } = &self.strategy.arrangement else {
            return Vec::new();
        };
        let slots = self.entries.iter().map(|entry| match entry.placement.kind {
            PlacementKind::Column { slot } => slot,
            _ => Default::default(),
        });
        arrange_columns(*widths, slots)
    }

    /// Every entry in plan order, as stacked on narrow viewports
    pub fn mobile_stack(&self) -> impl Iterator<Item = &RenderPlanEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a RenderPlan {
    type Item = &'a RenderPlanEntry;
    type IntoIter = std::slice::Iter<'a, RenderPlanEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
