//! Block placement
//!
//! Turns one block's grid, float and column fields into structural tags for
//! the active [`LayoutStrategy`]. Fields that do not apply to the strategy are
//! ignored.

use serde::Serialize;

use crate::block::{ColumnSlot, ContentBlock, FloatDirection, GridRowSpan, GridSpan};
use crate::breakpoint::{Breakpoint, ResponsiveRule};
use crate::strategy::{Arrangement, LayoutStrategy};
use crate::style::{InlineStyle, Tag, Tags, Utility, BLOCK_GAP};
use crate::token::css_value;

/// Width of a floated block that sets no `floatWidth`
pub const DEFAULT_FLOAT_WIDTH: &str = "250px";

/// What kind of slot a block occupies, in layout terms
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PlacementKind {
    Stack,
    Track {
        /// Tracks covered on the widest viewport
        span: u8,
        /// Rows covered on the widest viewport, `None` for auto
        row_span: Option<u8>,
        /// Explicit 1-based start track
        start: Option<u8>,
    },
    Masonry,
    Column {
        slot: ColumnSlot,
    },
    Float {
        direction: FloatDirection,
        /// Float width, `None` when the block never floats
        width: Option<String>,
        /// Viewport range over which the block floats
        rule: ResponsiveRule,
        clear: bool,
    },
}

/// Structural placement of one block
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Placement {
    pub kind: PlacementKind,
    pub tags: Tags,
    /// Non-structural declarations such as `align-self`
    pub style: InlineStyle,
}

impl Placement {
    fn new(kind: PlacementKind) -> Self {
        Self {
            kind,
            tags: Tags::new(),
            style: InlineStyle::new(),
        }
    }

    fn push(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    /// True when the block floats at viewport `width`
    pub fn floats_at(&self, width: u32) -> bool {
        match &self.kind {
            PlacementKind::Float { direction, rule, .. } => {
                *direction != FloatDirection::None && rule.is_active(width)
            }
            _ => false,
        }
    }
}

/// Compute a block's placement under `strategy`
pub fn place(block: &ContentBlock, strategy: &LayoutStrategy) -> Placement {
    match &strategy.arrangement {
        Arrangement::Stack => {
            let mut placement = Placement::new(PlacementKind::Stack);
            placement.push(Tag::base(Utility::FullWidth));
            placement
        }
        Arrangement::Tracks { tracks, .. } => place_track(block, *tracks),
        Arrangement::Masonry { .. } => {
            let mut placement = Placement::new(PlacementKind::Masonry);
            placement.push(Tag::base(Utility::BreakInsideAvoid));
            placement.push(Tag::base(Utility::MarginBottom(BLOCK_GAP.to_string())));
            placement
        }
        Arrangement::Columns { .. } => {
            let mut placement = Placement::new(PlacementKind::Column {
                slot: block.column_assignment,
            });
            placement.push(Tag::base(Utility::FullWidth));
            placement
        }
        Arrangement::Float { rule } => place_float(block, *rule),
    }
}

fn span_tracks(span: GridSpan, tracks: u8) -> u8 {
    match span {
        GridSpan::One => 1,
        GridSpan::Two => 2.min(tracks),
        GridSpan::Three => 3.min(tracks),
        GridSpan::Full => tracks,
    }
}

fn place_track(block: &ContentBlock, tracks: u8) -> Placement {
    let span = span_tracks(block.grid_span, tracks);
    let row_span = match block.grid_row_span {
        GridRowSpan::One => Some(1),
        GridRowSpan::Two => Some(2),
        GridRowSpan::Three => Some(3),
        GridRowSpan::Auto => None,
    };
    let start = if block.force_new_row {
        Some(1)
    } else {
        block.grid_column.track().map(|track| track.min(tracks))
    };

    let mut placement = Placement::new(PlacementKind::Track { span, row_span, start });

    // Wider spans only open up once the grid has the tracks for them
    match block.grid_span {
        GridSpan::One => {}
        GridSpan::Full => placement.push(Tag::base(Utility::ColSpanFull)),
        GridSpan::Two | GridSpan::Three => {
            placement.push(Tag::at(Breakpoint::Md, Utility::ColSpan(span.min(2))));
            if span > 2 {
                placement.push(Tag::at(Breakpoint::Lg, Utility::ColSpan(span)));
            }
        }
    }

    match row_span {
        Some(1) => placement.push(Tag::base(Utility::RowSpan(1))),
        Some(rows) if tracks > 2 && rows > 2 => {
            placement.push(Tag::at(Breakpoint::Md, Utility::RowSpan(2)));
            placement.push(Tag::at(Breakpoint::Lg, Utility::RowSpan(rows)));
        }
        Some(rows) => placement.push(Tag::at(Breakpoint::Md, Utility::RowSpan(rows))),
        None => {}
    }

    if let Some(start) = start {
        placement.push(Tag::base(Utility::ColStart(start)));
        placement.push(Tag::at(Breakpoint::Md, Utility::ColStart(start)));
    }

    if let Some(align) = block.align_self.as_deref().and_then(css_value) {
        placement.style.set("align-self", align);
    }
    placement
}

fn place_float(block: &ContentBlock, rule: ResponsiveRule) -> Placement {
    let clear = block.clear_float;
    let side = match block.float_direction {
        FloatDirection::Left => Some((Utility::FloatLeft, Utility::MarginRight(BLOCK_GAP.to_string()))),
        FloatDirection::Right => Some((Utility::FloatRight, Utility::MarginLeft(BLOCK_GAP.to_string()))),
        FloatDirection::None => None,
    };

    let Some((float, margin)) = side.filter(|_| rule != ResponsiveRule::Never) else {
        let mut placement = Placement::new(PlacementKind::Float {
            direction: block.float_direction,
            width: None,
            rule: ResponsiveRule::Never,
            clear,
        });
        placement.push(Tag::base(Utility::FullWidth));
        placement.push(Tag::base(Utility::MarginBottom(BLOCK_GAP.to_string())));
        if clear {
            placement.push(Tag::base(Utility::ClearBoth));
        }
        return placement;
    };

    let width = block
        .float_width
        .as_deref()
        .and_then(css_value)
        .unwrap_or(DEFAULT_FLOAT_WIDTH)
        .to_string();

    let mut placement = Placement::new(PlacementKind::Float {
        direction: block.float_direction,
        width: Some(width.clone()),
        rule,
        clear,
    });
    placement.push(Tag::base(Utility::MarginBottom(BLOCK_GAP.to_string())));
    if clear {
        placement.push(Tag::base(Utility::ClearBoth));
    }

    let mut on = vec![float, Utility::Width(width), margin];
    let mut off = vec![Utility::FullWidth, Utility::FloatNone];
    if !clear {
        on.push(Utility::ClearNone);
        off.push(Utility::ClearBoth);
    }
    placement.tags.extend(rule.switch(&on, &off));
    placement
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::GridColumn;
    use crate::breakpoint::Threshold;
    use crate::config::{Layout, LayoutConfig};
    use crate::strategy::strategy_for;
    use crate::style::class_list;

    fn strategy(layout: Layout) -> LayoutStrategy {
        strategy_for(&LayoutConfig::new(layout))
    }

    fn float_strategy(threshold: Threshold) -> LayoutStrategy {
        let mut config = LayoutConfig::new(Layout::FloatColumns);
        config.float_breakpoint = threshold;
        strategy_for(&config)
    }

    fn block() -> ContentBlock {
        ContentBlock::new("b", "text", "paragraph")
    }

    #[test]
    fn test_grid_spans() {
        let grid = strategy(Layout::Grid);
        let mut b = block();

        b.grid_span = GridSpan::Two;
        assert_eq!(class_list(&place(&b, &grid).tags), "md:col-span-2");

        b.grid_span = GridSpan::Three;
        let placement = place(&b, &grid);
        assert_eq!(class_list(&placement.tags), "md:col-span-2 lg:col-span-3");
        assert!(matches!(placement.kind, PlacementKind::Track { span: 3, .. }));

        b.grid_span = GridSpan::Full;
        assert_eq!(class_list(&place(&b, &grid).tags), "col-span-full");
    }

    #[test]
    fn test_two_column_clamps_three_track_span() {
        let mut b = block();
        b.grid_span = GridSpan::Three;
        let placement = place(&b, &strategy(Layout::TwoColumn));
        assert_eq!(class_list(&placement.tags), "md:col-span-2");
        assert!(matches!(placement.kind, PlacementKind::Track { span: 2, .. }));
    }

    #[test]
    fn test_row_spans() {
        let mut b = block();
        b.grid_row_span = GridRowSpan::One;
        assert_eq!(class_list(&place(&b, &strategy(Layout::Grid)).tags), "row-span-1");

        b.grid_row_span = GridRowSpan::Three;
        assert_eq!(
            class_list(&place(&b, &strategy(Layout::Grid)).tags),
            "md:row-span-2 lg:row-span-3"
        );
        assert_eq!(
            class_list(&place(&b, &strategy(Layout::TwoColumn)).tags),
            "md:row-span-3"
        );
    }

    #[test]
    fn test_explicit_start_and_force_new_row() {
        let mut b = block();
        b.grid_column = GridColumn::Three;
        assert_eq!(
            class_list(&place(&b, &strategy(Layout::TwoColumn)).tags),
            "col-start-2 md:col-start-2"
        );

        b.force_new_row = true;
        let placement = place(&b, &strategy(Layout::Grid));
        assert_eq!(class_list(&placement.tags), "col-start-1 md:col-start-1");
        assert!(matches!(placement.kind, PlacementKind::Track { start: Some(1), .. }));
    }

    #[test]
    fn test_align_self_is_inline() {
        let mut b = block();
        b.align_self = Some("center".into());
        let placement = place(&b, &strategy(Layout::Grid));
        assert_eq!(placement.style.get("align-self"), Some("center"));
        assert!(!class_list(&placement.tags).contains("center"));
    }

    #[test]
    fn test_unsafe_values_fall_back() {
        let mut b = block();
        b.align_self = Some("center; color: red".into());
        assert!(place(&b, &strategy(Layout::Grid)).style.is_empty());

        b.float_direction = FloatDirection::Left;
        b.float_width = Some("10px] hover:hidden".into());
        let classes = class_list(&place(&b, &float_strategy(Threshold::Always)).tags);
        assert!(classes.contains("w-[250px]"), "{classes}");
        assert!(!classes.contains("hover"));
    }

    #[test]
    fn test_masonry_blocks_stay_intact() {
        let placement = place(&block(), &strategy(Layout::Masonry));
        assert_eq!(class_list(&placement.tags), "break-inside-avoid mb-[1.5rem]");
    }

    #[test]
    fn test_float_right_at_breakpoint() {
        let mut b = block();
        b.float_direction = FloatDirection::Right;
        let placement = place(&b, &float_strategy(Threshold::Md));
        assert_eq!(
            class_list(&placement.tags),
            "mb-[1.5rem] w-full float-none clear-both md:float-right md:w-[250px] md:ml-[1.5rem] md:clear-none"
        );
        assert!(!placement.floats_at(767));
        assert!(placement.floats_at(768));
    }

    #[test]
    fn test_float_left_always_with_clear() {
        let mut b = block();
        b.float_direction = FloatDirection::Left;
        b.float_width = Some("40%".into());
        b.clear_float = true;
        let placement = place(&b, &float_strategy(Threshold::Always));
        assert_eq!(
            class_list(&placement.tags),
            "mb-[1.5rem] clear-both float-left w-[40%] mr-[1.5rem]"
        );
        assert!(placement.floats_at(0));
    }

    #[test]
    fn test_never_breakpoint_disables_floating() {
        for direction in [FloatDirection::Left, FloatDirection::Right, FloatDirection::None] {
            let mut b = block();
            b.float_direction = direction;
            let placement = place(&b, &float_strategy(Threshold::Never));
            assert_eq!(class_list(&placement.tags), "w-full mb-[1.5rem]");
            assert!(!placement.floats_at(4000));
        }
    }

    #[test]
    fn test_unfloated_block_can_still_clear() {
        let mut b = block();
        b.clear_float = true;
        let placement = place(&b, &float_strategy(Threshold::Md));
        assert_eq!(class_list(&placement.tags), "w-full mb-[1.5rem] clear-both");
    }
}
