//! Authored content blocks
//!
//! A block carries its own placement and styling metadata next to opaque
//! `props`, which belong to the leaf renderer and are never inspected here.
//! Every field except `id`, `category` and `type` is optional; missing or
//! unrecognized values fall back to the defaults documented on each type.

use serde::{Deserialize, Serialize};

use crate::background::BackgroundSpec;
use crate::breakpoint::Threshold;
use crate::error::LayoutError;

token_enum! {
    /// When a block is shown relative to its breakpoint
    pub enum DisplayMode {
        Always = "always",
        AboveBreakpoint = "above-breakpoint" | "above",
        BelowBreakpoint = "below-breakpoint" | "below",
    }
    default = Always;
}

token_enum! {
    /// Horizontal track span in two-column and grid layouts
    pub enum GridSpan {
        One = "1",
        Two = "2",
        Three = "3",
        Full = "full",
    }
    default = One;
}

token_enum! {
    /// Vertical track span in two-column and grid layouts
    pub enum GridRowSpan {
        One = "1",
        Two = "2",
        Three = "3",
        Auto = "auto",
    }
    default = Auto;
}

token_enum! {
    /// Explicit start track
    pub enum GridColumn {
        Auto = "auto" | "",
        One = "1",
        Two = "2",
        Three = "3",
    }
    default = Auto;
}

impl GridColumn {
    /// 1-based track number, if explicit
    pub fn track(self) -> Option<u8> {
        match self {
            GridColumn::Auto => None,
            GridColumn::One => Some(1),
            GridColumn::Two => Some(2),
            GridColumn::Three => Some(3),
        }
    }
}

token_enum! {
    pub enum FloatDirection {
        None = "none" | "",
        Left = "left",
        Right = "right",
    }
    default = None;
}

token_enum! {
    /// Flex column a block is assigned to
    pub enum ColumnSlot {
        One = "1",
        Two = "2",
        Three = "3",
    }
    default = One;
}

impl ColumnSlot {
    /// Zero-based column index
    pub fn index(self) -> usize {
        match self {
            ColumnSlot::One => 0,
            ColumnSlot::Two => 1,
            ColumnSlot::Three => 2,
        }
    }
}

token_enum! {
    /// How far a block's background reaches
    pub enum BackgroundWidth {
        /// Background paints only the content box
        Content = "content",
        /// Background spans the outer container; content keeps its padding
        Full = "full",
    }
    default = Content;
}

/// One authored unit of a page or email section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentBlock {
    pub id: String,
    pub category: String,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(deserialize_with = "crate::token::lenient_int")]
    pub order: i64,
    #[serde(deserialize_with = "crate::token::flag_on")]
    pub enabled: bool,
    /// Renderer-owned payload, forwarded untouched
    pub props: serde_json::Value,

    pub display_mode: DisplayMode,
    /// Breakpoint that `display_mode` is measured against
    pub breakpoint: Threshold,

    pub grid_span: GridSpan,
    pub grid_row_span: GridRowSpan,
    pub grid_column: GridColumn,
    #[serde(deserialize_with = "crate::token::flag_off")]
    pub force_new_row: bool,
    #[serde(deserialize_with = "crate::token::lenient_text")]
    pub align_self: Option<String>,

    pub float_direction: FloatDirection,
    #[serde(deserialize_with = "crate::token::lenient_length")]
    pub float_width: Option<String>,
    #[serde(deserialize_with = "crate::token::flag_off")]
    pub clear_float: bool,

    pub column_assignment: ColumnSlot,

    pub background_color: BackgroundSpec,
    pub background_width: BackgroundWidth,
    #[serde(deserialize_with = "crate::token::lenient_length")]
    pub border_width: Option<String>,
    #[serde(deserialize_with = "crate::token::lenient_text")]
    pub border_color: Option<String>,
    #[serde(deserialize_with = "crate::token::lenient_length")]
    pub border_radius: Option<String>,
    #[serde(deserialize_with = "crate::token::lenient_length")]
    pub padding: Option<String>,
}

impl Default for ContentBlock {
    fn default() -> Self {
        Self {
            id: String::new(),
            category: String::new(),
            block_type: String::new(),
            order: 0,
            enabled: true,
            props: serde_json::Value::Null,
            display_mode: DisplayMode::default(),
            breakpoint: Threshold::default(),
            grid_span: GridSpan::default(),
            grid_row_span: GridRowSpan::default(),
            grid_column: GridColumn::default(),
            force_new_row: false,
            align_self: None,
            float_direction: FloatDirection::default(),
            float_width: None,
            clear_float: false,
            column_assignment: ColumnSlot::default(),
            background_color: BackgroundSpec::default(),
            background_width: BackgroundWidth::default(),
            border_width: None,
            border_color: None,
            border_radius: None,
            padding: None,
        }
    }
}

impl ContentBlock {
    /// An enabled block with every placement field at its default
    pub fn new(id: impl Into<String>, category: impl Into<String>, block_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            block_type: block_type.into(),
            ..Default::default()
        }
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    /// Parse a JSON array of blocks
    pub fn list_from_json(input: &str) -> Result<Vec<Self>, LayoutError> {
        Ok(serde_json::from_str(input)?)
    }
}
