//! Section layout configuration

use serde::{Deserialize, Serialize};

use crate::breakpoint::Threshold;
use crate::error::LayoutError;

token_enum! {
    /// Container-level arrangement selected for a section
    pub enum Layout {
        SingleColumn = "single-column" | "single" | "",
        TwoColumn = "two-column",
        Grid = "grid",
        Masonry = "masonry",
        FlexColumns = "flex-columns",
        FloatColumns = "float-columns",
    }
    default = SingleColumn;
}

token_enum! {
    /// Grid auto-placement direction
    pub enum GridFlow {
        Row = "row",
        Col = "col" | "column",
        Dense = "dense",
        RowDense = "row-dense",
        ColDense = "col-dense" | "column-dense",
    }
    default = Row;
}

token_enum! {
    /// Masonry column count
    pub enum MasonryColumns {
        Two = "2",
        Three = "3",
    }
    default = Two;
}

impl MasonryColumns {
    pub fn count(self) -> u8 {
        match self {
            MasonryColumns::Two => 2,
            MasonryColumns::Three => 3,
        }
    }
}

/// Layout settings for one section
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub layout: Layout,
    pub grid_flow: GridFlow,
    pub masonry_columns: MasonryColumns,
    /// Width at which float-columns blocks start floating
    pub float_breakpoint: Threshold,
    /// Desktop width of flex column 1, in percent
    #[serde(deserialize_with = "crate::token::lenient_percent")]
    pub column1_width: Option<f32>,
    #[serde(deserialize_with = "crate::token::lenient_percent")]
    pub column2_width: Option<f32>,
    #[serde(deserialize_with = "crate::token::lenient_percent")]
    pub column3_width: Option<f32>,
}

impl LayoutConfig {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            ..Default::default()
        }
    }

    /// Parse a configuration from JSON
    pub fn from_json_str(input: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parse a configuration from TOML
    pub fn from_toml_str(input: &str) -> Result<Self, LayoutError> {
        Ok(toml::from_str(input)?)
    }

    /// Configured flex column widths, indexed by column
    pub fn column_widths(&self) -> [Option<f32>; 3] {
        [self.column1_width, self.column2_width, self.column3_width]
    }
}
