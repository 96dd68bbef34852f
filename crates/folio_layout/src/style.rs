//! Structural tags and inline styles
//!
//! The rendering layer consumes placement in two forms:
//!
//! - [`Tag`]: a breakpoint-scoped utility, rendered as a utility-class
//!   string (`md:col-span-2`)
//! - [`InlineStyle`]: ordered CSS declarations for values that are not
//!   structural (`align-self`, background colors)

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use smallvec::SmallVec;

use crate::breakpoint::Breakpoint;
use crate::config::GridFlow;

/// Uniform vertical gap between stacked blocks
pub const BLOCK_GAP: &str = "1.5rem";

/// A single layout utility
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Utility {
    Hidden,
    Block,
    Flex,
    FlexCol,
    FlexRow,
    Flex1,
    FlowRoot,
    Grid,
    GridCols(u8),
    GridFlow(GridFlow),
    ColSpan(u8),
    ColSpanFull,
    ColStart(u8),
    RowSpan(u8),
    Columns(u8),
    BreakInsideAvoid,
    FloatLeft,
    FloatRight,
    FloatNone,
    ClearBoth,
    ClearNone,
    FullWidth,
    Width(String),
    MaxWidth(String),
    Basis(String),
    MarginLeft(String),
    MarginRight(String),
    MarginBottom(String),
    /// Marks a placeholder for a block type nobody can render
    Unsupported,
}

/// Arbitrary values may not contain spaces inside a class name
fn arbitrary(value: &str) -> String {
    value.replace(' ', "_")
}

impl Display for Utility {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Utility::Hidden => f.write_str("hidden"),
            Utility::Block => f.write_str("block"),
            Utility::Flex => f.write_str("flex"),
            Utility::FlexCol => f.write_str("flex-col"),
            Utility::FlexRow => f.write_str("flex-row"),
            Utility::Flex1 => f.write_str("flex-1"),
            Utility::FlowRoot => f.write_str("flow-root"),
            Utility::Grid => f.write_str("grid"),
            Utility::GridCols(n) => write!(f, "grid-cols-{n}"),
            Utility::GridFlow(flow) => write!(f, "grid-flow-{flow}"),
            Utility::ColSpan(n) => write!(f, "col-span-{n}"),
            Utility::ColSpanFull => f.write_str("col-span-full"),
            Utility::ColStart(n) => write!(f, "col-start-{n}"),
            Utility::RowSpan(n) => write!(f, "row-span-{n}"),
            Utility::Columns(n) => write!(f, "columns-{n}"),
            Utility::BreakInsideAvoid => f.write_str("break-inside-avoid"),
            Utility::FloatLeft => f.write_str("float-left"),
            Utility::FloatRight => f.write_str("float-right"),
            Utility::FloatNone => f.write_str("float-none"),
            Utility::ClearBoth => f.write_str("clear-both"),
            Utility::ClearNone => f.write_str("clear-none"),
            Utility::FullWidth => f.write_str("w-full"),
            Utility::Width(v) => write!(f, "w-[{}]", arbitrary(v)),
            Utility::MaxWidth(v) => write!(f, "max-w-[{}]", arbitrary(v)),
            Utility::Basis(v) => write!(f, "basis-[{}]", arbitrary(v)),
            Utility::MarginLeft(v) => write!(f, "ml-[{}]", arbitrary(v)),
            Utility::MarginRight(v) => write!(f, "mr-[{}]", arbitrary(v)),
            Utility::MarginBottom(v) => write!(f, "mb-[{}]", arbitrary(v)),
            Utility::Unsupported => f.write_str("block-unsupported"),
        }
    }
}

/// A utility, optionally scoped to a breakpoint and up
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tag {
    pub at: Option<Breakpoint>,
    pub utility: Utility,
}

impl Tag {
    /// Applies at every viewport width
    pub fn base(utility: Utility) -> Self {
        Self { at: None, utility }
    }

    /// Applies at and above `breakpoint`
    pub fn at(breakpoint: Breakpoint, utility: Utility) -> Self {
        Self {
            at: Some(breakpoint),
            utility,
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.at {
            Some(bp) => write!(f, "{bp}:{}", self.utility),
            None => write!(f, "{}", self.utility),
        }
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Tag list; most placements need only a handful
pub type Tags = SmallVec<[Tag; 6]>;

/// Render tags as a space-separated class list
pub fn class_list<'a>(tags: impl IntoIterator<Item = &'a Tag>) -> String {
    tags.into_iter()
        .map(|tag| tag.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ordered CSS declarations
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InlineStyle(IndexMap<String, String>);

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a declaration, replacing any previous value for `property`
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.0.insert(property.into(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.0.contains_key(property)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Display for InlineStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, (property, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{property}: {value};")?;
        }
        Ok(())
    }
}
