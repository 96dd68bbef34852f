//! Flex column arrangement
//!
//! Desktop columns are derived from each entry's column slot and the
//! configured widths. When no width is configured, the columns that hold at
//! least one block share the row equally. Once any width is configured, only
//! columns with a positive width are laid out and each is capped at its
//! percentage; blocks assigned elsewhere appear only in the mobile stack.

use serde::Serialize;

use crate::block::ColumnSlot;
use crate::breakpoint::Breakpoint;
use crate::style::{Tag, Tags, Utility};
use crate::token::format_percent;

/// Desktop width of one column
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "percent", rename_all = "kebab-case")]
pub enum ColumnWidth {
    /// Even share of the row
    Equal(f32),
    /// Configured basis and maximum
    Fixed(f32),
}

impl ColumnWidth {
    pub fn percent(self) -> f32 {
        match self {
            ColumnWidth::Equal(p) | ColumnWidth::Fixed(p) => p,
        }
    }
}

/// One column of the desktop arrangement
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DesktopColumn {
    pub slot: ColumnSlot,
    pub width: ColumnWidth,
    /// Indices into the plan's entries, in plan order
    pub entries: Vec<usize>,
}

impl DesktopColumn {
    /// Tags for the column wrapper, which sizes itself from `collapse_below` up
    pub fn tags(&self, collapse_below: Breakpoint) -> Tags {
        let mut tags = Tags::new();
        tags.push(Tag::base(Utility::Flex));
        tags.push(Tag::base(Utility::FlexCol));
        tags.push(Tag::base(Utility::FullWidth));
        match self.width {
            ColumnWidth::Equal(_) => tags.push(Tag::at(collapse_below, Utility::Flex1)),
            ColumnWidth::Fixed(percent) => {
                let width = format_percent(percent);
                tags.push(Tag::at(collapse_below, Utility::Basis(width.clone())));
                tags.push(Tag::at(collapse_below, Utility::MaxWidth(width)));
            }
        }
        tags
    }
}

fn is_configured(width: Option<f32>) -> bool {
    width.is_some_and(|w| w > 0.0)
}

/// Partition entries into desktop columns
///
/// `slots` yields each entry's column slot in plan order.
pub fn arrange_columns(
    widths: [Option<f32>; 3],
    slots: impl IntoIterator<Item = ColumnSlot>,
) -> Vec<DesktopColumn> {
    let mut members: [Vec<usize>; 3] = Default::default();
    for (index, slot) in slots.into_iter().enumerate() {
        members[slot.index()].push(index);
    }

    let mut columns = Vec::with_capacity(3);
    if widths.iter().any(|w| is_configured(*w)) {
        for (slot, (width, entries)) in ColumnSlot::ALL.iter().zip(widths.into_iter().zip(members)) {
            match width.filter(|w| *w > 0.0) {
                Some(percent) => columns.push(DesktopColumn {
                    slot: *slot,
                    width: ColumnWidth::Fixed(percent),
                    entries,
                }),
                None if !entries.is_empty() => {
                    tracing::trace!(column = %slot, blocks = entries.len(), "column has no width, omitted from desktop");
                }
                None => {}
            }
        }
    } else {
        let present = members.iter().filter(|m| !m.is_empty()).count();
        if present == 0 {
            return columns;
        }
        let share = 100.0 / present as f32;
        for (slot, entries) in ColumnSlot::ALL.iter().zip(members) {
            if !entries.is_empty() {
                columns.push(DesktopColumn {
                    slot: *slot,
                    width: ColumnWidth::Equal(share),
                    entries,
                });
            }
        }
    }
    columns
}
