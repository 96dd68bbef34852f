//! Per-block visibility

use crate::block::DisplayMode;
use crate::breakpoint::{ResponsiveRule, Threshold};
use crate::style::{Tags, Utility};

/// Viewport range over which a block is visible
///
/// `always` as a breakpoint treats every viewport as above the threshold,
/// `never` treats every viewport as below it. Every input pair yields exactly
/// one rule.
pub fn visibility_for(mode: DisplayMode, breakpoint: Threshold) -> ResponsiveRule {
    match mode {
        DisplayMode::Always => ResponsiveRule::Always,
        DisplayMode::AboveBreakpoint => ResponsiveRule::from_threshold(breakpoint),
        DisplayMode::BelowBreakpoint => ResponsiveRule::from_threshold(breakpoint).inverse(),
    }
}

/// Structural tags that hide a block outside its visible range
pub fn visibility_tags(rule: ResponsiveRule) -> Tags {
    rule.tags(Utility::Block, Utility::Hidden)
}
