//! Breakpoints and responsive rules
//!
//! A [`ResponsiveRule`] describes the viewport range over which something
//! holds: a block is visible, a block floats. Both the visibility resolver
//! and float un-floating are expressed with it.

use serde::Serialize;

use crate::style::{Tag, Tags, Utility};

token_enum! {
    /// Named viewport-width threshold
    pub enum Breakpoint {
        Xs = "xs",
        Sm = "sm",
        Md = "md",
        Lg = "lg",
        Xl = "xl",
    }
    default = Md;
}

impl Breakpoint {
    /// Minimum viewport width (px) at which this breakpoint applies
    pub const fn min_width(self) -> u32 {
        match self {
            Breakpoint::Xs => 480,
            Breakpoint::Sm => 640,
            Breakpoint::Md => 768,
            Breakpoint::Lg => 1024,
            Breakpoint::Xl => 1280,
        }
    }

    /// True when `width` is at or above this breakpoint
    pub const fn contains(self, width: u32) -> bool {
        width >= self.min_width()
    }
}

token_enum! {
    /// A breakpoint setting, including the `always` / `never` sentinels
    pub enum Threshold {
        /// Treat every viewport as above the threshold
        Always = "always",
        Xs = "xs",
        Sm = "sm",
        Md = "md",
        Lg = "lg",
        Xl = "xl",
        /// Treat every viewport as below the threshold
        Never = "never",
    }
    default = Md;
}

impl Threshold {
    /// The concrete breakpoint, if this is not a sentinel
    pub fn breakpoint(self) -> Option<Breakpoint> {
        match self {
            Threshold::Always | Threshold::Never => None,
            Threshold::Xs => Some(Breakpoint::Xs),
            Threshold::Sm => Some(Breakpoint::Sm),
            Threshold::Md => Some(Breakpoint::Md),
            Threshold::Lg => Some(Breakpoint::Lg),
            Threshold::Xl => Some(Breakpoint::Xl),
        }
    }
}

/// Viewport range over which a property holds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "breakpoint", rename_all = "kebab-case")]
pub enum ResponsiveRule {
    /// Holds at every viewport width
    Always,
    /// Holds at no viewport width
    Never,
    /// Holds at and above the breakpoint
    AtOrAbove(Breakpoint),
    /// Holds strictly below the breakpoint
    Below(Breakpoint),
}

impl ResponsiveRule {
    /// "Holds above the threshold": `always` → everywhere, `never` → nowhere
    pub fn from_threshold(threshold: Threshold) -> Self {
        match threshold {
            Threshold::Always => ResponsiveRule::Always,
            Threshold::Never => ResponsiveRule::Never,
            _ => match threshold.breakpoint() {
                Some(bp) => ResponsiveRule::AtOrAbove(bp),
                None => ResponsiveRule::Never,
            },
        }
    }

    /// The complementary range
    pub fn inverse(self) -> Self {
        match self {
            ResponsiveRule::Always => ResponsiveRule::Never,
            ResponsiveRule::Never => ResponsiveRule::Always,
            ResponsiveRule::AtOrAbove(bp) => ResponsiveRule::Below(bp),
            ResponsiveRule::Below(bp) => ResponsiveRule::AtOrAbove(bp),
        }
    }

    /// Evaluate the rule for a viewport width in px
    pub fn is_active(self, width: u32) -> bool {
        match self {
            ResponsiveRule::Always => true,
            ResponsiveRule::Never => false,
            ResponsiveRule::AtOrAbove(bp) => bp.contains(width),
            ResponsiveRule::Below(bp) => !bp.contains(width),
        }
    }

    /// Structural tags that switch between `on` and `off` utilities along
    /// this rule's range
    ///
    /// `off` is emitted unprefixed for ranges that do not start at zero, and
    /// the breakpoint-prefixed utility flips it. Nothing is emitted for
    /// `Always`; callers treat the `on` state as the natural one.
    pub fn tags(self, on: Utility, off: Utility) -> Tags {
        let mut tags = Tags::new();
        match self {
            ResponsiveRule::Always => {}
            ResponsiveRule::Never => tags.push(Tag::base(off)),
            ResponsiveRule::AtOrAbove(bp) => {
                tags.push(Tag::base(off));
                tags.push(Tag::at(bp, on));
            }
            ResponsiveRule::Below(bp) => tags.push(Tag::at(bp, off)),
        }
        tags
    }

    /// Like [`tags`](Self::tags), but both states are spelled out in full
    ///
    /// Used where neither state is the natural one, such as a block that
    /// floats on wide viewports and stacks on narrow ones.
    pub fn switch(self, on: &[Utility], off: &[Utility]) -> Tags {
        let base = |utilities: &[Utility]| utilities.iter().cloned().map(Tag::base).collect::<Tags>();
        let at = |bp: Breakpoint, utilities: &[Utility]| {
            utilities
                .iter()
                .cloned()
                .map(move |utility| Tag::at(bp, utility))
                .collect::<Tags>()
        };
        match self {
            ResponsiveRule::Always => base(on),
            ResponsiveRule::Never => base(off),
            ResponsiveRule::AtOrAbove(bp) => {
                let mut tags = base(off);
                tags.extend(at(bp, on));
                tags
            }
            ResponsiveRule::Below(bp) => {
                let mut tags = base(on);
                tags.extend(at(bp, off));
                tags
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints_are_ascending() {
        let widths: Vec<u32> = Breakpoint::ALL.iter().map(|bp| bp.min_width()).collect();
        let mut sorted = widths.clone();
        sorted.sort_unstable();
        assert_eq!(widths, sorted);
    }

    #[test]
    fn test_rule_evaluation() {
        let md = ResponsiveRule::AtOrAbove(Breakpoint::Md);
        assert!(!md.is_active(767));
        assert!(md.is_active(768));
        assert!(md.inverse().is_active(767));
        assert!(!md.inverse().is_active(768));
        assert!(ResponsiveRule::Always.is_active(0));
        assert!(!ResponsiveRule::Never.is_active(4000));
    }

    #[test]
    fn test_rule_from_threshold() {
        assert_eq!(ResponsiveRule::from_threshold(Threshold::Always), ResponsiveRule::Always);
        assert_eq!(ResponsiveRule::from_threshold(Threshold::Never), ResponsiveRule::Never);
        assert_eq!(
            ResponsiveRule::from_threshold(Threshold::Lg),
            ResponsiveRule::AtOrAbove(Breakpoint::Lg)
        );
    }

    #[test]
    fn test_rule_tags() {
        let tags = ResponsiveRule::AtOrAbove(Breakpoint::Md).tags(Utility::Block, Utility::Hidden);
        let classes: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        assert_eq!(classes, vec!["hidden", "md:block"]);

        let tags = ResponsiveRule::Below(Breakpoint::Sm).tags(Utility::Block, Utility::Hidden);
        let classes: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        assert_eq!(classes, vec!["sm:hidden"]);

        assert!(ResponsiveRule::Always.tags(Utility::Block, Utility::Hidden).is_empty());
    }

    #[test]
    fn test_rule_switch() {
        let on = [Utility::FloatLeft, Utility::Width("250px".into())];
        let off = [Utility::FullWidth, Utility::FloatNone];

        let tags = ResponsiveRule::AtOrAbove(Breakpoint::Lg).switch(&on, &off);
        let classes: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        assert_eq!(classes, vec!["w-full", "float-none", "lg:float-left", "lg:w-[250px]"]);

        let tags = ResponsiveRule::Never.switch(&on, &off);
        let classes: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        assert_eq!(classes, vec!["w-full", "float-none"]);
    }
}
