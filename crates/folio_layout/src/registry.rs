//! Leaf renderer registry contract
//!
//! Rendering of block contents lives outside this crate. The assembler only
//! asks whether someone can render a `(category, type)` pair; blocks nobody
//! claims become placeholder entries.

use rustc_hash::{FxHashMap, FxHashSet};

/// Answers whether a leaf renderer exists for a block type
pub trait BlockRegistry {
    fn supports(&self, category: &str, block_type: &str) -> bool;
}

/// Registry that claims every block type
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl BlockRegistry for AcceptAll {
    fn supports(&self, _category: &str, _block_type: &str) -> bool {
        true
    }
}

/// Fixed set of known `(category, type)` pairs
#[derive(Clone, Debug, Default)]
pub struct KnownBlocks {
    types: FxHashMap<String, FxHashSet<String>>,
}

impl KnownBlocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: impl Into<String>, block_type: impl Into<String>) {
        self.types
            .entry(category.into())
            .or_default()
            .insert(block_type.into());
    }

    pub fn with(mut self, category: impl Into<String>, block_type: impl Into<String>) -> Self {
        self.insert(category, block_type);
        self
    }

    pub fn len(&self) -> usize {
        self.types.values().map(FxHashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BlockRegistry for KnownBlocks {
    fn supports(&self, category: &str, block_type: &str) -> bool {
        self.types
            .get(category)
            .is_some_and(|types| types.contains(block_type))
    }
}

impl<C: Into<String>, T: Into<String>> FromIterator<(C, T)> for KnownBlocks {
    fn from_iter<I: IntoIterator<Item = (C, T)>>(iter: I) -> Self {
        let mut known = KnownBlocks::new();
        for (category, block_type) in iter {
            known.insert(category, block_type);
        }
        known
    }
}

impl<F> BlockRegistry for F
where
    F: Fn(&str, &str) -> bool,
{
    fn supports(&self, category: &str, block_type: &str) -> bool {
        self(category, block_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_blocks() {
        let known: KnownBlocks = [("text", "paragraph"), ("text", "heading"), ("media", "image")]
            .into_iter()
            .collect();
        assert_eq!(known.len(), 3);
        assert!(known.supports("text", "heading"));
        assert!(!known.supports("text", "image"));
        assert!(!known.supports("commerce", "product"));
    }

    #[test]
    fn test_known_blocks_builder() {
        let known = KnownBlocks::new().with("text", "quote").with("text", "quote").with("media", "video");
        assert_eq!(known.len(), 2);
        assert!(known.supports("media", "video"));
        assert!(!KnownBlocks::new().supports("text", "quote"));
        assert!(KnownBlocks::new().is_empty());
    }

    #[test]
    fn test_closure_registry() {
        let only_text = |category: &str, _: &str| category == "text";
        assert!(only_text.supports("text", "anything"));
        assert!(!only_text.supports("media", "image"));
        assert!(AcceptAll.supports("x", "y"));
    }
}
