//! Render plan assembly

use crate::background::BackgroundTarget;
use crate::block::ContentBlock;
use crate::config::LayoutConfig;
use crate::placement::place;
use crate::plan::{BlockRef, EntryContent, RenderPlan, RenderPlanEntry};
use crate::registry::{AcceptAll, BlockRegistry};
use crate::strategy::{strategy_for, LayoutStrategy};
use crate::style::{InlineStyle, Tag, Utility};
use crate::token::{css_value, is_zero_length};
use crate::visibility::{visibility_for, visibility_tags};

/// Build the render plan for a section, treating every block type as supported
pub fn assemble(blocks: &[ContentBlock], config: &LayoutConfig) -> RenderPlan {
    assemble_with_registry(blocks, config, &AcceptAll)
}

/// Build the render plan for a section
///
/// Disabled blocks are dropped and the rest are stably sorted by `order`, so
/// blocks sharing an order keep their input position. Blocks the registry
/// does not support become placeholder entries in their slot. Identical
/// inputs always produce identical plans.
pub fn assemble_with_registry<R>(blocks: &[ContentBlock], config: &LayoutConfig, registry: &R) -> RenderPlan
where
    R: BlockRegistry + ?Sized,
{
    let strategy = strategy_for(config);

    let mut ordered: Vec<(usize, &ContentBlock)> = blocks
        .iter()
        .enumerate()
        .filter(|(_, block)| block.enabled)
        .collect();
    ordered.sort_by_key(|(_, block)| block.order);

    tracing::trace!(
        layout = %config.layout,
        blocks = blocks.len(),
        enabled = ordered.len(),
        "assembling render plan"
    );

    let entries = ordered
        .into_iter()
        .map(|(index, block)| build_entry(index, block, &strategy, registry))
        .collect();

    RenderPlan {
        container: strategy.container_tags(),
        container_style: strategy.container_style(),
        strategy,
        entries,
    }
}

fn build_entry<R>(index: usize, block: &ContentBlock, strategy: &LayoutStrategy, registry: &R) -> RenderPlanEntry
where
    R: BlockRegistry + ?Sized,
{
    let mut placement = place(block, strategy);

    let content = if registry.supports(&block.category, &block.block_type) {
        EntryContent::Block {
            props: block.props.clone(),
        }
    } else {
        tracing::warn!(
            id = %block.id,
            category = %block.category,
            block_type = %block.block_type,
            "no renderer for block type, emitting placeholder"
        );
        placement.tags.push(Tag::base(Utility::Unsupported));
        EntryContent::Unsupported {
            diagnostic: format!("unsupported block type `{}/{}`", block.category, block.block_type),
        }
    };

    let visibility = visibility_for(block.display_mode, block.breakpoint);
    let background = block.background_color.directive(block.background_width);

    let mut outer_style = placement.style.clone();
    let mut inner_style = box_style(block);
    if let Some(directive) = &background {
        if let Some((property, value)) = directive.declaration() {
            match directive.target {
                BackgroundTarget::Outer => outer_style.set(property, value),
                BackgroundTarget::Inner => inner_style.set(property, value),
            }
        }
    }

    RenderPlanEntry {
        block: BlockRef {
            id: block.id.clone(),
            category: block.category.clone(),
            block_type: block.block_type.clone(),
            source_index: index,
        },
        content,
        placement,
        visibility,
        visibility_tags: visibility_tags(visibility),
        background,
        outer_style,
        inner_style,
    }
}

/// Border, radius and padding for the content box
fn box_style(block: &ContentBlock) -> InlineStyle {
    let mut style = InlineStyle::new();
    let width = block.border_width.as_deref().and_then(css_value);
    if let Some(width) = width.filter(|w| !is_zero_length(w)) {
        let color = block.border_color.as_deref().and_then(css_value).unwrap_or("currentColor");
        style.set("border", format!("{width} solid {color}"));
    }
    if let Some(radius) = block.border_radius.as_deref().and_then(css_value) {
        style.set("border-radius", radius);
    }
    if let Some(padding) = block.padding.as_deref().and_then(css_value) {
        style.set("padding", padding);
    }
    style
}
