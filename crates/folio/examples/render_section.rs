//! Section Rendering Demo
//!
//! Resolves a section's theme, assembles its render plan and prints both.
//!
//! Run with:
//! `cargo run -p folio --example render_section [path/to/section.json]`
//!
//! Set `RUST_LOG=folio=debug,folio_layout=trace` to follow resolution.

use anyhow::{Context, Result};
use folio::prelude::*;
use folio::{render_section_with_registry, KnownBlocks};
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = include_str!("newsletter.json");

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let request = match std::env::args().nth(1) {
        Some(path) => {
            let input = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            let parsed = if path.ends_with(".toml") {
                SectionRequest::from_toml_str(&input)
            } else {
                SectionRequest::from_json_str(&input)
            };
            parsed.with_context(|| format!("parsing {path}"))?
        }
        None => SectionRequest::from_json_str(SAMPLE).context("parsing bundled sample")?,
    };

    let registry = KnownBlocks::new()
        .with("text", "heading")
        .with("text", "paragraph")
        .with("text", "quote")
        .with("media", "image")
        .with("commerce", "button");

    let resolver = ThemeResolver::new();
    let section = render_section_with_registry(&resolver, &request, &registry);

    println!("theme primary: {}", section.theme.color.primary.main);
    println!("container: {}", section.plan.container_class());
    for entry in &section.plan {
        println!("  {:<12} {}", entry.block.id, entry.class_list());
        if !entry.outer_style.is_empty() {
            println!("  {:<12} outer: {}", "", entry.outer_style);
        }
        if !entry.inner_style.is_empty() {
            println!("  {:<12} inner: {}", "", entry.inner_style);
        }
    }

    let variables = section.css_variables();
    println!("{} css variables, e.g.", variables.len());
    for (name, value) in variables.iter().take(5) {
        println!("  {name}: {value};");
    }

    println!("{}", serde_json::to_string_pretty(&section.plan)?);
    Ok(())
}
