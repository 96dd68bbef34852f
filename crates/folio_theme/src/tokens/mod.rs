//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system:
//! - Colors
//! - Spacing
//! - Typography (families, sizes, weights, line heights)
//! - Border radii
//! - Shadows

mod color;
mod radius;
mod shadow;
mod spacing;
mod typography;

pub use color::*;
pub use radius::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;
