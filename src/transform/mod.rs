//! Section Recomposition
//!
//! Turns parsed sections into the markup the shared template expects.

pub mod section;

pub use section::{transform_section, wrap_tables, RecomposedSection, CARDS_OPEN, TABLE_SCROLL_OPEN};
