//! Section Transform
//!
//! Resolves the heading icon, isolates the cards container and makes every
//! table horizontally scrollable.

use crate::parser::{scanner, Section};
use crate::render::icon_for;

/// Opening tag of the container holding a section's cards
pub const CARDS_OPEN: &str = r#"<div class="cards">"#;

/// Opening tag of the scroll wrapper placed around tables
pub const TABLE_SCROLL_OPEN: &str = r#"<div class="table-scroll">"#;

/// A section ready for the page template
#[derive(Debug, Clone, PartialEq)]
pub struct RecomposedSection {
    pub title: String,
    pub icon: &'static str,
    /// Cards container content with tables wrapped
    pub cards: String,
}

impl RecomposedSection {
    pub fn to_html(&self) -> String {
        format!(
            r#"    <section class="section">
      <h2>{icon} {title}</h2>
      <div class="cards">
{cards}
      </div>
    </section>"#,
            icon = self.icon,
            title = self.title,
            cards = self.cards,
        )
    }
}

/// Recompose one section
///
/// A section without a cards container keeps its heading and gets an empty
/// card group.
pub fn transform_section(section: &Section) -> RecomposedSection {
    let cards = scanner::container_content(&section.markup, CARDS_OPEN, "div").unwrap_or("");
    log::debug!(
        "Section '{}': {} bytes of cards content",
        section.title,
        cards.len()
    );

    RecomposedSection {
        title: section.title.clone(),
        icon: icon_for(&section.title),
        cards: wrap_tables(cards.trim()),
    }
}

/// Wrap every table in a scroll container, leaving wrapped tables alone
pub fn wrap_tables(content: &str) -> String {
    scanner::wrap_elements(content, "table", TABLE_SCROLL_OPEN, "div")
}
