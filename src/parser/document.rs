//! Parsed Document
//!
//! Plain data extracted from a dashboard page before recomposition.

use super::scanner;

/// Heading used when a section has no `<h2>` heading
pub const DEFAULT_SECTION_TITLE: &str = "Section";

/// A dashboard page reduced to the parts the template keeps
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub generated: String,
    pub sections: Vec<Section>,
}

/// A titled content block
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    /// Inner markup between `<section class="section">` and `</section>`
    pub markup: String,
}

impl Section {
    /// Build a section from its inner markup, reading the heading text.
    ///
    /// Markup inside the heading is dropped, so a heading that already
    /// carries an icon resolves to the same title as a bare one.
    pub fn from_markup(markup: &str) -> Self {
        let title = scanner::first_inline_element(markup, "h2")
            .map(|heading| scanner::strip_tags(heading).trim().to_string())
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| DEFAULT_SECTION_TITLE.to_string());

        Self {
            title,
            markup: markup.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_title_from_heading() {
        let section = Section::from_markup("\n<h2>Users</h2>\n<div class=\"cards\"></div>");
        assert_eq!(section.title, "Users");
    }

    #[test]
    fn test_section_title_ignores_icon_markup() {
        let section = Section::from_markup(r#"<h2><svg viewBox="0 0 24 24"><circle r="4"/></svg> PIM</h2>"#);
        assert_eq!(section.title, "PIM");
    }

    #[test]
    fn test_section_title_keeps_comparison_text() {
        let section = Section::from_markup("<h2>Risk < 5 days</h2>");
        assert_eq!(section.title, "Risk < 5 days");
    }

    #[test]
    fn test_section_title_fallback() {
        assert_eq!(Section::from_markup("<p>no heading</p>").title, "Section");
        assert_eq!(Section::from_markup("<h2>  </h2>").title, "Section");
    }
}
