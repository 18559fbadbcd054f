//! Dashboard Parser
//!
//! Pulls the title, generation timestamp and section blocks out of an
//! existing dashboard page. Extraction never fails: absent parts fall back
//! to fixed defaults.

pub mod document;
pub mod scanner;

use std::sync::LazyLock;

use regex::Regex;

pub use document::{Document, Section, DEFAULT_SECTION_TITLE};

/// Title used when the page has no `<title>Entra Dashboard - ...</title>`
pub const DEFAULT_TITLE: &str = "Dashboard";

/// Timestamp used when the page has no `Generated:` marker
pub const DEFAULT_GENERATED: &str = "2026-02-13 16:05:52Z";

pub const SECTION_OPEN: &str = r#"<section class="section">"#;
pub const SECTION_CLOSE: &str = "</section>";

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<title>Entra Dashboard\s*-?\s*(.*?)</title>").expect("title pattern is valid")
});

static GENERATED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Generated:\s*([\d\-T: Z]+)").expect("generated pattern is valid")
});

/// Parse a dashboard page
///
/// `fallback_generated` replaces the timestamp when the page carries none.
pub fn parse_document(content: &str, fallback_generated: &str) -> Document {
    Document {
        title: extract_title(content).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        generated: extract_generated(content).unwrap_or_else(|| fallback_generated.to_string()),
        sections: extract_sections(content)
            .into_iter()
            .map(Section::from_markup)
            .collect(),
    }
}

/// Page title after the `Entra Dashboard -` prefix, trimmed
pub fn extract_title(content: &str) -> Option<String> {
    let captures = TITLE_RE.captures(content)?;
    Some(captures.get(1)?.as_str().trim().to_string())
}

/// Value of the first `Generated:` marker, trimmed
pub fn extract_generated(content: &str) -> Option<String> {
    let captures = GENERATED_RE.captures(content)?;
    Some(captures.get(1)?.as_str().trim().to_string())
}

/// Inner markup of each `<section class="section">` block, in document order
pub fn extract_sections(content: &str) -> Vec<&str> {
    scanner::blocks_between(content, SECTION_OPEN, SECTION_CLOSE)
}
