//! Page Rendering
//!
//! Assembles the restyled page: theme, navigation, header, sections, footer.

pub mod icons;
pub mod nav;

pub use icons::{icon_for, IconEntry, DEFAULT_ICON, ICONS};
pub use nav::{active_entry, render_nav, NavEntry, BRAND, HOME_PAGE, NAV_ENTRIES};

use crate::parser::Document;
use crate::transform::RecomposedSection;

/// Shared stylesheet body, inlined into every page
pub const THEME_CSS: &str = include_str!("../../resources/theme.css");

/// Render a complete page for `file_name`
///
/// The title and timestamp come from `document`; `sections` are emitted in
/// the order given. `tenant` is named in the footer.
pub fn render_page(
    document: &Document,
    sections: &[RecomposedSection],
    file_name: &str,
    tenant: &str,
) -> String {
    let body_sections = sections
        .iter()
        .map(RecomposedSection::to_html)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{BRAND} - {title}</title>
  <style>
{css}  </style>
</head>
<body>

{nav}

  <div class="wrap">
    <header class="header">
      <h1>{title}</h1>
      <div class="subtitle">Generated: {generated}</div>
    </header>

{body_sections}

    <footer class="footer">
      {BRAND} &middot; Tenant: {tenant} &middot; Generated {generated} &middot;
      <a href="{HOME_PAGE}">Back to Overview</a>
    </footer>
  </div>
</body>
</html>
"#,
        title = document.title,
        generated = document.generated,
        css = THEME_CSS,
        nav = render_nav(file_name),
    )
}
