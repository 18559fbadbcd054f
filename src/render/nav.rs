//! Navigation Bar
//!
//! The sticky top bar shared by every dashboard page.

/// Product name shown in the brand link, the page title and the footer
pub const BRAND: &str = "Entra Dashboard";

/// Overview page the brand and footer link back to
pub const HOME_PAGE: &str = "EntraDashboard.html";

const BRAND_ICON: &str = r#"<svg viewBox="0 0 24 24" width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/></svg>"#;

/// A navigation link: page file name and its label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavEntry {
    pub file: &'static str,
    pub label: &'static str,
}

impl NavEntry {
    pub const fn new(file: &'static str, label: &'static str) -> Self {
        Self { file, label }
    }
}

/// Navigation links in display order
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry::new(HOME_PAGE, "Home"),
    NavEntry::new("EntraDashboard.conditional-access.html", "Conditional Access"),
    NavEntry::new("EntraDashboard.users.html", "Users"),
    NavEntry::new("EntraDashboard.groups.html", "Groups"),
    NavEntry::new("EntraDashboard.devices.html", "Devices"),
    NavEntry::new("EntraDashboard.enterprise-apps.html", "Enterprise Apps"),
    NavEntry::new("EntraDashboard.app-registrations.html", "App Registrations"),
    NavEntry::new("EntraDashboard.monitoring-health.html", "Monitoring & Health"),
    NavEntry::new("EntraDashboard.intune-home.html", "Intune"),
    NavEntry::new("EntraDashboard.defender-home.html", "Defender"),
    NavEntry::new("EntraDashboard.pim.html", "PIM"),
];

/// The entry marked active when rendering `file_name`, if any
pub fn active_entry(file_name: &str) -> Option<&'static NavEntry> {
    NAV_ENTRIES.iter().find(|entry| entry.file == file_name)
}

/// Render the `<nav>` block with `active_file` highlighted
pub fn render_nav(active_file: &str) -> String {
    let mut lines = vec![
        r#"  <nav class="topnav">"#.to_string(),
        format!(r#"    <a class="brand" href="{HOME_PAGE}">"#),
        format!("      {BRAND_ICON}"),
        format!("      {BRAND}"),
        "    </a>".to_string(),
    ];

    let active = active_entry(active_file);
    for entry in NAV_ENTRIES {
        let class = if active == Some(entry) { " active" } else { "" };
        lines.push(format!(
            r#"    <a class="nav-link{class}" href="{}">{}</a>"#,
            entry.file, entry.label
        ));
    }

    lines.push("  </nav>".to_string());
    lines.join("\n")
}
