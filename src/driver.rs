//! Rewrite loop over the dashboard pages.
//!
//! Each page is read whole, restyled in memory and written back before the
//! next one is touched. Pages missing from disk are skipped.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{Config, PageSettings};
use crate::parser::parse_document;
use crate::render::render_page;
use crate::transform::{transform_section, RecomposedSection};

/// Sub-pages rewritten by a default run, in processing order
pub const TARGET_FILES: &[&str] = &[
    "EntraDashboard.conditional-access.html",
    "EntraDashboard.users.html",
    "EntraDashboard.groups.html",
    "EntraDashboard.devices.html",
    "EntraDashboard.enterprise-apps.html",
    "EntraDashboard.app-registrations.html",
    "EntraDashboard.monitoring-health.html",
    "EntraDashboard.intune-home.html",
    "EntraDashboard.defender-home.html",
    "EntraDashboard.pim.html",
    "EntraDashboard.apps.html",
];

/// What happened to one target page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    /// Rendered during a dry run, file left untouched
    WouldUpdate,
    /// Not present on disk
    Skipped,
}

/// Per-page result of a run
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub name: String,
    pub outcome: Outcome,
    pub sections: usize,
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Updated => write!(f, "Updated: {}", self.name),
            Outcome::WouldUpdate => write!(f, "Would update: {}", self.name),
            Outcome::Skipped => write!(f, "Skipped (not found): {}", self.name),
        }
    }
}

/// Reports for every target, in processing order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub reports: Vec<FileReport>,
}

impl RunSummary {
    pub fn count(&self, outcome: Outcome) -> usize {
        self.reports.iter().filter(|r| r.outcome == outcome).count()
    }

    pub fn skipped(&self) -> Vec<&str> {
        self.reports
            .iter()
            .filter(|r| r.outcome == Outcome::Skipped)
            .map(|r| r.name.as_str())
            .collect()
    }
}

/// Restyle one page's HTML
///
/// `file_name` selects the active navigation link. Returns the new page and
/// the number of sections it carries.
pub fn restyle_html(content: &str, file_name: &str, settings: &PageSettings) -> (String, usize) {
    let document = parse_document(content, &settings.fallback_generated);
    let sections: Vec<RecomposedSection> = document.sections.iter().map(transform_section).collect();
    let html = render_page(&document, &sections, file_name, &settings.tenant);
    (html, sections.len())
}

/// Restyle the page at `path` in place
///
/// With `dry_run` the page is rendered but not written.
pub fn transform_file(path: &Path, settings: &PageSettings, dry_run: bool) -> Result<FileReport> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let (html, sections) = restyle_html(&content, &name, settings);

    let outcome = if dry_run {
        Outcome::WouldUpdate
    } else {
        fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;
        Outcome::Updated
    };

    log::info!("{}: {} section(s), {:?}", name, sections, outcome);
    Ok(FileReport {
        name,
        outcome,
        sections,
    })
}

/// Rewrite every configured target under `config.dir`
///
/// Prints one progress line per target. The first I/O error stops the run.
pub fn run(config: &Config) -> Result<RunSummary> {
    println!("Transforming dashboard sub-pages...");
    let mut summary = RunSummary::default();

    for name in &config.targets {
        let path = config.dir.join(name);
        let report = if path.exists() {
            transform_file(&path, &config.page, config.dry_run)?
        } else {
            log::info!("{} not found in {}", name, config.dir.display());
            FileReport {
                name: name.clone(),
                outcome: Outcome::Skipped,
                sections: 0,
            }
        };
        println!("  {}", report);
        summary.reports.push(report);
    }

    println!("Done!");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lines() {
        let report = FileReport {
            name: "EntraDashboard.pim.html".to_string(),
            outcome: Outcome::Skipped,
            sections: 0,
        };
        assert_eq!(report.to_string(), "Skipped (not found): EntraDashboard.pim.html");

        let updated = FileReport {
            outcome: Outcome::Updated,
            ..report
        };
        assert_eq!(updated.to_string(), "Updated: EntraDashboard.pim.html");
    }

    #[test]
    fn test_restyle_html_counts_sections() {
        let content = r#"<section class="section"><h2>Users</h2></section>
<section class="section"><h2>Groups</h2></section>"#;
        let (html, sections) =
            restyle_html(content, "EntraDashboard.users.html", &PageSettings::default());

        assert_eq!(sections, 2);
        assert_eq!(html.matches(r#"<section class="section">"#).count(), 2);
        assert!(html.contains("<title>Entra Dashboard - Dashboard</title>"));
        assert!(html.contains("Generated: 2026-02-13 16:05:52Z"));
    }

    #[test]
    fn test_fixed_target_list() {
        assert_eq!(TARGET_FILES.len(), 11);
        assert!(TARGET_FILES.iter().all(|name| name.starts_with("EntraDashboard.")));
    }
}
