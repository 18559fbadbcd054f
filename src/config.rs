//! Configuration management for the dashboard restyler.
//!
//! Handles:
//! - Command-line argument parsing
//! - Project configuration (`.dashboard-restyle.toml`)

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::driver::TARGET_FILES;
use crate::parser::DEFAULT_GENERATED;

/// File name of the project configuration, looked up in the pages directory
pub const PROJECT_CONFIG_FILE: &str = ".dashboard-restyle.toml";

/// Tenant named in the page footer
pub const DEFAULT_TENANT: &str = "Panthro.co";

/// Command-line arguments for the restyler
#[derive(Debug, Parser)]
#[command(name = "restyle-dashboards")]
#[command(about = "Apply the shared navigation, header and theme to the Entra dashboard pages")]
#[command(version)]
pub struct Args {
    /// Directory containing the dashboard pages
    #[arg(long, help = "Directory containing the dashboard pages (default: current directory)")]
    pub dir: Option<PathBuf>,

    /// Explicit configuration file
    #[arg(long, help = "Configuration TOML file")]
    pub config: Option<PathBuf>,

    /// Render pages without writing them back
    #[arg(long)]
    pub dry_run: bool,

    /// Log level for diagnostics
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Settings that shape the rendered page
#[derive(Debug, Clone, PartialEq)]
pub struct PageSettings {
    /// Tenant shown in the footer
    pub tenant: String,
    /// Timestamp used when a page has no `Generated:` marker
    pub fallback_generated: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            tenant: DEFAULT_TENANT.to_string(),
            fallback_generated: DEFAULT_GENERATED.to_string(),
        }
    }
}

/// Contents of a configuration file; every key is optional
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ProjectConfig {
    pub tenant: Option<String>,
    pub fallback_generated: Option<String>,
    pub targets: Option<Vec<String>>,
}

impl ProjectConfig {
    /// Load and parse a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the pages
    pub dir: PathBuf,
    /// Page file names to rewrite, in order
    pub targets: Vec<String>,
    pub page: PageSettings,
    pub dry_run: bool,
    pub log_level: String,
    /// Configuration file that was applied, if any
    pub project_config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            targets: TARGET_FILES.iter().map(|name| name.to_string()).collect(),
            page: PageSettings::default(),
            dry_run: false,
            log_level: "info".to_string(),
            project_config_path: None,
        }
    }
}

impl Config {
    /// Create configuration from parsed arguments
    pub fn from_args(args: Args) -> Result<Self> {
        let dir = match args.dir {
            Some(dir) => dir,
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };

        let mut config = Config {
            dir,
            dry_run: args.dry_run,
            log_level: args.log_level,
            ..Config::default()
        };

        if let Some((path, project)) = discover_config(&config.dir, args.config.as_deref())? {
            log::info!("Using configuration {}", path.display());
            config.apply(project);
            config.project_config_path = Some(path);
        }

        Ok(config)
    }

    /// Whether a configuration file was found and applied
    pub fn has_project_config(&self) -> bool {
        self.project_config_path.is_some()
    }

    /// Overlay the keys present in `project`
    pub fn apply(&mut self, project: ProjectConfig) {
        if let Some(tenant) = project.tenant {
            self.page.tenant = tenant;
        }
        if let Some(fallback) = project.fallback_generated {
            self.page.fallback_generated = fallback;
        }
        if let Some(targets) = project.targets {
            self.targets = targets;
        }
    }
}

/// Find the configuration to apply
///
/// Priority: explicit path > project file in `dir`. Either one failing to
/// load is an error.
fn discover_config(dir: &Path, explicit: Option<&Path>) -> Result<Option<(PathBuf, ProjectConfig)>> {
    if let Some(path) = explicit {
        return Ok(Some((path.to_path_buf(), ProjectConfig::load(path)?)));
    }

    let project_path = dir.join(PROJECT_CONFIG_FILE);
    if project_path.is_file() {
        let project = ProjectConfig::load(&project_path)?;
        return Ok(Some((project_path, project)));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_fixed_targets() {
        let config = Config::default();
        assert_eq!(config.targets.len(), 11);
        assert_eq!(config.targets[0], "EntraDashboard.conditional-access.html");
        assert_eq!(config.page.tenant, "Panthro.co");
        assert_eq!(config.page.fallback_generated, "2026-02-13 16:05:52Z");
        assert!(!config.has_project_config());
    }

    #[test]
    fn test_apply_overlays_present_keys() {
        let mut config = Config::default();
        config.apply(ProjectConfig {
            tenant: Some("Contoso".to_string()),
            fallback_generated: None,
            targets: Some(vec!["a.html".to_string()]),
        });

        assert_eq!(config.page.tenant, "Contoso");
        assert_eq!(config.page.fallback_generated, DEFAULT_GENERATED);
        assert_eq!(config.targets, vec!["a.html".to_string()]);
    }

    #[test]
    fn test_parse_project_config() {
        let project: ProjectConfig = toml::from_str(
            r#"
tenant = "Fabrikam"
targets = ["EntraDashboard.users.html"]
"#,
        )
        .expect("parse config");

        assert_eq!(project.tenant.as_deref(), Some("Fabrikam"));
        assert_eq!(project.fallback_generated, None);
        assert_eq!(project.targets.map(|t| t.len()), Some(1));
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["restyle-dashboards", "--dir", "/tmp/pages", "--dry-run"]);
        assert_eq!(args.dir, Some(PathBuf::from("/tmp/pages")));
        assert!(args.dry_run);
        assert_eq!(args.log_level, "info");
        assert!(args.config.is_none());
    }
}
