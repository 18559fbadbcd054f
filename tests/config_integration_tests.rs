//! Tests for configuration file discovery and overrides
use std::fs;
use std::path::PathBuf;

use dashboard_restyle::config::{Args, Config, PROJECT_CONFIG_FILE};
use tempfile::TempDir;

fn args(dir: PathBuf, config: Option<PathBuf>) -> Args {
    Args {
        dir: Some(dir),
        config,
        dry_run: false,
        log_level: "info".to_string(),
    }
}

#[test]
fn test_project_config_applied() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(
        temp.path().join(PROJECT_CONFIG_FILE),
        r#"
tenant = "Fabrikam"
targets = ["EntraDashboard.users.html", "EntraDashboard.pim.html"]
"#,
    )
    .expect("write config");

    let config = Config::from_args(args(temp.path().to_path_buf(), None)).expect("create config");

    assert!(config.has_project_config());
    assert_eq!(config.page.tenant, "Fabrikam");
    assert_eq!(config.page.fallback_generated, "2026-02-13 16:05:52Z");
    assert_eq!(config.targets.len(), 2);
    assert_eq!(config.dir, temp.path());
}

#[test]
fn test_no_config_file_keeps_fixed_defaults() {
    let temp = TempDir::new().expect("temp dir");

    let config = Config::from_args(args(temp.path().to_path_buf(), None)).expect("create config");

    assert!(!config.has_project_config());
    assert_eq!(config.targets.len(), 11);
    assert_eq!(config.page.tenant, "Panthro.co");
}

#[test]
fn test_explicit_config_wins() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(temp.path().join(PROJECT_CONFIG_FILE), "tenant = \"Project\"\n").expect("write config");
    let explicit = temp.path().join("explicit.toml");
    fs::write(&explicit, "tenant = \"Explicit\"\n").expect("write config");

    let config = Config::from_args(args(temp.path().to_path_buf(), Some(explicit.clone())))
        .expect("create config");

    assert_eq!(config.page.tenant, "Explicit");
    assert_eq!(config.project_config_path, Some(explicit));
}

#[test]
fn test_missing_explicit_config_is_error() {
    let temp = TempDir::new().expect("temp dir");
    let missing = temp.path().join("nope.toml");

    let err = Config::from_args(args(temp.path().to_path_buf(), Some(missing)))
        .expect_err("missing config");
    assert!(format!("{:#}", err).contains("nope.toml"));
}

#[test]
fn test_malformed_project_config_is_error() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(temp.path().join(PROJECT_CONFIG_FILE), "tenant = [unterminated").expect("write config");

    let err = Config::from_args(args(temp.path().to_path_buf(), None)).expect_err("bad config");
    assert!(format!("{:#}", err).contains("Failed to parse config"));
}
