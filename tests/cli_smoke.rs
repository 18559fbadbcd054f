use std::fs;
use std::process::Command;

use tempfile::TempDir;

const GROUPS_PAGE: &str = r#"<title>Entra Dashboard - Groups</title>
<div>Generated: 2026-04-01 12:00:00Z</div>
<section class="section"><h2>Groups</h2><div class="cards"><table><tr><td>All Staff</td></tr></table></div></section>
"#;

fn restyle(dir: &std::path::Path, extra: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_restyle-dashboards"))
        .arg("--dir")
        .arg(dir)
        .args(extra)
        .output()
        .expect("Failed to run restyle-dashboards")
}

#[test]
fn cli_reports_progress() {
    let temp = TempDir::new().expect("temp dir");
    let page = temp.path().join("EntraDashboard.groups.html");
    fs::write(&page, GROUPS_PAGE).expect("write page");

    let output = restyle(temp.path(), &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.first(), Some(&"Transforming dashboard sub-pages..."));
    assert_eq!(lines.last(), Some(&"Done!"));
    assert!(lines.contains(&"  Updated: EntraDashboard.groups.html"));
    assert!(lines.contains(&"  Skipped (not found): EntraDashboard.users.html"));
    assert_eq!(lines.len(), 13);

    let html = fs::read_to_string(&page).expect("read page");
    assert!(html.contains(r#"<a class="nav-link active" href="EntraDashboard.groups.html">Groups</a>"#));
    assert!(html.contains(r#"<div class="table-scroll"><table>"#));
}

#[test]
fn cli_ignores_user_config_directory() {
    let temp = TempDir::new().expect("temp dir");
    let user_dir = temp.path().join("xdg").join("dashboard-restyle");
    fs::create_dir_all(&user_dir).expect("create user config dir");
    fs::write(user_dir.join("config.toml"), "targets = []\n").expect("write user config");

    let output = Command::new(env!("CARGO_BIN_EXE_restyle-dashboards"))
        .arg("--dir")
        .arg(temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join("xdg"))
        .env("HOME", temp.path())
        .output()
        .expect("Failed to run restyle-dashboards");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let skipped = stdout
        .lines()
        .filter(|line| line.starts_with("  Skipped (not found): "))
        .count();
    assert_eq!(skipped, 11);
}

#[test]
fn cli_dry_run_keeps_page() {
    let temp = TempDir::new().expect("temp dir");
    let page = temp.path().join("EntraDashboard.groups.html");
    fs::write(&page, GROUPS_PAGE).expect("write page");

    let output = restyle(temp.path(), &["--dry-run"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("  Would update: EntraDashboard.groups.html"));
    assert_eq!(fs::read_to_string(&page).expect("read page"), GROUPS_PAGE);
}
