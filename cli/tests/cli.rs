//! Smoke tests for the folio binary

use assert_cmd::Command;
use predicates::prelude::*;

fn folio() -> Command {
    Command::cargo_bin("folio").expect("binary builds")
}

#[test]
fn render_home_shows_site_name_and_nav_entries() {
    folio()
        .args(["render", "/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Portfolio"))
        .stdout(predicate::str::contains("Home"))
        .stdout(predicate::str::contains("About"))
        .stdout(predicate::str::contains("Projects"))
        .stdout(predicate::str::contains("Contact"));
}

#[test]
fn render_about_shows_heading_without_home_content() {
    folio()
        .args(["render", "/about"])
        .assert()
        .success()
        .stdout(predicate::str::contains("About Me"))
        .stdout(predicate::str::contains("Years Experience").not());
}

#[test]
fn render_contact_shows_heading() {
    folio()
        .args(["render", "/contact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact Me"));
}

#[test]
fn render_unknown_path_mounts_fallback() {
    folio()
        .args(["render", "/blog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page Not Found"))
        .stdout(predicate::str::contains("/blog"));
}

#[test]
fn routes_lists_every_path() {
    folio()
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("/about"))
        .stdout(predicate::str::contains("/projects"))
        .stdout(predicate::str::contains("/contact"));
}

#[test]
fn routes_json_is_well_formed() {
    let output = folio().args(["routes", "--json"]).output().expect("runs");
    assert!(output.status.success());

    let table: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON on stdout");
    let entries = table.as_array().expect("an array of routes");
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["path"], "/");
    assert_eq!(entries[0]["page"], "home");
}

#[test]
fn path_and_subcommand_together_fail() {
    folio().args(["/about", "routes"]).assert().failure();
}
