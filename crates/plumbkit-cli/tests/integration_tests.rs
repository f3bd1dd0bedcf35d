//! Integration tests for the plumbkit binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn plumbkit() -> Command {
    Command::cargo_bin("plumbkit").unwrap()
}

// ── basic surface ─────────────────────────────────────────────────────────────

#[test]
fn help_flag() {
    plumbkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("plumber"))
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("classify"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn version_flag() {
    plumbkit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stderr(predicate::str::is_empty());
}

#[test]
fn no_arguments_shows_help_and_fails() {
    plumbkit().assert().failure();
}

// ── new ───────────────────────────────────────────────────────────────────────

#[test]
fn new_creates_project_with_template() {
    let temp = TempDir::new().unwrap();

    plumbkit()
        .args(["new", "myapi", "--yes"])
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .success();

    let template = temp.path().join("myapi/plumber.R");
    assert!(template.is_file());
    let content = fs::read_to_string(template).unwrap();
    assert!(content.contains("library(plumber)"));
}

#[test]
fn new_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    plumbkit()
        .args(["new", "myapi", "--yes", "--dry-run"])
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp.path().join("myapi").exists());
}

#[test]
fn new_into_non_empty_directory_fails_with_exit_2() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("myapi")).unwrap();
    fs::write(temp.path().join("myapi/notes.txt"), "notes").unwrap();

    plumbkit()
        .args(["new", "myapi", "--yes"])
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not empty"));
}

#[test]
fn new_over_existing_template_file_fails_and_preserves_it() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("myapi")).unwrap();
    fs::write(temp.path().join("myapi/plumber.R"), "precious").unwrap();

    plumbkit()
        .args(["new", "myapi", "--yes"])
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists and is not empty"));

    assert_eq!(
        fs::read_to_string(temp.path().join("myapi/plumber.R")).unwrap(),
        "precious"
    );
}

#[test]
fn new_with_custom_templates_dir() {
    let temp = TempDir::new().unwrap();
    let resources = TempDir::new().unwrap();
    let collection = resources.path().join("templates/plumber");
    fs::create_dir_all(&collection).unwrap();
    fs::write(collection.join("plumber.R"), "#' @get /custom\n").unwrap();

    plumbkit()
        .args(["new", "myapi", "--yes"])
        .arg("--dir")
        .arg(temp.path())
        .arg("--templates-dir")
        .arg(resources.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("myapi/plumber.R")).unwrap(),
        "#' @get /custom\n"
    );
}

// ── classify ──────────────────────────────────────────────────────────────────

#[test]
fn classify_reports_roles() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("api.R"), "#' @get /health\n").unwrap();
    fs::write(temp.path().join("entrypoint.R"), "library(plumber)\n").unwrap();
    fs::write(temp.path().join("plain.R"), "x <- 1\n").unwrap();

    plumbkit()
        .arg("classify")
        .arg(temp.path().join("api.R"))
        .arg(temp.path().join("entrypoint.R"))
        .arg(temp.path().join("plain.R"))
        .assert()
        .success()
        .stdout(predicate::str::contains("api.R: annotated"))
        .stdout(predicate::str::contains("entrypoint.R: entrypoint"))
        .stdout(predicate::str::contains("plain.R: none"));
}

#[test]
fn classify_emits_json_when_requested() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("api.R"), "#* @post /submit\n").unwrap();

    plumbkit()
        .args(["classify", "--output-format", "json"])
        .arg(temp.path().join("api.R"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"role\": \"annotated\""))
        .stdout(predicate::str::contains("\"extended_type\": \"plumber-file\""));
}

#[test]
fn classify_missing_file_fails() {
    plumbkit()
        .args(["classify", "/no/such/file.R"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
}

// ── caps ──────────────────────────────────────────────────────────────────────

#[test]
fn caps_with_missing_rscript_reports_not_installed() {
    plumbkit()
        .args(["caps", "--rscript", "/no/such/rscript"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not installed"));
}

#[test]
fn caps_json_output() {
    plumbkit()
        .args(["caps", "--rscript", "/no/such/rscript", "--output-format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"installed\": false"));
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn completions_bash_mentions_binary_name() {
    plumbkit()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plumbkit"));
}
