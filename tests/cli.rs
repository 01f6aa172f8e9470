//! End-to-end tests for the `notes` binary.
//!
//! Stdout is not a terminal under the test harness, so every command
//! answers in JSON.

use assert_cmd::Command;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

fn notes(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("notes").unwrap();
    cmd.env_remove("RUST_LOG").arg("--dir").arg(dir);
    cmd
}

fn run_json(dir: &Path, args: &[&str]) -> Value {
    let output = notes(dir).args(args).output().unwrap();
    assert!(
        output.status.success(),
        "notes {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn create(dir: &Path, content: &str) -> String {
    let out = run_json(dir, &["new", content]);
    out["id"].as_str().unwrap().to_string()
}

#[test]
fn test_note_lifecycle() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("notes");

    let id = create(&dir, "Groceries\nmilk\neggs");
    assert!(dir.join(format!("{id}.txt")).is_file());

    let shown = run_json(&dir, &["show", &id]);
    assert_eq!(shown["content"], "Groceries\nmilk\neggs");
    assert_eq!(shown["title"], "Groceries");

    let edited = run_json(&dir, &["edit", &id, "Shopping\nbread"]);
    assert_eq!(edited["action"], "updated");

    let list = run_json(&dir, &["list"]);
    assert_eq!(list["count"], 1);
    assert_eq!(list["notes"][0]["id"], id.as_str());
    assert_eq!(list["notes"][0]["title"], "Shopping");

    let deleted = run_json(&dir, &["delete", &id]);
    assert_eq!(deleted["action"], "deleted");
    assert_eq!(run_json(&dir, &["list"])["count"], 0);
}

#[test]
fn test_new_reads_stdin() {
    let tmp = TempDir::new().unwrap();

    let output = notes(tmp.path())
        .arg("new")
        .write_stdin("From stdin\nbody")
        .output()
        .unwrap();
    assert!(output.status.success());
    let out: Value = serde_json::from_slice(&output.stdout).unwrap();

    let shown = run_json(tmp.path(), &["show", out["id"].as_str().unwrap()]);
    assert_eq!(shown["content"], "From stdin\nbody");
}

#[test]
fn test_new_rejects_blank_content() {
    let tmp = TempDir::new().unwrap();

    let output = notes(tmp.path()).args(["new", "   "]).output().unwrap();

    assert_eq!(output.status.code(), Some(4));
    assert_eq!(run_json(tmp.path(), &["list"])["count"], 0);
}

#[test]
fn test_edit_with_blank_content_deletes() {
    let tmp = TempDir::new().unwrap();
    let id = create(tmp.path(), "temporary");

    let out = run_json(tmp.path(), &["edit", &id, ""]);

    assert_eq!(out["action"], "deleted");
    assert!(!tmp.path().join(format!("{id}.txt")).exists());
}

#[test]
fn test_missing_note_reports_not_found() {
    let tmp = TempDir::new().unwrap();

    for args in [
        vec!["show", "nope"],
        vec!["edit", "nope", "content"],
        vec!["delete", "nope"],
    ] {
        let output = notes(tmp.path()).args(&args).output().unwrap();
        assert_eq!(output.status.code(), Some(3), "args: {args:?}");
        let err: Value = serde_json::from_slice(&output.stderr).unwrap();
        assert_eq!(err["error"]["code"], "NOTE_NOT_FOUND");
    }
}

#[test]
fn test_export_import_round_trip() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("source");
    let target = tmp.path().join("target");
    let archive = tmp.path().join("backup.zip");
    create(&source, "Title A\nbody");
    create(&source, "Title B\nbody");

    let exported = run_json(
        &source,
        &["export", "--output", archive.to_str().unwrap()],
    );
    assert_eq!(exported["stats"]["notes"], 2);
    assert!(archive.is_file());

    let imported = run_json(&target, &["import", archive.to_str().unwrap()]);
    assert_eq!(imported["summary"]["imported"], 2);
    assert_eq!(imported["summary"]["skipped"], 0);
    assert_eq!(imported["summary"]["failed"], 0);

    let list = run_json(&target, &["list"]);
    let titles: Vec<_> = list["notes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["Title A", "Title B"]);
}

#[test]
fn test_export_refuses_to_overwrite() {
    let tmp = TempDir::new().unwrap();
    let archive = tmp.path().join("backup.zip");
    std::fs::write(&archive, "precious").unwrap();

    let output = notes(&tmp.path().join("notes"))
        .args(["export", "--output", archive.to_str().unwrap()])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(4));
    assert_eq!(std::fs::read_to_string(&archive).unwrap(), "precious");
}

#[test]
fn test_import_corrupt_archive() {
    let tmp = TempDir::new().unwrap();
    let bogus = tmp.path().join("bogus.zip");
    std::fs::write(&bogus, "definitely not a zip archive").unwrap();

    let output = notes(&tmp.path().join("notes"))
        .args(["import", bogus.to_str().unwrap()])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(6));
    let err: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["code"], "INVALID_ARCHIVE");
}

#[test]
fn test_status_reports_directory_and_count() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("deep").join("notes");
    create(&dir, "one");

    let status = run_json(&dir, &["status"]);

    assert_eq!(status["note_count"], 1);
    assert_eq!(status["notes_dir"], dir.display().to_string());
}

#[test]
fn test_unwritable_directory_fails_loudly() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("blocker");
    std::fs::write(&blocker, "a file, not a directory").unwrap();

    let output = notes(&blocker.join("notes")).arg("list").output().unwrap();

    assert_eq!(output.status.code(), Some(8));
}
