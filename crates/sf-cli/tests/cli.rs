//! CLI command integration tests.
//! Each test uses a temp directory via SF_DATA_DIR for full isolation.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sf_cmd(data_dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("sf").unwrap();
    cmd.env("SF_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn stats_fresh_store() {
    let dir = TempDir::new().unwrap();
    sf_cmd(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("(no stored field)"));
}

#[test]
fn run_prints_answer_and_persists() {
    let dir = TempDir::new().unwrap();
    sf_cmd(&dir)
        .args(["run", "Test prompt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Prompt: \"Test prompt\""));

    sf_cmd(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("prompt:      Test prompt"))
        .stdout(predicate::str::contains("tokens:      2"));
}

#[test]
fn run_blank_prompt_uses_fallback() {
    let dir = TempDir::new().unwrap();
    sf_cmd(&dir)
        .args(["run", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("space-field engine"));
}

#[test]
fn run_no_save_leaves_store_empty() {
    let dir = TempDir::new().unwrap();
    sf_cmd(&dir)
        .args(["run", "ephemeral", "--no-save"])
        .assert()
        .success();

    sf_cmd(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("(no stored field)"));
}

#[test]
fn export_then_import_roundtrips() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("field.json");

    sf_cmd(&dir)
        .args(["run", "roundtrip me please"])
        .assert()
        .success();

    sf_cmd(&dir)
        .arg("export")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("exported to"));

    // Import into a fresh store
    let other = TempDir::new().unwrap();
    sf_cmd(&other)
        .arg("import")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("imported from"));

    sf_cmd(&other)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("prompt:      roundtrip me please"));
}

#[test]
fn export_without_stored_field_fails() {
    let dir = TempDir::new().unwrap();
    sf_cmd(&dir)
        .arg("export")
        .arg(dir.path().join("out.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to export"));
}

#[test]
fn import_rejects_payload_without_tokens() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, r#"{"expansions": []}"#).unwrap();

    sf_cmd(&dir)
        .arg("import")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid package"));
}

#[test]
fn import_accepts_bare_field() {
    let dir = TempDir::new().unwrap();
    let bare = dir.path().join("bare.json");
    std::fs::write(
        &bare,
        r#"{"tokens": [{"id": "a", "text": "alpha", "glyph": "A"}]}"#,
    )
    .unwrap();

    sf_cmd(&dir)
        .arg("import")
        .arg(&bare)
        .assert()
        .success()
        .stdout(predicate::str::contains("tokens=1"));

    sf_cmd(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("prompt:      (imported)"));
}
