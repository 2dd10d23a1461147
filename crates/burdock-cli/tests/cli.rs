//! End-to-end tests for the burdock binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const DATASET: &str = r#"{
    "entities": [
        {"id": "python", "name": "Python", "type": "language",
         "properties": {"paradigm": "multi-paradigm"}},
        {"id": "django", "name": "Django", "type": "framework"},
        {"id": "flask", "name": "Flask", "type": "framework"}
    ],
    "relationships": [
        {"id": "r1", "source": "django", "target": "python", "type": "written_in"},
        {"id": "r2", "source": "flask", "target": "python", "type": "written_in"}
    ]
}"#;

fn dataset_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DATASET.as_bytes()).unwrap();
    file
}

fn burdock() -> Command {
    Command::cargo_bin("burdock").unwrap()
}

#[test]
fn test_search_lists_matches() {
    let data = dataset_file();

    burdock()
        .args(["--data", data.path().to_str().unwrap(), "search", "python"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Python (language)"))
        .stdout(predicate::str::contains("score 10"));
}

#[test]
fn test_search_respects_top_k() {
    let data = dataset_file();

    burdock()
        .args([
            "--data",
            data.path().to_str().unwrap(),
            "search",
            "framework",
            "-k",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 found"));
}

#[test]
fn test_search_json_output() {
    let data = dataset_file();

    burdock()
        .args([
            "--data",
            data.path().to_str().unwrap(),
            "--format",
            "json",
            "search",
            "python",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\": 10"));
}

#[test]
fn test_search_without_matches() {
    let data = dataset_file();

    burdock()
        .args(["--data", data.path().to_str().unwrap(), "search", "haskell"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matches for 'haskell'"));
}

#[test]
fn test_context_renders_prompt_block() {
    let data = dataset_file();

    burdock()
        .args(["--data", data.path().to_str().unwrap(), "context", "python"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entity #1: Python (language)"))
        .stdout(predicate::str::contains("written_in <- Django (framework)"));
}

#[test]
fn test_context_unknown_entity() {
    let data = dataset_file();

    burdock()
        .args(["--data", data.path().to_str().unwrap(), "context", "ghost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entity not found: ghost"));
}

#[test]
fn test_traverse_depth_zero_records_seed_only() {
    let data = dataset_file();

    burdock()
        .args([
            "--data",
            data.path().to_str().unwrap(),
            "traverse",
            "django",
            "-d",
            "0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entity #1: Django (framework)"))
        .stdout(predicate::str::contains("Entity #2").not());
}

#[test]
fn test_traverse_reaches_neighbors() {
    let data = dataset_file();

    burdock()
        .args([
            "--data",
            data.path().to_str().unwrap(),
            "traverse",
            "django",
            "-d",
            "2",
            "--stats",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entity #1: Django (framework)"))
        .stdout(predicate::str::contains("Entity #2: Python (language)"))
        .stdout(predicate::str::contains("Visited 3 entities"));
}

#[test]
fn test_stats_reports_counts_and_types() {
    let data = dataset_file();

    burdock()
        .args(["--data", data.path().to_str().unwrap(), "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entities: 3"))
        .stdout(predicate::str::contains("Relationships: 2"))
        .stdout(predicate::str::contains("framework, language"))
        .stdout(predicate::str::contains("written_in"));
}

#[test]
fn test_missing_dataset_fails() {
    burdock()
        .args(["--data", "/nonexistent/graph_data.json", "stats"])
        .assert()
        .failure();
}

#[test]
fn test_dangling_reference_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"{
            "entities": [{"id": "a", "name": "A", "type": "node"}],
            "relationships": [{"id": "r1", "source": "a", "target": "ghost", "type": "uses"}]
        }"#,
    )
    .unwrap();

    burdock()
        .args(["--data", file.path().to_str().unwrap(), "stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ghost"));
}
