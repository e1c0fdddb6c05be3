//! Command-line tests for the `commit-graph` binary.

use assert_cmd::Command;
use commit_graph::models::GraphSnapshot;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const COMMITS: &str = r#"[
  { "sha": "f1", "parents": ["gone"], "branch": ["feature/x"],
    "author": { "name": "Bob", "email": "bob@example.com" },
    "date": "2024-09-01T12:00:00Z", "message": "Feature work" },
  { "sha": "d1", "parents": [], "branch": ["develop"],
    "author": { "name": "Ada", "email": "ada@example.com" },
    "date": "2024-09-01T11:00:00Z", "message": "Start develop" },
  { "sha": "m1", "parents": [], "branch": ["main"],
    "author": { "name": "Ada", "email": "ada@example.com" },
    "date": "2024-09-01T10:00:00Z", "message": "Initial commit" }
]"#;

fn write_inputs(temp_dir: &Path, commits: &str) -> anyhow::Result<(PathBuf, PathBuf)> {
    let input = temp_dir.join("commits.json");
    std::fs::write(&input, commits)?;

    let config = temp_dir.join("config.json");
    std::fs::write(&config, "{}")?;

    Ok((input, config))
}

fn run(args: &[&str]) -> anyhow::Result<GraphSnapshot> {
    let output = Command::cargo_bin("commit-graph")?.args(args).output()?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn test_cli_prints_graph_snapshot() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let (input, config) = write_inputs(temp_dir.path(), COMMITS)?;

    let snapshot = run(&[
        input.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ])?;

    let shas: Vec<&str> = snapshot.nodes.iter().map(|n| n.sha.as_str()).collect();
    assert_eq!(shas, vec!["f1", "d1", "m1"]);
    assert_eq!(snapshot.virtual_parents.get("f1").map(String::as_str), Some("d1"));
    assert_eq!(snapshot.virtual_parents.get("d1").map(String::as_str), Some("m1"));
    assert_eq!(snapshot.branches[0].name, "main");
    Ok(())
}

#[test]
fn test_cli_applies_filters() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let (input, config) = write_inputs(temp_dir.path(), COMMITS)?;

    let snapshot = run(&[
        input.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--author",
        "ADA",
        "--dark",
        "--compact",
    ])?;

    assert_eq!(snapshot.nodes.len(), 2);
    assert_eq!(snapshot.branches[0].color, "#60a5fa");
    Ok(())
}

#[test]
fn test_cli_reads_stdin() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let (_, config) = write_inputs(temp_dir.path(), COMMITS)?;

    Command::cargo_bin("commit-graph")?
        .args(["-", "--config", config.to_str().unwrap(), "--compact"])
        .write_stdin(COMMITS)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sha\":\"m1\""));
    Ok(())
}

#[test]
fn test_cli_rejects_invalid_date() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let broken = COMMITS.replace("2024-09-01T11:00:00Z", "yesterday");
    let (input, config) = write_inputs(temp_dir.path(), &broken)?;

    Command::cargo_bin("commit-graph")?
        .args([input.to_str().unwrap(), "--config", config.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date for commit d1"));
    Ok(())
}

#[test]
fn test_cli_rejects_duplicate_shas() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let duplicated = COMMITS.replace("\"sha\": \"d1\"", "\"sha\": \"m1\"");
    let (input, config) = write_inputs(temp_dir.path(), &duplicated)?;

    Command::cargo_bin("commit-graph")?
        .args([input.to_str().unwrap(), "--config", config.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate commit sha: m1"));
    Ok(())
}

#[test]
fn test_cli_reports_missing_file() {
    Command::cargo_bin("commit-graph")
        .unwrap()
        .arg("/definitely/not/here.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read commits"));
}
