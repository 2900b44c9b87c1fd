//! End to end tests for the `mode-dag` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mode_dag() -> Command {
    let mut cmd = Command::cargo_bin("mode-dag").expect("binary is built");
    cmd.env("MODE_DAG_LOG", "error");
    cmd
}

fn write_input(dir: &Path, text: &str) -> std::path::PathBuf {
    let path = dir.join("graph.sif");
    fs::write(&path, text).expect("write input");
    path
}

#[test]
fn layout_writes_rows() {
    let dir = TempDir::new().unwrap();
    let infile = write_input(dir.path(), "A\t0-to-1\tB\nB\t1-to-2\tC\n");
    let outfile = dir.path().join("rows.noa");

    mode_dag()
        .arg("layout")
        .arg(&infile)
        .arg(&outfile)
        .assert()
        .success();

    let rows = fs::read_to_string(&outfile).unwrap();
    assert_eq!(rows, "Node Row\nA = 0\nB = 1\nC = 2\n");
}

#[test]
fn class_conflict_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let infile = write_input(dir.path(), "A\t0-to-1\tB\nB\t2-to-3\tC\n");
    let outfile = dir.path().join("rows.noa");

    mode_dag()
        .arg("layout")
        .arg(&infile)
        .arg(&outfile)
        .assert()
        .failure()
        .stderr(predicate::str::contains("node `B` has class 2"));

    assert!(!outfile.exists());
}

#[test]
fn cycle_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let infile = write_input(dir.path(), "r\t0-to-1\ta\na\t1-to-1\tb\nb\t1-to-1\ta\n");
    let outfile = dir.path().join("rows.noa");

    mode_dag()
        .arg("layout")
        .arg(&infile)
        .arg(&outfile)
        .assert()
        .failure()
        .stderr(predicate::str::contains("stalled"));

    assert!(!outfile.exists());
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().unwrap();

    mode_dag()
        .arg("layout")
        .arg(dir.path().join("nope.sif"))
        .arg(dir.path().join("rows.noa"))
        .assert()
        .failure();
}

#[test]
fn generate_then_layout() {
    let dir = TempDir::new().unwrap();
    let sif = dir.path().join("random.sif");
    let noa = dir.path().join("random.noa");

    mode_dag()
        .args(["generate", "--modes", "4", "--nodes", "40", "--links", "80"])
        .arg(&sif)
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&sif).unwrap().lines().count(), 80);

    mode_dag().arg("layout").arg(&sif).arg(&noa).assert().success();

    let rows = fs::read_to_string(&noa).unwrap();
    assert!(rows.starts_with("Node Row\n"));
}

#[test]
fn generate_rejects_impossible_request() {
    let dir = TempDir::new().unwrap();

    mode_dag()
        .args(["generate", "--nodes", "3", "--links", "4"])
        .arg(dir.path().join("random.sif"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 3"));
}
