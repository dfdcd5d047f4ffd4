//! CLI Integration Tests
//!
//! Tests the CLI binary directly using assert_cmd to exercise main.rs code paths.
//!
//! # Coverage Exclusion
//! These tests are skipped during coverage runs.

#![cfg(not(coverage))]
#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use upload_helper::excel::ExcelImporter;

fn helper() -> Command {
    let mut cmd = Command::cargo_bin("upload-helper").unwrap();
    cmd.env_remove("UPLOAD_HELPER_OUTPUT")
        .env_remove("UPLOAD_HELPER_HEADER")
        .env_remove("RUST_LOG");
    cmd
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    helper()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("upload-helper"))
        .stdout(predicate::str::contains("COMMANDS"));
}

#[test]
fn test_cli_version() {
    helper()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("upload-helper"));
}

#[test]
fn test_run_help_mentions_header_modes() {
    helper()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("on-create"));
}

// ═══════════════════════════════════════════════════════════════════════════
// EXPAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_expand_argument_table() {
    helper()
        .args(["expand", "AB12/34X-Y/Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AB12X-Y  AB12X-Z  AB34X-Y  AB34X-Z"));
}

#[test]
fn test_expand_input_file_tsv() {
    let output = helper()
        .args(["expand", "--input", "test-data/model_codes.txt", "--format", "tsv"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in &lines {
        assert_eq!(line.split('\t').count(), 20);
    }
    assert!(lines[0].starts_with("AB12X-Y\tAB12X-Z\tAB34X-Y\tAB34X-Z\t\t"));
    assert!(lines[2].starts_with("plain\t"));
}

#[test]
fn test_expand_stdin_json() {
    let output = helper()
        .args(["expand", "--format", "json"])
        .write_stdin("CD5-K\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: Vec<Vec<String>> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "CD5-K");
    assert_eq!(rows[0].len(), 20);
}

#[test]
fn test_doc_types_lists_catalogue() {
    helper()
        .arg("doc-types")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 Operators Manual"))
        .stdout(predicate::str::contains("22 LPG SYSTEM"));
}

// ═══════════════════════════════════════════════════════════════════════════
// RUN / INSPECT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_run_batch_exports_and_prints_tsv() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("upload.xlsx");

    helper()
        .args(["run", "test-data/batch.yaml", "--tsv", "--output"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Export Complete"))
        .stdout(predicate::str::contains(
            "\tFD25T-K\t5\tParts Book\tPB-FD20.pdf\tPDF\t11/2023",
        ));

    let rows = ExcelImporter::new(&output_path).read_rows().unwrap();
    let codes: Vec<&str> = rows[1..].iter().map(|row| row[1].as_str()).collect();
    assert_eq!(rows[0][1], "MODELCODE");
    assert_eq!(
        codes,
        vec!["FD25T-K", "FD20T-K", "FD20-C", "FB15CN-B", "FB15CN-A", "FB10CN-B", "FB10CN-A"]
    );
}

#[test]
fn test_run_header_mode_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("upload.xlsx");

    for _ in 0..2 {
        helper()
            .env("UPLOAD_HELPER_OUTPUT", &output_path)
            .env("UPLOAD_HELPER_HEADER", "on-create")
            .args(["run", "test-data/batch.yaml"])
            .assert()
            .success();
    }

    let rows = ExcelImporter::new(&output_path).read_rows().unwrap();
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0][1], "FD25T-K");
}

#[test]
fn test_run_reports_failed_submission() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("upload.xlsx");

    helper()
        .args(["run", "test-data/invalid_batch.yaml", "--output"])
        .arg(&output_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Submission #2"))
        .stderr(predicate::str::contains("Date from is empty"));

    assert!(!output_path.exists());
}

#[test]
fn test_run_missing_batch_file() {
    helper()
        .args(["run", "test-data/does-not-exist.yaml"])
        .assert()
        .failure();
}

#[test]
fn test_inspect_exported_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("upload.xlsx");

    helper()
        .args(["run", "test-data/batch.yaml", "--output"])
        .arg(&output_path)
        .assert()
        .success();

    helper()
        .arg("inspect")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("ID\tMODELCODE\tDOCTYPE"))
        .stdout(predicate::str::contains("8 rows"));
}

// ═══════════════════════════════════════════════════════════════════════════
// SHELL
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_shell_session_exports() {
    let temp_dir = TempDir::new().unwrap();
    let document = temp_dir.path().join("OM-FB10.pdf");
    std::fs::write(&document, b"%PDF-1.7").unwrap();
    let output_path = temp_dir.path().join("shell.xlsx");

    let script = format!(
        "file {}\ntype 3\ndate 05/2024\ncode FB10/15-A\nseparate\nadd\nshow\nexport {}\nquit\n",
        document.display(),
        output_path.display()
    );

    helper()
        .arg("shell")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 2 rows"))
        .stdout(predicate::str::contains("FB15-A"));

    let rows = ExcelImporter::new(&output_path).read_rows().unwrap();
    assert_eq!(rows.len(), 3);
}

#[test]
fn test_shell_validation_warning_does_not_exit() {
    helper()
        .arg("shell")
        .write_stdin("add\ntype 0\ncode A1-B\nseparate\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("File name is empty"))
        .stdout(predicate::str::contains("1 model rows"));
}
