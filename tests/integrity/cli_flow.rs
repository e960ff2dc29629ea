//! CLI round trip: check a broken report, repair it in place, check again.

use std::fs;
use std::process::Command;

use mend::DocumentType;
use tempfile::TempDir;

use super::helpers::*;

fn mend() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mend"))
}

#[test]
fn test_check_repair_check_round_trip() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("evaluation-report.md");
    let template = dir.path().join("template.md");

    let clean = well_formed(DocumentType::Evaluation);
    fs::write(&template, &clean).unwrap();
    fs::write(
        &report,
        drop_markers(&clean, DocumentType::Evaluation, "score"),
    )
    .unwrap();

    let check = mend()
        .args(["check", report.to_str().unwrap(), "--doc-type", "evaluation"])
        .output()
        .unwrap();
    assert!(!check.status.success());

    let repair = mend()
        .args([
            "repair",
            report.to_str().unwrap(),
            "--template",
            template.to_str().unwrap(),
            "--doc-type",
            "evaluation",
            "--write",
        ])
        .output()
        .unwrap();
    assert!(
        repair.status.success(),
        "{}",
        String::from_utf8_lossy(&repair.stderr)
    );

    let recheck = mend()
        .args(["check", report.to_str().unwrap(), "--doc-type", "evaluation"])
        .output()
        .unwrap();
    assert!(recheck.status.success());
}

#[test]
fn test_check_json_output() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("report.md");
    fs::write(&report, "no markers at all\n").unwrap();

    let output = mend()
        .args([
            "check",
            report.to_str().unwrap(),
            "--doc-type",
            "improvement",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let issues: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(issues.as_array().is_some_and(|a| !a.is_empty()));
}
