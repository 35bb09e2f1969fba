use assert_cmd::Command;
use estimap::core::{AnalysisRecord, RiskLevel};
use estimap::insights::PortfolioInsight;
use std::path::Path;

fn estimap(store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("estimap").unwrap();
    cmd.arg("--store-dir").arg(store);
    cmd
}

fn analyze(store: &Path, name: &str, loc: &str, complexity: &str, commits: &str) {
    estimap(store)
        .args([
            "analyze", name, "--loc", loc, "--complexity", complexity, "--commits", commits,
        ])
        .assert()
        .success();
}

#[test]
fn test_analyze_emits_json_record() {
    let dir = tempfile::tempdir().unwrap();
    let output = estimap(dir.path())
        .args([
            "analyze",
            "payments",
            "--loc",
            "2500",
            "--complexity",
            "high",
            "--commits",
            "30",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let record: AnalysisRecord = serde_json::from_slice(&output).unwrap();
    assert_eq!(record.module_name, "payments");
    assert_eq!(record.risk_score, 75);
    assert_eq!(record.risk_level, RiskLevel::High);
}

#[test]
fn test_list_returns_appended_records_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    analyze(dir.path(), "first", "500", "low", "5");
    analyze(dir.path(), "second", "6000", "high", "60");

    let output = estimap(dir.path())
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let records: Vec<AnalysisRecord> = serde_json::from_slice(&output).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].module_name, "second");
    assert_eq!(records[1].module_name, "first");
    assert!(records[0].id > records[1].id);
}

#[test]
fn test_insights_aggregates_portfolio() {
    let dir = tempfile::tempdir().unwrap();
    analyze(dir.path(), "small", "500", "low", "5");
    analyze(dir.path(), "large", "6000", "high", "60");

    let output = estimap(dir.path())
        .args(["insights", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let insight: PortfolioInsight = serde_json::from_slice(&output).unwrap();
    assert_eq!(insight.total_analyses, 2);
    assert_eq!(insight.distribution.low_count, 1);
    assert_eq!(insight.distribution.high_count, 1);
    assert_eq!(insight.riskiest_module.unwrap().module_name, "large");
}

#[test]
fn test_clear_requires_force() {
    let dir = tempfile::tempdir().unwrap();
    analyze(dir.path(), "m", "500", "low", "5");

    estimap(dir.path()).arg("clear").assert().failure();

    estimap(dir.path())
        .args(["clear", "--force"])
        .assert()
        .success();

    let output = estimap(dir.path())
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let records: Vec<AnalysisRecord> = serde_json::from_slice(&output).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_zero_loc_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = estimap(dir.path())
        .args([
            "analyze", "bad", "--loc", "0", "--complexity", "low", "--commits", "1",
        ])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();

    let stderr = String::from_utf8_lossy(&output);
    assert!(stderr.contains("validation failed"));
}

#[test]
fn test_failed_analysis_leaves_collection_untouched() {
    let dir = tempfile::tempdir().unwrap();
    analyze(dir.path(), "good", "500", "low", "5");

    estimap(dir.path())
        .args([
            "analyze", "bad", "--loc", "0", "--complexity", "low", "--commits", "1",
        ])
        .assert()
        .failure();

    let output = estimap(dir.path())
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let records: Vec<AnalysisRecord> = serde_json::from_slice(&output).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].module_name, "good");
}

#[test]
fn test_dashboard_runs_on_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    estimap(dir.path()).arg("dashboard").assert().success();
}

#[test]
fn test_init_writes_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("estimap").unwrap();
    cmd.current_dir(dir.path()).args(["init"]).assert().success();

    assert!(dir.path().join(".estimap.toml").is_file());

    // A second init without --force refuses to overwrite.
    let mut again = Command::cargo_bin("estimap").unwrap();
    again.current_dir(dir.path()).args(["init"]).assert().failure();
}
