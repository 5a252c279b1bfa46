//! End-to-end grading of the reverse programs.

use revline::grade::{CaseStatus, GradeEvent, Grader, GradingConfig};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

use super::common::run_binary;

const SUCCEEDING: &str = env!("CARGO_BIN_EXE_succeeding");
const FAILING: &str = env!("CARGO_BIN_EXE_failing");
const REVLINE: &str = env!("CARGO_BIN_EXE_revline");

/// The same checks the shipped config runs, pointed at `program`.
fn reverse_suite(program: &str) -> serde_json::Value {
    json!({
        "tests": [
            {
                "name": "Two bytes",
                "run": program,
                "input": "ab",
                "output": "ba\n",
                "comparison": "exact",
                "timeout": 1,
                "points": 1
            },
            {
                "name": "Odd length",
                "run": program,
                "input": "abc",
                "output": "cba",
                "comparison": "included",
                "timeout": 1,
                "points": 1
            },
            {
                "name": "Two lines",
                "run": program,
                "input": "hel\nlo",
                "output": "^ol\nleh\n$",
                "comparison": "regex",
                "timeout": 1,
                "points": 2
            },
            {
                "name": "Empty input",
                "run": program,
                "input": "",
                "output": "\n",
                "comparison": "exact",
                "timeout": 1
            }
        ]
    })
}

fn config_for(program: &str) -> GradingConfig {
    GradingConfig::from_json(&reverse_suite(program).to_string()).unwrap()
}

#[test]
fn test_succeeding_earns_every_point() {
    let report = Grader::new(config_for(SUCCEEDING)).run(|_| {});
    assert!(report.all_passed(), "{:#?}", report.results);
    assert_eq!(report.points, 4);
    assert_eq!(report.total_points, 4);
}

#[test]
fn test_failing_loses_the_boundary_cases() {
    let report = Grader::new(config_for(FAILING)).run(|_| {});
    assert!(!report.all_passed());
    assert_eq!(report.points, 0);

    let names: Vec<&str> = report
        .results
        .iter()
        .filter(|r| r.status.passed())
        .map(|r| r.name.as_str())
        .collect();
    // Empty input is the one case the defect cannot show
    assert_eq!(names, vec!["Empty input"]);
}

#[test]
fn test_events_arrive_in_order() {
    let mut log = Vec::new();
    Grader::new(config_for(SUCCEEDING)).run(|event| match event {
        GradeEvent::Started(test) => log.push(format!("start {}", test.name)),
        GradeEvent::Finished(result) => log.push(format!("end {}", result.name)),
    });
    assert_eq!(log.len(), 8);
    assert_eq!(log[0], "start Two bytes");
    assert_eq!(log[1], "end Two bytes");
}

#[test]
fn test_setup_runs_in_working_dir() {
    let temp_dir = TempDir::new().unwrap();
    let config = GradingConfig::from_json(
        &json!({
            "tests": [{
                "name": "uses setup artifact",
                "setup": "echo prepared > marker.txt",
                "run": "cat marker.txt",
                "output": "prepared",
                "comparison": "included",
                "timeout": 1,
                "points": 5
            }]
        })
        .to_string(),
    )
    .unwrap();

    let report = Grader::new(config).working_dir(temp_dir.path()).run(|_| {});
    assert!(report.all_passed(), "{:#?}", report.results);
    assert!(temp_dir.path().join("marker.txt").exists());
}

#[test]
fn test_failed_setup_skips_run() {
    let config = GradingConfig::from_json(
        &json!({
            "tests": [{
                "name": "broken setup",
                "setup": "echo nope >&2; exit 1",
                "run": "echo should-not-run",
                "output": "",
                "comparison": "included",
                "timeout": 1,
                "points": 1
            }]
        })
        .to_string(),
    )
    .unwrap();

    let report = Grader::new(config).run(|_| {});
    match &report.results[0].status {
        CaseStatus::SetupFailed(e) => assert_eq!(e.to_string(), "nope\n"),
        other => panic!("expected setup failure, got {:?}", other),
    }
    assert_eq!(report.points, 0);
}

#[test]
fn test_cli_grade_report_and_exit_status() {
    let temp_dir = TempDir::new().unwrap();

    let good = temp_dir.path().join("good.json");
    fs::write(&good, reverse_suite(SUCCEEDING).to_string()).unwrap();
    let out = run_binary(REVLINE, &["grade", "--config", good.to_str().unwrap()], b"");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(out.status.success(), "{}", stdout);
    assert!(stdout.contains("📝 Two bytes"));
    assert!(stdout.contains("✅ Two bytes"));
    assert!(stdout.contains("All tests pass"));
    assert!(stdout.contains("Points 4/4"));

    let bad = temp_dir.path().join("bad.json");
    fs::write(&bad, reverse_suite(FAILING).to_string()).unwrap();
    let out = run_binary(REVLINE, &["grade", "-c", bad.to_str().unwrap()], b"");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(!out.status.success());
    assert!(stdout.contains("❌ Two bytes"));
    assert!(!stdout.contains("All tests pass"));
    assert!(stdout.contains("Points 0/4"));
}
