//! The `revline` CLI.

use super::common::run_binary;

const REVLINE: &str = env!("CARGO_BIN_EXE_revline");

#[test]
fn test_reverse_defaults_to_succeeding() {
    let out = run_binary(REVLINE, &["reverse"], b"hello");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"olleh\n");
}

#[test]
fn test_reverse_failing_variant() {
    let out = run_binary(REVLINE, &["reverse", "--variant", "failing"], b"ab");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"\n");
}

#[test]
fn test_unknown_variant_is_rejected() {
    let out = run_binary(REVLINE, &["reverse", "--variant", "sideways"], b"");
    assert!(!out.status.success());
}

#[test]
fn test_grade_missing_config_fails() {
    let out = run_binary(REVLINE, &["grade", "--config", "/nonexistent/autograding.json"], b"");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("autograding configuration"), "{}", stderr);
}
