//! The `succeeding` and `failing` executables.

use super::common::run_binary;

const SUCCEEDING: &str = env!("CARGO_BIN_EXE_succeeding");
const FAILING: &str = env!("CARGO_BIN_EXE_failing");

#[test]
fn test_succeeding_reverses_two_bytes() {
    let out = run_binary(SUCCEEDING, &[], b"ab");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"ba\n");
}

#[test]
fn test_failing_gets_two_bytes_wrong() {
    let out = run_binary(FAILING, &[], b"ab");
    assert!(out.status.success(), "the defect is silent, not a crash");
    assert_ne!(out.stdout, b"ba\n");
}

#[test]
fn test_succeeding_odd_length() {
    let out = run_binary(SUCCEEDING, &[], b"abc");
    assert_eq!(out.stdout, b"cba\n");
}

#[test]
fn test_empty_stdin_prints_blank_line() {
    for program in [SUCCEEDING, FAILING] {
        let out = run_binary(program, &[], b"");
        assert!(out.status.success());
        assert_eq!(out.stdout, b"\n", "{}", program);
    }
}

#[test]
fn test_succeeding_reads_every_line() {
    let out = run_binary(SUCCEEDING, &[], b"hel\nlo");
    assert_eq!(out.stdout, b"ol\nleh\n");
}

#[test]
fn test_failing_stops_after_first_line() {
    // One read takes "hel\n"; L = 4 and the off-by-one swap empties it
    let out = run_binary(FAILING, &[], b"hel\nlo");
    assert_eq!(out.stdout, b"\n");
}

#[test]
fn test_long_input_is_truncated() {
    let input = vec![b'k'; 3000];
    let out = run_binary(SUCCEEDING, &[], &input);
    assert!(out.status.success());
    assert_eq!(out.stdout.len(), revline::MAX_CONTENT + 1);
    assert!(out.stdout[..revline::MAX_CONTENT].iter().all(|&b| b == b'k'));
}

#[test]
fn test_logs_stay_off_stdout() {
    let mut cmd = std::process::Command::new(SUCCEEDING);
    cmd.env("REVLINE_LOG", "trace");
    let out = {
        use std::io::Write;
        use std::process::Stdio;
        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        child.stdin.take().unwrap().write_all(b"xy").unwrap();
        child.wait_with_output().unwrap()
    };
    assert_eq!(out.stdout, b"yx\n");
    assert!(!out.stderr.is_empty(), "trace logging should write to stderr");
}
