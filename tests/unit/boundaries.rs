//! Boundary behavior that separates the two programs.

use std::io::{self, BufReader, Read};

use revline::{run, Variant, MAX_CONTENT};

use super::common::{reverse, reverse_fragmented};

#[test]
fn test_two_bytes() {
    assert_eq!(reverse(Variant::Succeeding, b"ab"), b"ba\n");
    assert_ne!(reverse(Variant::Failing, b"ab"), b"ba\n");
}

#[test]
fn test_odd_length_midpoint() {
    assert_eq!(reverse(Variant::Succeeding, b"abc"), b"cba\n");
}

#[test]
fn test_empty_input() {
    assert_eq!(reverse(Variant::Succeeding, b""), b"\n");
}

#[test]
fn test_multi_chunk_accumulation() {
    let (out, outcome) = reverse_fragmented(Variant::Succeeding, &[b"hel", b"lo"]);
    assert_eq!(out, b"olleh\n");
    assert_eq!(outcome.reads, 2);

    let (out, outcome) = reverse_fragmented(Variant::Failing, &[b"hel", b"lo"]);
    assert_ne!(out, b"olleh\n");
    assert_eq!(outcome.reads, 1);
    assert_eq!(outcome.bytes_read, 3);
}

#[test]
fn test_capacity_truncation() {
    let input: Vec<u8> = (0..2000u32).map(|i| b'a' + (i % 26) as u8).collect();
    let out = reverse(Variant::Succeeding, &input);

    let mut expected: Vec<u8> = input[..MAX_CONTENT].iter().rev().copied().collect();
    expected.push(b'\n');
    assert_eq!(out, expected);
}

#[test]
fn test_capacity_exact_fit() {
    let input = vec![b'm'; MAX_CONTENT];
    let (out, outcome) = reverse_fragmented(Variant::Succeeding, &[&input[..500], &input[500..]]);
    assert_eq!(out.len(), MAX_CONTENT + 1);
    assert!(!outcome.truncated);
}

#[test]
fn test_failing_at_full_capacity_does_not_panic() {
    let input = vec![b'z'; MAX_CONTENT + 50];
    let out = reverse(Variant::Failing, &input);
    assert_eq!(out, b"\n");
}

/// A writer that sent a full buffer and is still holding the pipe open.
struct OpenPipe {
    sent: Vec<u8>,
}

impl Read for OpenPipe {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        assert!(!self.sent.is_empty(), "blocked waiting on an open pipe");
        let n = self.sent.len().min(out.len());
        out[..n].copy_from_slice(&self.sent[..n]);
        self.sent.drain(..n);
        Ok(n)
    }
}

#[test]
fn test_full_buffer_does_not_wait_for_more_input() {
    for variant in [Variant::Succeeding, Variant::Failing] {
        let mut src = BufReader::new(OpenPipe {
            sent: vec![b'q'; MAX_CONTENT],
        });
        let mut out = Vec::new();
        let outcome = run(variant, &mut src, &mut out).unwrap();
        assert_eq!(outcome.bytes_read, MAX_CONTENT, "{}", variant);
        assert!(!outcome.truncated);
    }
}
