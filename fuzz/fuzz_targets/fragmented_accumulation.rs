// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for accumulation under arbitrary fragmentation.
//!
//! The fuzzer picks both the bytes and where the source splits them. The
//! succeeding pipeline must produce the same output no matter how the input
//! arrives, and must never hold more than MAX_CONTENT bytes.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use revline::testing::{split_at_points, Fragmented};
use revline::{run, Variant, MAX_CONTENT};

#[derive(Arbitrary, Debug)]
struct Input {
    data: Vec<u8>,
    cuts: Vec<usize>,
}

fuzz_target!(|input: Input| {
    let parts = split_at_points(&input.data, &input.cuts);
    let refs: Vec<&[u8]> = parts.iter().map(Vec::as_slice).collect();

    let mut src = Fragmented::reader(&refs);
    let mut out = Vec::new();
    let outcome = run(Variant::Succeeding, &mut src, &mut out).expect("in-memory run");

    let kept = input.data.len().min(MAX_CONTENT);
    assert_eq!(outcome.occupied_len, kept);
    // Only the fill that fills the buffer can reveal extra input
    let mut end = 0;
    let fill_end = parts
        .iter()
        .map(|p| {
            end += p.len();
            end
        })
        .find(|&end| end >= MAX_CONTENT);
    assert_eq!(outcome.truncated, fill_end.is_some_and(|end| end > MAX_CONTENT));

    let mut expected: Vec<u8> = input.data[..kept].iter().rev().copied().collect();
    expected.push(b'\n');
    assert_eq!(out, expected, "fragmentation changed the output");
});
