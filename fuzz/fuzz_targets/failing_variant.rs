// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the defective program.
//!
//! The off-by-one is supposed to produce wrong output, never a panic. Safe
//! indexing has to hold for every input the single read can take in.

#![no_main]

use libfuzzer_sys::fuzz_target;
use revline::{reverse_bytes, Variant, MAX_CONTENT};

fuzz_target!(|data: &[u8]| {
    let out = reverse_bytes(Variant::Failing, data).expect("in-memory run");
    assert!(out.len() <= MAX_CONTENT + 1);
    assert_eq!(out.last(), Some(&b'\n'));
});
