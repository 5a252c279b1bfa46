// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the in-place reversal.
//!
//! Reversal is the whole point of the program. If the mirror property or the
//! double-reverse identity fails for any byte string, the output is wrong.

#![no_main]

use libfuzzer_sys::fuzz_target;
use revline::reverse_in_place;
use revline::verify::check_reversal;

fuzz_target!(|data: &[u8]| {
    let mut bytes = data.to_vec();
    reverse_in_place(&mut bytes);

    if let Err(e) = check_reversal(data, &bytes) {
        panic!("reversal broke the mirror property: {}", e);
    }

    reverse_in_place(&mut bytes);
    assert_eq!(bytes, data, "reversing twice must be the identity");
});
