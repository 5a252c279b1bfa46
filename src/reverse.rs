// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-place byte reversal.
//!
//! Two routines live here. [`reverse_in_place`] is the correct two-pointer
//! swap. [`reverse_off_by_one`] is the defect the `failing` program ships:
//! it pairs `i` with `len - i`, so the first swap pulls the terminator into
//! slot 0 and the emitted C-string comes out empty.
//!
//! # INVARIANTS
//!
//! After `reverse_in_place(bytes)` with `L = bytes.len()`:
//! `bytes[i] == original[L - 1 - i]` for every `i < L`. Only indices in
//! `[0, L)` are touched; for odd `L` the middle byte is never swapped.

use crate::buffer::CAPACITY;

/// Reverse `bytes` with a two-pointer swap over `0..len / 2`.
#[inline]
pub fn reverse_in_place(bytes: &mut [u8]) {
    let len = bytes.len();
    for i in 0..len / 2 {
        // INVARIANT: partner index stays inside [0, len)
        bytes.swap(i, len - 1 - i);
    }
}

/// The off-by-one reversal: swaps `i` with `len - i`.
///
/// Works over the whole fixed-capacity array so the out-of-region swap lands
/// on the terminator slot instead of leaving the buffer. `len` is clamped to
/// `CAPACITY - 1`, which keeps `len - i` in bounds for every `i`.
pub fn reverse_off_by_one(bytes: &mut [u8; CAPACITY], len: usize) {
    let len = len.min(CAPACITY - 1);
    // INVARIANT: len - i <= CAPACITY - 1 for every i in [0, len / 2)
    for i in 0..len / 2 {
        bytes.swap(i, len - i);
    }
}
