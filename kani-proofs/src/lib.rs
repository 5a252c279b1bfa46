// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the revline reversal routines.
//!
//! This standalone crate extracts the two reversal functions and checks them
//! over every byte value and every length up to a small bound using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: neither reversal indexes out of bounds for any length
//! 2. **Mirror**: after `reverse_in_place`, `after[i] == before[L - 1 - i]`
//! 3. **Tail**: the terminator slot and everything past it are untouched
//! 4. **Defect**: the off-by-one variant moves the terminator to slot 0

/// Buffer size for the proofs. The real buffer is 1024; the swap logic does
/// not depend on the size, and a small one keeps the unwinding bounded.
pub const PROOF_CAPACITY: usize = 8;

// ============================================================================
// REVERSAL (copied from src/reverse.rs)
// ============================================================================

/// Two-pointer reversal over `0..len / 2`.
pub fn reverse_in_place(bytes: &mut [u8]) {
    let len = bytes.len();
    for i in 0..len / 2 {
        bytes.swap(i, len - 1 - i);
    }
}

/// The off-by-one reversal: swaps `i` with `len - i`.
pub fn reverse_off_by_one<const N: usize>(bytes: &mut [u8; N], len: usize) {
    let len = len.min(N - 1);
    for i in 0..len / 2 {
        bytes.swap(i, len - i);
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Symbolic buffer: content bytes are nonzero, `[len, N)` is zeroed.
    fn symbolic_buffer() -> ([u8; PROOF_CAPACITY], usize) {
        let len: usize = kani::any_where(|&n| n < PROOF_CAPACITY);
        let mut bytes = [0u8; PROOF_CAPACITY];
        for i in 0..len {
            bytes[i] = kani::any_where(|&b: &u8| b != 0);
        }
        (bytes, len)
    }

    /// Verify reverse_in_place mirrors the occupied region.
    #[kani::proof]
    #[kani::unwind(9)]
    fn verify_reverse_mirrors() {
        let (mut bytes, len) = symbolic_buffer();
        let before = bytes;

        reverse_in_place(&mut bytes[..len]);

        for i in 0..len {
            kani::assert(
                bytes[i] == before[len - 1 - i],
                "after[i] must equal before[len - 1 - i]",
            );
        }
    }

    /// Verify nothing at or past the terminator changes.
    #[kani::proof]
    #[kani::unwind(9)]
    fn verify_reverse_leaves_tail() {
        let (mut bytes, len) = symbolic_buffer();
        let before = bytes;

        reverse_in_place(&mut bytes[..len]);

        for i in len..PROOF_CAPACITY {
            kani::assert(bytes[i] == before[i], "tail must be untouched");
        }
    }

    /// Verify the odd-length middle byte stays put.
    #[kani::proof]
    #[kani::unwind(9)]
    fn verify_odd_middle_fixed() {
        let (mut bytes, len) = symbolic_buffer();
        kani::assume(len % 2 == 1);
        let mid = bytes[len / 2];

        reverse_in_place(&mut bytes[..len]);

        kani::assert(bytes[len / 2] == mid, "middle byte must not move");
    }

    /// Verify the off-by-one variant never panics for any length.
    #[kani::proof]
    #[kani::unwind(9)]
    fn verify_off_by_one_no_panic() {
        let mut bytes: [u8; PROOF_CAPACITY] = kani::any();
        let len: usize = kani::any();
        reverse_off_by_one(&mut bytes, len);
    }

    /// Verify the defect: for len >= 2 the terminator lands in slot 0.
    #[kani::proof]
    #[kani::unwind(9)]
    fn verify_off_by_one_moves_terminator() {
        let (mut bytes, len) = symbolic_buffer();
        kani::assume(len >= 2);

        reverse_off_by_one(&mut bytes, len);

        kani::assert(bytes[0] == 0, "terminator must be swapped into slot 0");
    }
}

// ============================================================================
// REGULAR TESTS (run without Kani)
// ============================================================================
