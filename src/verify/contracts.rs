// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the reverse pipeline.
//!
//! Debug-mode assertions over the checks in [`super::types`]. They compile to
//! nothing in release builds.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! The correct pipeline must keep the terminator in place and produce an
//! exact mirror of the accumulated bytes. The `failing` program deliberately
//! breaks both, so it never runs these.

use crate::buffer::LineBuffer;
#[cfg(debug_assertions)]
use crate::buffer::CAPACITY;

use super::types::check_terminated;
#[cfg(debug_assertions)]
use super::types::{check_reversal, check_tail_untouched};

/// Check that the buffer is terminated at its tracked length.
///
/// # Panics (debug builds only)
/// Panics if `len > MAX_CONTENT` or slot `len` is not the terminator.
#[inline]
pub fn check_buffer_terminated(buffer: &LineBuffer) {
    if cfg!(debug_assertions) {
        if let Err(e) = check_terminated(buffer) {
            panic!("Contract violation: buffer terminated - {}", e);
        }
    }
}

/// Snapshot taken before reversal so the result can be checked afterwards.
///
/// Empty in release builds.
pub struct ReversalWitness {
    #[cfg(debug_assertions)]
    before: [u8; CAPACITY],
    #[cfg(debug_assertions)]
    len: usize,
}

impl ReversalWitness {
    #[inline]
    pub fn capture(buffer: &LineBuffer) -> Self {
        #[cfg(not(debug_assertions))]
        let _ = buffer;
        Self {
            #[cfg(debug_assertions)]
            before: *buffer.raw(),
            #[cfg(debug_assertions)]
            len: buffer.len(),
        }
    }

    /// Check the reversal invariant against the captured snapshot.
    ///
    /// # Panics (debug builds only)
    /// Panics if the occupied region is not the mirror of the snapshot, or if
    /// anything at or past the terminator changed.
    #[inline]
    pub fn check(&self, buffer: &LineBuffer) {
        #[cfg(debug_assertions)]
        {
            // INVARIANT: after[i] == before[L - 1 - i]
            if let Err(e) = check_reversal(&self.before[..self.len], buffer.as_bytes()) {
                panic!("Contract violation: reversal - {}", e);
            }
            // INVARIANT: terminator and tail never written
            if let Err(e) = check_tail_untouched(&self.before, buffer.raw(), self.len) {
                panic!("Contract violation: reversal - {}", e);
            }
        }
        #[cfg(not(debug_assertions))]
        let _ = buffer;
    }
}
