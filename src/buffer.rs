// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fixed-capacity input buffer.
//!
//! `LineBuffer` owns a zeroed `[u8; CAPACITY]` plus an explicit length. Only
//! `[0, len)` is ever written by the accumulator, and `len` never exceeds
//! `MAX_CONTENT`, so slot `len` always holds the terminator. That gives two
//! ways to ask "how long is this?":
//!
//! - [`LineBuffer::len`]: the tracked length, returned straight from the reads.
//! - [`LineBuffer::scan_len`]: the terminator scan, which is what the
//!   `failing` program relies on and what the contracts cross-check.
//!
//! Embedded zero bytes make the two disagree. The tracked length wins for
//! the correct pipeline.

use std::fmt;

/// Total buffer size in bytes, terminator slot included.
pub const CAPACITY: usize = 1024;

/// Largest number of content bytes the buffer accepts.
pub const MAX_CONTENT: usize = CAPACITY - 1;

/// Sentinel marking the end of content.
pub const TERMINATOR: u8 = 0;

/// Fixed-capacity byte buffer with explicit length tracking.
#[derive(Clone)]
pub struct LineBuffer {
    bytes: [u8; CAPACITY],
    len: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self {
            bytes: [TERMINATOR; CAPACITY],
            len: 0,
        }
    }

    /// Number of content bytes accumulated so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Free content space left before the terminator slot.
    #[inline]
    pub fn remaining(&self) -> usize {
        MAX_CONTENT - self.len
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == MAX_CONTENT
    }

    /// The occupied region `[0, len)`.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Mutable view of the occupied region. The terminator slot is not
    /// reachable through it.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes[..self.len]
    }

    /// The whole backing array, terminator slot and tail included.
    pub fn raw(&self) -> &[u8; CAPACITY] {
        &self.bytes
    }

    /// Mutable access to the whole backing array.
    ///
    /// Only the defective reversal needs this; it writes one slot past the
    /// content and must be able to do so without leaving the array.
    pub(crate) fn raw_mut(&mut self) -> &mut [u8; CAPACITY] {
        &mut self.bytes
    }

    /// Index of the first terminator byte, or `CAPACITY` if there is none.
    pub fn scan_len(&self) -> usize {
        self.bytes
            .iter()
            .position(|&b| b == TERMINATOR)
            .unwrap_or(CAPACITY)
    }

    /// Bytes up to the first terminator, the C-string view of the buffer.
    pub fn terminated(&self) -> &[u8] {
        &self.bytes[..self.scan_len()]
    }

    /// Append as much of `data` as fits and return how many bytes were taken.
    ///
    /// Anything beyond `remaining()` is dropped: truncate, never overflow.
    pub fn push_slice(&mut self, data: &[u8]) -> usize {
        let take = data.len().min(self.remaining());
        // INVARIANT: len + take <= MAX_CONTENT, so bytes[len] stays TERMINATOR
        self.bytes[self.len..self.len + take].copy_from_slice(&data[..take]);
        self.len += take;
        take
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineBuffer")
            .field("len", &self.len)
            .field("content", &String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}
