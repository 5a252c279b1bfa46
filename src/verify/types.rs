// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Checked forms of the buffer and reversal invariants.
//!
//! Each check returns `Result<(), InvariantError>` so tests and fuzz targets
//! can report exactly which position broke. The debug-build contracts in
//! [`super::contracts`] call these under `cfg!(debug_assertions)` and panic
//! on the first violation.
//!
//! | Check                  | What's Guaranteed                                 |
//! |------------------------|---------------------------------------------------|
//! | `check_terminated`     | slot `len` holds the terminator, `len <= MAX`     |
//! | `check_reversal`       | `after[i] == before[L - 1 - i]` for all `i < L`   |
//! | `check_tail_untouched` | nothing at or past `L` changed                    |

use std::fmt;

use crate::buffer::{LineBuffer, CAPACITY, MAX_CONTENT, TERMINATOR};

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Tracked length is beyond the content limit.
    LengthOverflow { len: usize, max: usize },
    /// Slot `len` does not hold the terminator.
    MissingTerminator { len: usize, found: u8 },
    /// Before/after regions have different lengths.
    LengthMismatch { before: usize, after: usize },
    /// A byte is not the mirror of its partner.
    NotReversed {
        position: usize,
        expected: u8,
        actual: u8,
    },
    /// A byte outside the occupied region was written.
    TailModified { position: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::LengthOverflow { len, max } => {
                write!(f, "len {} > max content {}", len, max)
            }
            InvariantError::MissingTerminator { len, found } => {
                write!(f, "expected terminator at {}, found byte {:#04x}", len, found)
            }
            InvariantError::LengthMismatch { before, after } => {
                write!(f, "region length changed from {} to {}", before, after)
            }
            InvariantError::NotReversed {
                position,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "byte {} is {:#04x}, expected mirror byte {:#04x}",
                    position, actual, expected
                )
            }
            InvariantError::TailModified { position } => {
                write!(f, "byte {} past the occupied region was modified", position)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Slot `len` holds the terminator and `len` is within the content limit.
pub fn check_terminated(buffer: &LineBuffer) -> Result<(), InvariantError> {
    let len = buffer.len();
    if len > MAX_CONTENT {
        return Err(InvariantError::LengthOverflow {
            len,
            max: MAX_CONTENT,
        });
    }
    let found = buffer.raw()[len];
    if found != TERMINATOR {
        return Err(InvariantError::MissingTerminator { len, found });
    }
    Ok(())
}

/// `after` is the byte-reverse of `before`.
pub fn check_reversal(before: &[u8], after: &[u8]) -> Result<(), InvariantError> {
    if before.len() != after.len() {
        return Err(InvariantError::LengthMismatch {
            before: before.len(),
            after: after.len(),
        });
    }
    let len = before.len();
    for i in 0..len {
        let expected = before[len - 1 - i];
        if after[i] != expected {
            return Err(InvariantError::NotReversed {
                position: i,
                expected,
                actual: after[i],
            });
        }
    }
    Ok(())
}

/// Every byte in `[len, CAPACITY)` is identical in both snapshots.
pub fn check_tail_untouched(
    before: &[u8; CAPACITY],
    after: &[u8; CAPACITY],
    len: usize,
) -> Result<(), InvariantError> {
    for position in len.min(CAPACITY)..CAPACITY {
        if before[position] != after[position] {
            return Err(InvariantError::TailModified { position });
        }
    }
    Ok(())
}

/// A buffer whose occupied region has been checked to be the reverse of a
/// known original.
///
/// Construction runs every check; afterwards the bytes can be handed out
/// without re-validating.
#[derive(Debug, Clone)]
pub struct VerifiedReversal {
    original: Vec<u8>,
    buffer: LineBuffer,
}

impl VerifiedReversal {
    pub fn new(original: &[u8], buffer: LineBuffer) -> Result<Self, InvariantError> {
        check_terminated(&buffer)?;
        check_reversal(original, buffer.as_bytes())?;
        Ok(Self {
            original: original.to_vec(),
            buffer,
        })
    }

    pub fn original(&self) -> &[u8] {
        &self.original
    }

    pub fn reversed(&self) -> &[u8] {
        self.buffer.as_bytes()
    }
}
