// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The whole program: READ* → MEASURE → REVERSE → WRITE.
//!
//! [`run`] drives one pass for either [`Variant`]. The two differ in exactly
//! two places:
//!
//! | Step    | `Succeeding`                         | `Failing`                          |
//! |---------|--------------------------------------|------------------------------------|
//! | READ    | loop chunks until end-of-stream      | one chunk                          |
//! | MEASURE | tracked length from the reads        | terminator scan                    |
//! | REVERSE | swap `i` with `L - 1 - i`            | swap `i` with `L - i`              |
//! | WRITE   | occupied region                      | bytes up to first terminator       |

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{debug, info_span};

use crate::accumulate::{accumulate, read_once};
use crate::buffer::LineBuffer;
use crate::emit::emit;
use crate::error::{Error, Result};
use crate::reverse::{reverse_in_place, reverse_off_by_one};
use crate::verify::contracts::{check_buffer_terminated, ReversalWitness};

/// Which program's behavior to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Loop reads to end-of-stream, correct reversal.
    #[default]
    Succeeding,
    /// Single read, off-by-one reversal.
    Failing,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Succeeding => "succeeding",
            Variant::Failing => "failing",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "succeeding" => Ok(Variant::Succeeding),
            "failing" => Ok(Variant::Failing),
            other => Err(Error::Message(format!("unknown variant: {}", other))),
        }
    }
}

/// Summary of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub variant: Variant,
    /// Non-empty chunk reads performed.
    pub reads: usize,
    /// Bytes accumulated.
    pub bytes_read: usize,
    /// Length the reversal operated on.
    pub occupied_len: usize,
    /// The read that filled the buffer held bytes that did not fit.
    pub truncated: bool,
}

/// Run one pass of `variant` from `input` to `output`.
pub fn run<R, W>(variant: Variant, input: &mut R, output: &mut W) -> Result<Outcome>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let span = info_span!("reverse", %variant);
    let _enter = span.enter();

    let mut buffer = LineBuffer::new();
    let outcome = match variant {
        Variant::Succeeding => {
            let acc = accumulate(&mut buffer, input)?;
            check_buffer_terminated(&buffer);

            let occupied_len = buffer.len();
            let witness = ReversalWitness::capture(&buffer);
            // INVARIANT: only [0, len) is permuted; the terminator slot is outside it
            reverse_in_place(buffer.as_bytes_mut());
            witness.check(&buffer);

            emit(output, buffer.as_bytes())?;
            Outcome {
                variant,
                reads: acc.reads,
                bytes_read: acc.bytes,
                occupied_len,
                truncated: acc.truncated,
            }
        }
        Variant::Failing => {
            let acc = read_once(&mut buffer, input)?;

            let occupied_len = buffer.scan_len();
            reverse_off_by_one(buffer.raw_mut(), occupied_len);

            emit(output, buffer.terminated())?;
            Outcome {
                variant,
                reads: acc.reads,
                bytes_read: acc.bytes,
                occupied_len,
                truncated: acc.truncated,
            }
        }
    };

    debug!(?outcome, "pass complete");
    Ok(outcome)
}

/// Convenience wrapper for in-memory input: returns the emitted bytes.
pub fn reverse_bytes(variant: Variant, input: &[u8]) -> Result<Vec<u8>> {
    let mut source = input;
    let mut out = Vec::with_capacity(input.len() + 1);
    run(variant, &mut source, &mut out)?;
    Ok(out)
}
