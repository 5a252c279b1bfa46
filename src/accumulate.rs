// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded reads into a [`LineBuffer`].
//!
//! The primitive is [`read_chunk`]: one underlying fill of the source, copied
//! up to and including the first `\n`, capped by the space left in the
//! buffer. A source that delivers a line in fragments (pipes, sockets, a slow
//! terminal) therefore needs several chunks to produce it.
//!
//! [`accumulate`] loops the primitive until end-of-stream, which is what makes
//! fragmented and multi-line input come out whole. [`read_once`] calls it a
//! single time, reproducing the defective program.

use std::io::{self, BufRead};

use tracing::{debug, trace, warn};

use crate::buffer::LineBuffer;

/// What the read step observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accumulated {
    /// Number of successful non-empty chunk reads.
    pub reads: usize,
    /// Bytes appended to the buffer; equals the buffer's tracked length.
    pub bytes: usize,
    /// The buffer filled up while the source still had data.
    pub truncated: bool,
}

/// Copy one chunk from `source` into `buffer`.
///
/// Returns the number of bytes appended. `Ok(0)` means end-of-stream, or
/// that the buffer has no room left; in the latter case the source is not
/// touched at all.
pub fn read_chunk<R: BufRead + ?Sized>(buffer: &mut LineBuffer, source: &mut R) -> io::Result<usize> {
    fill_chunk(buffer, source).map(|chunk| chunk.taken)
}

struct Chunk {
    taken: usize,
    /// The fill that filled the buffer still held bytes that did not fit.
    overflow: bool,
}

fn fill_chunk<R: BufRead + ?Sized>(buffer: &mut LineBuffer, source: &mut R) -> io::Result<Chunk> {
    let remaining = buffer.remaining();
    if remaining == 0 {
        return Ok(Chunk {
            taken: 0,
            overflow: false,
        });
    }

    let available = source.fill_buf()?;
    let line_end = available
        .iter()
        .position(|&b| b == b'\n')
        .map_or(available.len(), |pos| pos + 1);
    let taken = buffer.push_slice(&available[..line_end.min(remaining)]);
    let overflow = buffer.is_full() && available.len() > taken;
    source.consume(taken);

    trace!(taken, len = buffer.len(), "read chunk");
    Ok(Chunk { taken, overflow })
}

/// Fill `buffer` from `source` until end-of-stream or until it is full.
///
/// Interrupted reads are retried; any other I/O error is returned with the
/// buffer holding whatever had been read before it. A full buffer ends the
/// loop without touching the source again, so `truncated` only reflects
/// bytes the final fill already held.
pub fn accumulate<R: BufRead + ?Sized>(buffer: &mut LineBuffer, source: &mut R) -> io::Result<Accumulated> {
    let mut reads = 0;
    let mut truncated = false;
    loop {
        match fill_chunk(buffer, source) {
            Ok(Chunk { taken: 0, .. }) => break,
            Ok(chunk) => {
                reads += 1;
                truncated = chunk.overflow;
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    if truncated {
        warn!(
            capacity = buffer.len(),
            "input exceeds buffer capacity; excess bytes dropped"
        );
    }
    debug!(reads, bytes = buffer.len(), "accumulated input");

    Ok(Accumulated {
        reads,
        bytes: buffer.len(),
        truncated,
    })
}

/// Single bounded read, no continuation.
pub fn read_once<R: BufRead + ?Sized>(buffer: &mut LineBuffer, source: &mut R) -> io::Result<Accumulated> {
    let chunk = loop {
        match fill_chunk(buffer, source) {
            Ok(chunk) => break chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    };
    debug!(bytes = chunk.taken, "single read");

    Ok(Accumulated {
        reads: usize::from(chunk.taken > 0),
        bytes: buffer.len(),
        truncated: chunk.overflow,
    })
}
