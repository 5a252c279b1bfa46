// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Output emission: content, one newline, flush.

use std::io::{self, Write};

/// Write `content` followed by a single `\n` and flush the sink.
pub fn emit<W: Write + ?Sized>(out: &mut W, content: &[u8]) -> io::Result<()> {
    out.write_all(content)?;
    out.write_all(b"\n")?;
    out.flush()
}
