// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Crate-wide error type.
//!
//! The reverse pipeline itself can only fail on I/O. Everything else here
//! belongs to the grading harness: loading the config, spawning commands,
//! decoding their output, and compiling regex expectations.

use std::io;
use std::string::FromUtf8Error;
use std::time::Duration;

/// Errors surfaced by the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("invalid autograding config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("{0}")]
    Regex(#[from] regex::Error),

    #[error("{0}")]
    Utf8(#[from] FromUtf8Error),

    /// A command exited unsuccessfully; carries whatever it wrote to stderr.
    #[error("{stderr}")]
    CommandFailed { stderr: String },

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, Error>;
