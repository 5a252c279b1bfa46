//! Bounded line reversal, plus the harness that grades it.
//!
//! The crate backs two tiny programs that read standard input into a fixed
//! 1024-byte buffer, reverse it in place, and print it with a newline:
//!
//! - `succeeding` loops reads until end-of-stream and reverses correctly.
//! - `failing` reads once and swaps `i` with `len - i`, an off-by-one that
//!   drags the terminator to the front.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌─────────────┐   ┌─────────────┐   ┌──────────┐
//! │ accumulate.rs│──▶│  buffer.rs  │──▶│ reverse.rs  │──▶│ emit.rs  │
//! │ (read_chunk, │   │ (LineBuffer,│   │ (two-pointer│   │ (line +  │
//! │  accumulate) │   │  scan_len)  │   │  swap)      │   │  '\n')   │
//! └──────────────┘   └─────────────┘   └─────────────┘   └──────────┘
//!        └──────────────── pipeline.rs (Variant, run) ───────────┘
//!                                 │
//!                                 ▼
//!                  verify/ (InvariantError, contracts)
//! ```
//!
//! `grade/` is independent of the pipeline: it runs shell commands from an
//! `autograding.json` and compares their stdout.
//!
//! # Usage
//!
//! ```
//! use revline::{reverse_bytes, Variant};
//!
//! assert_eq!(reverse_bytes(Variant::Succeeding, b"abc").unwrap(), b"cba\n");
//! ```

pub mod accumulate;
pub mod buffer;
pub mod emit;
pub mod error;
pub mod grade;
pub mod logging;
pub mod pipeline;
pub mod reverse;
pub mod testing;
pub mod verify;

pub use accumulate::{accumulate, read_chunk, read_once, Accumulated};
pub use buffer::{LineBuffer, CAPACITY, MAX_CONTENT, TERMINATOR};
pub use emit::emit;
pub use error::{Error, Result};
pub use pipeline::{reverse_bytes, run, Outcome, Variant};
pub use reverse::{reverse_in_place, reverse_off_by_one};
pub use verify::{InvariantError, VerifiedReversal};
