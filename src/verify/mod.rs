// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: checked invariants and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Checked invariants** (`check_reversal`, `VerifiedReversal`) that return
//!    an `InvariantError` naming the exact byte that broke. Tests and fuzz
//!    targets use these.
//!
//! 2. **Runtime contracts** that panic in debug builds when invariants are violated.
//!    Zero-cost in release, but catch bugs during development.

mod types;
pub mod contracts;

pub use types::*;
