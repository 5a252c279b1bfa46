// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use regex::Regex;

use super::config::Comparison;
use crate::error::Result;

impl Comparison {
    /// Does `actual` satisfy `expected` under this comparison?
    ///
    /// `Regex` compiles `expected` on every call; an invalid pattern is an
    /// error rather than a failed match.
    pub fn matches(self, actual: &str, expected: &str) -> Result<bool> {
        Ok(match self {
            Comparison::Included => actual.contains(expected),
            Comparison::Exact => actual == expected,
            Comparison::Regex => Regex::new(expected)?.is_match(actual),
        })
    }
}
