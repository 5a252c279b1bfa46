// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Autograding configuration.
//!
//! The file follows the GitHub Classroom `autograding.json` layout:
//!
//! ```json
//! {
//!   "tests": [
//!     {
//!       "name": "Reverses two bytes",
//!       "setup": "cargo build --quiet --bin succeeding",
//!       "run": "./target/debug/succeeding",
//!       "input": "ab",
//!       "output": "ba",
//!       "comparison": "included",
//!       "timeout": 1,
//!       "points": 1
//!     }
//!   ]
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Where `revline grade` looks when no `--config` is given.
pub const DEFAULT_CONFIG_PATH: &str = "./.github/classroom/autograding.json";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GradingConfig {
    pub tests: Vec<TestCase>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub name: String,
    /// Shell command run before the test; its failure fails the test.
    #[serde(default)]
    pub setup: Option<String>,
    /// Shell command whose stdout is graded.
    pub run: String,
    /// Bytes piped to the command's stdin.
    #[serde(default)]
    pub input: String,
    /// Expected output, interpreted per `comparison`.
    #[serde(default)]
    pub output: String,
    pub comparison: Comparison,
    /// Limit in minutes; 0 disables it.
    #[serde(default)]
    pub timeout: u16,
    #[serde(default)]
    pub points: Option<u16>,
}

#[derive(Deserialize, Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum Comparison {
    Included,
    Exact,
    Regex,
}

impl GradingConfig {
    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sum of all declared points.
    pub fn total_points(&self) -> u32 {
        self.tests
            .iter()
            .filter_map(|t| t.points)
            .map(u32::from)
            .sum()
    }
}
