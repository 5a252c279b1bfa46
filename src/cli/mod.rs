// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the revline command-line interface.
//!
//! Two subcommands: `reverse` runs one pass of either program over stdin,
//! and `grade` runs an autograding config against them.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use revline::grade::DEFAULT_CONFIG_PATH;
use revline::Variant;

#[derive(Parser)]
#[command(
    name = "revline",
    about = "Reverse a line from stdin, or grade the programs that do",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read stdin, reverse it, print it
    Reverse {
        /// Which program's behavior to reproduce
        #[arg(long, value_enum, default_value_t = VariantArg::Succeeding)]
        variant: VariantArg,
    },

    /// Run an autograding config and report points
    Grade {
        /// Path to autograding.json
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Succeeding,
    Failing,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Succeeding => Variant::Succeeding,
            VariantArg::Failing => Variant::Failing,
        }
    }
}
