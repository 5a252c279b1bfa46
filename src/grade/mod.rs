// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Autograding harness.
//!
//! Reads an `autograding.json`, runs every test case in order, and tallies
//! points. The reverse programs are the intended fixtures: `succeeding`
//! should earn every point, `failing` should lose the ones that exercise the
//! off-by-one and the single read.
//!
//! Rendering is left to the caller. [`Grader::run`] reports progress through
//! a [`GradeEvent`] observer and returns a [`GradeReport`].

mod compare;
pub mod config;
pub mod runner;

use std::path::PathBuf;

use tracing::{info, info_span};

use crate::error::Error;

pub use config::{Comparison, GradingConfig, TestCase, DEFAULT_CONFIG_PATH};
pub use runner::{run_test, set_up, TestOutcome};

/// How a single test case ended.
#[derive(Debug)]
pub enum CaseStatus {
    Passed { stdout: String },
    Failed { stdout: String },
    /// The setup command failed; the test command never ran.
    SetupFailed(Error),
    /// The test command could not be run or judged.
    Errored(Error),
}

impl CaseStatus {
    pub fn passed(&self) -> bool {
        matches!(self, CaseStatus::Passed { .. })
    }
}

#[derive(Debug)]
pub struct CaseResult {
    pub name: String,
    /// Stdout of a successful setup command.
    pub setup_stdout: Option<String>,
    pub status: CaseStatus,
    /// Points earned (0 unless passed).
    pub points: u32,
}

/// Progress notifications emitted while grading.
#[derive(Debug)]
pub enum GradeEvent<'a> {
    Started(&'a TestCase),
    Finished(&'a CaseResult),
}

#[derive(Debug)]
pub struct GradeReport {
    pub results: Vec<CaseResult>,
    pub points: u32,
    pub total_points: u32,
}

impl GradeReport {
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.status.passed())
    }

    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.status.passed()).count()
    }
}

/// Runs the test cases of one config.
pub struct Grader {
    config: GradingConfig,
    working_dir: Option<PathBuf>,
}

impl Grader {
    pub fn new(config: GradingConfig) -> Self {
        Self {
            config,
            working_dir: None,
        }
    }

    /// Run every command from `dir` instead of the current directory.
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn config(&self) -> &GradingConfig {
        &self.config
    }

    /// Grade every test case in order.
    pub fn run(&self, mut observer: impl FnMut(GradeEvent<'_>)) -> GradeReport {
        let mut results = Vec::with_capacity(self.config.tests.len());
        for test in &self.config.tests {
            observer(GradeEvent::Started(test));
            let result = self.run_case(test);
            observer(GradeEvent::Finished(&result));
            results.push(result);
        }

        let points = results.iter().map(|r| r.points).sum();
        let report = GradeReport {
            results,
            points,
            total_points: self.config.total_points(),
        };
        info!(
            passed = report.passed_count(),
            total = report.results.len(),
            points = report.points,
            "grading complete"
        );
        report
    }

    fn run_case(&self, test: &TestCase) -> CaseResult {
        let span = info_span!("case", name = %test.name);
        let _enter = span.enter();
        let dir = self.working_dir.as_deref();

        let mut setup_stdout = None;
        if let Some(setup) = &test.setup {
            match set_up(setup, dir, runner::limit_from_minutes(test.timeout)) {
                Ok(stdout) => setup_stdout = Some(stdout),
                Err(e) => {
                    return CaseResult {
                        name: test.name.clone(),
                        setup_stdout: None,
                        status: CaseStatus::SetupFailed(e),
                        points: 0,
                    }
                }
            }
        }

        let status = match run_test(test, dir) {
            Ok(TestOutcome {
                success: true,
                stdout,
            }) => CaseStatus::Passed { stdout },
            Ok(TestOutcome {
                success: false,
                stdout,
            }) => CaseStatus::Failed { stdout },
            Err(e) => CaseStatus::Errored(e),
        };
        let points = if status.passed() {
            test.points.map_or(0, u32::from)
        } else {
            0
        };

        CaseResult {
            name: test.name.clone(),
            setup_stdout,
            status,
            points,
        }
    }
}
