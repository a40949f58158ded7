//! Test runner - select, execute and tally registered tests

use crate::case::{TestCase, Verdict};
use crate::exit;
use crate::registry::Registry;
use crate::reporter::Reporter;
use crate::settings::{OnError, RunConfig};
use std::io::{self, Write};
use std::time::Duration;
use thiserror::Error;

/// Errors that stop a run before it can produce a report
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Failed to write test output: {0}")]
    Output(#[from] io::Error),
}

/// Final status of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every selected test passed
    Success,
    /// At least one test failed
    Failed,
    /// A non-empty filter selected no test; nothing was executed
    NoMatch,
}

/// Aggregate result of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Tests selected by the filter
    pub selected: usize,
    pub passed: usize,
    pub failed: usize,
    /// Selected tests never reached because of a fail-fast abort
    pub skipped: usize,
    /// Sum of per-test times; only in timing mode
    pub elapsed: Option<Duration>,
    pub status: RunStatus,
}

impl RunReport {
    fn no_match() -> Self {
        Self {
            selected: 0,
            passed: 0,
            failed: 0,
            skipped: 0,
            elapsed: None,
            status: RunStatus::NoMatch,
        }
    }

    /// Check if every selected test passed
    pub fn is_success(&self) -> bool {
        self.status == RunStatus::Success
    }

    /// Process exit status for this report
    pub fn exit_code(&self) -> i32 {
        match self.status {
            RunStatus::Success => exit::SUCCESS,
            RunStatus::Failed | RunStatus::NoMatch => exit::FAILURE,
        }
    }
}

/// Test runner with configuration
pub struct Runner {
    config: RunConfig,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(RunConfig::default())
    }
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run the registry, reporting to stdout and stderr
    pub fn run(&self, registry: &Registry) -> Result<RunReport, RunnerError> {
        let width = name_column_width(registry.all());
        let mut reporter =
            Reporter::stdio(self.config.output_mode, width).with_color(self.config.color);
        self.run_with_reporter(registry, &mut reporter)
    }

    /// Run the registry with a caller-supplied reporter.
    ///
    /// The reporter's name width should come from [`name_column_width`]
    /// over the whole registry so columns line up across filters.
    pub fn run_with_reporter<O: Write, E: Write>(
        &self,
        registry: &Registry,
        reporter: &mut Reporter<O, E>,
    ) -> Result<RunReport, RunnerError> {
        let filter = self.config.name_filter.as_str();
        let selected = registry
            .all()
            .iter()
            .filter(|case| self.config.selects(case.name()))
            .count();
        tracing::debug!(
            selected,
            registered = registry.len(),
            filter,
            "selected tests"
        );

        if !filter.is_empty() && selected == 0 {
            reporter.no_match(filter)?;
            return Ok(RunReport::no_match());
        }

        reporter.run_started(selected, filter)?;

        let mut passed = 0;
        let mut failed = 0;
        let mut elapsed: Option<Duration> = None;

        for case in registry.all() {
            if !self.config.selects(case.name()) {
                continue;
            }

            let execution = case.execute(reporter)?;
            if let Some(time) = execution.elapsed {
                elapsed = Some(elapsed.unwrap_or_default() + time);
            }

            match execution.verdict {
                Verdict::Passed => passed += 1,
                Verdict::Failed => {
                    failed += 1;
                    if self.config.on_error == OnError::Fail {
                        tracing::debug!(test = case.name(), "stopping after first failure");
                        break;
                    }
                }
            }
        }

        let report = RunReport {
            selected,
            passed,
            failed,
            skipped: selected - passed - failed,
            elapsed: if reporter.output_mode().shows_timing() {
                Some(elapsed.unwrap_or_default())
            } else {
                None
            },
            status: if failed == 0 {
                RunStatus::Success
            } else {
                RunStatus::Failed
            },
        };
        tracing::debug!(
            passed = report.passed,
            failed = report.failed,
            skipped = report.skipped,
            "run finished"
        );

        reporter.run_finished(&report)?;
        Ok(report)
    }
}

/// Longest name among all given tests, selected or not
pub fn name_column_width(test_cases: &[TestCase]) -> usize {
    test_cases
        .iter()
        .map(|case| case.name().chars().count())
        .max()
        .unwrap_or(0)
}
