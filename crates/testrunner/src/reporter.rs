//! Test reporter - render progress and results
//!
//! What gets printed depends on the [`OutputMode`] rank:
//!
//! | mode    | per-test lines | success banner | tally line          | timing |
//! |---------|----------------|----------------|---------------------|--------|
//! | quiet   | failures only  | no             | on failure or skip  | no     |
//! | compact | failures only  | yes            | always              | no     |
//! | verbose | every test     | yes            | always              | no     |
//! | timing  | every test     | yes            | always              | yes    |
//!
//! Failure diagnostics (location and message) always go to the second
//! stream, whatever the mode.

use crate::assertions::TestResult;
use crate::case::{Execution, TestCase, Verdict};
use crate::runner::RunReport;
use crate::settings::OutputMode;
use colored::*;
use std::io::{self, Stderr, Stdout, Write};
use std::time::Duration;

const RULE_WIDTH: usize = 40;

/// Renders run output to a primary stream and a diagnostics stream
pub struct Reporter<O: Write, E: Write> {
    out: O,
    err: E,
    mode: OutputMode,
    /// Width every test name is padded to
    name_width: usize,
    color: bool,
}

impl Reporter<Stdout, Stderr> {
    /// Reporter writing to stdout and stderr
    pub fn stdio(mode: OutputMode, name_width: usize) -> Self {
        Self::new(io::stdout(), io::stderr(), mode, name_width)
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(out: O, err: E, mode: OutputMode, name_width: usize) -> Self {
        Self {
            out,
            err,
            mode,
            name_width,
            color: true,
        }
    }

    /// Disable colored output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn output_mode(&self) -> OutputMode {
        self.mode
    }

    /// Give back both streams
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Header printed before the first test in verbose modes
    pub fn run_started(&mut self, selected: usize, filter: &str) -> io::Result<()> {
        if !self.mode.shows_all_tests() {
            return Ok(());
        }

        if filter.is_empty() {
            writeln!(self.out, "Running {} test(s) ...", selected)?;
        } else {
            writeln!(
                self.out,
                "Running {} test(s) matching '{}' ...",
                selected, filter
            )?;
        }
        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))
    }

    /// Name column, printed before the body runs so a crash shows which test
    pub fn test_started(&mut self, case: &TestCase) -> io::Result<()> {
        if self.mode.shows_all_tests() {
            self.write_name(case)?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Result column plus diagnostics for a failure
    pub fn test_finished(
        &mut self,
        case: &TestCase,
        result: &TestResult,
        execution: &Execution,
    ) -> io::Result<()> {
        let failed = execution.verdict == Verdict::Failed;
        if !self.mode.shows_all_tests() && !failed {
            return Ok(());
        }
        if !self.mode.shows_all_tests() {
            self.write_name(case)?;
        }

        let label = match (case.is_expected_to_pass(), execution.verdict) {
            (true, Verdict::Passed) => self.paint("PASS", Color::Green),
            (false, Verdict::Passed) => self.paint("PASS (failed as expected)", Color::Green),
            (true, Verdict::Failed) => self.paint("FAIL", Color::Red),
            (false, Verdict::Failed) => self.paint("PASSED - It shouldn't have!", Color::Red),
        };
        write!(self.out, "{}", label)?;

        if self.mode.shows_timing() {
            let elapsed = execution.elapsed.unwrap_or_default();
            write!(self.out, " ({}s)", format_seconds(elapsed))?;
        }
        writeln!(self.out)?;

        if failed {
            self.out.flush()?;
            match result {
                Err(failure) => writeln!(self.err, "{} {}", case.location(), failure)?,
                Ok(()) => writeln!(
                    self.err,
                    "{} test passed but should not have",
                    case.location()
                )?,
            }
            self.err.flush()?;
        }
        Ok(())
    }

    /// A non-empty filter selected nothing
    pub fn no_match(&mut self, filter: &str) -> io::Result<()> {
        writeln!(self.err, "no test matching '{}'", filter)?;
        self.err.flush()
    }

    /// Footer, banners, tally and total time
    pub fn run_finished(&mut self, report: &RunReport) -> io::Result<()> {
        if self.mode.shows_all_tests() {
            writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))?;
        }

        let all_passed = report.failed == 0 && report.skipped == 0;
        if all_passed && self.mode >= OutputMode::Compact {
            let banner = format!("All done. {} test(s) passed.", report.passed);
            let banner = self.paint(&banner, Color::Green);
            writeln!(self.out, "{}", banner)?;
        }

        if !all_passed || self.mode >= OutputMode::Compact {
            self.write_tally(report)?;
        }

        if self.mode.shows_timing() {
            let total = report.elapsed.unwrap_or_default();
            writeln!(self.out, "Total time: {}s", format_seconds(total))?;
        }
        self.out.flush()
    }

    fn write_tally(&mut self, report: &RunReport) -> io::Result<()> {
        let failed = report.failed.to_string();
        let failed = if report.failed > 0 {
            self.paint(&failed, Color::Red)
        } else {
            failed
        };
        writeln!(
            self.out,
            "{} passed, {} failed, {} skipped.",
            report.passed, failed, report.skipped
        )
    }

    fn write_name(&mut self, case: &TestCase) -> io::Result<()> {
        write!(
            self.out,
            "{:<width$} ... ",
            case.name(),
            width = self.name_width
        )
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Seconds with four decimal places
pub fn format_seconds(duration: Duration) -> String {
    format!("{:.4}", duration.as_secs_f64())
}
