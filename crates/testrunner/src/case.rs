//! Test case - a single named, located unit of verification

use crate::assertions::TestResult;
use crate::reporter::Reporter;
use std::fmt;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Where a test was declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
}

impl Location {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Classification of one test after reconciling the body's outcome with
/// what the test declared it expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Passed,
    Failed,
}

impl Verdict {
    /// A must-fail test passes exactly when its body raised an assertion failure.
    pub fn reconcile(expected_to_pass: bool, result: &TestResult) -> Self {
        if result.is_ok() == expected_to_pass {
            Verdict::Passed
        } else {
            Verdict::Failed
        }
    }

    pub fn is_pass(self) -> bool {
        self == Verdict::Passed
    }

    pub fn is_fail(self) -> bool {
        self == Verdict::Failed
    }
}

/// Result of executing one test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Execution {
    pub verdict: Verdict,
    /// Wall-clock time of the body; only measured in timing mode
    pub elapsed: Option<Duration>,
}

type Body = Box<dyn Fn() -> TestResult + Send + Sync>;

/// A registered test: identity, location, expected outcome and body.
///
/// Immutable once built. Build with [`test_case!`](crate::test_case) or
/// [`must_fail!`](crate::must_fail), or [`TestCase::new`] directly.
pub struct TestCase {
    name: String,
    location: Location,
    expected_to_pass: bool,
    body: Body,
}

impl TestCase {
    pub fn new<F>(
        name: impl Into<String>,
        location: Location,
        expected_to_pass: bool,
        body: F,
    ) -> Self
    where
        F: Fn() -> TestResult + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            location,
            expected_to_pass,
            body: Box::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn is_expected_to_pass(&self) -> bool {
        self.expected_to_pass
    }

    /// Invoke the body once and report the verdict.
    ///
    /// Only an [`AssertionFailure`](crate::AssertionFailure) is turned into a
    /// verdict. A panic in the body unwinds straight through the run.
    pub fn execute<O: Write, E: Write>(
        &self,
        reporter: &mut Reporter<O, E>,
    ) -> io::Result<Execution> {
        reporter.test_started(self)?;
        tracing::trace!(test = %self.name, location = %self.location, "executing");

        let start = reporter.output_mode().shows_timing().then(Instant::now);
        let result = (self.body)();
        let elapsed = start.map(|start| start.elapsed());

        let execution = Execution {
            verdict: Verdict::reconcile(self.expected_to_pass, &result),
            elapsed,
        };
        reporter.test_finished(self, &result, &execution)?;
        Ok(execution)
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("location", &self.location)
            .field("expected_to_pass", &self.expected_to_pass)
            .finish_non_exhaustive()
    }
}

/// Declare a test that is expected to pass
///
/// ```
/// use testrunner::{expect_eq, test_case};
///
/// let case = test_case!(Addition, { expect_eq!(1 + 1, 2); });
/// assert_eq!(case.name(), "Addition");
/// assert!(case.is_expected_to_pass());
/// ```
#[macro_export]
macro_rules! test_case {
    ($name:ident, $body:block) => {
        {
            #[allow(unreachable_code)]
            fn body() -> $crate::TestResult {
                $body
                ::core::result::Result::Ok(())
            }
            $crate::TestCase::new(
                stringify!($name),
                $crate::Location::new(file!(), line!()),
                true,
                body,
            )
        }
    };
}

/// Declare a test whose body is expected to raise an assertion failure
#[macro_export]
macro_rules! must_fail {
    ($name:ident, $body:block) => {
        {
            #[allow(unreachable_code)]
            fn body() -> $crate::TestResult {
                $body
                ::core::result::Result::Ok(())
            }
            $crate::TestCase::new(
                stringify!($name),
                $crate::Location::new(file!(), line!()),
                false,
                body,
            )
        }
    };
}
