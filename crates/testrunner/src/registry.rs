//! Test case registry
//!
//! Append-only, ordered storage of test cases. Registration order is the
//! execution order. A [`Registry`] can be built and handed to a
//! [`Runner`](crate::Runner) directly, or tests can go into the
//! process-wide instance through [`register`] and be run with
//! [`run_registered`].
//!
//! All registration must finish before a run starts. A test body that
//! registers into the process-wide registry while it is being run
//! deadlocks.

use crate::case::TestCase;
use crate::runner::{RunReport, Runner, RunnerError};
use crate::settings::RunConfig;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Process-wide registry
static GLOBAL_REGISTRY: Mutex<Registry> = Mutex::new(Registry::new());

/// Ordered collection of test cases
#[derive(Debug, Default)]
pub struct Registry {
    test_cases: Vec<TestCase>,
}

impl Registry {
    /// Create a new empty registry
    pub const fn new() -> Self {
        Registry {
            test_cases: Vec::new(),
        }
    }

    /// Append a test case; no deduplication
    pub fn register(&mut self, test_case: TestCase) {
        tracing::trace!(test = test_case.name(), "registered");
        self.test_cases.push(test_case);
    }

    /// All registered test cases in registration order
    pub fn all(&self) -> &[TestCase] {
        &self.test_cases
    }

    pub fn len(&self) -> usize {
        self.test_cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.test_cases.is_empty()
    }
}

impl Extend<TestCase> for Registry {
    fn extend<I: IntoIterator<Item = TestCase>>(&mut self, iter: I) {
        for test_case in iter {
            self.register(test_case);
        }
    }
}

impl FromIterator<TestCase> for Registry {
    fn from_iter<I: IntoIterator<Item = TestCase>>(iter: I) -> Self {
        let mut registry = Registry::new();
        registry.extend(iter);
        registry
    }
}

// A panicking test body cannot leave the registry half-written, so a
// poisoned lock still guards consistent data.
fn global() -> MutexGuard<'static, Registry> {
    GLOBAL_REGISTRY
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Register a test case into the process-wide registry
pub fn register(test_case: TestCase) {
    global().register(test_case);
}

/// Number of test cases in the process-wide registry
pub fn registered_count() -> usize {
    global().len()
}

/// Run every test in the process-wide registry
pub fn run_registered(config: &RunConfig) -> Result<RunReport, RunnerError> {
    let registry = global();
    Runner::new(config.clone()).run(&registry)
}
