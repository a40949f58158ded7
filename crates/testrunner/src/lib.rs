//! TestRunner core
//!
//! A small registration-and-execution engine for unit tests:
//! - [`TestCase`] - a named, located body with a declared expected outcome
//! - [`Registry`] - ordered, append-only collection of test cases
//! - [`Runner`] - selects, executes and tallies tests under a [`RunConfig`]
//! - [`Reporter`] - renders progress and results per [`OutputMode`]
//!
//! # Execution Order
//!
//! Registration order is the only execution order. Every test module
//! registers its cases explicitly before the runner reads the registry.
//!
//! # Example
//!
//! ```
//! use testrunner::{check, expect_eq, must_fail, test_case};
//! use testrunner::{OnError, Registry, RunConfig, RunStatus, Runner};
//!
//! let mut registry = Registry::new();
//! registry.register(test_case!(Addition, { expect_eq!(2 + 2, 4); }));
//! registry.register(must_fail!(Impossible, { check!(1 > 2); }));
//!
//! let config = RunConfig::default()
//!     .with_on_error(OnError::Continue)
//!     .with_color(false);
//! let report = Runner::new(config).run(&registry).unwrap();
//!
//! assert_eq!(report.passed, 2);
//! assert_eq!(report.status, RunStatus::Success);
//! ```

pub mod assertions;
pub mod case;
pub mod registry;
pub mod reporter;
pub mod runner;
pub mod settings;

pub use assertions::{AssertionFailure, TestResult};
pub use case::{Execution, Location, TestCase, Verdict};
pub use registry::Registry;
pub use reporter::Reporter;
pub use runner::{RunReport, RunStatus, Runner, RunnerError};
pub use settings::{OnError, OutputMode, ParseSettingError, RunConfig};

/// Process exit statuses shared by the runner and the CLI shell
pub mod exit {
    /// Every selected test passed
    pub const SUCCESS: i32 = 0;
    /// A test failed, the filter matched nothing, or `-1` had no value
    pub const FAILURE: i32 = 1;
    /// Invalid invocation syntax
    pub const USAGE: i32 = 2;
}
