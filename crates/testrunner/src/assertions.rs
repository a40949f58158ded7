//! Assertion primitives
//!
//! A test body reports a failed check by returning [`AssertionFailure`].
//! The macros below return it early from the enclosing body; nothing else
//! a body does (a panic, an abort) is treated as a recoverable failure.
//!
//! ## Basic
//! - `check!(cond)` - condition is true
//! - `check_false!(cond)` - condition is false
//!
//! ## Equality
//! - `expect_eq!(a, b)` / `expect_ne!(a, b)`
//! - `expect_approx!(a, b)` - floats within `0.0001`
//!
//! ## Errors
//! - `expect_err!(result)` - the expression evaluates to `Err`
//! - `fail!(message)` - unconditional failure

use thiserror::Error;

/// The one recoverable signal a test body can raise
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AssertionFailure {
    message: String,
}

impl AssertionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for AssertionFailure {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for AssertionFailure {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Outcome of one body invocation
pub type TestResult = Result<(), AssertionFailure>;

/// Tolerance used by [`expect_approx!`]
pub const APPROX_EPSILON: f64 = 0.0001;

#[macro_export]
macro_rules! check {
    ($cond:expr) => {
        if !($cond) {
            return ::core::result::Result::Err($crate::AssertionFailure::new(concat!(
                "ASSERT_TRUE(",
                stringify!($cond),
                ") failed"
            )));
        }
    };
}

#[macro_export]
macro_rules! check_false {
    ($cond:expr) => {
        if $cond {
            return ::core::result::Result::Err($crate::AssertionFailure::new(concat!(
                "ASSERT_FALSE(",
                stringify!($cond),
                ") failed"
            )));
        }
    };
}

#[macro_export]
macro_rules! expect_eq {
    ($a:expr, $b:expr) => {
        if !(($a) == ($b)) {
            return ::core::result::Result::Err($crate::AssertionFailure::new(concat!(
                "EXPECT_EQ expected ",
                stringify!($a),
                " to equal ",
                stringify!($b),
                " ..."
            )));
        }
    };
}

#[macro_export]
macro_rules! expect_ne {
    ($a:expr, $b:expr) => {
        if ($a) == ($b) {
            return ::core::result::Result::Err($crate::AssertionFailure::new(concat!(
                "EXPECT_NE expected ",
                stringify!($a),
                " to be unequal to ",
                stringify!($b),
                " ..."
            )));
        }
    };
}

/// Works for `f32` and `f64` operands alike.
#[macro_export]
macro_rules! expect_approx {
    ($a:expr, $b:expr) => {{
        let delta = ($a) - ($b);
        let delta = if delta < 0.0 { -delta } else { delta };
        if f64::from(delta) > $crate::assertions::APPROX_EPSILON {
            return ::core::result::Result::Err($crate::AssertionFailure::new(concat!(
                "EXPECT_APPROX ",
                stringify!($a),
                " -> ",
                stringify!($b),
                " failed ..."
            )));
        }
    }};
}

#[macro_export]
macro_rules! expect_err {
    ($result:expr) => {
        if ($result).is_ok() {
            return ::core::result::Result::Err($crate::AssertionFailure::new(
                "EXPECT_THROW statement did not throw",
            ));
        }
    };
}

#[macro_export]
macro_rules! fail {
    ($($arg:tt)+) => {
        return ::core::result::Result::Err($crate::AssertionFailure::new(format!($($arg)+)))
    };
}
