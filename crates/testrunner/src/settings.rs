//! Run settings - output mode, error policy and name filter

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How much the reporter prints.
///
/// The levels form a rank: each level shows everything the lower ones do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Failures only; tally line only when something went wrong
    Quiet = 0,
    /// Failures plus the summary banners
    #[default]
    Compact = 1,
    /// Every test name and result, framed by header and footer
    Verbose = 2,
    /// Verbose plus per-test and total elapsed seconds
    Timing = 3,
}

impl OutputMode {
    /// All modes in rank order
    pub const ALL: [OutputMode; 4] = [
        OutputMode::Quiet,
        OutputMode::Compact,
        OutputMode::Verbose,
        OutputMode::Timing,
    ];

    /// Numeric rank, `Quiet` lowest
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Whether every test gets its own progress line
    pub fn shows_all_tests(self) -> bool {
        self >= OutputMode::Verbose
    }

    /// Whether elapsed times are measured and printed
    pub fn shows_timing(self) -> bool {
        self >= OutputMode::Timing
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OutputMode::Quiet => "quiet",
            OutputMode::Compact => "compact",
            OutputMode::Verbose => "verbose",
            OutputMode::Timing => "timing",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseSettingError {
                setting: "output mode",
                value: s.to_string(),
                expected: "quiet, compact, verbose, timing",
            })
    }
}

/// What the runner does after a failed verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnError {
    /// Abort the run at the first failure
    #[default]
    Fail,
    /// Keep going and report every failure
    Continue,
}

impl OnError {
    pub fn as_str(self) -> &'static str {
        match self {
            OnError::Fail => "fail",
            OnError::Continue => "continue",
        }
    }
}

impl fmt::Display for OnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OnError {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fail" => Ok(OnError::Fail),
            "continue" => Ok(OnError::Continue),
            _ => Err(ParseSettingError {
                setting: "error policy",
                value: s.to_string(),
                expected: "fail, continue",
            }),
        }
    }
}

/// A setting value that names no known variant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {setting} '{value}' (expected one of: {expected})")]
pub struct ParseSettingError {
    pub setting: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Configuration for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub output_mode: OutputMode,
    pub on_error: OnError,
    /// Name prefix; empty selects every test
    pub name_filter: String,
    /// Allow ANSI colors (still subject to terminal detection)
    pub color: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_mode: OutputMode::default(),
            on_error: OnError::default(),
            name_filter: String::new(),
            color: true,
        }
    }
}

impl RunConfig {
    pub fn with_output_mode(mut self, output_mode: OutputMode) -> Self {
        self.output_mode = output_mode;
        self
    }

    pub fn with_on_error(mut self, on_error: OnError) -> Self {
        self.on_error = on_error;
        self
    }

    pub fn with_name_filter(mut self, name_filter: impl Into<String>) -> Self {
        self.name_filter = name_filter.into();
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Whether `name` is selected by the prefix filter
    pub fn selects(&self, name: &str) -> bool {
        name.starts_with(self.name_filter.as_str())
    }
}
