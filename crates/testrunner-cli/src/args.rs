//! Flag parsing for test binaries

use clap::Parser;
use testrunner::{OnError, OutputMode, RunConfig};

/// Flags accepted by every test binary.
///
/// Output flags override each other; the last one given wins. Help and
/// version handling are done by the caller so that `-h` can exit with the
/// usage status.
#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Args {
    /// Verbose output; lists all test results
    #[arg(short = 'v', overrides_with_all = ["timing", "quiet"])]
    pub verbose: bool,

    /// Timing output; verbose plus elapsed time per test
    #[arg(short = 't', overrides_with_all = ["verbose", "quiet"])]
    pub timing: bool,

    /// Quiet mode; only reports failures
    #[arg(short = 'q', overrides_with_all = ["verbose", "timing"])]
    pub quiet: bool,

    /// Continue after a test fails
    #[arg(short = 'c')]
    pub keep_going: bool,

    /// Run only tests whose name starts with <test_name>; the next argument
    /// is taken verbatim, even when it looks like a flag
    #[arg(short = '1', value_name = "test_name", allow_hyphen_values = true)]
    pub only: Option<String>,

    /// Print usage
    #[arg(short = 'h')]
    pub help: bool,
}

impl Args {
    /// Output mode requested on the command line, if any
    pub fn output_mode(&self) -> Option<OutputMode> {
        if self.timing {
            Some(OutputMode::Timing)
        } else if self.verbose {
            Some(OutputMode::Verbose)
        } else if self.quiet {
            Some(OutputMode::Quiet)
        } else {
            None
        }
    }

    /// Overlay the flags on a run configuration
    pub fn apply_to(&self, mut config: RunConfig) -> RunConfig {
        if let Some(mode) = self.output_mode() {
            config.output_mode = mode;
        }
        if self.keep_going {
            config.on_error = OnError::Continue;
        }
        if let Some(only) = &self.only {
            config.name_filter = only.clone();
        }
        config
    }
}

/// Usage text
pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [-v] [-t] [-q] [-c] [-1 <test_name>] [-h]

  -1  Run only tests whose name starts with <test_name>
  -c  Continue after a test fails
  -v  Verbose output; lists all test results
  -t  Timing output; verbose plus elapsed time per test
  -q  Quiet mode; only reports failures

      Default output mode is 'compact', which reports test
      statistics. Use -q for less detail and -v for more.
"
    )
}
