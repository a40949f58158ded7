//! Command-line shell for test binaries
//!
//! A test binary registers its tests and then hands control to
//! [`run_main`]:
//!
//! ```no_run
//! use testrunner::{expect_eq, registry, test_case};
//!
//! fn main() -> std::process::ExitCode {
//!     registry::register(test_case!(Addition, { expect_eq!(2 + 2, 4); }));
//!     testrunner_cli::run_main()
//! }
//! ```
//!
//! Exit statuses: `0` all selected tests passed, `1` a failure, an empty
//! filter match or a missing `-1` value, `2` invalid invocation.
//!
//! # Environment Variables
//!
//! - `TESTRUNNER_OUTPUT` - quiet | compact | verbose | timing
//! - `TESTRUNNER_ON_ERROR` - fail | continue
//! - `TESTRUNNER_FILTER` - default name prefix
//! - `NO_COLOR` - disable colored output
//! - `TESTRUNNER_LOG` - tracing filter for internal logs (e.g. `debug`)

pub mod args;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::env;
use std::ffi::OsString;
use std::path::Path;
use std::process::ExitCode;
use testrunner::{exit, registry, RunConfig};
use testrunner_config::ConfigLoader;
use tracing_subscriber::EnvFilter;

pub use args::{usage, Args};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "TESTRUNNER_LOG";

/// Parse the process arguments and run the process-wide registry
pub fn run_main() -> ExitCode {
    let code = run_with_args(env::args_os());
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

/// Parse `args` (program name first) and run the process-wide registry.
///
/// Returns the process exit status.
pub fn run_with_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    init_logging();

    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = program_name(&args);

    let parsed = match Args::try_parse_from(&args) {
        Ok(parsed) => parsed,
        Err(err) if err.kind() == ErrorKind::InvalidValue => {
            tracing::debug!(error = %err, "missing option value");
            eprintln!("Must specify test name for '-1' flag.\n");
            print!("{}", usage(&program));
            return exit::FAILURE;
        }
        Err(err) => {
            tracing::debug!(error = %err, "invalid invocation");
            print!("{}", usage(&program));
            return exit::USAGE;
        }
    };

    if parsed.help {
        print!("{}", usage(&program));
        return exit::USAGE;
    }

    let config = match resolve_config(&parsed) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {:#}", err);
            return exit::USAGE;
        }
    };
    tracing::debug!(
        output = %config.output_mode,
        on_error = %config.on_error,
        filter = %config.name_filter,
        "resolved run configuration"
    );

    match registry::run_registered(&config) {
        Ok(report) => report.exit_code(),
        Err(err) => {
            eprintln!("error: {}", err);
            exit::FAILURE
        }
    }
}

/// Defaults, then testrunner.toml and environment, then flags
fn resolve_config(args: &Args) -> Result<RunConfig> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let settings = ConfigLoader::new()
        .load_from_directory(&cwd)
        .context("Failed to load test configuration")?;
    Ok(args.apply_to(settings.apply_to(RunConfig::default())))
}

fn program_name(args: &[OsString]) -> String {
    args.first()
        .map(|arg| Path::new(arg).display().to_string())
        .unwrap_or_else(|| "testrunner".to_string())
}

/// Route `tracing` output to stderr, filtered by TESTRUNNER_LOG
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
