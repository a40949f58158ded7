//! TestRunner Configuration
//!
//! Provides run defaults for test binaries so a project does not need to
//! repeat the same flags on every invocation.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded and merged in the following order (later overrides earlier):
//! 1. Built-in defaults (compact output, fail-fast, no filter, color on)
//! 2. Project file (`testrunner.toml`, searched upward from the start directory)
//! 3. Environment variables (`TESTRUNNER_*`, `NO_COLOR`)
//! 4. CLI flags (applied by the caller)
//!
//! # Example
//!
//! ```no_run
//! use testrunner::RunConfig;
//! use testrunner_config::ConfigLoader;
//! use std::path::Path;
//!
//! let settings = ConfigLoader::new().load_from_directory(Path::new(".")).unwrap();
//! let config = settings.apply_to(RunConfig::default());
//! ```

pub mod file;
pub mod loader;

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax in {file}: {error}")]
    TomlParseError {
        file: PathBuf,
        error: toml::de::Error,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

pub use file::{ConfigFile, CONFIG_FILE_NAME};
pub use loader::{ConfigLoader, Settings};
