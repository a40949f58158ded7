//! Configuration Loader
//!
//! Handles loading and merging configuration from multiple sources with proper precedence.

use crate::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::{ConfigError, ConfigResult};
use std::env;
use std::path::{Path, PathBuf};
use testrunner::{OnError, OutputMode, RunConfig};

/// Environment variable overriding the output mode
pub const ENV_OUTPUT: &str = "TESTRUNNER_OUTPUT";
/// Environment variable overriding the error policy
pub const ENV_ON_ERROR: &str = "TESTRUNNER_ON_ERROR";
/// Environment variable overriding the name filter
pub const ENV_FILTER: &str = "TESTRUNNER_FILTER";
/// Disable colors when set to a non-empty value (as does NO_COLOR)
pub const ENV_NO_COLOR: &str = "TESTRUNNER_NO_COLOR";

/// Configuration loader
///
/// Loads configuration from multiple sources and merges them with proper precedence:
/// 1. Project config (testrunner.toml) - lowest priority
/// 2. Environment variables (TESTRUNNER_*) - overrides project
/// 3. CLI flags - highest priority (handled by caller)
pub struct ConfigLoader {
    file_name: String,
}

/// Merged configuration result; `None` means "keep the built-in default"
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub output_mode: Option<OutputMode>,
    pub on_error: Option<OnError>,
    pub name_filter: Option<String>,
    pub color: Option<bool>,
    /// Path of the testrunner.toml that contributed, if any
    pub source: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            file_name: CONFIG_FILE_NAME.to_string(),
        }
    }

    /// Look for a differently named configuration file
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Load configuration starting from the given directory
    ///
    /// Walks up the directory tree to find testrunner.toml, then applies
    /// environment overrides.
    pub fn load_from_directory(&self, start_dir: &Path) -> ConfigResult<Settings> {
        let settings = match self.find_config_file(start_dir) {
            Some(path) => {
                let file = ConfigFile::load_from_file(&path)?;
                tracing::debug!(path = %path.display(), "loaded configuration file");
                Settings::from_file(file, Some(path))
            }
            None => Settings::default(),
        };

        self.apply_env_overrides(settings)
    }

    /// Load configuration from a specific file, then apply environment overrides
    pub fn load_from_file(&self, config_path: &Path) -> ConfigResult<Settings> {
        let file = ConfigFile::load_from_file(config_path)?;
        let settings = Settings::from_file(file, Some(config_path.to_path_buf()));
        self.apply_env_overrides(settings)
    }

    /// Find the configuration file by walking up the directory tree
    fn find_config_file(&self, start_dir: &Path) -> Option<PathBuf> {
        start_dir
            .ancestors()
            .map(|dir| dir.join(&self.file_name))
            .find(|path| path.is_file())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&self, mut settings: Settings) -> ConfigResult<Settings> {
        if let Ok(output) = env::var(ENV_OUTPUT) {
            let mode = output.parse::<OutputMode>().map_err(|e| invalid(ENV_OUTPUT, e))?;
            settings.output_mode = Some(mode);
        }

        if let Ok(on_error) = env::var(ENV_ON_ERROR) {
            let policy = on_error.parse::<OnError>().map_err(|e| invalid(ENV_ON_ERROR, e))?;
            settings.on_error = Some(policy);
        }

        if let Ok(filter) = env::var(ENV_FILTER) {
            settings.name_filter = Some(filter);
        }

        if env_flag_set(ENV_NO_COLOR) || env_flag_set("NO_COLOR") {
            settings.color = Some(false);
        }

        Ok(settings)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Set and not empty
fn env_flag_set(name: &str) -> bool {
    env::var_os(name).is_some_and(|value| !value.is_empty())
}

fn invalid(field: &str, error: testrunner::ParseSettingError) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: error.to_string(),
    }
}

impl Settings {
    fn from_file(file: ConfigFile, source: Option<PathBuf>) -> Self {
        let run = file.run.unwrap_or_default();
        Self {
            output_mode: run.output,
            on_error: run.on_error,
            name_filter: run.filter,
            color: file.display.and_then(|display| display.color),
            source,
        }
    }

    /// Overlay these settings on a run configuration
    pub fn apply_to(&self, mut config: RunConfig) -> RunConfig {
        if let Some(mode) = self.output_mode {
            config.output_mode = mode;
        }
        if let Some(on_error) = self.on_error {
            config.on_error = on_error;
        }
        if let Some(filter) = &self.name_filter {
            config.name_filter = filter.clone();
        }
        if let Some(color) = self.color {
            config.color = color;
        }
        config
    }

    /// Check if a testrunner.toml was found
    pub fn has_file(&self) -> bool {
        self.source.is_some()
    }
}
