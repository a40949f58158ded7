//! Project Configuration (testrunner.toml)

use crate::{ConfigError, ConfigResult};
use serde::Deserialize;
use std::path::Path;
use testrunner::{OnError, OutputMode};

/// Name of the project configuration file
pub const CONFIG_FILE_NAME: &str = "testrunner.toml";

/// Contents of testrunner.toml
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Run policy defaults
    pub run: Option<RunSection>,

    /// Display preferences
    pub display: Option<DisplaySection>,
}

/// `[run]` section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct RunSection {
    /// quiet | compact | verbose | timing
    pub output: Option<OutputMode>,

    /// fail | continue
    pub on_error: Option<OnError>,

    /// Default name prefix
    pub filter: Option<String>,
}

/// `[display]` section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct DisplaySection {
    /// Allow ANSI colors
    pub color: Option<bool>,
}

impl ConfigFile {
    /// Load configuration from a file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
            file: path.to_path_buf(),
            error: e,
        })
    }

    /// Parse configuration from a string
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
