//! Configuration loading and precedence tests

use serial_test::serial;
use std::env;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use testrunner::{OnError, OutputMode, RunConfig};
use testrunner_config::loader::{ENV_FILTER, ENV_NO_COLOR, ENV_ON_ERROR, ENV_OUTPUT};
use testrunner_config::{ConfigError, ConfigLoader, CONFIG_FILE_NAME};

fn create_config_file(dir: &Path, content: &str) -> std::path::PathBuf {
    let config_path = dir.join(CONFIG_FILE_NAME);
    fs::write(&config_path, content).unwrap();
    config_path
}

fn clear_env() {
    for var in [ENV_OUTPUT, ENV_ON_ERROR, ENV_FILTER, ENV_NO_COLOR, "NO_COLOR"] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_full_file_applies_to_run_config() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    create_config_file(
        temp_dir.path(),
        r#"
[run]
output = "timing"
on_error = "continue"
filter = "Expect"

[display]
color = false
"#,
    );

    let settings = ConfigLoader::new()
        .load_from_directory(temp_dir.path())
        .unwrap();
    let config = settings.apply_to(RunConfig::default());

    assert!(settings.has_file());
    assert_eq!(
        config,
        RunConfig::default()
            .with_output_mode(OutputMode::Timing)
            .with_on_error(OnError::Continue)
            .with_name_filter("Expect")
            .with_color(false)
    );
}

#[test]
#[serial]
fn test_nearest_file_wins() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    create_config_file(temp_dir.path(), "[run]\noutput = \"quiet\"\n");
    let nested = temp_dir.path().join("nested");
    fs::create_dir(&nested).unwrap();
    create_config_file(&nested, "[run]\noutput = \"verbose\"\n");

    let settings = ConfigLoader::new().load_from_directory(&nested).unwrap();

    assert_eq!(settings.output_mode, Some(OutputMode::Verbose));
}

#[test]
#[serial]
fn test_env_filter_overrides_file_filter() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    create_config_file(temp_dir.path(), "[run]\nfilter = \"Assert\"\n");

    env::set_var(ENV_FILTER, "Expect");
    let settings = ConfigLoader::new().load_from_directory(temp_dir.path());
    clear_env();

    assert_eq!(settings.unwrap().name_filter.as_deref(), Some("Expect"));
}

#[test]
#[serial]
fn test_broken_toml_reports_file() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    let path = create_config_file(temp_dir.path(), "[run\noutput = ");

    match ConfigLoader::new().load_from_directory(temp_dir.path()) {
        Err(ConfigError::TomlParseError { file, .. }) => assert_eq!(file, path),
        other => panic!("expected TomlParseError, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_invalid_on_error_in_file() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    create_config_file(temp_dir.path(), "[run]\non_error = \"retry\"\n");

    let err = ConfigLoader::new()
        .load_from_directory(temp_dir.path())
        .unwrap_err();
    assert!(err.to_string().contains("Invalid TOML"));
}
