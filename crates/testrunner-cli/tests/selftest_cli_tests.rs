//! End-to-end tests of the self-test binary
//!
//! Tests the complete CLI experience including:
//! - Output levels and flag precedence
//! - Name filtering and the no-match status
//! - Usage errors and exit codes
//! - Configuration file and environment support

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const SELFTEST_COUNT: usize = 13;

/// Self-test binary running in `dir`, isolated from the caller's environment
fn selftest_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("testrunner-selftest").unwrap();
    for var in [
        "TESTRUNNER_OUTPUT",
        "TESTRUNNER_ON_ERROR",
        "TESTRUNNER_FILTER",
        "TESTRUNNER_NO_COLOR",
        "TESTRUNNER_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd.env("NO_COLOR", "1").current_dir(dir.path());
    cmd
}

// ══════════════════════════════════════════════════════════════════════════════
// OUTPUT LEVELS
// ══════════════════════════════════════════════════════════════════════════════

mod output_levels {
    use super::*;

    #[test]
    fn test_default_compact_output() {
        let dir = TempDir::new().unwrap();
        selftest_cmd(&dir)
            .assert()
            .success()
            .stdout(format!(
                "All done. {n} test(s) passed.\n{n} passed, 0 failed, 0 skipped.\n",
                n = SELFTEST_COUNT
            ))
            .stderr("");
    }

    #[test]
    fn test_quiet_prints_nothing_on_success() {
        let dir = TempDir::new().unwrap();
        selftest_cmd(&dir).arg("-q").assert().success().stdout("");
    }

    #[test]
    fn test_verbose_lists_every_test() {
        let dir = TempDir::new().unwrap();
        selftest_cmd(&dir)
            .arg("-v")
            .assert()
            .success()
            .stdout(predicate::str::contains(format!(
                "Running {} test(s) ...",
                SELFTEST_COUNT
            )))
            .stdout(predicate::str::contains(
                "AssertTrue       ... PASS\n",
            ))
            .stdout(predicate::str::contains(
                "ForcedFail       ... PASS (failed as expected)\n",
            ))
            .stdout(predicate::str::contains("Total time").not());
    }

    #[test]
    fn test_timing_adds_durations() {
        let dir = TempDir::new().unwrap();
        selftest_cmd(&dir)
            .arg("-t")
            .assert()
            .success()
            .stdout(predicate::str::is_match(r"ExpectEq +\.\.\. PASS \(\d+\.\d{4}s\)").unwrap())
            .stdout(predicate::str::is_match(r"Total time: \d+\.\d{4}s\n$").unwrap());
    }

    #[test]
    fn test_last_output_flag_wins() {
        let dir = TempDir::new().unwrap();
        selftest_cmd(&dir)
            .args(["-v", "-q"])
            .assert()
            .success()
            .stdout("");

        selftest_cmd(&dir)
            .args(["-q", "-v"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Running"));
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// FILTERING
// ══════════════════════════════════════════════════════════════════════════════

mod filtering {
    use super::*;

    #[test]
    fn test_prefix_filter_selects_subset() {
        let dir = TempDir::new().unwrap();
        selftest_cmd(&dir)
            .args(["-v", "-1", "Expect"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Running 8 test(s) matching 'Expect' ...",
            ))
            .stdout(predicate::str::contains("AssertTrue").not());
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        selftest_cmd(&dir)
            .args(["-1", "expect"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("no test matching 'expect'"));
    }

    #[test]
    fn test_filter_value_may_look_like_a_flag() {
        let dir = TempDir::new().unwrap();
        selftest_cmd(&dir)
            .args(["-1", "-v"])
            .assert()
            .code(1)
            .stdout("")
            .stderr("no test matching '-v'\n");
    }

    #[test]
    fn test_no_match_exit_status() {
        let dir = TempDir::new().unwrap();
        selftest_cmd(&dir)
            .args(["-c", "-1", "Z"])
            .assert()
            .code(1)
            .stdout("")
            .stderr("no test matching 'Z'\n");
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// USAGE ERRORS
// ══════════════════════════════════════════════════════════════════════════════

mod usage_errors {
    use super::*;

    #[test]
    fn test_help_exits_with_usage_status() {
        let dir = TempDir::new().unwrap();
        selftest_cmd(&dir)
            .arg("-h")
            .assert()
            .code(2)
            .stdout(predicate::str::contains("Usage: "))
            .stdout(predicate::str::contains("[-1 <test_name>]"));
    }

    #[test]
    fn test_unknown_flag_exits_with_usage_status() {
        let dir = TempDir::new().unwrap();
        selftest_cmd(&dir)
            .arg("-x")
            .assert()
            .code(2)
            .stdout(predicate::str::contains("Usage: "));
    }

    #[test]
    fn test_long_flag_is_unknown() {
        let dir = TempDir::new().unwrap();
        selftest_cmd(&dir).arg("--help").assert().code(2);
    }

    #[test]
    fn test_missing_filter_value() {
        let dir = TempDir::new().unwrap();
        selftest_cmd(&dir)
            .arg("-1")
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "Must specify test name for '-1' flag.",
            ))
            .stdout(predicate::str::contains("Usage: "));
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// CONFIGURATION
// ══════════════════════════════════════════════════════════════════════════════

mod configuration {
    use super::*;

    #[test]
    fn test_config_file_sets_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("testrunner.toml"),
            "[run]\noutput = \"verbose\"\nfilter = \"Assert\"\n",
        )
        .unwrap();

        selftest_cmd(&dir)
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Running 4 test(s) matching 'Assert' ...",
            ));
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("testrunner.toml"),
            "[run]\noutput = \"verbose\"\n",
        )
        .unwrap();

        selftest_cmd(&dir)
            .arg("-q")
            .assert()
            .success()
            .stdout("");
    }

    #[test]
    fn test_env_sets_output_mode() {
        let dir = TempDir::new().unwrap();
        selftest_cmd(&dir)
            .env("TESTRUNNER_OUTPUT", "verbose")
            .assert()
            .success()
            .stdout(predicate::str::contains("Running"));
    }

    #[test]
    fn test_broken_config_file_is_usage_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("testrunner.toml"), "[run]\noutput = \"loud\"\n").unwrap();

        selftest_cmd(&dir)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Failed to load test configuration"));
    }

    #[test]
    fn test_log_output_goes_to_stderr() {
        let dir = TempDir::new().unwrap();
        selftest_cmd(&dir)
            .env("TESTRUNNER_LOG", "debug")
            .arg("-q")
            .assert()
            .success()
            .stdout("")
            .stderr(predicate::str::contains("run finished"));
    }
}
