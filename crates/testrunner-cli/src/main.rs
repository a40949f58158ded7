use std::process::ExitCode;

mod selftest;

fn main() -> ExitCode {
    selftest::register();
    testrunner_cli::run_main()
}
