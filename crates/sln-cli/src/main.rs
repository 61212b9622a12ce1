//! Solution Sanitizer CLI
//!
//! Converts between native solution files and XML definitions, applying
//! canonical ordering on the way through.
//!
//! Exit codes: `0` success, `1` help or usage error, `2` fatal error,
//! `3` when `--check` finds drift.

mod cli;
mod diff;
mod error;
mod sanitize;

use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use sanitize::Outcome;

const EXIT_USAGE: i32 = 1;
const EXIT_FATAL: i32 = 2;
const EXIT_DRIFT: i32 = 3;

fn main() {
    let cli = match Cli::try_parse_from(cli::normalize_args(std::env::args())) {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => {
            print!("{e}");
            return;
        }
        Err(e) => {
            eprint!("{e}");
            std::process::exit(EXIT_USAGE);
        }
    };

    init_logging(cli.verbose);

    match sanitize::run_sanitize(&cli) {
        Ok(Outcome::Drift) => std::process::exit(EXIT_DRIFT),
        Ok(outcome) => tracing::debug!(?outcome, "done"),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(EXIT_FATAL);
        }
    }
}

/// Log to stderr; `RUST_LOG` wins, else `warn` (`debug` with `-v`).
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use sln_test_utils::TestSolution;
    use sln_test_utils::samples::{GUID_A, GUID_B, UNORDERED_SOLUTION};

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["sln-sanitize".to_string()];
        full.extend(args.iter().map(|s| s.to_string()));
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_cli_error_user() {
        let error = error::CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }

    #[test]
    fn test_settings_file_then_flags() {
        let sln = TestSolution::new();
        let config = sln.write("settings.toml", "reorder = false\ndump = \"json\"\n");
        let config = config.to_string_lossy().to_string();

        let settings = sanitize::resolve_settings(&cli(&["--config", config.as_str(), "a.sln"])).unwrap();
        assert!(!settings.reorder);
        assert_eq!(settings.dump, sln_core::DumpFormat::Json);

        let settings =
            sanitize::resolve_settings(&cli(&["--config", config.as_str(), "--dump", "none", "a.sln"]))
                .unwrap();
        assert_eq!(settings.dump, sln_core::DumpFormat::None);
    }

    #[test]
    fn test_sanitize_native_to_xml() {
        let sln = TestSolution::new();
        sln.add_project("A/A.csproj", Some(GUID_A));
        sln.add_project("B/B.csproj", Some(GUID_B));
        let input = sln.write("App.sln", UNORDERED_SOLUTION).to_string_lossy().to_string();
        let output = sln.path("App.xml").to_string_lossy().to_string();

        let outcome = sanitize::run_sanitize(&cli(&[
            "--dump",
            "none",
            input.as_str(),
            output.as_str(),
        ]))
        .unwrap();
        assert_eq!(outcome, Outcome::Written);
        sln.assert_file_contains("App.xml", "<folder name=\"Libs\">");
    }

    #[test]
    fn test_check_without_output_is_error() {
        let sln = TestSolution::new();
        let input = sln.write("App.sln", UNORDERED_SOLUTION).to_string_lossy().to_string();
        let result = sanitize::run_sanitize(&cli(&["--check", "--dump", "none", input.as_str()]));
        assert!(matches!(result, Err(error::CliError::User { .. })));
    }

    #[test]
    fn test_check_compares_bytes_on_disk() {
        let sln = TestSolution::new();
        sln.add_project("A/A.csproj", Some(GUID_A));
        sln.add_project("B/B.csproj", Some(GUID_B));
        let input = sln.write("App.sln", UNORDERED_SOLUTION).to_string_lossy().to_string();
        let output = sln.path("Out.sln").to_string_lossy().to_string();
        let check = || {
            sanitize::run_sanitize(&cli(&[
                "--check",
                "--dump",
                "none",
                input.as_str(),
                output.as_str(),
            ]))
            .unwrap()
        };

        // Missing output
        assert_eq!(check(), Outcome::Drift);
        assert!(!sln.path("Out.sln").exists());

        sanitize::run_sanitize(&cli(&["--dump", "none", input.as_str(), output.as_str()])).unwrap();
        assert_eq!(check(), Outcome::InSync);

        // Same text behind a byte order mark is still a different file
        let written = sln.read("Out.sln");
        sln.write("Out.sln", &format!("\u{feff}{written}"));
        assert_eq!(check(), Outcome::Drift);
    }
}
