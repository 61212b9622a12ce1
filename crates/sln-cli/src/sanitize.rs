//! The load -> reorder -> dump -> save pipeline behind the binary.

use colored::Colorize;
use sln_core::{
    MsBuildProjectResolver, SanitizerSettings, SolutionFormat, TracingSink, dump, load_file,
    render, reorder,
};
use sln_fs::{ConfigStore, NormalizedPath, checksum, io};

use crate::cli::Cli;
use crate::diff;
use crate::error::{CliError, Result};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to write
    Loaded,
    Written,
    /// `--check` found the output identical
    InSync,
    /// `--check` found differences
    Drift,
}

/// Settings file values with command-line flags layered on top.
pub fn resolve_settings(cli: &Cli) -> Result<SanitizerSettings> {
    let mut settings = match &cli.config {
        Some(path) => ConfigStore::new().load(&NormalizedPath::new(path))?,
        None => SanitizerSettings::default(),
    };
    if let Some(base_dir) = &cli.basedir {
        settings.base_dir = Some(base_dir.clone());
    }
    if cli.no_reorder {
        settings.reorder = false;
    }
    if let Some(format) = cli.dump {
        settings.dump = format;
    }
    if let Some(line_ending) = cli.line_ending {
        settings.line_ending = line_ending;
    }
    Ok(settings)
}

pub fn run_sanitize(cli: &Cli) -> Result<Outcome> {
    let settings = resolve_settings(cli)?;
    tracing::debug!(?settings, "resolved settings");

    let input = NormalizedPath::new(&cli.input);
    let base_dir = settings.base_dir.as_deref().map(NormalizedPath::new);
    let mut sink = TracingSink::new();

    let mut model = load_file(
        &input,
        base_dir.as_ref(),
        &MsBuildProjectResolver::new(),
        &mut sink,
    )?;
    if settings.reorder {
        reorder(&mut model);
    }

    if let Some(text) = dump::render(&model, settings.dump)? {
        print!("{text}");
    }

    let Some(output) = cli.output.as_deref().map(NormalizedPath::new) else {
        if cli.check {
            return Err(CliError::user("--check needs an OUTPUT file to compare against"));
        }
        return Ok(Outcome::Loaded);
    };

    // XML output resolves project files against the same base as the input
    if let Some(base) = &base_dir {
        model.base_directory = base.clone();
    }
    let rendered = render(
        &model,
        SolutionFormat::from_path(&output),
        settings.line_ending,
        &mut sink,
    )?;

    let outcome = if cli.check {
        check(&output, &rendered)?
    } else {
        io::write_text(&output, &rendered)?;
        tracing::info!(path = %output, "wrote solution");
        Outcome::Written
    };

    if sink.count() > 0 {
        eprintln!(
            "{} {} warning(s) while processing {}",
            "warning:".yellow().bold(),
            sink.count(),
            input
        );
    }
    Ok(outcome)
}

/// Compare `rendered` against the bytes of the file at `output` without
/// touching it. A missing file always drifts.
fn check(output: &NormalizedPath, rendered: &str) -> Result<Outcome> {
    if output.is_file()
        && checksum::compute_file_checksum(output)? == checksum::compute_content_checksum(rendered)
    {
        eprintln!("{} {} is up to date", "OK".green().bold(), output);
        return Ok(Outcome::InSync);
    }

    let existing = if output.is_file() {
        io::read_text(output)?
    } else {
        String::new()
    };
    eprintln!("{} {} would change", "DRIFT".red().bold(), output);
    print!("{}", diff::unified(&existing, rendered, output.as_str()));
    Ok(Outcome::Drift)
}
