//! CLI argument parsing using clap derive

use clap::Parser;
use sln_core::{DumpFormat, LineEnding};

/// Solution Sanitizer - convert solution files to and from an XML
/// definition and bring them into canonical order
///
/// INPUT and OUTPUT ending in `.sln` are native solution files; any other
/// extension is an XML definition.
#[derive(Parser, Debug)]
#[command(name = "sln-sanitize")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Solution or XML definition to read
    pub input: String,

    /// File to write; without it the model is only loaded and dumped
    pub output: Option<String>,

    /// Directory project paths of an XML definition are relative to
    #[arg(long, value_name = "PATH")]
    pub basedir: Option<String>,

    /// Settings file (.toml, .json, .yaml)
    #[arg(long, value_name = "FILE", env = "SLN_SANITIZE_CONFIG")]
    pub config: Option<String>,

    /// Keep the input order instead of the canonical one
    #[arg(long)]
    pub no_reorder: bool,

    /// Model dump printed after loading (text, json, none)
    #[arg(long, value_name = "FORMAT")]
    pub dump: Option<DumpFormat>,

    /// Line ending of native output (crlf, lf)
    #[arg(long, value_name = "EOL")]
    pub line_ending: Option<LineEnding>,

    /// Compare against OUTPUT instead of writing it
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Rewrite the legacy `-basedir:<path>` / `--basedir:<path>` and `-help`
/// spellings into forms clap understands.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .enumerate()
        .map(|(idx, arg)| {
            if idx == 0 {
                return arg;
            }
            if arg == "-help" {
                return "--help".to_string();
            }
            match arg
                .strip_prefix("--basedir:")
                .or_else(|| arg.strip_prefix("-basedir:"))
            {
                Some(path) => format!("--basedir={path}"),
                None => arg,
            }
        })
        .collect()
}
