//! Command-line front end for yaml2json.
//!
//! Argument parsing, the run entry point, and the mapping from pipeline
//! errors to process exit codes. Kept in the library so integration tests
//! can drive the full run path without spawning the binary.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;
use yaml2json_core::{Error, convert_files, to_json_text};

#[derive(Parser, Debug)]
#[command(name = "yaml2json")]
#[command(about = "Convert YAML to JSON", long_about = None)]
#[command(version)]
pub struct Args {
    /// YAML file(s) to convert
    #[arg(required = true, value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Output JSON file (default: stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON with the given indent. Use -p for the default of 2
    #[arg(
        short = 'p',
        long = "pretty",
        value_name = "N",
        num_args = 0..=1,
        default_missing_value = "2"
    )]
    pub pretty: Option<usize>,

    /// Allow empty YAML to produce 'null' instead of an error
    #[arg(long = "allow-empty")]
    pub allow_empty: bool,
}

/// Execute one conversion run.
///
/// Nothing is written to the sink unless the whole pipeline succeeded;
/// exactly one trailing newline is appended to the JSON text.
pub fn run(args: &Args) -> Result<()> {
    let value = convert_files(&args.inputs, args.allow_empty)?;
    debug!(%value, "aggregated output value");

    let json_text = to_json_text(&value, args.pretty)?;

    match &args.output {
        Some(path) => fs::write(path, format!("{json_text}\n"))
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json_text}").context("failed to write to stdout")?;
        }
    }

    Ok(())
}

/// Map a failed run to its process exit code.
///
/// Missing inputs and the empty-result policy have dedicated codes so
/// scripts can tell them apart; everything else exits 1.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<Error>() {
        Some(Error::InputNotFound { .. }) => 2,
        Some(Error::EmptyDocument) => 3,
        _ => 1,
    }
}
