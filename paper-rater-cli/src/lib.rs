//! Command-line interface for rating papers against keyword tables.
#![forbid(unsafe_code)]

use std::io::{self, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use paper_rater_scorer::{Rater, RatingTables};
use serde::{Deserialize, Serialize};

mod batch;
mod error;
mod rate;

pub use error::CliError;

use batch::BatchArgs;
use rate::RateArgs;

pub(crate) const ARG_TITLE: &str = "title";
pub(crate) const ARG_ABSTRACT: &str = "abstract";
pub(crate) const ARG_SUBJECTS: &str = "subjects";
pub(crate) const ARG_COMMENT: &str = "comment";
pub(crate) const ARG_TABLES: &str = "tables";
pub(crate) const ARG_PAPERS: &str = "papers";
pub(crate) const ARG_MIN_RATING: &str = "min-rating";
pub(crate) const ENV_RATE_TITLE: &str = "PAPER_RATER_CMDS_RATE_TITLE";
pub(crate) const ENV_RATE_ABSTRACT: &str = "PAPER_RATER_CMDS_RATE_ABSTRACT_TEXT";
pub(crate) const ENV_RATE_SUBJECTS: &str = "PAPER_RATER_CMDS_RATE_SUBJECTS";
pub(crate) const ENV_BATCH_PAPERS: &str = "PAPER_RATER_CMDS_BATCH_PAPERS_PATH";

/// Run the paper-rater CLI with the current process arguments and environment.
///
/// Command output is written to standard output.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration layering, table
/// loading, input validation or writing the output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Rate(args) => rate::run_rate(args, writer),
        Command::Batch(args) => batch::run_batch(args, writer),
        Command::Tables(args) => run_tables(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "paper-rater",
    about = "Rate academic papers against weighted keyword tables",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rate a single paper given on the command line.
    Rate(RateArgs),
    /// Rate every paper in a JSON file.
    Batch(BatchArgs),
    /// Print the effective rating tables.
    Tables(TablesArgs),
}

/// CLI arguments for the `tables` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print the rating tables as JSON. Without --tables the \
                 built-in tables are printed, which makes a convenient \
                 starting point for a custom table file.",
    about = "Print the effective rating tables"
)]
#[ortho_config(prefix = "PAPER_RATER")]
struct TablesArgs {
    /// Path to a JSON rating-table file.
    #[arg(long = ARG_TABLES, value_name = "path")]
    #[serde(default)]
    tables: Option<Utf8PathBuf>,
}

fn run_tables(args: TablesArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let tables = match merged.tables.as_deref() {
        Some(path) => RatingTables::load(path)?,
        None => RatingTables::default(),
    };
    write_payload(writer, &tables.to_json_pretty()?)
}

/// Build a rater from `tables`, or from the built-in tables when absent.
pub(crate) fn load_rater(tables: Option<&Utf8Path>) -> Result<Rater, CliError> {
    let rater = match tables {
        Some(path) => Rater::from_path(path)?,
        None => Rater::with_defaults()?,
    };
    Ok(rater)
}

/// Serialise `value` as pretty JSON and write it with a trailing newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    write_payload(writer, &payload)
}

fn write_payload(writer: &mut dyn Write, payload: &str) -> Result<(), CliError> {
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
