//! CLI argument definitions for the reconciliation tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "survey-sync",
    version,
    about = "Reconcile field-inspection uploads against the master table",
    long_about = "Merge freshly uploaded inspection records into the master table.\n\n\
                  Every upload row is classified as new, a fill-in update of an\n\
                  existing row, an allowed duplicate-identifier variant, or an exact\n\
                  duplicate to discard. Existing data is never deleted or overwritten."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge an upload CSV into the master CSV.
    Reconcile(ReconcileArgs),

    /// Normalize drift-prone columns of a CSV in place.
    Normalize(NormalizeArgs),

    /// List the column vocabulary and which columns drive validation.
    Columns,
}

#[derive(Parser)]
pub struct ReconcileArgs {
    /// Path to the master table CSV. A missing file starts an empty table.
    #[arg(long = "master", value_name = "PATH")]
    pub master: PathBuf,

    /// Path to the freshly uploaded CSV batch.
    #[arg(long = "upload", value_name = "PATH")]
    pub upload: PathBuf,

    /// Where to write the merged table (default: overwrite the master).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the merge statistics as JSON to this path.
    #[arg(long = "outcome-json", value_name = "PATH")]
    pub outcome_json: Option<PathBuf>,

    /// Classify and report without writing the merged table.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// CSV file whose targeted columns should be canonicalized.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,

    /// Where to write the result (default: rewrite the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
