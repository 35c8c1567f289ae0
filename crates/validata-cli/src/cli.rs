//! CLI argument definitions for Validata.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "validata",
    version,
    about = "Validata - score the quality of CSV datasets",
    long_about = "Validate CSV datasets and keep a history of quality scores.\n\n\
                  Six checks count missing values, duplicate rows, type errors,\n\
                  out-of-range values, invalid patterns, and outliers; the counts\n\
                  reduce to a single 0-100 quality score."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Store directory (falls back to $VALIDATA_STORE, then ./.validata).
    #[arg(long = "store", value_name = "DIR", global = true)]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a CSV file and record the result.
    Validate(ValidateArgs),

    /// Re-run validation for a stored dataset, appending to its history.
    Revalidate(RevalidateArgs),

    /// Show the latest validation record for a dataset.
    Show(ShowArgs),

    /// List validation history, optionally for a single dataset.
    History(HistoryArgs),

    /// List stored datasets.
    Datasets,

    /// Write a synthetic demo CSV with seeded defects.
    Demo(DemoArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the CSV file to validate.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the validation record as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct RevalidateArgs {
    /// Identifier of a stored dataset.
    #[arg(value_name = "DATASET_ID")]
    pub dataset_id: u64,

    /// Print the validation record as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Identifier of a stored dataset.
    #[arg(value_name = "DATASET_ID")]
    pub dataset_id: u64,

    /// Print the validation record as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct HistoryArgs {
    /// Restrict the history to one dataset.
    #[arg(long = "dataset", value_name = "DATASET_ID")]
    pub dataset: Option<u64>,
}

#[derive(Parser)]
pub struct DemoArgs {
    /// Number of base rows to generate.
    #[arg(long = "rows", default_value_t = 50)]
    pub rows: usize,

    /// RNG seed; equal seeds reproduce identical files.
    #[arg(long = "seed", default_value_t = 42)]
    pub seed: u64,

    /// Output path for the generated CSV.
    #[arg(long = "out", value_name = "PATH", default_value = "demo.csv")]
    pub out: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
