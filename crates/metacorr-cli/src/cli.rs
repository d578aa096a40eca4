//! CLI argument definitions for metacorr.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "metacorr",
    version,
    about = "Weighted meta-analysis of correlation coefficients",
    long_about = "Compute a sample-size-weighted meta-analytic correlation from a\n\
                  table of (n, r) study pairs, with a bootstrap percentile\n\
                  confidence interval for the pooled estimate."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for silence).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a study table and print the pooled statistics.
    Analyze(AnalyzeArgs),

    /// Print the built-in example study table as CSV.
    Sample,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the study table: a headered CSV with `n` and `r` columns
    /// and an optional study-name column.
    #[arg(value_name = "TABLE_CSV")]
    pub table: PathBuf,

    /// Number of bootstrap resamples.
    #[arg(long = "iterations", value_name = "COUNT", default_value_t = 10_000)]
    pub iterations: usize,

    /// Seed for the bootstrap random source; omit for fresh entropy.
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Skip the bootstrap confidence interval.
    #[arg(long = "skip-bootstrap")]
    pub skip_bootstrap: bool,

    /// Emit the full analysis (including bootstrap samples) as JSON.
    #[arg(long = "json")]
    pub json: bool,
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
