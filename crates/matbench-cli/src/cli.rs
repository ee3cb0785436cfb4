//! CLI argument definitions for the benchmarking helpers.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use matbench_utils::UnknownMetricPolicy;

#[derive(Parser)]
#[command(
    name = "matbench",
    version,
    about = "Helper utilities for machine-learning benchmarks",
    long_about = "Inspect benchmark inputs from the command line.\n\n\
                  Looks up metric directions, compares the column sets of two CSV \
                  files and decides whether target columns are regression or \
                  classification targets."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Report whether a larger value is better for each named metric.
    Metric(MetricArgs),

    /// List every known metric and its direction.
    Metrics,

    /// Compare the column sets of two CSV files.
    CompareColumns(CompareArgs),

    /// Classify CSV columns as regression or classification targets.
    TargetType(TargetArgs),
}

#[derive(Parser)]
pub struct MetricArgs {
    /// Metric names, e.g. accuracy or neg_mean_squared_error.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,

    /// Answer for names outside the metric table.
    #[arg(long = "unknown", value_enum, default_value = "fail")]
    pub unknown: UnknownMetricArg,
}

#[derive(Parser)]
pub struct CompareArgs {
    /// First CSV file.
    #[arg(value_name = "LEFT")]
    pub left: PathBuf,

    /// Second CSV file.
    #[arg(value_name = "RIGHT")]
    pub right: PathBuf,

    /// Column to leave out of the comparison (repeatable).
    #[arg(long = "ignore", value_name = "COLUMN")]
    pub ignore: Vec<String>,

    /// Print the comparison as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct TargetArgs {
    /// CSV file to inspect.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Column to classify (repeatable; default: every column).
    #[arg(long = "column", value_name = "NAME")]
    pub columns: Vec<String>,
}

/// Policy for metric names outside the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum UnknownMetricArg {
    /// Report an error.
    Fail,
    /// Assume greater is better.
    Higher,
    /// Assume lower is better.
    Lower,
}

impl From<UnknownMetricArg> for UnknownMetricPolicy {
    fn from(arg: UnknownMetricArg) -> Self {
        match arg {
            UnknownMetricArg::Fail => UnknownMetricPolicy::Fail,
            UnknownMetricArg::Higher => UnknownMetricPolicy::Assume(true),
            UnknownMetricArg::Lower => UnknownMetricPolicy::Assume(false),
        }
    }
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
