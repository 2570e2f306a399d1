//! Command-line parsing for the life-data fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the estimation/fitting code.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};

use crate::domain::MethodSpec;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "lf", version, about = "Reliability life-data estimation and Weibull/Exponential fitting")]
pub struct Cli {
    #[command(flatten)]
    pub log: LogArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate the survival function from `time,kind` records and fit Weibull/Exponential.
    Fit(FitArgs),
    /// Tabulate a Weibull distribution.
    Weibull(WeibullArgs),
    /// Tabulate an Exponential distribution.
    Exponential(ExponentialArgs),
    /// Print synthetic `time,kind` records drawn from a known distribution.
    Sample(SampleArgs),
}

/// Logging controls (stderr). `RUST_LOG` is honored when neither is given.
#[derive(Debug, Args, Clone)]
pub struct LogArgs {
    /// Log filter directive, e.g. `debug` or `life_fit::fit=debug`.
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "log_level")]
    pub quiet: bool,
}

/// Options for `lf fit`.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Empirical method used to sample the survival function.
    #[arg(short = 'm', long, value_enum, default_value_t = MethodSpec::Idm)]
    pub method: MethodSpec,

    /// Show the samples of the survival function next to both fits.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Read records from this file instead of stdin.
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Export points and fits to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

/// Tabulation range shared by the evaluator commands.
#[derive(Debug, Args, Clone, Copy)]
pub struct RangeArgs {
    /// Lower bound for x (inclusive).
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub from: f64,

    /// Upper bound for x (exclusive).
    #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
    pub to: f64,

    /// Increment for x.
    #[arg(long, default_value_t = 1.0)]
    pub step: f64,
}

/// Options for `lf weibull`.
#[derive(Debug, Parser, Clone)]
pub struct WeibullArgs {
    /// Shape parameter (beta).
    #[arg(long, default_value_t = 1.0)]
    pub shape: f64,

    /// Scale parameter (theta).
    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,

    #[command(flatten)]
    pub range: RangeArgs,
}

/// Options for `lf exponential`.
#[derive(Debug, Parser, Clone)]
pub struct ExponentialArgs {
    /// Failure rate (lambda).
    #[arg(long, default_value_t = 1.0)]
    pub rate: f64,

    #[command(flatten)]
    pub range: RangeArgs,
}

/// Options for `lf sample`.
#[derive(Debug, Parser, Clone)]
#[command(group(ArgGroup::new("model").required(true).args(["rate", "shape"])))]
pub struct SampleArgs {
    /// Draw from Exponential(rate).
    #[arg(long, conflicts_with_all = ["shape", "scale"])]
    pub rate: Option<f64>,

    /// Draw from Weibull(shape, scale); requires --scale.
    #[arg(long, requires = "scale")]
    pub shape: Option<f64>,

    /// Weibull scale; requires --shape.
    #[arg(long, requires = "shape")]
    pub scale: Option<f64>,

    /// Number of units.
    #[arg(short = 'n', long, default_value_t = 20)]
    pub count: usize,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// End the test at this time; surviving units are recorded as censored.
    #[arg(long, value_name = "TIME")]
    pub censor_at: Option<f64>,
}
