//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - installs the stderr logger
//! - reads life data and runs estimation + fitting
//! - prints reports and writes optional exports

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, ExponentialArgs, FitArgs, LogArgs, SampleArgs, WeibullArgs};
use crate::data::{SampleModel, SampleOptions, generate_events};
use crate::dist::{Exponential, Weibull};
use crate::domain::{MethodSpec, RunConfig};
use crate::error::AppError;
use crate::report::{evaluator_rows, format_evaluator_table};

pub mod pipeline;

/// Entry point for the `lf` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    init_logging(&cli.log)?;

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Weibull(args) => handle_weibull(args),
        Command::Exponential(args) => handle_exponential(args),
        Command::Sample(args) => handle_sample(args),
    }
}

/// Install a stderr `fmt` subscriber.
///
/// Precedence: `--quiet`, then `--log-level`, then `RUST_LOG`, then `warn`.
fn init_logging(args: &LogArgs) -> Result<(), AppError> {
    let filter = if args.quiet {
        EnvFilter::new("error")
    } else if let Some(directive) = &args.log_level {
        EnvFilter::try_new(directive)
            .map_err(|e| AppError::new(2, format!("Invalid log filter '{directive}': {e}")))?
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::new(1, format!("Failed to initialize logging: {e}")))
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = run_config_from_args(&args);
    let events = pipeline::load_events(&config)?;
    let run = pipeline::run_fit(&events, &config)?;
    let best = run.selection.best();

    if config.method_spec == MethodSpec::All {
        println!("{}", crate::report::format_method_comparison(&run.selection));
        println!("Best estimator: {}", best.method.display_name());
    }
    print!("{}", crate::report::format_fit_summary(best));

    if config.verbose {
        let rows = crate::report::survival_rows(best);
        print!("{}", crate::report::format_survival_table(&rows));
    }

    if let Some(path) = &config.export {
        crate::io::write_run_json(path, &pipeline::to_run_file(&run))?;
        info!(path = %path.display(), "wrote run export");
    }

    Ok(())
}

fn handle_weibull(args: WeibullArgs) -> Result<(), AppError> {
    let weibull = Weibull::new(args.shape, args.scale)?;
    check_range(args.range.step)?;
    let rows = evaluator_rows(&weibull, args.range.from, args.range.to, args.range.step);
    print!("{}", format_evaluator_table(&rows));
    Ok(())
}

fn handle_exponential(args: ExponentialArgs) -> Result<(), AppError> {
    let exponential = Exponential::new(args.rate)?;
    check_range(args.range.step)?;
    let rows = evaluator_rows(&exponential, args.range.from, args.range.to, args.range.step);
    print!("{}", format_evaluator_table(&rows));
    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let model = match (args.rate, args.shape, args.scale) {
        (Some(rate), _, _) => SampleModel::Exponential(Exponential::new(rate)?),
        (None, Some(shape), Some(scale)) => SampleModel::Weibull(Weibull::new(shape, scale)?),
        _ => return Err(AppError::new(2, "Specify --rate, or --shape together with --scale.")),
    };
    let opts = SampleOptions {
        count: args.count,
        seed: args.seed,
        censor_at: args.censor_at,
    };

    for event in generate_events(model, &opts)? {
        println!("{},{}", event.time, event.kind);
    }
    Ok(())
}

fn check_range(step: f64) -> Result<(), AppError> {
    if step.is_finite() && step > 0.0 {
        Ok(())
    } else {
        Err(AppError::new(2, format!("--step must be > 0, got {step}")))
    }
}

pub fn run_config_from_args(args: &FitArgs) -> RunConfig {
    RunConfig {
        method_spec: args.method,
        input: args.input.clone(),
        verbose: args.verbose,
        export: args.export.clone(),
    }
}
