//! Performance Log Checker CLI Application
//!
//! Command-line front end for the perf-log-checker library. It adds:
//! - Positional invocation `<label> <baseline> <candidate> <description>`
//! - TOML configuration with command-line overrides
//! - Text and JSON reports
//! - Logging to stderr, keeping stdout for the report

use anyhow::{bail, Context, Result};
use clap::Parser;
use perf_log_checker::{Checker, LogTriple};
use std::io;
use std::path::PathBuf;

mod config;
mod report;

use config::{AppConfig, OutputFormat};
use report::ReportSummary;

/// Perf Log Checker - Flag test cases whose candidate time exceeds N x baseline
#[derive(Parser, Debug)]
#[command(name = "perf-log-cli")]
#[command(about = "Compare candidate measurements against a baseline log", long_about = None)]
#[command(version)]
struct Args {
    /// Label printed in the report header
    label: String,

    /// Baseline log: one integer measurement per line
    #[arg(value_name = "BASELINE")]
    baseline: PathBuf,

    /// Candidate log: one integer measurement per line
    #[arg(value_name = "CANDIDATE")]
    candidate: PathBuf,

    /// Description log: one test case name per line
    #[arg(value_name = "DESCRIPTION")]
    description: PathBuf,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Multiplicative threshold (candidate <= baseline * N passes)
    #[arg(short, long, value_name = "N")]
    threshold: Option<u32>,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Print verdicts without ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Compare the last baseline entry as well
    #[arg(long)]
    include_final_entry: bool,

    /// Stop when all three line counts differ
    #[arg(long)]
    halt_on_mismatch: bool,

    /// Exit with an error when any test case is NG
    #[arg(long)]
    fail_on_ng: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Perf Log Checker CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using checker library v{}", perf_log_checker::VERSION);

    let config = resolve_config(&args)?;
    log::debug!("Effective configuration: {:?}", config);

    let checker = Checker::new(config.check.clone()).context("Invalid checker settings")?;
    let logs = LogTriple::load(&args.baseline, &args.candidate, &args.description)
        .context("Failed to load logs")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = report::write_report(
        &mut out,
        config.output.format,
        &args.label,
        &logs,
        &checker,
        config.output.color,
    )
    .with_context(|| format!("Report {:?} aborted", args.label))?;

    log::info!(
        "{}: {} compared, {} OK, {} NG",
        args.label,
        summary.total,
        summary.ok,
        summary.ng
    );

    check_outcome(&summary, args.fail_on_ng, checker.config().threshold)
}

/// NG verdicts only fail the run when `fail_on_ng` is set
fn check_outcome(summary: &ReportSummary, fail_on_ng: bool, threshold: u32) -> Result<()> {
    if fail_on_ng && summary.ng > 0 {
        bail!(
            "{} test case(s) exceeded {}x the baseline",
            summary.ng,
            threshold
        );
    }
    Ok(())
}

/// Merge defaults, the optional config file, and command-line overrides
fn resolve_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    if let Some(threshold) = args.threshold {
        config.check.threshold = threshold;
    }
    if args.include_final_entry {
        config.check.include_final_entry = true;
    }
    if args.halt_on_mismatch {
        config.check.halt_on_count_mismatch = true;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if args.no_color {
        config.output.color = false;
    }

    Ok(config)
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
