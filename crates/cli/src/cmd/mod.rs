//! Command definitions and the shared entry point.

pub mod compute;
pub mod shell;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use share_average_core::models::aggregation::RoundingPolicy;
use share_average_core::models::settings::Settings;
use std::path::PathBuf;
use std::process::ExitCode;

/// Calculate the average price paid for a stock across several purchases.
#[derive(Parser, Debug)]
#[command(name = "share-average", version, about)]
pub struct Args {
    /// Show debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub display: DisplayArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Display settings shared by every command.
#[derive(Parser, Debug, Default, Clone)]
pub struct DisplayArgs {
    /// JSON settings file (currencySymbol, rounding, palette).
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Rounding applied to the average price.
    #[arg(short, long, global = true, value_enum)]
    pub rounding: Option<RoundingArg>,

    /// Currency symbol printed before the total amount.
    #[arg(long, global = true, value_name = "SYMBOL")]
    pub currency: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute totals and chart data for a set of lots, then exit.
    Compute(compute::ComputeArgs),
    /// Edit lots interactively.
    Shell,
}

/// Command-line spelling of `RoundingPolicy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoundingArg {
    /// Two decimal places
    TwoDecimals,
    /// Nearest whole number
    Integer,
    /// Full precision
    Exact,
}

impl From<RoundingArg> for RoundingPolicy {
    fn from(arg: RoundingArg) -> Self {
        match arg {
            RoundingArg::TwoDecimals => RoundingPolicy::TwoDecimals,
            RoundingArg::Integer => RoundingPolicy::Integer,
            RoundingArg::Exact => RoundingPolicy::Exact,
        }
    }
}

impl DisplayArgs {
    /// Settings file (or defaults), with command-line overrides applied.
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load_from_file(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => Settings::default(),
        };

        if let Some(rounding) = self.rounding {
            settings.rounding = rounding.into();
        }
        if let Some(ref symbol) = self.currency {
            settings.currency_symbol = symbol.clone();
        }

        settings.validate().context("Invalid settings")?;
        tracing::debug!("Using settings: {settings:?}");
        Ok(settings)
    }
}

/// Main entry point for the `share-average` binary.
pub fn main() -> ExitCode {
    let args = Args::parse();
    crate::logging::init(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

/// Dispatch to the selected command.
pub fn run(args: &Args) -> Result<()> {
    let settings = args.display.resolve()?;
    match &args.command {
        Command::Compute(compute_args) => compute::run(compute_args, settings),
        Command::Shell => shell::run(settings),
    }
}
