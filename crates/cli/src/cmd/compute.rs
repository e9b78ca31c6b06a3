//! One-shot calculation from a ledger snapshot or `--lot` flags.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use share_average_core::models::ledger::PurchaseLedger;
use share_average_core::models::lot::PurchaseLot;
use share_average_core::models::settings::Settings;
use share_average_core::ShareAverageCalculator;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Arguments for `share-average compute`.
#[derive(Parser, Debug)]
pub struct ComputeArgs {
    /// JSON ledger snapshot: `[{"price": "100", "quantity": "10"}, ...]`.
    /// Use `-` to read from stdin.
    #[arg(short, long, value_name = "FILE", conflicts_with = "lots")]
    pub file: Option<PathBuf>,

    /// A purchase as PRICE:QUANTITY (repeatable, in purchase order).
    #[arg(short, long = "lot", value_name = "PRICE:QUANTITY")]
    pub lots: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Result panel and chart tables
    #[default]
    Text,
    /// Full report as JSON
    Json,
}

/// Run the compute command, writing to stdout.
pub fn run(args: &ComputeArgs, settings: Settings) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute(args, settings, &mut handle)
}

/// Build the session from the arguments, calculate, and write the report.
pub fn execute<W: Write>(args: &ComputeArgs, settings: Settings, out: &mut W) -> Result<()> {
    let mut calc = if let Some(ref path) = args.file {
        let json = read_snapshot(path)?;
        let mut calc = ShareAverageCalculator::with_settings(settings)?;
        calc.import_ledger_json(&json)
            .with_context(|| format!("Invalid ledger snapshot in {}", path.display()))?;
        calc
    } else if !args.lots.is_empty() {
        let lots = args
            .lots
            .iter()
            .map(|spec| parse_lot(spec))
            .collect::<Result<Vec<_>>>()?;
        ShareAverageCalculator::from_ledger(PurchaseLedger::from_lots(lots), settings)?
    } else {
        bail!("No lots given. Use --file <FILE> or one or more --lot PRICE:QUANTITY");
    };

    calc.calculate();

    match args.format {
        OutputFormat::Text => write!(out, "{}", crate::render::render_report(&calc))?,
        OutputFormat::Json => writeln!(out, "{}", calc.report_json()?)?,
    }
    Ok(())
}

/// Split "PRICE:QUANTITY". Either side may be blank or non-numeric; it is
/// kept as raw text and coerces to zero during calculation.
pub fn parse_lot(spec: &str) -> Result<PurchaseLot> {
    match spec.split_once(':') {
        Some((price, quantity)) => Ok(PurchaseLot::new(price.trim(), quantity.trim())),
        None => bail!("Invalid lot '{spec}': expected PRICE:QUANTITY"),
    }
}

fn read_snapshot(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read ledger snapshot from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))
    }
}
