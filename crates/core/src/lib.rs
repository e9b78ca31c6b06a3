pub mod errors;
pub mod models;
pub mod services;

use models::{
    aggregation::{AggregationResult, ResultSummary},
    chart::{ChartRow, LineChart, PieSlice},
    ledger::PurchaseLedger,
    lot::{LotField, PurchaseLot},
    settings::Settings,
};
use serde::Serialize;
use services::{
    aggregation_service::AggregationService, chart_service::ChartService,
    ledger_service::LedgerService, summary_service::SummaryService,
};

use errors::CoreError;

/// Main entry point for the share-average core library.
///
/// Holds one calculator session: the ledger being edited, the results of
/// the last calculation, and display settings. Results are replaced
/// wholesale on every `calculate()` and are NOT kept in sync with later
/// edits; `is_stale()` reports when the ledger has moved on.
#[must_use]
pub struct ShareAverageCalculator {
    ledger: PurchaseLedger,
    settings: Settings,
    results: AggregationResult,
    chart_rows: Vec<ChartRow>,
    ledger_service: LedgerService,
    aggregation_service: AggregationService,
    chart_service: ChartService,
    summary_service: SummaryService,
    /// Tracks whether the ledger changed since the last calculation.
    stale: bool,
}

impl std::fmt::Debug for ShareAverageCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShareAverageCalculator")
            .field("lots", &self.ledger.len())
            .field("results", &self.results)
            .field("chart_rows", &self.chart_rows.len())
            .field("stale", &self.stale)
            .finish()
    }
}

impl Default for ShareAverageCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a frontend needs to draw the result panel and both charts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationReport<'a> {
    pub results: &'a AggregationResult,
    pub summary: ResultSummary,
    pub rows: &'a [ChartRow],
    pub line_chart: LineChart,
    pub pie_chart: Vec<PieSlice>,
}

impl ShareAverageCalculator {
    /// Start a session with two empty lots and default settings.
    pub fn new() -> Self {
        Self::build(PurchaseLedger::default(), Settings::default())
    }

    /// Start a session with custom display settings.
    /// Settings are validated the same way as in `set_settings`.
    pub fn with_settings(settings: Settings) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(PurchaseLedger::default(), settings))
    }

    /// Start a session from an existing ledger, padded to two lots.
    pub fn from_ledger(ledger: PurchaseLedger, settings: Settings) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(PurchaseLedger::from_lots(ledger.entries), settings))
    }

    // ── Ledger Editing ──────────────────────────────────────────────

    /// Append an empty lot. Returns its index.
    pub fn add_purchase(&mut self) -> usize {
        let index = self.ledger_service.append(&mut self.ledger);
        tracing::debug!("Added purchase slot {index}");
        self.stale = true;
        index
    }

    /// Set the raw text of one field. Nothing is validated here.
    pub fn set_field(
        &mut self,
        index: usize,
        field: LotField,
        value: impl Into<String>,
    ) -> Result<(), CoreError> {
        let value = value.into();
        tracing::debug!("Set {field} of lot {index} to {value:?}");
        self.ledger_service
            .update(&mut self.ledger, index, field, value)?;
        self.stale = true;
        Ok(())
    }

    /// Convenience: set both fields of a lot at once.
    pub fn set_lot(
        &mut self,
        index: usize,
        price: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Result<(), CoreError> {
        self.set_field(index, LotField::Price, price)?;
        self.set_field(index, LotField::Quantity, quantity)
    }

    /// Remove a lot. The first two lots and out-of-range indices are ignored.
    /// Returns `true` if a lot was removed.
    pub fn remove_purchase(&mut self, index: usize) -> bool {
        let removed = self.ledger_service.remove(&mut self.ledger, index);
        if removed {
            tracing::debug!("Removed purchase slot {index}");
            self.stale = true;
        } else {
            tracing::debug!("Ignored removal of purchase slot {index}");
        }
        removed
    }

    /// Back to two empty lots, zeroed results, and no chart data.
    pub fn reset(&mut self) {
        self.ledger_service.reset(&mut self.ledger);
        self.results = AggregationResult::zero();
        self.chart_rows.clear();
        self.stale = false;
        tracing::debug!("Calculator reset");
    }

    // ── Calculation ─────────────────────────────────────────────────

    /// Aggregate the current ledger, replacing previous results and chart rows.
    pub fn calculate(&mut self) -> &AggregationResult {
        let (results, rows) = self.aggregation_service.compute(&self.ledger);
        self.results = results;
        self.chart_rows = rows;
        self.stale = false;
        tracing::info!(
            "Calculated average price {} over {} lots",
            self.results.average_price,
            self.chart_rows.len()
        );
        &self.results
    }

    /// Results of the last calculation (zeros before the first one).
    #[must_use]
    pub fn results(&self) -> &AggregationResult {
        &self.results
    }

    /// Chart rows of the last calculation (empty before the first one).
    #[must_use]
    pub fn chart_rows(&self) -> &[ChartRow] {
        &self.chart_rows
    }

    /// Whether there is anything to chart.
    #[must_use]
    pub fn has_chart(&self) -> bool {
        !self.chart_rows.is_empty()
    }

    /// Returns `true` if the ledger was edited after the last calculation.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    // ── Presentation ────────────────────────────────────────────────

    /// Display strings for the last results, using the session settings.
    #[must_use]
    pub fn summary(&self) -> ResultSummary {
        self.summary_service.summarize(&self.results, &self.settings)
    }

    #[must_use]
    pub fn line_chart(&self) -> LineChart {
        self.chart_service.line_chart(&self.chart_rows)
    }

    #[must_use]
    pub fn pie_chart(&self) -> Vec<PieSlice> {
        self.chart_service
            .pie_chart(&self.chart_rows, &self.settings.palette)
    }

    /// Bundle of results, summary and both charts.
    #[must_use]
    pub fn report(&self) -> CalculationReport<'_> {
        CalculationReport {
            results: &self.results,
            summary: self.summary(),
            rows: &self.chart_rows,
            line_chart: self.line_chart(),
            pie_chart: self.pie_chart(),
        }
    }

    /// The report as pretty-printed JSON.
    pub fn report_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.report())
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize report: {e}")))
    }

    // ── Ledger Inspection ───────────────────────────────────────────

    #[must_use]
    pub fn ledger(&self) -> &PurchaseLedger {
        &self.ledger
    }

    #[must_use]
    pub fn lots(&self) -> &[PurchaseLot] {
        &self.ledger.entries
    }

    #[must_use]
    pub fn lot_count(&self) -> usize {
        self.ledger.len()
    }

    /// Form heading for a slot: "First Purchase", "Second Purchase", "Purchase N".
    #[must_use]
    pub fn slot_title(&self, index: usize) -> String {
        self.ledger_service.slot_title(index)
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace display settings. Results are unaffected; only formatting changes.
    pub fn set_settings(&mut self, settings: Settings) -> Result<(), CoreError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    // ── Snapshot Interchange ────────────────────────────────────────

    /// The ledger as a JSON array of `{price, quantity}` objects.
    pub fn export_ledger_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.ledger)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize ledger: {e}")))
    }

    /// Replace the ledger with a JSON snapshot. Fewer than two lots are
    /// padded with empty ones. Returns the number of lots now in the ledger.
    pub fn import_ledger_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let lots: Vec<PurchaseLot> = serde_json::from_str(json)?;
        self.ledger = PurchaseLedger::from_lots(lots);
        self.stale = true;
        tracing::debug!("Imported ledger with {} lots", self.ledger.len());
        Ok(self.ledger.len())
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(ledger: PurchaseLedger, settings: Settings) -> Self {
        Self {
            ledger,
            settings,
            results: AggregationResult::zero(),
            chart_rows: Vec::new(),
            ledger_service: LedgerService::new(),
            aggregation_service: AggregationService::new(),
            chart_service: ChartService::new(),
            summary_service: SummaryService::new(),
            stale: false,
        }
    }
}
