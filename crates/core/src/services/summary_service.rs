use crate::models::aggregation::{AggregationResult, ResultSummary, RoundingPolicy};
use crate::models::settings::Settings;

/// Turns an `AggregationResult` into display strings.
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Format totals for the result panel.
    ///
    /// The average price follows `settings.rounding`. Totals print as plain
    /// numbers (`15`, `2000`, `12.5`) with at most the policy's precision.
    #[must_use]
    pub fn summarize(&self, result: &AggregationResult, settings: &Settings) -> ResultSummary {
        let policy = settings.rounding;
        ResultSummary {
            total_quantity: format_total(result.total_quantity, policy),
            average_price: format_average(result.average_price, policy),
            total_amount: format!(
                "{} {}",
                settings.currency_symbol,
                format_total(result.total_amount, policy)
            ),
        }
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}

/// Average price with a fixed number of decimals, e.g. "133.33" or "133".
/// A zero average prints as "0" regardless of policy.
#[must_use]
pub fn format_average(value: f64, policy: RoundingPolicy) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    match policy.decimals() {
        Some(decimals) => format!("{value:.decimals$}"),
        None => value.to_string(),
    }
}

/// A total without trailing zeros: "2000", "12.5", "0.33".
#[must_use]
pub fn format_total(value: f64, policy: RoundingPolicy) -> String {
    let text = match policy.decimals() {
        Some(decimals) => format!("{value:.decimals$}"),
        None => return value.to_string(),
    };
    let trimmed = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    // "-0" after rounding a tiny negative
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
