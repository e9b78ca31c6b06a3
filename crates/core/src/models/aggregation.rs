use serde::{Deserialize, Serialize};

/// Totals over every lot in the ledger at the moment of calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationResult {
    /// Sum of all coerced quantities
    pub total_quantity: f64,

    /// Sum of price × quantity over all lots
    pub total_amount: f64,

    /// total_amount / total_quantity, or 0 when nothing was bought.
    /// Kept at full precision; rounding happens in `SummaryService`.
    pub average_price: f64,
}

impl AggregationResult {
    /// The all-zero result shown before the first calculation and after a reset.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// How the average price is rounded for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingPolicy {
    /// Two decimal places (e.g., 133.33)
    #[default]
    TwoDecimals,
    /// Nearest whole number (e.g., 133)
    Integer,
    /// No rounding; shortest representation of the f64
    Exact,
}

impl RoundingPolicy {
    /// Number of decimals to print, `None` for exact output.
    #[must_use]
    pub fn decimals(&self) -> Option<usize> {
        match self {
            RoundingPolicy::TwoDecimals => Some(2),
            RoundingPolicy::Integer => Some(0),
            RoundingPolicy::Exact => None,
        }
    }
}

impl std::fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundingPolicy::TwoDecimals => write!(f, "two-decimals"),
            RoundingPolicy::Integer => write!(f, "integer"),
            RoundingPolicy::Exact => write!(f, "exact"),
        }
    }
}

/// Display strings for the "Share price" result panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub total_quantity: String,
    pub average_price: String,
    /// Includes the currency symbol, e.g. "₹ 2000"
    pub total_amount: String,
}

impl std::fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total quantity  {}", self.total_quantity)?;
        writeln!(f, "Average price   {}", self.average_price)?;
        write!(f, "Total amount    {}", self.total_amount)
    }
}
