use crate::models::aggregation::AggregationResult;
use crate::models::chart::ChartRow;
use crate::models::ledger::PurchaseLedger;
use crate::services::coercion::coerce_number;

/// Computes purchase totals and the per-lot chart rows.
///
/// A single pure operation: same ledger in, same numbers out. Nothing is
/// cached and nothing about the ledger is modified.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate a ledger snapshot.
    ///
    /// For every lot, in ledger order:
    /// 1. Coerce price and quantity (unparseable → 0)
    /// 2. amount = price × quantity
    /// 3. Add to the running totals and emit a `ChartRow`
    ///
    /// The weighted average is `total_amount / total_quantity`, or 0 when the
    /// total quantity is zero. Rows with a zero amount are still emitted.
    #[must_use]
    pub fn compute(&self, ledger: &PurchaseLedger) -> (AggregationResult, Vec<ChartRow>) {
        let mut total_quantity = 0.0;
        let mut total_amount = 0.0;

        let rows: Vec<ChartRow> = ledger
            .iter()
            .enumerate()
            .map(|(i, lot)| {
                let price = coerce_number(&lot.price);
                let quantity = coerce_number(&lot.quantity);
                let amount = price * quantity;

                total_quantity += quantity;
                total_amount += amount;

                ChartRow {
                    label: format!("Purchase {}", i + 1),
                    price,
                    quantity,
                    amount,
                }
            })
            .collect();

        let average_price = if total_quantity != 0.0 {
            total_amount / total_quantity
        } else {
            0.0
        };

        tracing::debug!(
            "Aggregated {} lots: quantity={total_quantity}, amount={total_amount}, average={average_price}",
            rows.len()
        );

        (
            AggregationResult {
                total_quantity,
                total_amount,
                average_price,
            },
            rows,
        )
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}
