use crate::models::chart::{ChartRow, LineChart, LineSeries, PieSlice};

/// Stroke colour of the price line.
pub const PRICE_LINE_COLOR: &str = "#3b82f6";
/// Stroke colour of the quantity line.
pub const QUANTITY_LINE_COLOR: &str = "#10b981";

/// Generates chart-ready data sets from aggregated chart rows.
///
/// The core computes all the numbers; the frontend only renders.
/// Two charts are produced:
/// - A line chart of price and quantity per purchase
/// - A pie chart of how the total amount splits across purchases
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Price and quantity series over the purchase labels.
    #[must_use]
    pub fn line_chart(&self, rows: &[ChartRow]) -> LineChart {
        LineChart {
            categories: rows.iter().map(|r| r.label.clone()).collect(),
            series: vec![
                LineSeries {
                    name: "Price".to_string(),
                    color: PRICE_LINE_COLOR.to_string(),
                    values: rows.iter().map(|r| r.price).collect(),
                },
                LineSeries {
                    name: "Quantity".to_string(),
                    color: QUANTITY_LINE_COLOR.to_string(),
                    values: rows.iter().map(|r| r.quantity).collect(),
                },
            ],
        }
    }

    /// One slice per row, sized by amount.
    ///
    /// Colours cycle through `palette` by row index. When the total amount is
    /// zero or has overflowed to infinity every share is 0% rather than NaN.
    /// An empty palette yields slices with an empty colour.
    #[must_use]
    pub fn pie_chart(&self, rows: &[ChartRow], palette: &[String]) -> Vec<PieSlice> {
        let total: f64 = rows.iter().map(|r| r.amount).sum();

        rows.iter()
            .enumerate()
            .map(|(i, row)| {
                let share_pct = if total != 0.0 && total.is_finite() && row.amount.is_finite() {
                    row.amount / total * 100.0
                } else {
                    0.0
                };
                let color = if palette.is_empty() {
                    String::new()
                } else {
                    palette[i % palette.len()].clone()
                };
                PieSlice {
                    label: row.label.clone(),
                    amount: row.amount,
                    share_pct,
                    color,
                    caption: format!("{} {:.0}%", row.label, share_pct),
                }
            })
            .collect()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
