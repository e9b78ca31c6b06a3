use serde::{Deserialize, Serialize};

/// One row of chart data per purchase lot, in ledger order.
///
/// The core generates these, the frontend just renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    /// Positional name: "Purchase 1", "Purchase 2", ...
    pub label: String,

    /// Coerced buy price
    pub price: f64,

    /// Coerced quantity
    pub quantity: f64,

    /// price × quantity
    pub amount: f64,
}

/// A named series of values for the line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    /// Series name shown in the legend ("Price" or "Quantity")
    pub name: String,

    /// Stroke colour
    pub color: String,

    /// One value per category
    pub values: Vec<f64>,
}

/// Price and quantity plotted over the purchase labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    /// X-axis labels, one per lot
    pub categories: Vec<String>,

    pub series: Vec<LineSeries>,
}

impl LineChart {
    /// Look up a series by name.
    #[must_use]
    pub fn series(&self, name: &str) -> Option<&LineSeries> {
        self.series.iter().find(|s| s.name == name)
    }
}

/// One wedge of the amount pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    pub label: String,

    /// Amount spent on this lot
    pub amount: f64,

    /// Share of the total amount, in percent (0 when nothing was spent)
    pub share_pct: f64,

    /// Fill colour from the palette, cycling by index
    pub color: String,

    /// Wedge caption, e.g. "Purchase 1 50%"
    pub caption: String,
}
