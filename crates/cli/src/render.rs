//! Plain-text rendering of calculator state.

use share_average_core::models::chart::LineChart;
use share_average_core::models::chart::PieSlice;
use share_average_core::ShareAverageCalculator;
use std::fmt::Write;

/// Render the lot entry form: one line per slot with its raw text.
pub fn render_lots(calc: &ShareAverageCalculator) -> String {
    let mut out = String::new();
    for (i, lot) in calc.lots().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {:<16} price: {:<12} quantity: {}",
            i + 1,
            calc.slot_title(i),
            display_raw(&lot.price),
            display_raw(&lot.quantity),
        );
    }
    out
}

/// Render the "Share price" panel.
pub fn render_summary(calc: &ShareAverageCalculator) -> String {
    let mut out = String::from("Share price\n");
    let _ = writeln!(out, "{}", calc.summary());
    if calc.is_stale() {
        out.push_str("(lots changed since last calculation; run calc to refresh)\n");
    }
    out
}

/// Render both charts as tables. Empty until something has been calculated.
pub fn render_charts(calc: &ShareAverageCalculator) -> String {
    if !calc.has_chart() {
        return String::from("No chart data yet.\n");
    }
    let mut out = render_line_chart(&calc.line_chart());
    out.push('\n');
    out.push_str(&render_pie_chart(&calc.pie_chart()));
    out
}

/// Summary followed by both charts.
pub fn render_report(calc: &ShareAverageCalculator) -> String {
    let mut out = render_summary(calc);
    out.push('\n');
    out.push_str(&render_charts(calc));
    out
}

fn render_line_chart(chart: &LineChart) -> String {
    let mut out = String::from("Line chart\n");
    let _ = write!(out, "  {:<12}", "");
    for series in &chart.series {
        let _ = write!(out, "{:>14}", series.name);
    }
    out.push('\n');

    for (i, category) in chart.categories.iter().enumerate() {
        let _ = write!(out, "  {category:<12}");
        for series in &chart.series {
            let value = series.values.get(i).copied().unwrap_or_default();
            let _ = write!(out, "{value:>14}");
        }
        out.push('\n');
    }
    out
}

fn render_pie_chart(slices: &[PieSlice]) -> String {
    let mut out = String::from("Amount split\n");
    for slice in slices {
        let _ = writeln!(
            out,
            "  {:<20} {:>14} {}",
            slice.caption, slice.amount, slice.color
        );
    }
    out
}

fn display_raw(raw: &str) -> &str {
    if raw.is_empty() {
        "-"
    } else {
        raw
    }
}
