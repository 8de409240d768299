//! Formatted terminal output: run summary and the signal table.
//!
//! We keep formatting code in one place so:
//! - the buffer/signal code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use chrono::NaiveDate;

use crate::domain::{BufferSet, RunConfig, SignalRow};
use crate::io::ingest::{DemandData, InventoryData};

/// Format the full run summary (inputs, stats, warnings, skipped rows).
pub fn format_run_summary(
    demand: &DemandData,
    inventory: &InventoryData,
    buffers: &BufferSet,
    config: &RunConfig,
    asof_date: NaiveDate,
) -> String {
    let mut out = String::new();

    out.push_str("=== sku - Inventory Signal Report ===\n");
    out.push_str(&format!("As-of: {asof_date}\n"));
    out.push_str(&format!("Lead time: {} day(s)\n", config.lead_time));
    out.push_str(&format!(
        "Short-history fallback: {}\n",
        config.fallback.display_name()
    ));
    out.push_str(&format!(
        "Demand: skus={} | rows={} | observations={} | dropped cells={}\n",
        demand.series.len(),
        demand.rows_read,
        demand.total_observations(),
        demand.cells_dropped,
    ));
    out.push_str(&format!(
        "Inventory: rows={} | used={} | skipped={}\n",
        inventory.rows_read,
        inventory.records.len(),
        inventory.row_errors.len(),
    ));
    out.push_str(&format!("Buffers computed: {}\n", buffers.len()));

    if !buffers.warnings.is_empty() {
        out.push_str("\nWarnings:\n");
        for w in &buffers.warnings {
            out.push_str(&format!("- {}\n", w.message()));
        }
    }

    if !inventory.row_errors.is_empty() {
        out.push_str("\nSkipped inventory rows:\n");
        for e in &inventory.row_errors {
            match &e.sku {
                Some(sku) => out.push_str(&format!("- line {} ({sku}): {}\n", e.line, e.message)),
                None => out.push_str(&format!("- line {}: {}\n", e.line, e.message)),
            }
        }
    }

    out.push('\n');
    out
}

/// Format the signal table, one line per report row, in report order.
pub fn format_signal_table(rows: &[SignalRow]) -> String {
    let mut out = String::new();

    out.push_str(
        format!(
            "{:<20} {:>14} {:>14} {:<10}",
            "SKU", "Current Stock", "Buffer Stock", "Signal"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!("{:-<20} {:-<14} {:-<14} {:-<10}", "", "", "", "").trim_end(),
    );
    out.push('\n');

    for row in rows {
        out.push_str(
            format!(
                "{:<20} {:>14} {:>14} {:<10}",
                truncate(&row.sku, 20),
                fmt_qty(row.current_stock),
                fmt_qty(row.buffer_stock),
                row.signal.display_name(),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// Render a quantity: integral values without decimals, fractional to 2 places.
pub fn fmt_qty(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{:.0}", v.round())
    } else {
        format!("{v:.2}")
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
