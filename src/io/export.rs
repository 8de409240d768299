//! Export the signal report to CSV and JSON.
//!
//! The CSV is meant to be easy to consume in spreadsheets or downstream
//! scripts; its column names are a stable interface:
//! `SKU,Current Stock,Buffer Stock,Signal`.
//!
//! The JSON carries the whole run (config, buffers, warnings, rows) — the
//! schema is defined by `domain::ReportFile`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;

use crate::domain::{BufferSet, ReportFile, RunConfig, SignalRow};
use crate::error::AppError;
use crate::report::format::fmt_qty;

/// Write the signal report to a CSV file.
pub fn write_report_csv(path: &Path, rows: &[SignalRow]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::usage(format!(
            "Failed to create report CSV '{}': {e}",
            path.display()
        ))
    })?;

    writeln!(file, "SKU,Current Stock,Buffer Stock,Signal")
        .map_err(|e| AppError::usage(format!("Failed to write report CSV header: {e}")))?;

    for row in rows {
        writeln!(
            file,
            "{},{},{},{}",
            csv_field(&row.sku),
            fmt_qty(row.current_stock),
            fmt_qty(row.buffer_stock),
            row.signal.display_name(),
        )
        .map_err(|e| AppError::usage(format!("Failed to write report CSV row: {e}")))?;
    }

    Ok(())
}

/// Write the full run to a JSON file.
pub fn write_report_json(
    path: &Path,
    asof_date: NaiveDate,
    config: &RunConfig,
    buffers: &BufferSet,
    rows: &[SignalRow],
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::usage(format!(
            "Failed to create report JSON '{}': {e}",
            path.display()
        ))
    })?;

    let report = ReportFile {
        tool: "sku".to_string(),
        asof_date,
        lead_time: config.lead_time,
        fallback: config.fallback,
        buffers: buffers.entries.clone(),
        warnings: buffers.warnings.clone(),
        rows: rows.to_vec(),
    };

    serde_json::to_writer_pretty(file, &report)
        .map_err(|e| AppError::usage(format!("Failed to write report JSON: {e}")))?;

    Ok(())
}

/// Quote a CSV field if it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Signal;

    #[test]
    fn report_csv_has_fixed_header_and_row_order() {
        let rows = vec![
            SignalRow {
                sku: "SKU001".to_string(),
                current_stock: 200.0,
                buffer_stock: 380.0,
                signal: Signal::Yellow,
            },
            SignalRow {
                sku: "SKU002".to_string(),
                current_stock: 150.5,
                buffer_stock: 0.0,
                signal: Signal::NoAction,
            },
        ];

        let path = std::env::temp_dir().join("sku-signals-export-test.csv");
        write_report_csv(&path, &rows).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(
            written,
            "SKU,Current Stock,Buffer Stock,Signal\n\
             SKU001,200,380,Yellow\n\
             SKU002,150.50,0,No Action\n"
        );
    }

    #[test]
    fn csv_fields_with_delimiters_are_quoted() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
