//! CSV ingest and normalization.
//!
//! This module turns the two input tables into clean in-memory data that is
//! safe to compute on:
//!
//! - the **demand history** table, where every column header is a SKU and
//!   every row holds one day's consumption per SKU
//! - the **current inventory** table, with `SKU` and `Current Stock` columns
//!
//! Design goals:
//! - **Strict schema** for required structure (clear errors + exit code 2)
//! - **Row-level validation** for inventory (skip bad rows, but report what happened)
//! - **Missing means missing**: demand cells that fail numeric parsing are
//!   dropped from that SKU's series, never coerced to zero
//! - **Separation of concerns**: no buffer or signal logic here

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{DemandSeries, InventoryRecord};
use crate::error::AppError;

/// A row-level error encountered during inventory ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub sku: Option<String>,
    pub message: String,
}

/// Ingested demand history: one series per SKU column, in column order.
#[derive(Debug, Clone)]
pub struct DemandData {
    pub series: Vec<DemandSeries>,
    pub rows_read: usize,
    /// Non-empty cells dropped across all columns because they failed
    /// numeric parsing.
    pub cells_dropped: usize,
}

impl DemandData {
    pub fn total_observations(&self) -> usize {
        self.series.iter().map(|s| s.observations.len()).sum()
    }
}

/// Ingested inventory snapshot: usable rows in input order, plus skipped rows.
#[derive(Debug, Clone)]
pub struct InventoryData {
    pub records: Vec<InventoryRecord>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Load the demand history table.
pub fn load_demand_csv(path: &Path) -> Result<DemandData, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::usage(format!("Failed to open demand CSV '{}': {e}", path.display()))
    })?;
    read_demand(file)
}

/// Load the current inventory table.
pub fn load_inventory_csv(path: &Path) -> Result<InventoryData, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::usage(format!(
            "Failed to open inventory CSV '{}': {e}",
            path.display()
        ))
    })?;
    read_inventory(file)
}

/// Parse demand history from any reader (separated from file access for tests).
pub fn read_demand(input: impl Read) -> Result<DemandData, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| AppError::usage(format!("Failed to read demand CSV headers: {e}")))?
        .clone();

    let skus = demand_skus(&headers)?;

    let mut series: Vec<DemandSeries> = skus
        .into_iter()
        .map(|sku| DemandSeries {
            sku,
            observations: Vec::new(),
            dropped_cells: 0,
        })
        .collect();

    let mut rows_read = 0usize;
    for result in reader.records() {
        let record =
            result.map_err(|e| AppError::usage(format!("Demand CSV parse error: {e}")))?;
        rows_read += 1;

        for (idx, column) in series.iter_mut().enumerate() {
            let Some(cell) = record.get(idx) else {
                continue; // short row: cell is missing for this column
            };
            if cell.is_empty() {
                continue;
            }
            match parse_numeric(cell) {
                Some(value) => column.observations.push(value),
                None => column.dropped_cells += 1,
            }
        }
    }

    let data = DemandData {
        cells_dropped: series.iter().map(|s| s.dropped_cells).sum(),
        series,
        rows_read,
    };

    if rows_read == 0 {
        return Err(AppError::no_data("Demand table has no data rows."));
    }
    if data.total_observations() == 0 {
        return Err(AppError::no_data(
            "Demand table has no numeric observations after coercion.",
        ));
    }

    Ok(data)
}

/// Parse the inventory snapshot from any reader (separated from file access for tests).
pub fn read_inventory(input: impl Read) -> Result<InventoryData, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| AppError::usage(format!("Failed to read inventory CSV headers: {e}")))?
        .clone();

    let (sku_idx, stock_idx) = inventory_columns(&headers)?;

    let mut records = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2 because:
        // - records() starts at line 1 after headers
        // - CSV is 1-based line numbers
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    sku: None,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match parse_inventory_row(&record, sku_idx, stock_idx) {
            Ok(rec) => records.push(rec),
            Err((sku, message)) => row_errors.push(RowError { line, sku, message }),
        }
    }

    if records.is_empty() {
        return Err(AppError::no_data(
            "No usable inventory rows remain after validation.",
        ));
    }

    Ok(InventoryData {
        records,
        row_errors,
        rows_read,
    })
}

/// Extract SKU column names from the demand header row.
///
/// Every header is a SKU identifier; headers are trimmed and BOM-stripped but
/// otherwise kept verbatim, because they must match inventory SKU cells
/// exactly. Blank or duplicate headers are schema errors — letting one
/// column silently shadow another would make buffers depend on column order.
fn demand_skus(headers: &StringRecord) -> Result<Vec<String>, AppError> {
    let mut skus = Vec::with_capacity(headers.len());
    let mut seen = HashSet::new();

    for (idx, raw) in headers.iter().enumerate() {
        let sku = clean_header(raw);
        if sku.is_empty() {
            return Err(AppError::usage(format!(
                "Demand column {} has an empty header (every column must be a SKU).",
                idx + 1
            )));
        }
        if !seen.insert(sku.to_string()) {
            return Err(AppError::usage(format!(
                "Demand table has duplicate SKU column `{sku}`."
            )));
        }
        skus.push(sku.to_string());
    }

    if skus.is_empty() {
        return Err(AppError::usage("Demand table has no SKU columns."));
    }

    Ok(skus)
}

/// Resolve the `SKU` and `Current Stock` column indices (case-insensitive).
fn inventory_columns(headers: &StringRecord) -> Result<(usize, usize), AppError> {
    let mut sku_idx = None;
    let mut stock_idx = None;

    for (idx, raw) in headers.iter().enumerate() {
        match normalize_header_name(raw).as_str() {
            "sku" => sku_idx = sku_idx.or(Some(idx)),
            // Accept both the spaced and underscored spellings.
            "current stock" | "current_stock" => stock_idx = stock_idx.or(Some(idx)),
            _ => {}
        }
    }

    let sku_idx = sku_idx.ok_or_else(|| AppError::usage("Missing required inventory column: `SKU`"))?;
    let stock_idx = stock_idx
        .ok_or_else(|| AppError::usage("Missing required inventory column: `Current Stock`"))?;
    Ok((sku_idx, stock_idx))
}

fn parse_inventory_row(
    record: &StringRecord,
    sku_idx: usize,
    stock_idx: usize,
) -> Result<InventoryRecord, (Option<String>, String)> {
    let sku = record
        .get(sku_idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or((None, "Missing `SKU` value.".to_string()))?
        .to_string();

    let raw_stock = record
        .get(stock_idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or((Some(sku.clone()), "Missing `Current Stock` value.".to_string()))?;

    let current_stock = parse_numeric(raw_stock).ok_or((
        Some(sku.clone()),
        format!("Invalid `Current Stock` value `{raw_stock}`."),
    ))?;

    Ok(InventoryRecord { sku, current_stock })
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header (e.g. "﻿SKU"). If we don't strip it, schema validation will
    // incorrectly report missing columns.
    clean_header(name).to_ascii_lowercase()
}

fn clean_header(name: &str) -> &str {
    name.trim().trim_start_matches('\u{feff}')
}

/// Parse a numeric cell. Non-finite values count as unparseable.
fn parse_numeric(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}
