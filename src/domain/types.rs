//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory while computing buffers and signals
//! - exported to CSV/JSON
//! - constructed directly in tests without touching the filesystem

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What to do when a SKU's usable demand history is shorter than the lead time.
///
/// The rolling worst-case window needs at least `lead_time` observations; with
/// fewer, there is no full window to sum. Both policies record an advisory
/// warning for the SKU and let the run continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackPolicy {
    /// Use the sum of all available observations as the buffer.
    ///
    /// This under-counts a full lead-time window but is a closer estimate of
    /// worst-case exposure than reporting no buffer at all.
    PartialSum,
    /// Report a zero buffer for the SKU.
    Zero,
}

impl FallbackPolicy {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            FallbackPolicy::PartialSum => "partial-sum",
            FallbackPolicy::Zero => "zero",
        }
    }
}

/// Replenishment urgency band for one inventory row.
///
/// The five bands partition the whole `(current, buffer)` domain: exactly one
/// band holds for any pair of non-negative values. See `signal::classify` for
/// the ordered conditions and their boundary behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    #[serde(rename = "no-action")]
    NoAction,
    Green,
    Yellow,
    Red,
    Black,
}

impl Signal {
    /// Label used in the terminal table and the report CSV.
    pub fn display_name(self) -> &'static str {
        match self {
            Signal::NoAction => "No Action",
            Signal::Green => "Green",
            Signal::Yellow => "Yellow",
            Signal::Red => "Red",
            Signal::Black => "Black",
        }
    }

    /// Suggested cell background color for dashboards rendering the report.
    pub fn fill_color(self) -> &'static str {
        match self {
            Signal::NoAction => "white",
            Signal::Green => "#2ecc71",
            Signal::Yellow => "#f1c40f",
            Signal::Red => "#e74c3c",
            Signal::Black => "#000000",
        }
    }

    /// Suggested text color paired with `fill_color`.
    pub fn text_color(self) -> &'static str {
        match self {
            Signal::Black => "white",
            _ => "black",
        }
    }
}

/// One SKU's historic daily consumption, in chronological order.
///
/// Cells that failed numeric parsing were dropped during ingest (missing, not
/// zero); `dropped_cells` records how many, for the run summary.
#[derive(Debug, Clone)]
pub struct DemandSeries {
    pub sku: String,
    pub observations: Vec<f64>,
    pub dropped_cells: usize,
}

/// A computed buffer for one SKU.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkuBuffer {
    pub sku: String,
    /// Worst observed total consumption over any lead-time window (or the
    /// fallback value for short histories).
    pub buffer: f64,
    /// Observations the computation actually used.
    pub observations: usize,
}

/// Advisory warning: a SKU had fewer observations than the lead time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortHistoryWarning {
    pub sku: String,
    pub observations: usize,
    pub lead_time: u32,
}

impl ShortHistoryWarning {
    pub fn message(&self) -> String {
        format!(
            "SKU `{}` has {} observation(s), fewer than the lead time of {} day(s); fallback policy applied.",
            self.sku, self.observations, self.lead_time
        )
    }
}

/// All computed buffers for a run, in demand-table column order.
#[derive(Debug, Clone)]
pub struct BufferSet {
    pub entries: Vec<SkuBuffer>,
    pub warnings: Vec<ShortHistoryWarning>,
    by_sku: HashMap<String, f64>,
}

impl BufferSet {
    pub fn new(entries: Vec<SkuBuffer>, warnings: Vec<ShortHistoryWarning>) -> Self {
        let by_sku = entries
            .iter()
            .map(|e| (e.sku.clone(), e.buffer))
            .collect();
        Self {
            entries,
            warnings,
            by_sku,
        }
    }

    /// Buffer for `sku`, or `None` if the SKU has no demand history.
    ///
    /// The report join treats `None` as a zero buffer (a deliberate default,
    /// not an error) — see `report::assemble`.
    pub fn get(&self, sku: &str) -> Option<f64> {
        self.by_sku.get(sku).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One row of the current-inventory table, as ingested.
#[derive(Debug, Clone)]
pub struct InventoryRecord {
    pub sku: String,
    pub current_stock: f64,
}

/// One classified output row.
///
/// Rows appear in the same order as the inventory input; duplicate SKUs are
/// classified independently per occurrence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalRow {
    pub sku: String,
    pub current_stock: f64,
    pub buffer_stock: f64,
    pub signal: Signal,
}

/// A saved run file (JSON).
///
/// The portable representation of a whole run: the configuration that
/// produced it, the computed buffer map, and the classified rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportFile {
    pub tool: String,
    pub asof_date: NaiveDate,
    pub lead_time: u32,
    pub fallback: FallbackPolicy,
    pub buffers: Vec<SkuBuffer>,
    pub warnings: Vec<ShortHistoryWarning>,
    pub rows: Vec<SignalRow>,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub demand_path: PathBuf,
    pub inventory_path: PathBuf,
    /// Replenishment lead time in days. The CLI enforces `>= 1`.
    pub lead_time: u32,
    pub fallback: FallbackPolicy,

    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}
