//! Command-line parsing for the inventory signal tool.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the buffer/signal code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::FallbackPolicy;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "sku", version, about = "SKU buffer-stock and replenishment signal report")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute buffers from demand history, classify current inventory, and
    /// print the full report (summary + signal table), optionally exporting it.
    Report(ReportArgs),
    /// Print the signal table only (useful for scripting).
    Signals(ReportArgs),
    /// Generate synthetic demand/inventory CSVs to try the tool.
    Sample(SampleArgs),
}

/// Common options for reporting.
#[derive(Debug, Parser, Clone)]
pub struct ReportArgs {
    /// Historic demand CSV: every column header is a SKU, every row one day's consumption.
    #[arg(short = 'd', long, value_name = "CSV")]
    pub demand: PathBuf,

    /// Current inventory CSV with `SKU` and `Current Stock` columns.
    #[arg(short = 'i', long, value_name = "CSV")]
    pub inventory: PathBuf,

    /// Replenishment lead time in days (shared by all SKUs).
    #[arg(short = 'l', long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    pub lead_time: u32,

    /// Buffer value when a SKU's history is shorter than the lead time.
    #[arg(long, value_enum, default_value_t = FallbackPolicy::PartialSum)]
    pub fallback: FallbackPolicy,

    /// Export the report to CSV (`SKU,Current Stock,Buffer Stock,Signal`).
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export the full run (buffers + warnings + rows) to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

/// Options for sample generation.
#[derive(Debug, Parser)]
pub struct SampleArgs {
    /// Number of SKUs to generate.
    #[arg(short = 'n', long, default_value_t = 8)]
    pub skus: usize,

    /// Days of demand history per SKU.
    #[arg(long, default_value_t = 60)]
    pub days: usize,

    /// Random seed (same seed, same tables).
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Probability that a demand cell is left blank.
    #[arg(long, default_value_t = 0.02)]
    pub missing_prob: f64,

    /// Where to write the demand CSV.
    #[arg(long, value_name = "CSV", default_value = "demand.csv")]
    pub demand_out: PathBuf,

    /// Where to write the inventory CSV.
    #[arg(long, value_name = "CSV", default_value = "inventory.csv")]
    pub inventory_out: PathBuf,
}
