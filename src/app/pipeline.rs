//! Shared report pipeline used by the `report` and `signals` commands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! demand ingest -> inventory ingest -> buffer computation -> row classification
//!
//! The command handlers can then focus on presentation (printing vs exports).

use crate::buffer::compute_buffers;
use crate::domain::{BufferSet, RunConfig, SignalRow};
use crate::error::AppError;
use crate::io::ingest::{self, DemandData, InventoryData};
use crate::report::assemble;

/// All computed outputs of a single `sku report` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub demand: DemandData,
    pub inventory: InventoryData,
    pub buffers: BufferSet,
    pub rows: Vec<SignalRow>,
}

/// Execute the full report pipeline and return the computed outputs.
pub fn run_report(config: &RunConfig) -> Result<RunOutput, AppError> {
    let demand = ingest::load_demand_csv(&config.demand_path)?;
    let inventory = ingest::load_inventory_csv(&config.inventory_path)?;
    Ok(run_report_with_tables(config, demand, inventory))
}

/// Execute the pipeline with pre-ingested tables.
///
/// This is the pure tail of the pipeline: no I/O, so tests can feed tables
/// built from in-memory CSVs or constructed by hand.
pub fn run_report_with_tables(
    config: &RunConfig,
    demand: DemandData,
    inventory: InventoryData,
) -> RunOutput {
    let buffers = compute_buffers(&demand.series, config.lead_time, config.fallback);
    let rows = assemble(&inventory.records, &buffers);

    RunOutput {
        demand,
        inventory,
        buffers,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FallbackPolicy, Signal};
    use crate::io::ingest::{read_demand, read_inventory};
    use std::io::Cursor;

    fn config(lead_time: u32) -> RunConfig {
        RunConfig {
            demand_path: "demand.csv".into(),
            inventory_path: "inventory.csv".into(),
            lead_time,
            fallback: FallbackPolicy::PartialSum,
            export_csv: None,
            export_json: None,
        }
    }

    #[test]
    fn end_to_end_report() {
        let demand_csv = "SKU001,SKU002,SKU003,SKU004\n\
                          100,50,80,130\n\
                          110,60,85,120\n\
                          140,40,90,125\n\
                          130,55,80,135\n";
        let inventory_csv = "SKU,Current Stock\n\
                             SKU001,200\n\
                             SKU002,150\n\
                             SKU003,90\n\
                             SKU004,300\n";

        let demand = read_demand(Cursor::new(demand_csv)).unwrap();
        let inventory = read_inventory(Cursor::new(inventory_csv)).unwrap();
        let run = run_report_with_tables(&config(3), demand, inventory);

        assert_eq!(run.buffers.get("SKU001"), Some(380.0));
        assert_eq!(run.buffers.get("SKU002"), Some(155.0));
        assert_eq!(run.buffers.get("SKU003"), Some(255.0));
        assert_eq!(run.buffers.get("SKU004"), Some(380.0));
        assert!(run.buffers.warnings.is_empty());

        let signals: Vec<Signal> = run.rows.iter().map(|r| r.signal).collect();
        assert_eq!(
            signals,
            [Signal::Yellow, Signal::Green, Signal::Yellow, Signal::Green]
        );
    }

    #[test]
    fn inventory_sku_without_history_gets_zero_buffer() {
        let demand = read_demand(Cursor::new("A\n10\n20\n30\n")).unwrap();
        let inventory =
            read_inventory(Cursor::new("SKU,Current Stock\nA,100\nUNSEEN,25\n")).unwrap();
        let run = run_report_with_tables(&config(2), demand, inventory);

        assert_eq!(run.rows[1].sku, "UNSEEN");
        assert_eq!(run.rows[1].buffer_stock, 0.0);
        assert_eq!(run.rows[1].signal, Signal::NoAction);
    }

    #[test]
    fn short_history_surfaces_warning_but_still_reports() {
        let demand = read_demand(Cursor::new("A\n10\n20\n")).unwrap();
        let inventory = read_inventory(Cursor::new("SKU,Current Stock\nA,25\n")).unwrap();
        let run = run_report_with_tables(&config(5), demand, inventory);

        assert_eq!(run.buffers.warnings.len(), 1);
        assert_eq!(run.buffers.get("A"), Some(30.0));
        assert_eq!(run.rows[0].signal, Signal::Green);
    }
}
