//! Report assembly: join inventory rows against computed buffers and band each row.

use crate::domain::{BufferSet, InventoryRecord, SignalRow};
use crate::signal::classify;

pub mod format;

/// Build the signal report, one output row per inventory row, in input order.
///
/// A SKU absent from the buffer map joins against a zero buffer — a
/// deliberate default for unmonitored SKUs, not an error. With buffer 0 the
/// classifier reports `No Action` for any positive stock and `Black` at
/// exactly zero, so those rows read as "no signal available" rather than as
/// a genuine health assessment.
///
/// Rows are never dropped, merged, or re-sorted; a SKU appearing twice in
/// the inventory is classified independently each time.
pub fn assemble(inventory: &[InventoryRecord], buffers: &BufferSet) -> Vec<SignalRow> {
    let mut rows = Vec::with_capacity(inventory.len());
    for record in inventory {
        let buffer_stock = buffers.get(&record.sku).unwrap_or(0.0);
        let signal = classify(record.current_stock, buffer_stock);
        rows.push(SignalRow {
            sku: record.sku.clone(),
            current_stock: record.current_stock,
            buffer_stock,
            signal,
        });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Signal, SkuBuffer};

    fn buffers(entries: &[(&str, f64)]) -> BufferSet {
        BufferSet::new(
            entries
                .iter()
                .map(|(sku, buffer)| SkuBuffer {
                    sku: sku.to_string(),
                    buffer: *buffer,
                    observations: 4,
                })
                .collect(),
            Vec::new(),
        )
    }

    fn record(sku: &str, current_stock: f64) -> InventoryRecord {
        InventoryRecord {
            sku: sku.to_string(),
            current_stock,
        }
    }

    #[test]
    fn joins_in_input_order() {
        let buffers = buffers(&[("A", 300.0), ("B", 100.0)]);
        let inventory = vec![record("B", 90.0), record("A", 150.0)];

        let rows = assemble(&inventory, &buffers);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].sku, "B");
        assert_eq!(rows[0].buffer_stock, 100.0);
        assert_eq!(rows[0].signal, Signal::Green);
        assert_eq!(rows[1].sku, "A");
        assert_eq!(rows[1].signal, Signal::Yellow);
    }

    #[test]
    fn missing_sku_defaults_to_zero_buffer() {
        let buffers = buffers(&[("A", 300.0)]);
        let inventory = vec![record("GHOST", 5.0), record("GHOST2", 0.0)];

        let rows = assemble(&inventory, &buffers);
        assert_eq!(rows[0].buffer_stock, 0.0);
        assert_eq!(rows[0].signal, Signal::NoAction);
        assert_eq!(rows[1].buffer_stock, 0.0);
        assert_eq!(rows[1].signal, Signal::Black);
    }

    #[test]
    fn duplicate_skus_are_classified_independently() {
        let buffers = buffers(&[("A", 300.0)]);
        let inventory = vec![record("A", 310.0), record("A", 10.0)];

        let rows = assemble(&inventory, &buffers);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].signal, Signal::NoAction);
        assert_eq!(rows[1].signal, Signal::Black);
    }

    #[test]
    fn end_to_end_scenario_signals() {
        let buffers = buffers(&[
            ("SKU001", 380.0),
            ("SKU002", 155.0),
            ("SKU003", 255.0),
            ("SKU004", 380.0),
        ]);
        let inventory = vec![
            record("SKU001", 200.0),
            record("SKU002", 150.0),
            record("SKU003", 90.0),
            record("SKU004", 300.0),
        ];

        let signals: Vec<Signal> = assemble(&inventory, &buffers)
            .into_iter()
            .map(|r| r.signal)
            .collect();
        assert_eq!(
            signals,
            [Signal::Yellow, Signal::Green, Signal::Yellow, Signal::Green]
        );
    }
}
