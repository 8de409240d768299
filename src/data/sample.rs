//! Synthetic demand/inventory sample generation.
//!
//! Generates a plausible pair of input tables for trying the tool without
//! real data: per-SKU base consumption levels with normal daily noise, a
//! sprinkle of missing cells (as real exports have), and an inventory
//! snapshot drawn relative to each SKU's expected consumption.
//!
//! Generation is fully seeded; the same config always produces the same
//! tables.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::InventoryRecord;
use crate::error::AppError;

/// Daily noise, as a fraction of the SKU's base level.
const DAILY_NOISE_FRAC: f64 = 0.25;

/// Inventory is drawn in `[0, MAX_COVER]` multiples of ~3 days of base demand,
/// so samples land on both sides of typical buffer levels.
const MAX_COVER: f64 = 1.3;

#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub skus: usize,
    pub days: usize,
    pub seed: u64,
    /// Probability that a demand cell is left blank.
    pub missing_prob: f64,
}

/// Generated tables, structured for tests and renderable as CSV.
#[derive(Debug, Clone)]
pub struct SampleData {
    pub skus: Vec<String>,
    /// `days` rows, one optional observation per SKU column (`None` = blank cell).
    pub demand: Vec<Vec<Option<f64>>>,
    pub inventory: Vec<InventoryRecord>,
}

pub fn generate_sample(config: &SampleConfig) -> Result<SampleData, AppError> {
    if config.skus == 0 {
        return Err(AppError::usage("Sample SKU count must be > 0."));
    }
    if config.days == 0 {
        return Err(AppError::usage("Sample day count must be > 0."));
    }
    if !(0.0..1.0).contains(&config.missing_prob) {
        return Err(AppError::usage("Sample missing probability must be in [0, 1)."));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;

    let skus: Vec<String> = (0..config.skus)
        .map(|i| format!("SKU{:03}", i + 1))
        .collect();

    let bases: Vec<f64> = (0..config.skus)
        .map(|_| rng.gen_range(20.0..=150.0))
        .collect();

    let mut demand = Vec::with_capacity(config.days);
    for _ in 0..config.days {
        let mut row = Vec::with_capacity(config.skus);
        for &base in &bases {
            if rng.gen_bool(config.missing_prob) {
                row.push(None);
                continue;
            }
            let z = normal.sample(&mut rng);
            let value = (base + base * DAILY_NOISE_FRAC * z).max(0.0).round();
            row.push(Some(value));
        }
        demand.push(row);
    }

    let inventory = skus
        .iter()
        .zip(&bases)
        .map(|(sku, &base)| InventoryRecord {
            sku: sku.clone(),
            current_stock: (rng.gen_range(0.0..=MAX_COVER) * base * 3.0).round(),
        })
        .collect();

    Ok(SampleData {
        skus,
        demand,
        inventory,
    })
}

impl SampleData {
    /// Render the demand table as CSV (blank cells for missing values).
    pub fn demand_csv(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.skus.join(","));
        out.push('\n');
        for row in &self.demand {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(v) => format!("{v:.0}"),
                    None => String::new(),
                })
                .collect();
            out.push_str(&cells.join(","));
            out.push('\n');
        }
        out
    }

    /// Render the inventory table as CSV.
    pub fn inventory_csv(&self) -> String {
        let mut out = String::new();
        out.push_str("SKU,Current Stock\n");
        for record in &self.inventory {
            out.push_str(&format!("{},{:.0}\n", record.sku, record.current_stock));
        }
        out
    }
}
