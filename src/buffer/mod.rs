//! Buffer-stock computation.
//!
//! The buffer for a SKU is the worst total consumption observed over any
//! contiguous lead-time-length window of its demand history: the quantity
//! on-hand stock must cover to survive one replenishment cycle without a
//! stockout.
//!
//! Design goals:
//! - **Pure**: inputs in, values out; no I/O and no shared state
//! - **Local recovery**: short histories fall back per policy and surface an
//!   advisory warning instead of failing the run
//! - **Per-SKU independence**: SKUs are computed in parallel and collected
//!   back in input column order

use rayon::prelude::*;

use crate::domain::{BufferSet, DemandSeries, FallbackPolicy, ShortHistoryWarning, SkuBuffer};

/// Maximum sum over all contiguous windows of exactly `lead_time` observations.
///
/// Requires `1 <= lead_time <= observations.len()`; for a series of length N
/// this scans the N - L + 1 windows starting at offsets `0..=N-L`.
fn rolling_worst_case(observations: &[f64], lead_time: usize) -> f64 {
    observations
        .windows(lead_time)
        .map(|w| w.iter().sum::<f64>())
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Compute one SKU's buffer.
///
/// Returns the buffer entry plus an advisory warning when the usable history
/// was shorter than the lead time (the fallback policy decides the value in
/// that case; an empty history is always a zero buffer).
pub fn compute_buffer(
    series: &DemandSeries,
    lead_time: u32,
    fallback: FallbackPolicy,
) -> (SkuBuffer, Option<ShortHistoryWarning>) {
    let n = series.observations.len();

    let (buffer, warning) = if n >= lead_time as usize {
        (rolling_worst_case(&series.observations, lead_time as usize), None)
    } else {
        let value = match fallback {
            FallbackPolicy::PartialSum => series.observations.iter().sum(),
            FallbackPolicy::Zero => 0.0,
        };
        let warning = ShortHistoryWarning {
            sku: series.sku.clone(),
            observations: n,
            lead_time,
        };
        (value, Some(warning))
    };

    (
        SkuBuffer {
            sku: series.sku.clone(),
            buffer,
            observations: n,
        },
        warning,
    )
}

/// Compute buffers for every SKU in the demand table.
///
/// SKUs are evaluated in parallel (no cross-SKU dependency) and collected in
/// input column order, so the result is deterministic regardless of how the
/// work was scheduled.
pub fn compute_buffers(
    series: &[DemandSeries],
    lead_time: u32,
    fallback: FallbackPolicy,
) -> BufferSet {
    let per_sku: Vec<(SkuBuffer, Option<ShortHistoryWarning>)> = series
        .par_iter()
        .map(|s| compute_buffer(s, lead_time, fallback))
        .collect();

    let mut entries = Vec::with_capacity(per_sku.len());
    let mut warnings = Vec::new();
    for (entry, warning) in per_sku {
        entries.push(entry);
        warnings.extend(warning);
    }

    BufferSet::new(entries, warnings)
}
