//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - run configuration (`RunConfig`, `FallbackPolicy`)
//! - demand observations and computed buffers (`DemandSeries`, `SkuBuffer`, `BufferSet`)
//! - inventory rows and classified output rows (`InventoryRecord`, `SignalRow`)

pub mod types;

pub use types::*;
