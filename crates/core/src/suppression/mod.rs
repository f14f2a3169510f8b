//! Fire suppression
//!
//! The only intervention is a single scheduled water drop.

pub mod water_drop;

pub use water_drop::{apply_water_drop, douse, drop_water, DropShape, WaterDropConfig};
