//! Spread rules applied each generation

pub mod ignition;
pub mod wind_spread;

pub use ignition::{apply_ignitions, find_ignitions};
pub use wind_spread::{ignition_probability, in_probe_window, spread_embers, PROBE_MARGIN};
