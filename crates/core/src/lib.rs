//! Fire Cellular Automaton Core Library
//!
//! A wind-aware probabilistic cellular automaton for wildfire spread over a fixed
//! terrain grid of chaparral, forest, scrubland, lakes and a town.
//!
//! ## Per-generation pipeline
//!
//! - Deterministic Moore-neighbourhood ignition with per-terrain thresholds
//! - Wind ember pass: a directional 3×3 kernel added to flammability scores
//!   decides how far and where burning cells throw embers
//! - A single scheduled water drop that floods a randomly shaped region
//!
//! The engine is single-threaded in its random draws: one seedable source is
//! consumed in a fixed order, so a seed and a config reproduce a run exactly.

// Core types and utilities
pub mod core_types;

pub mod grid;
pub mod physics;
pub mod simulation;
pub mod suppression;

// Re-export core types
pub use core_types::{Cardinal, CellState, WindConfig, WindKernel};

pub use grid::{CellCounts, ForestExtensionLayout, Grid, GridPos, IgnitionSources, Landscape};
pub use simulation::{initialize, ConfigError, SimulationConfig, SimulationState, StepStats};
pub use suppression::{DropShape, WaterDropConfig};
