//! Core types and utilities

pub mod cell;
pub mod wind;

pub use cell::CellState;
pub use wind::{Cardinal, WindConfig, WindKernel, MAX_RAW_WIND_KMH, MAX_WIND_SPEED};
