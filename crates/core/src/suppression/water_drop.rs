//! Scheduled aerial water drop
//!
//! At one configured iteration a water bomber drops on a target cell. The footprint
//! is one of six fixed shapes chosen uniformly at random. Inside the footprint
//! burning cells are put out (left Burnt), lake and burnt ground are untouched, and
//! everything else is flooded to Lake.

use crate::core_types::CellState;
use crate::grid::{Grid, GridPos};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::{info, warn};

/// Where and when the water drop happens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterDropConfig {
    /// Centre of the drop
    pub target: GridPos,
    /// Iteration at which the drop fires
    pub iteration: u32,
}

/// Footprint of a water drop, as row × column offsets from the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropShape {
    /// 4 rows × 3 columns
    Square,
    /// 1 row × 12 columns
    RowLine,
    /// 12 rows × 1 column
    ColumnLine,
    /// 3 rows × 4 columns
    Rectangle,
    /// 1 row × 6 columns, one row above the target
    RowStrip,
    /// 6 rows × 1 column, one column left of the target
    ColumnStrip,
}

impl DropShape {
    pub const ALL: [DropShape; 6] = [
        DropShape::Square,
        DropShape::RowLine,
        DropShape::ColumnLine,
        DropShape::Rectangle,
        DropShape::RowStrip,
        DropShape::ColumnStrip,
    ];

    /// Draw a shape uniformly
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let roll: u8 = rng.random_range(1..=6);
        Self::ALL[usize::from(roll - 1)]
    }

    /// Half-open `(rows, cols)` offsets relative to the target
    pub const fn offsets(self) -> (Range<isize>, Range<isize>) {
        match self {
            DropShape::Square => (-2..2, -1..2),
            DropShape::RowLine => (0..1, -6..6),
            DropShape::ColumnLine => (-6..6, 0..1),
            DropShape::Rectangle => (-1..2, -2..2),
            DropShape::RowStrip => (-1..0, -3..3),
            DropShape::ColumnStrip => (-3..3, -1..0),
        }
    }

    /// Interior cells covered when dropped on `target`
    pub fn footprint(self, grid: &Grid, target: GridPos) -> Vec<GridPos> {
        let (rows, cols) = self.offsets();
        rows.flat_map(|dr| cols.clone().map(move |dc| (dr, dc)))
            .filter_map(|(dr, dc)| target.offset(dr, dc))
            .filter(|&pos| grid.is_interior(pos))
            .collect()
    }
}

/// State a cell takes after being doused
#[inline]
pub const fn douse(state: CellState) -> CellState {
    match state {
        CellState::Lake | CellState::Burnt => state,
        CellState::Fire => CellState::Burnt,
        _ => CellState::Lake,
    }
}

/// Apply one drop of the given shape. Cells off the interior are skipped.
///
/// Returns the number of cells whose state changed.
pub fn apply_water_drop(grid: &mut Grid, target: GridPos, shape: DropShape) -> usize {
    let mut changed = 0;
    for pos in shape.footprint(grid, target) {
        let before = grid.get(pos);
        let after = douse(before);
        if after != before {
            grid.set(pos, after);
            changed += 1;
        }
    }
    changed
}

/// Drop water if `iteration` is the scheduled one, drawing the shape from `rng`.
///
/// Returns the shape used, or `None` when nothing was scheduled for this iteration.
/// No random draw happens on other iterations.
pub fn drop_water<R: Rng + ?Sized>(
    grid: &mut Grid,
    config: Option<&WaterDropConfig>,
    iteration: u32,
    rng: &mut R,
) -> Option<DropShape> {
    let config = config.filter(|c| c.iteration == iteration)?;
    if !grid.is_interior(config.target) {
        warn!(
            "Water drop target ({}, {}) is outside the grid interior",
            config.target.row, config.target.col
        );
    }
    let shape = DropShape::random(rng);
    let changed = apply_water_drop(grid, config.target, shape);
    info!(
        "Water drop at ({}, {}) on iteration {}: {:?}, {} cells changed",
        config.target.row, config.target.col, iteration, shape, changed
    );
    Some(shape)
}
