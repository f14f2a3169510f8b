//! Deterministic Moore-neighbourhood ignition rule
//!
//! Every interior cell is evaluated against the grid as it stood before this
//! generation; writes happen only after all decisions are made, so a cell that
//! catches this generation cannot push its neighbours over their thresholds in
//! the same generation.

use crate::grid::{Grid, GridPos};
use rayon::prelude::*;

/// Collect the interior cells that ignite this generation, in row-major order.
///
/// Rows are evaluated in parallel. The output order does not depend on scheduling.
pub fn find_ignitions(grid: &Grid) -> Vec<GridPos> {
    let size = grid.size();
    (1..size - 1)
        .into_par_iter()
        .flat_map_iter(|row| {
            (1..size - 1).filter_map(move |col| {
                let pos = GridPos::new(row, col);
                let threshold = grid.get(pos).ignition_threshold()?;
                (grid.fire_neighbours(pos) >= threshold).then_some(pos)
            })
        })
        .collect()
}

/// Run the base rule and apply it, returning the newly ignited cells
pub fn apply_ignitions(grid: &mut Grid) -> Vec<GridPos> {
    let ignited = find_ignitions(grid);
    grid.ignite_all(&ignited);
    ignited
}
