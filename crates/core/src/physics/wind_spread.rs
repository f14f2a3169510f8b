//! Wind-driven ember transport
//!
//! Cells that ignited this generation may throw embers up to five cells downwind.
//! For each such cell the flammability scores of its Moore neighbourhood are added
//! to the wind kernel; every cardinal position scoring 4 or more becomes an active
//! spread direction whose score sets how far the embers can reach. Each radial step
//! probes a fan of three cells (straight ahead plus the two diagonals at the same
//! distance), with ignition harder the farther the cell and easier on-axis.

use crate::core_types::{Cardinal, CellState, WindConfig, WindKernel};
use crate::grid::{Grid, GridPos};
use rand::Rng;

/// Cells this close to the border never throw embers; keeps every probe inside
/// the interior (the largest reach is 5 cells).
pub const PROBE_MARGIN: usize = 5;

/// Combined score at which a direction becomes active
pub const ACTIVE_SCORE: i32 = 4;

/// Probability bonus when probing in the wind's own direction
pub const DOWNWIND_BONUS: f64 = 0.15;

/// Probability bonus for every other direction
pub const CROSSWIND_BONUS: f64 = 0.03;

/// Extra bonus for the on-axis cell of the southern fan
pub const SOUTH_AXIS_BONUS: f64 = 0.10;

/// Distance decay added per radial step
pub const DECAY_PER_STEP: f64 = 0.075;

/// Threshold for the on-axis cell
pub const AXIS_THRESHOLD: f64 = 0.35;

/// Threshold for the two diagonal cells
pub const DIAGONAL_THRESHOLD: f64 = 0.45;

/// Ignition score for one probe: `draw * (1 + bonus) - decay`
#[inline]
pub fn ignition_probability(draw: f64, bonus: f64, decay: f64) -> f64 {
    draw * (1.0 + bonus) - decay
}

/// Whether a seed cell sits far enough from the border to throw embers
#[inline]
pub fn in_probe_window(grid: &Grid, pos: GridPos) -> bool {
    let inside = |v: usize| v > PROBE_MARGIN && v + PROBE_MARGIN + 1 < grid.size();
    inside(pos.row) && inside(pos.col)
}

/// Run the ember pass over this generation's ignitions.
///
/// `grid` must already include those ignitions. Returns the extra cells to set on
/// fire; the grid itself is not modified, so every probe reads the post-base state.
/// The random source is consumed in a fixed order: seed, direction (north, west,
/// east, south), radial step, fan cell. Blocked cells consume no draw.
/// Duplicates may appear in the output.
pub fn spread_embers<R: Rng + ?Sized>(
    grid: &Grid,
    seeds: &[GridPos],
    wind: &WindConfig,
    kernel: &WindKernel,
    rng: &mut R,
) -> Vec<GridPos> {
    let mut extra = Vec::new();
    let Some(wind_dir) = wind.direction else {
        return extra;
    };

    for &seed in seeds {
        if !in_probe_window(grid, seed) {
            continue;
        }
        let combined = kernel.combine(&grid.flammability_neighbourhood(seed));

        for dir in Cardinal::SPREAD_ORDER {
            let reach = combined[dir.kernel_index()];
            if reach < ACTIVE_SCORE {
                continue;
            }
            let bonus = if dir == wind_dir {
                DOWNWIND_BONUS
            } else {
                CROSSWIND_BONUS
            };

            for step in 1..reach as isize {
                let decay = DECAY_PER_STEP * step as f64;
                for (d_row, d_col, on_axis) in dir.fan() {
                    let Some(target) = seed.offset(d_row * step, d_col * step) else {
                        continue;
                    };
                    if grid.try_get(target).is_none_or(CellState::blocks_embers) {
                        continue;
                    }
                    let (bonus, threshold) = if on_axis {
                        let south = if dir == Cardinal::South {
                            SOUTH_AXIS_BONUS
                        } else {
                            0.0
                        };
                        (bonus + south, AXIS_THRESHOLD)
                    } else {
                        (bonus, DIAGONAL_THRESHOLD)
                    };
                    let draw: f64 = rng.random();
                    if ignition_probability(draw, bonus, decay) > threshold {
                        extra.push(target);
                    }
                }
            }
        }
    }
    extra
}
