//! Simulation driver
//!
//! `SimulationState` owns the grid, the iteration counter and the random source.
//! Each call to [`SimulationState::step`] advances one generation:
//! 1. Base ignition rule, applied as one atomic pass
//! 2. Wind ember pass over this generation's ignitions (if wind is active)
//! 3. Town check, before any water can douse this generation's fires
//! 4. Water drop (if scheduled for this iteration)
//! 5. Iteration counter increment
//!
//! Fire never burns out on its own; only a water drop turns it to Burnt.

pub mod config;

pub use config::{ConfigError, SimulationConfig, DEFAULT_GENERATIONS};

use crate::core_types::{CellState, WindConfig, WindKernel};
use crate::grid::{paint_landscape, town_footprint, CellCounts, Grid, GridPos};
use crate::physics::{apply_ignitions, spread_embers};
use crate::suppression::{drop_water, DropShape, WaterDropConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use tracing::{debug, info};

/// Build the starting grid: border, landscape, forest extension, ignition sources.
///
/// Fails on an invalid configuration, in particular the power-plant-only ignition
/// combination.
pub fn initialize(config: &SimulationConfig) -> Result<Grid, ConfigError> {
    config.validate()?;

    let mut grid = Grid::bordered(config.grid_size);
    paint_landscape(&mut grid, config.landscape, config.forest_extension);
    for pos in config.ignition.cells(config.grid_size) {
        grid.set(pos, CellState::Fire);
    }

    info!(
        "Initialized {}x{} grid: landscape={:?}, extension={:?}, fires={}",
        config.grid_size,
        config.grid_size,
        config.landscape,
        config.forest_extension.map(|l| l.index()),
        grid.count(CellState::Fire)
    );
    Ok(grid)
}

/// What happened during one generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepStats {
    /// Iteration the step ran at (before the increment)
    pub iteration: u32,
    /// Cells ignited by the base rule
    pub base_ignitions: usize,
    /// Distinct cells ignited by embers
    pub wind_ignitions: usize,
    /// Shape of the water drop, if one fired
    pub water_drop: Option<DropShape>,
    /// Cell counts after the step
    pub counts: CellCounts,
}

/// Owned simulation state
pub struct SimulationState<R = StdRng> {
    grid: Grid,
    iteration: u32,
    wind: WindConfig,
    kernel: WindKernel,
    water_drop: Option<WaterDropConfig>,
    town_cells: Vec<GridPos>,
    town_ignited_at: Option<u32>,
    last_step: Option<StepStats>,
    rng: R,
}

impl SimulationState<StdRng> {
    /// Create a simulation with a seeded `StdRng`
    pub fn seeded(config: &SimulationConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SimulationState<R> {
    /// Create a simulation from a config and an explicit random source
    pub fn new(config: &SimulationConfig, rng: R) -> Result<Self, ConfigError> {
        let grid = initialize(config)?;
        Ok(Self::from_grid(grid, config.wind, config.water_drop, rng))
    }

    /// Create a simulation around a prepared grid
    pub fn from_grid(
        grid: Grid,
        wind: WindConfig,
        water_drop: Option<WaterDropConfig>,
        rng: R,
    ) -> Self {
        let town_cells = town_footprint(&grid);
        Self {
            grid,
            iteration: 0,
            wind,
            kernel: WindKernel::new(&wind),
            water_drop,
            town_cells,
            town_ignited_at: None,
            last_step: None,
            rng,
        }
    }

    /// Advance one generation and return the updated grid
    pub fn step(&mut self) -> &Grid {
        let iteration = self.iteration;

        let ignited = apply_ignitions(&mut self.grid);

        let embers = if self.wind.is_active() {
            spread_embers(&self.grid, &ignited, &self.wind, &self.kernel, &mut self.rng)
        } else {
            Vec::new()
        };
        self.grid.ignite_all(&embers);
        let wind_ignitions = embers.iter().collect::<FxHashSet<_>>().len();

        self.check_town(iteration);

        let water_drop = drop_water(
            &mut self.grid,
            self.water_drop.as_ref(),
            iteration,
            &mut self.rng,
        );

        self.iteration += 1;

        let stats = StepStats {
            iteration,
            base_ignitions: ignited.len(),
            wind_ignitions,
            water_drop,
            counts: self.grid.counts(),
        };
        debug!(
            "Iteration {}: {} base ignitions, {} ember ignitions, {} burning",
            iteration, stats.base_ignitions, stats.wind_ignitions, stats.counts.fire
        );
        self.last_step = Some(stats);

        &self.grid
    }

    fn check_town(&mut self, iteration: u32) {
        if self.town_ignited_at.is_some() {
            return;
        }
        if self
            .town_cells
            .iter()
            .any(|&pos| self.grid.get(pos) == CellState::Fire)
        {
            info!("Town caught fire on iteration {}", iteration);
            self.town_ignited_at = Some(iteration);
        }
    }

    /// Current grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of generations run so far
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    /// First iteration at which any cell of the starting town was on fire.
    /// Diagnostic only.
    pub fn town_ignited_at(&self) -> Option<u32> {
        self.town_ignited_at
    }

    /// Stats of the most recent step
    pub fn last_step(&self) -> Option<&StepStats> {
        self.last_step.as_ref()
    }
}
