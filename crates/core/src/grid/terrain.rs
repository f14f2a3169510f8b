//! Landscape painting for the starting grid
//!
//! The reference landscape is a fixed arrangement of lake, forest, scrubland and a
//! town on a chaparral plain, laid out for the 102×102 grid. Every rectangle is
//! clipped to the interior, so smaller or larger grids still get a valid (if
//! truncated) layout.

use super::cell_grid::{Grid, GridPos};
use crate::core_types::CellState;
use crate::simulation::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A painted rectangle: rows × cols (half-open)
type Patch = (Range<usize>, Range<usize>, CellState);

/// Town footprint on the reference landscape
pub const TOWN_ROWS: Range<usize> = 88..93;
/// Town footprint on the reference landscape
pub const TOWN_COLS: Range<usize> = 38..43;

/// Base landscape painted before the forest extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Landscape {
    /// Lake, forests, scrubland and town on chaparral
    #[default]
    Reference,
    /// Chaparral everywhere inside the border
    Open,
}

impl Landscape {
    fn base_patches(self) -> Vec<Patch> {
        match self {
            Landscape::Reference => vec![
                (36..41, 11..52, CellState::Lake),
                (41..71, 1..52, CellState::Forest),
                (11..31, 31..52, CellState::Forest),
                (11..81, 61..72, CellState::Scrubland),
            ],
            Landscape::Open => Vec::new(),
        }
    }

    fn town_patch(self) -> Option<Patch> {
        match self {
            Landscape::Reference => Some((TOWN_ROWS, TOWN_COLS, CellState::Town)),
            Landscape::Open => None,
        }
    }
}

/// One of five extra forest overlays, applied once at setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForestExtensionLayout {
    /// Northern block west of the existing forest
    NorthWest,
    /// Two southern blocks running to the west border
    SouthWest,
    /// Vertical band plus a southern arm
    CentralBand,
    /// Forest over the scrubland strip
    ScrubReplacement,
    /// Hollow rectangle around the scrubland
    Ring,
}

impl ForestExtensionLayout {
    /// Select a layout by its 1-based index
    pub fn from_index(index: u8) -> Result<Self, ConfigError> {
        match index {
            1 => Ok(Self::NorthWest),
            2 => Ok(Self::SouthWest),
            3 => Ok(Self::CentralBand),
            4 => Ok(Self::ScrubReplacement),
            5 => Ok(Self::Ring),
            other => Err(ConfigError::InvalidForestLayout(other)),
        }
    }

    /// 1-based index of this layout
    pub const fn index(self) -> u8 {
        match self {
            Self::NorthWest => 1,
            Self::SouthWest => 2,
            Self::CentralBand => 3,
            Self::ScrubReplacement => 4,
            Self::Ring => 5,
        }
    }

    fn patches(self) -> Vec<Patch> {
        let forest = CellState::Forest;
        match self {
            Self::NorthWest => vec![(5..31, 1..52, forest)],
            Self::SouthWest => vec![(71..87, 1..60, forest), (87..100, 1..35, forest)],
            Self::CentralBand => vec![(11..81, 52..72, forest), (71..81, 1..52, forest)],
            Self::ScrubReplacement => vec![(11..81, 61..72, forest)],
            Self::Ring => vec![
                (11..81, 72..75, forest),
                (11..81, 58..61, forest),
                (8..11, 58..75, forest),
                (79..82, 58..75, forest),
            ],
        }
    }
}

/// Which corner ignition sources are burning at generation 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnitionSources {
    /// Two cells in the top-right corner
    pub incinerator: bool,
    /// Two cells in the top-left corner
    pub power_plant: bool,
}

impl Default for IgnitionSources {
    fn default() -> Self {
        Self {
            incinerator: true,
            power_plant: false,
        }
    }
}

impl IgnitionSources {
    /// Reject the power-plant-only combination
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.power_plant && !self.incinerator {
            return Err(ConfigError::PowerPlantWithoutIncinerator);
        }
        Ok(())
    }

    /// Cells set on fire for a grid of `size`
    pub fn cells(&self, size: usize) -> Vec<GridPos> {
        let mut cells = Vec::with_capacity(4);
        if self.incinerator {
            cells.push(GridPos::new(0, size - 1));
            cells.push(GridPos::new(0, size - 2));
        }
        if self.power_plant {
            cells.push(GridPos::new(0, 0));
            cells.push(GridPos::new(0, 1));
        }
        cells
    }
}

/// Paint the landscape and optional forest extension onto a bordered grid
pub fn paint_landscape(
    grid: &mut Grid,
    landscape: Landscape,
    extension: Option<ForestExtensionLayout>,
) {
    let extension_patches = extension.map(ForestExtensionLayout::patches).unwrap_or_default();
    let patches = landscape
        .base_patches()
        .into_iter()
        .chain(extension_patches)
        .chain(landscape.town_patch());
    for (rows, cols, state) in patches {
        grid.paint_rect(rows, cols, state);
    }
}

/// Interior cells that start as Town
pub fn town_footprint(grid: &Grid) -> Vec<GridPos> {
    grid.interior_positions()
        .filter(|&pos| grid.get(pos) == CellState::Town)
        .collect()
}
