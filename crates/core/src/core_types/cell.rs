//! Terrain and fire states of a single grid cell
//!
//! The landscape is a closed set of seven states. Each state carries a static
//! flammability score that feeds the wind kernel; the score never changes at runtime.

use serde::{Deserialize, Serialize};

/// State of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    /// Dense shrubland, burns easily
    #[default]
    Chaparral,
    /// Open water, never burns
    Lake,
    /// Canopy forest, hard to ignite
    Forest,
    /// Low scrub, burns easily but less than chaparral
    Scrubland,
    /// Burnt ground (also the permanent firebreak border)
    Burnt,
    /// Town footprint
    Town,
    /// Currently on fire
    Fire,
}

impl CellState {
    /// All states in declaration order
    pub const ALL: [CellState; 7] = [
        CellState::Chaparral,
        CellState::Lake,
        CellState::Forest,
        CellState::Scrubland,
        CellState::Burnt,
        CellState::Town,
        CellState::Fire,
    ];

    /// Static flammability score in `0..=3`, added to the wind kernel
    #[inline]
    pub const fn flammability(self) -> i32 {
        match self {
            CellState::Chaparral => 3,
            CellState::Scrubland => 2,
            CellState::Forest | CellState::Town => 1,
            CellState::Lake | CellState::Burnt | CellState::Fire => 0,
        }
    }

    /// Minimum number of burning Moore neighbours needed to ignite under the base rule.
    ///
    /// `None` for states the base rule never ignites.
    #[inline]
    pub const fn ignition_threshold(self) -> Option<u8> {
        match self {
            CellState::Chaparral => Some(2),
            CellState::Forest => Some(3),
            CellState::Scrubland | CellState::Town => Some(1),
            CellState::Lake | CellState::Burnt | CellState::Fire => None,
        }
    }

    /// Whether an ember landing on this cell is wasted (Lake, Burnt or already on fire)
    #[inline]
    pub const fn blocks_embers(self) -> bool {
        matches!(self, CellState::Lake | CellState::Burnt | CellState::Fire)
    }

    /// Single-character glyph for text output
    pub const fn glyph(self) -> char {
        match self {
            CellState::Chaparral => ',',
            CellState::Lake => '~',
            CellState::Forest => 'T',
            CellState::Scrubland => '.',
            CellState::Burnt => '#',
            CellState::Town => 'H',
            CellState::Fire => '*',
        }
    }
}
