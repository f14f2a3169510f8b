//! Simulation configuration, built once before the run

use crate::core_types::WindConfig;
use crate::grid::{
    ForestExtensionLayout, IgnitionSources, Landscape, MIN_GRID_SIZE, REFERENCE_GRID_SIZE,
};
use crate::suppression::WaterDropConfig;
use serde::{Deserialize, Serialize};

/// Generations run by the reference scenario
pub const DEFAULT_GENERATIONS: u32 = 95;

/// Everything the engine needs to set up and run a simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Side length of the square grid, border included
    pub grid_size: usize,
    /// Base landscape
    #[serde(default)]
    pub landscape: Landscape,
    /// Prevailing wind
    #[serde(default)]
    pub wind: WindConfig,
    /// Optional scheduled water drop
    #[serde(default)]
    pub water_drop: Option<WaterDropConfig>,
    /// Optional forest overlay
    #[serde(default)]
    pub forest_extension: Option<ForestExtensionLayout>,
    /// Corner fires at generation 0
    #[serde(default)]
    pub ignition: IgnitionSources,
    /// Run length; read by the driving loop only, never by the engine
    pub generations: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_size: REFERENCE_GRID_SIZE,
            landscape: Landscape::Reference,
            wind: WindConfig::calm(),
            water_drop: None,
            forest_extension: None,
            ignition: IgnitionSources::default(),
            generations: DEFAULT_GENERATIONS,
        }
    }
}

impl SimulationConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                size: self.grid_size,
                min: MIN_GRID_SIZE,
            });
        }
        self.ignition.validate()
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid size {size} is below the minimum of {min}")]
    GridTooSmall { size: usize, min: usize },
    #[error("Power plant ignition requires the incinerator source")]
    PowerPlantWithoutIncinerator,
    #[error("Forest extension layout must be 1-5, got {0}")]
    InvalidForestLayout(u8),
}
