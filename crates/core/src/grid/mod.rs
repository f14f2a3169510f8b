//! Grid storage and starting landscapes

pub mod cell_grid;
pub mod terrain;

// Re-export main types
pub use cell_grid::*;
pub use terrain::*;
