//! Square cell grid with a permanent firebreak border
//!
//! Cells are stored row-major. Row 0, row N-1, column 0 and column N-1 form the
//! border; the transition rules never write there.

use crate::core_types::CellState;
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Smallest grid that still has an interior inside the border
pub const MIN_GRID_SIZE: usize = 3;

/// Size of the reference scenario grid
pub const REFERENCE_GRID_SIZE: usize = 102;

/// Cell coordinate. `row` is the first array index, `col` the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset by signed deltas, `None` on underflow
    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<GridPos> {
        Some(GridPos {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

/// Number of cells in each state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellCounts {
    pub chaparral: usize,
    pub lake: usize,
    pub forest: usize,
    pub scrubland: usize,
    pub burnt: usize,
    pub town: usize,
    pub fire: usize,
}

impl CellCounts {
    /// Count for one state
    pub fn of(&self, state: CellState) -> usize {
        match state {
            CellState::Chaparral => self.chaparral,
            CellState::Lake => self.lake,
            CellState::Forest => self.forest,
            CellState::Scrubland => self.scrubland,
            CellState::Burnt => self.burnt,
            CellState::Town => self.town,
            CellState::Fire => self.fire,
        }
    }

    fn bump(&mut self, state: CellState) {
        let slot = match state {
            CellState::Chaparral => &mut self.chaparral,
            CellState::Lake => &mut self.lake,
            CellState::Forest => &mut self.forest,
            CellState::Scrubland => &mut self.scrubland,
            CellState::Burnt => &mut self.burnt,
            CellState::Town => &mut self.town,
            CellState::Fire => &mut self.fire,
        };
        *slot += 1;
    }

    /// Total number of cells counted
    pub fn total(&self) -> usize {
        CellState::ALL.iter().map(|&s| self.of(s)).sum()
    }
}

/// Square grid of cell states
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a `size`×`size` grid with a Burnt border and a Chaparral interior.
    ///
    /// Panics if `size` is below [`MIN_GRID_SIZE`]; configs are validated before this.
    pub fn bordered(size: usize) -> Self {
        assert!(
            size >= MIN_GRID_SIZE,
            "grid size {size} is below the minimum {MIN_GRID_SIZE}"
        );
        let mut grid = Grid {
            size,
            cells: vec![CellState::Chaparral; size * size],
        };
        for i in 0..size {
            grid.set(GridPos::new(0, i), CellState::Burnt);
            grid.set(GridPos::new(size - 1, i), CellState::Burnt);
            grid.set(GridPos::new(i, 0), CellState::Burnt);
            grid.set(GridPos::new(i, size - 1), CellState::Burnt);
        }
        grid
    }

    /// Side length
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn flat_index(&self, pos: GridPos) -> usize {
        pos.row * self.size + pos.col
    }

    /// Whether the coordinate lies on the grid at all
    #[inline]
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Whether the coordinate lies strictly inside the border
    #[inline]
    pub fn is_interior(&self, pos: GridPos) -> bool {
        (1..self.size - 1).contains(&pos.row) && (1..self.size - 1).contains(&pos.col)
    }

    /// Whether the coordinate is part of the border ring
    #[inline]
    pub fn is_border(&self, pos: GridPos) -> bool {
        self.contains(pos) && !self.is_interior(pos)
    }

    /// State at `pos`. Panics when out of range.
    #[inline]
    pub fn get(&self, pos: GridPos) -> CellState {
        self.cells[self.flat_index(pos)]
    }

    /// State at `pos`, `None` when out of range
    #[inline]
    pub fn try_get(&self, pos: GridPos) -> Option<CellState> {
        self.contains(pos).then(|| self.get(pos))
    }

    /// Overwrite one cell. Panics when out of range.
    ///
    /// Unlike the transition rules this may write the border; it is used by scenario
    /// setup (ignition sources sit on the border).
    #[inline]
    pub fn set(&mut self, pos: GridPos, state: CellState) {
        let idx = self.flat_index(pos);
        self.cells[idx] = state;
    }

    /// Paint a rectangle of rows × cols, clipped to the interior
    pub fn paint_rect(&mut self, rows: Range<usize>, cols: Range<usize>, state: CellState) {
        let last = self.size - 1;
        let rows = rows.start.max(1)..rows.end.min(last);
        let cols = cols.start.max(1)..cols.end.min(last);
        for row in rows {
            for col in cols.clone() {
                self.set(GridPos::new(row, col), state);
            }
        }
    }

    /// Interior coordinates in row-major order
    pub fn interior_positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        let inner = 1..self.size - 1;
        inner
            .clone()
            .flat_map(move |row| inner.clone().map(move |col| GridPos::new(row, col)))
    }

    /// All coordinates in row-major order
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| GridPos::new(row, col)))
    }

    /// Coordinates of the border ring, row-major
    pub fn border_positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.positions().filter(move |&pos| self.is_border(pos))
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> &[CellState] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// 3×3 Moore neighbourhood around an interior cell, centre included
    pub fn neighbourhood(&self, pos: GridPos) -> [[CellState; 3]; 3] {
        debug_assert!(self.is_interior(pos));
        let mut out = [[CellState::Burnt; 3]; 3];
        for (r, out_row) in out.iter_mut().enumerate() {
            for (c, cell) in out_row.iter_mut().enumerate() {
                *cell = self.get(GridPos::new(pos.row + r - 1, pos.col + c - 1));
            }
        }
        out
    }

    /// Flammability scores of the Moore neighbourhood around an interior cell
    pub fn flammability_neighbourhood(&self, pos: GridPos) -> Matrix3<i32> {
        let states = self.neighbourhood(pos);
        Matrix3::from_fn(|r, c| states[r][c].flammability())
    }

    /// Number of the 8 Moore neighbours currently on fire
    pub fn fire_neighbours(&self, pos: GridPos) -> u8 {
        let states = self.neighbourhood(pos);
        let mut count = 0;
        for (r, row) in states.iter().enumerate() {
            for (c, &state) in row.iter().enumerate() {
                if (r, c) != (1, 1) && state == CellState::Fire {
                    count += 1;
                }
            }
        }
        count
    }

    /// Set every listed cell on fire. Duplicates are harmless.
    pub fn ignite_all(&mut self, cells: &[GridPos]) {
        for &pos in cells {
            self.set(pos, CellState::Fire);
        }
    }

    /// Number of cells in `state`
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Per-state cell counts
    pub fn counts(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for &state in &self.cells {
            counts.bump(state);
        }
        counts
    }

    /// Coordinates currently on fire, row-major
    pub fn fire_positions(&self) -> Vec<GridPos> {
        self.positions()
            .filter(|&pos| self.get(pos) == CellState::Fire)
            .collect()
    }

    /// Text rendering, one glyph per cell, one line per row
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for row in 0..self.size {
            out.extend(self.row(row).iter().map(|s| s.glyph()));
            out.push('\n');
        }
        out
    }
}
