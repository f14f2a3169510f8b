//! Prevailing wind and its 3×3 spread kernel

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

/// Raw wind speeds above this (km/h) disable wind entirely
pub const MAX_RAW_WIND_KMH: u32 = 30;

/// Highest speed band
pub const MAX_WIND_SPEED: u8 = 3;

/// One of the four cardinal directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cardinal {
    North,
    East,
    South,
    West,
}

impl Cardinal {
    /// Order in which the wind pass checks directions around a burning cell
    /// (row-major order of the kernel's edge-centre positions).
    pub const SPREAD_ORDER: [Cardinal; 4] = [
        Cardinal::North,
        Cardinal::West,
        Cardinal::East,
        Cardinal::South,
    ];

    /// Position of this direction in a 3×3 neighbourhood matrix `(row, col)`
    #[inline]
    pub const fn kernel_index(self) -> (usize, usize) {
        match self {
            Cardinal::North => (0, 1),
            Cardinal::West => (1, 0),
            Cardinal::East => (1, 2),
            Cardinal::South => (2, 1),
        }
    }

    /// Unit offsets `(d_row, d_col, on_axis)` of the three cells probed at each
    /// radial step, in draw order. Scale both offsets by the step.
    #[inline]
    pub const fn fan(self) -> [(isize, isize, bool); 3] {
        match self {
            Cardinal::North => [(-1, 0, true), (-1, -1, false), (-1, 1, false)],
            Cardinal::West => [(-1, -1, false), (0, -1, true), (1, -1, false)],
            Cardinal::East => [(-1, 1, false), (0, 1, true), (1, 1, false)],
            Cardinal::South => [(1, 1, false), (1, 0, true), (1, -1, false)],
        }
    }
}

/// Wind direction and banded speed, fixed for the whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindConfig {
    /// `None` means calm: the wind pass never runs
    pub direction: Option<Cardinal>,
    /// Speed band in `0..=3`
    pub speed: u8,
}

impl WindConfig {
    /// Create a wind config from an already-banded speed (clamped to `0..=3`)
    pub fn new(direction: Option<Cardinal>, speed: u8) -> Self {
        Self {
            direction,
            speed: speed.min(MAX_WIND_SPEED),
        }
    }

    /// No wind
    pub const fn calm() -> Self {
        Self {
            direction: None,
            speed: 0,
        }
    }

    /// Band a raw speed in km/h.
    ///
    /// Anything above 30 km/h disables wind. Otherwise the band is `raw / 10`
    /// rounded half to even, so 5 km/h is band 0, 15 and 25 km/h are band 2.
    pub fn from_raw_speed(direction: Option<Cardinal>, raw_kmh: u32) -> Self {
        if raw_kmh > MAX_RAW_WIND_KMH {
            return Self::calm();
        }
        let band = (f64::from(raw_kmh) / 10.0).round_ties_even() as u8;
        Self::new(direction, band)
    }

    /// Whether the wind pass runs at all
    #[inline]
    pub fn is_active(&self) -> bool {
        self.direction.is_some()
    }
}

/// 3×3 wind kernel added element-wise to a neighbourhood's flammability scores.
///
/// The side of the kernel facing the wind direction carries the speed band; every
/// other entry is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindKernel {
    matrix: Matrix3<i32>,
}

impl WindKernel {
    /// Build the kernel for a wind config. Calm wind yields the zero kernel.
    pub fn new(wind: &WindConfig) -> Self {
        let s = i32::from(wind.speed);
        #[rustfmt::skip]
        let entries: [i32; 9] = match wind.direction {
            None => [0; 9],
            Some(Cardinal::North) => [
                s, s, s,
                0, 0, 0,
                0, 0, 0,
            ],
            Some(Cardinal::West) => [
                s, 0, 0,
                s, 0, 0,
                s, 0, 0,
            ],
            Some(Cardinal::South) => [
                0, 0, 0,
                0, 0, 0,
                s, s, s,
            ],
            Some(Cardinal::East) => [
                0, 0, s,
                0, 0, s,
                0, 0, s,
            ],
        };
        Self {
            matrix: Matrix3::from_row_slice(&entries),
        }
    }

    /// Kernel entries
    #[inline]
    pub fn matrix(&self) -> &Matrix3<i32> {
        &self.matrix
    }

    /// Element-wise sum of the kernel and a flammability neighbourhood
    #[inline]
    pub fn combine(&self, scores: &Matrix3<i32>) -> Matrix3<i32> {
        scores + self.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_banding() {
        let north = Some(Cardinal::North);
        assert_eq!(WindConfig::from_raw_speed(north, 0).speed, 0);
        assert_eq!(WindConfig::from_raw_speed(north, 5).speed, 0);
        assert_eq!(WindConfig::from_raw_speed(north, 14).speed, 1);
        assert_eq!(WindConfig::from_raw_speed(north, 15).speed, 2);
        assert_eq!(WindConfig::from_raw_speed(north, 20).speed, 2);
        assert_eq!(WindConfig::from_raw_speed(north, 25).speed, 2);
        assert_eq!(WindConfig::from_raw_speed(north, 30).speed, 3);
    }

    #[test]
    fn test_fast_wind_disables_wind() {
        let wind = WindConfig::from_raw_speed(Some(Cardinal::East), 31);
        assert_eq!(wind, WindConfig::calm());
        assert!(!wind.is_active());
    }

    #[test]
    fn test_new_clamps_speed() {
        assert_eq!(WindConfig::new(Some(Cardinal::South), 9).speed, MAX_WIND_SPEED);
    }

    #[test]
    fn test_kernel_north_loads_top_row() {
        let kernel = WindKernel::new(&WindConfig::new(Some(Cardinal::North), 2));
        let m = kernel.matrix();
        for c in 0..3 {
            assert_eq!(m[(0, c)], 2);
            assert_eq!(m[(1, c)], 0);
            assert_eq!(m[(2, c)], 0);
        }
    }

    #[test]
    fn test_kernel_west_and_east_load_columns() {
        let west = WindKernel::new(&WindConfig::new(Some(Cardinal::West), 3));
        let east = WindKernel::new(&WindConfig::new(Some(Cardinal::East), 3));
        for r in 0..3 {
            assert_eq!(west.matrix()[(r, 0)], 3);
            assert_eq!(west.matrix()[(r, 2)], 0);
            assert_eq!(east.matrix()[(r, 2)], 3);
            assert_eq!(east.matrix()[(r, 0)], 0);
        }
    }

    #[test]
    fn test_kernel_carries_speed_at_its_own_index() {
        for dir in Cardinal::SPREAD_ORDER {
            let kernel = WindKernel::new(&WindConfig::new(Some(dir), 1));
            let total: i32 = kernel.matrix().iter().sum();
            assert_eq!(total, 3);
            assert_eq!(kernel.matrix()[dir.kernel_index()], 1);
        }
    }

    #[test]
    fn test_calm_kernel_is_zero() {
        let kernel = WindKernel::new(&WindConfig::calm());
        assert_eq!(*kernel.matrix(), Matrix3::zeros());
    }

    #[test]
    fn test_fan_has_one_on_axis_cell() {
        for dir in Cardinal::SPREAD_ORDER {
            let fan = dir.fan();
            assert_eq!(fan.iter().filter(|(_, _, axis)| *axis).count(), 1);
        }
    }
}
