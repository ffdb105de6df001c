//! Gaussian pressure-pit field.
//!
//! The cyclone is modeled as a Gaussian depression in an otherwise uniform
//! ambient pressure field:
//!
//! ```text
//! P(r) = P_ambient - intensity * exp(-r² / (2 * radius_scale²))
//! ```
//!
//! so pressure equals `P_ambient - intensity` exactly at the center and
//! rises monotonically back to ambient with distance. Real mid-latitude lows
//! are not radially symmetric; the shape (a single smooth pit) is what this
//! dashboard model preserves, not meteorological accuracy.

use crate::core_types::Point2;
use crate::grid::GridDomain;
use crate::params::{constants, CycloneParams};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Pressure at a single world position (hPa).
///
/// Closed form of the field; [`PressureField::compute`] evaluates this at
/// every grid point.
#[must_use]
pub fn pressure_at(params: &CycloneParams, pos: Point2) -> f32 {
    let r2 = (pos - params.center).norm_squared();
    let envelope = (-r2 / (2.0 * params.radius_scale * params.radius_scale)).exp();
    constants::AMBIENT_PRESSURE_HPA - params.intensity * envelope
}

/// Scalar pressure field over the sampling grid (hPa per grid point).
///
/// Value type: computed fresh from parameters on every call, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureField {
    grid: GridDomain,
    /// Flattened row-major values, indexed via [`GridDomain::index`].
    values: Vec<f32>,
}

impl PressureField {
    /// Evaluate the pressure formula at every grid point.
    ///
    /// Rows are independent, so the fill parallelizes over them.
    #[must_use]
    pub fn compute(params: &CycloneParams) -> Self {
        let grid = GridDomain::from_params(params);
        let n = grid.resolution();
        let (xs, ys) = (grid.xs(), grid.ys());

        let mut values = vec![0.0; grid.len()];
        values
            .par_chunks_mut(n)
            .enumerate()
            .for_each(|(iy, row)| {
                let y = ys[iy];
                for (ix, cell) in row.iter_mut().enumerate() {
                    *cell = pressure_at(params, Point2::new(xs[ix], y));
                }
            });

        PressureField { grid, values }
    }

    /// The sampling grid the values are indexed on.
    #[must_use]
    pub fn grid(&self) -> &GridDomain {
        &self.grid
    }

    /// Flattened row-major pressure values (hPa).
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Pressure at grid coordinates (column `ix`, row `iy`).
    #[inline]
    #[must_use]
    pub fn at(&self, ix: usize, iy: usize) -> f32 {
        self.values[self.grid.index(ix, iy)]
    }

    /// Lowest pressure on the grid (hPa). With the center on a grid point
    /// this equals `ambient - intensity` exactly.
    #[must_use]
    pub fn min_pressure(&self) -> f32 {
        self.values.iter().copied().fold(f32::INFINITY, f32::min)
    }
}
