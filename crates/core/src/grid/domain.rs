//! The shared sampling grid underneath the pressure and wind fields.

use crate::core_types::Point2;
use crate::params::CycloneParams;
use serde::{Deserialize, Serialize};

/// A square, uniformly spaced sampling grid.
///
/// Both scalar and vector fields are stored as flattened row-major arrays
/// indexed through [`GridDomain::index`]; the coordinate vectors here are
/// what a renderer needs to place contour lines and arrow glyphs. The grid
/// is derived solely from [`CycloneParams`] and is independent of time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridDomain {
    /// X coordinate of each column, `resolution` values spanning
    /// `[-extent, +extent]`.
    xs: Vec<f32>,
    /// Y coordinate of each row, same spacing as `xs`.
    ys: Vec<f32>,
    /// Cyclone center the radial distances are measured from.
    center: Point2,
}

impl GridDomain {
    /// Build the sampling grid for the given parameters.
    ///
    /// Assumes `params` passed [`CycloneParams::validate`]; resolution >= 2
    /// guarantees the axis step below is well defined.
    #[must_use]
    pub fn from_params(params: &CycloneParams) -> Self {
        let n = params.grid_resolution;
        let extent = params.grid_extent;
        let step = (2.0 * extent) / (n - 1) as f32;

        let axis: Vec<f32> = (0..n).map(|i| -extent + i as f32 * step).collect();

        GridDomain {
            xs: axis.clone(),
            ys: axis,
            center: params.center,
        }
    }

    /// Number of grid points per axis.
    #[must_use]
    pub fn resolution(&self) -> usize {
        self.xs.len()
    }

    /// Total number of grid points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len() * self.ys.len()
    }

    /// True for a grid with no points (never produced by `from_params`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Flattened row-major index for grid coordinates (column `ix`, row `iy`).
    #[inline]
    #[must_use]
    pub fn index(&self, ix: usize, iy: usize) -> usize {
        iy * self.xs.len() + ix
    }

    /// X coordinates, one per column.
    #[must_use]
    pub fn xs(&self) -> &[f32] {
        &self.xs
    }

    /// Y coordinates, one per row.
    #[must_use]
    pub fn ys(&self) -> &[f32] {
        &self.ys
    }

    /// World position of a grid point.
    #[inline]
    #[must_use]
    pub fn position(&self, ix: usize, iy: usize) -> Point2 {
        Point2::new(self.xs[ix], self.ys[iy])
    }

    /// The cyclone center.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }
}
