//! Vector and point aliases for the 2-D simulation plane.

use nalgebra::{Point2 as NaPoint2, Vector2};

/// 2D vector type for wind components and directions.
///
/// This is a simple alias for `nalgebra::Vector2<f32>`, used throughout
/// the model for wind vectors and front direction math.
pub type Vec2 = Vector2<f32>;

/// 2D point type for grid positions and the cyclone center.
pub type Point2 = NaPoint2<f32>;
