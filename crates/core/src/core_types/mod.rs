//! Core types and utilities

pub mod units;
pub mod vec2;

pub use units::{Degrees, Hectopascals};
pub use vec2::{Point2, Vec2};
