//! Grid-based field modules

pub mod domain;
pub mod pressure;
pub mod wind;

// Re-export main types
pub use domain::GridDomain;
pub use pressure::{pressure_at, PressureField};
pub use wind::{wind_at, WindField};
