//! Cyclone Simulation Core Library
//!
//! A small, pure model of a mid-latitude (extratropical) cyclone for
//! interactive dashboards: a Gaussian pressure pit, a rotational-convergent
//! wind field on the same grid, and a pair of moving weather fronts that
//! merge into an occluded front.
//!
//! The crate deliberately stops at the data: it produces per-time-step
//! snapshots (fields + front segments + status label) and leaves plotting,
//! sliders, and animation timing to frontends. Every computation is a
//! deterministic closed-form function of the parameters and the requested
//! time step, so frontends may query any time step in any order.

// Core types and utilities
pub mod core_types;

// Field generation on the sampling grid
pub mod grid;

// Front geometry and the occlusion lifecycle
pub mod fronts;

// Parameters, constants, and validation
pub mod params;

// Model facade producing renderable snapshots
pub mod simulation;

// Re-export core types
pub use core_types::{Degrees, Hectopascals, Point2, Vec2};

// Re-export the model surface
pub use fronts::{FrontGeometry, FrontSegment, FrontStage, OcclusionPolicy};
pub use grid::{pressure_at, wind_at, GridDomain, PressureField, WindField};
pub use params::{constants, CycloneParams, ParameterError};
pub use simulation::{CycloneModel, CycloneSnapshot};
