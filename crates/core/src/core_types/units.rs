//! Semantic unit types for the quantities crossing the model's API boundary.
//!
//! Grid arrays store raw `f32` values for performance; the newtypes here are
//! used at the seams where mixing up a pressure with an angle would be easy
//! (status display, front geometry).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Deref, Sub};

/// Atmospheric pressure in hectopascals (hPa).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Hectopascals(f32);

impl Hectopascals {
    /// Create a new pressure value in hPa.
    #[inline]
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Hectopascals(value)
    }
}

impl Deref for Hectopascals {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl Sub for Hectopascals {
    type Output = Hectopascals;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Hectopascals(self.0 - rhs.0)
    }
}

impl fmt::Display for Hectopascals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} hPa", self.0)
    }
}

/// An angle in degrees, measured counter-clockwise from the positive x axis.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Degrees(f32);

impl Degrees {
    /// Create a new angle in degrees.
    #[inline]
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Degrees(value)
    }

    /// Convert to radians for trigonometric use.
    #[inline]
    #[must_use]
    pub fn to_radians(self) -> f32 {
        self.0.to_radians()
    }
}

impl Deref for Degrees {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl Add for Degrees {
    type Output = Degrees;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Degrees(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Degrees;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Degrees(self.0 - rhs.0)
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}
