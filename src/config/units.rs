//! Unit types for physical quantities.
//!
//! Provides type-safe representations of time, distance, velocity,
//! acceleration, jerk, and heading to prevent unit confusion at compile time.

use core::ops::{Add, Mul, Sub};

use serde::Deserialize;

/// Elapsed time or a time step in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Seconds(pub f64);

impl Seconds {
    /// Create a new Seconds value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Add for Seconds {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Seconds {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Linear distance in meters.
///
/// Used both for straight-line move distances and cumulative arc length
/// along a path.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Meters(pub f64);

impl Meters {
    /// Create a new Meters value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Add for Meters {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Meters {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Linear velocity in meters per second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct MetersPerSec(pub f64);

impl MetersPerSec {
    /// Create a new MetersPerSec value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Mul<f64> for MetersPerSec {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

/// Linear acceleration in meters per second squared.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct MetersPerSecSquared(pub f64);

impl MetersPerSecSquared {
    /// Create a new MetersPerSecSquared value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Mul<f64> for MetersPerSecSquared {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

/// Jerk in meters per second cubed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct MetersPerSecCubed(pub f64);

impl MetersPerSecCubed {
    /// Create a new MetersPerSecCubed value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Heading angle in radians, measured counter-clockwise from the x axis.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Radians(pub f64);

impl Radians {
    /// Create a new Radians value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Create from degrees.
    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees.to_radians())
    }

    /// Convert to degrees.
    #[inline]
    pub fn to_degrees(self) -> f64 {
        self.0.to_degrees()
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Seconds.
    fn seconds(self) -> Seconds;
    /// Convert to Meters.
    fn meters(self) -> Meters;
    /// Convert to MetersPerSec.
    fn meters_per_sec(self) -> MetersPerSec;
    /// Convert to MetersPerSecSquared.
    fn meters_per_sec_squared(self) -> MetersPerSecSquared;
    /// Convert to MetersPerSecCubed.
    fn meters_per_sec_cubed(self) -> MetersPerSecCubed;
    /// Convert to Radians.
    fn radians(self) -> Radians;
}

impl UnitExt for f64 {
    #[inline]
    fn seconds(self) -> Seconds {
        Seconds(self)
    }

    #[inline]
    fn meters(self) -> Meters {
        Meters(self)
    }

    #[inline]
    fn meters_per_sec(self) -> MetersPerSec {
        MetersPerSec(self)
    }

    #[inline]
    fn meters_per_sec_squared(self) -> MetersPerSecSquared {
        MetersPerSecSquared(self)
    }

    #[inline]
    fn meters_per_sec_cubed(self) -> MetersPerSecCubed {
        MetersPerSecCubed(self)
    }

    #[inline]
    fn radians(self) -> Radians {
        Radians(self)
    }
}
