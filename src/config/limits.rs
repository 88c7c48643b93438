//! Kinematic limit configuration and types.

use serde::Deserialize;

use crate::error::{ConfigError, Result};

use super::units::{MetersPerSec, MetersPerSecCubed, MetersPerSecSquared};

/// Kinematic limits shared by both generators.
///
/// Velocity and acceleration must be finite and positive. Jerk may be zero,
/// which disables jerk limiting and degenerates the profile to trapezoidal.
#[derive(Debug, Clone, Copy, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KinematicLimits {
    /// Maximum velocity in meters per second.
    #[serde(rename = "max_velocity_m_per_sec")]
    pub max_velocity: MetersPerSec,

    /// Maximum acceleration in meters per second squared.
    #[serde(rename = "max_acceleration_m_per_sec2")]
    pub max_acceleration: MetersPerSecSquared,

    /// Maximum jerk in meters per second cubed (0 = unlimited).
    #[serde(default, rename = "max_jerk_m_per_sec3")]
    pub max_jerk: MetersPerSecCubed,
}

impl KinematicLimits {
    /// Create new kinematic limits.
    pub const fn new(
        max_velocity: MetersPerSec,
        max_acceleration: MetersPerSecSquared,
        max_jerk: MetersPerSecCubed,
    ) -> Self {
        Self {
            max_velocity,
            max_acceleration,
            max_jerk,
        }
    }

    /// Check if the limits are valid without producing an error.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Validate the limits, returning the first violation found.
    pub fn validate(&self) -> Result<()> {
        if !self.max_velocity.0.is_finite() || self.max_velocity.0 <= 0.0 {
            return Err(ConfigError::InvalidMaxVelocity(self.max_velocity.0).into());
        }
        if !self.max_acceleration.0.is_finite() || self.max_acceleration.0 <= 0.0 {
            return Err(ConfigError::InvalidMaxAcceleration(self.max_acceleration.0).into());
        }
        if !self.max_jerk.0.is_finite() || self.max_jerk.0 < 0.0 {
            return Err(ConfigError::InvalidMaxJerk(self.max_jerk.0).into());
        }
        Ok(())
    }

    /// Return a copy with max velocity scaled by a percentage (1-200).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidVelocityPercent` for 0 or values above 200.
    pub fn with_velocity_percent(&self, percent: u8) -> Result<Self> {
        if percent == 0 || percent > 200 {
            return Err(ConfigError::InvalidVelocityPercent(percent).into());
        }
        Ok(Self {
            max_velocity: self.max_velocity * (percent as f64 / 100.0),
            ..*self
        })
    }

    /// Check whether jerk limiting is enabled.
    #[inline]
    pub fn jerk_limited(&self) -> bool {
        self.max_jerk.0 > 0.0
    }
}
