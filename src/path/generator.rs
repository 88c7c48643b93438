//! Path trajectory generation.
//!
//! Turns a waypoint path plus kinematic limits into a sampled 2D trajectory:
//! a 1D motion profile is run over the curve's total arc length, and each
//! profile sample is mapped back onto the curve geometry.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use crate::config::units::{Meters, Seconds};
use crate::config::KinematicLimits;
use crate::error::{ConfigError, Result};
use crate::motion::MotionProfile;

use super::curve::PathCurve;
use super::waypoint::WaypointPath;

/// One sample of a 2D path trajectory.
///
/// Field order matches the external record contract:
/// (dt, x, y, position, velocity, acceleration, jerk, heading).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PathSample {
    /// Time step between this sample and its predecessor, in seconds.
    pub dt: f64,
    /// X position in meters.
    pub x: f64,
    /// Y position in meters.
    pub y: f64,
    /// Cumulative arc length in meters.
    pub position: f64,
    /// Velocity along the path in meters per second.
    pub velocity: f64,
    /// Acceleration along the path in meters per second squared.
    pub acceleration: f64,
    /// Jerk along the path in meters per second cubed, as the discrete
    /// derivative of acceleration between consecutive samples.
    pub jerk: f64,
    /// Path tangent direction in radians.
    pub heading: f64,
}

impl PathSample {
    /// The synthetic all-zero sample emitted before the first computed one,
    /// representing the trajectory's start pose.
    pub const fn zero() -> Self {
        Self {
            dt: 0.0,
            x: 0.0,
            y: 0.0,
            position: 0.0,
            velocity: 0.0,
            acceleration: 0.0,
            jerk: 0.0,
            heading: 0.0,
        }
    }
}

/// Batch generator for 2D path trajectories.
///
/// Owns its waypoint path and limits for the duration of generation and is
/// read-only after construction: [`calculate`](Self::calculate) is a pure
/// function of the constructed state and may be called repeatedly with
/// identical results.
#[derive(Debug, Clone)]
pub struct PathTrajectoryGenerator {
    curve: PathCurve,
    limits: KinematicLimits,
    dt: f64,
}

impl PathTrajectoryGenerator {
    /// Create a generator for a waypoint path under kinematic limits.
    ///
    /// # Errors
    ///
    /// Fails fast with a `ConfigError` on a non-positive time step or
    /// invalid limits. Waypoint errors are raised earlier, when the
    /// [`WaypointPath`] itself is built.
    pub fn new(path: WaypointPath, limits: KinematicLimits, dt: Seconds) -> Result<Self> {
        if !dt.0.is_finite() || dt.0 <= 0.0 {
            return Err(ConfigError::InvalidTimeStep(dt.0).into());
        }
        limits.validate()?;

        Ok(Self {
            curve: PathCurve::from_path(&path),
            limits,
            dt: dt.0,
        })
    }

    /// Total arc length of the underlying curve in meters.
    #[inline]
    pub fn total_length(&self) -> Meters {
        Meters(self.curve.total_length())
    }

    /// Get the kinematic limits.
    #[inline]
    pub fn limits(&self) -> &KinematicLimits {
        &self.limits
    }

    /// Get the sample time step.
    #[inline]
    pub fn dt(&self) -> Seconds {
        Seconds(self.dt)
    }

    /// Compute the full trajectory sample sequence.
    ///
    /// The first record is always the all-zero start pose; computed samples
    /// follow in increasing arc-length and time order, ending at the final
    /// waypoint.
    pub fn calculate(&self) -> Result<Vec<PathSample>> {
        let mut profile = MotionProfile::from_limits(
            Seconds(self.dt),
            &self.limits,
            Meters(self.curve.total_length()),
        )?;

        let mut samples = Vec::new();
        samples.push(PathSample::zero());

        let mut prev_acceleration = None;
        while !profile.is_finished() {
            let motion = profile.calculate()?;
            let point = self.curve.sample_at(motion.position);
            let jerk = match prev_acceleration {
                Some(prev) => (motion.acceleration - prev) / self.dt,
                None => 0.0,
            };
            prev_acceleration = Some(motion.acceleration);

            samples.push(PathSample {
                dt: self.dt,
                x: point.x,
                y: point.y,
                position: motion.position,
                velocity: motion.velocity,
                acceleration: motion.acceleration,
                jerk,
                heading: point.heading,
            });
        }

        Ok(samples)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::config::units::UnitExt;
    use crate::path::{Waypoint, WaypointPath};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn trajectory_reaches_final_waypoint(
            end_x in 1.0f64..20.0,
            end_y in -10.0f64..10.0,
            max_velocity in 1.0f64..5.0,
            max_acceleration in 0.5f64..4.0,
        ) {
            let path = WaypointPath::from_slice(&[
                Waypoint::new(0.0, 0.0),
                Waypoint::new(end_x, end_y),
            ]).unwrap();
            let limits = KinematicLimits::new(
                max_velocity.meters_per_sec(),
                max_acceleration.meters_per_sec_squared(),
                0.0.meters_per_sec_cubed(),
            );
            let generator =
                PathTrajectoryGenerator::new(path, limits, 0.02.seconds()).unwrap();

            let samples = generator.calculate().unwrap();
            prop_assert_eq!(samples[0], PathSample::zero());

            let last = samples.last().unwrap();
            let miss = libm::hypot(last.x - end_x, last.y - end_y);
            prop_assert!(miss <= 0.02 * max_velocity + 1e-6);
        }
    }
}
