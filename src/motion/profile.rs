//! Motion profile calculation.
//!
//! Provides a time-stepped trapezoidal velocity profile between rest and a
//! target distance, with optional jerk-limited (S-curve) transitions.

use libm::sqrt;

use crate::config::units::{Meters, MetersPerSec, Seconds};
use crate::config::KinematicLimits;
use crate::error::{ConfigError, MotionError, Result};

/// Comparison slack for phase boundary times on the sample grid.
const TIME_EPSILON: f64 = 1e-9;

/// Comparison slack for the target distance check.
const POSITION_EPSILON: f64 = 1e-9;

/// Current phase of profile generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionPhase {
    /// Accelerating from rest toward cruise velocity.
    Accelerating,
    /// Moving at constant cruise velocity.
    Cruising,
    /// Decelerating from cruise velocity to rest.
    Decelerating,
    /// Profile complete.
    Finished,
}

/// One time step of a 1D motion profile.
///
/// Field order matches the external record contract:
/// (Time, Velocity, Position, Acceleration).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionSample {
    /// Elapsed time in seconds, strictly increasing across samples.
    pub time: f64,
    /// Velocity in meters per second.
    pub velocity: f64,
    /// Position in meters (cumulative distance from the start).
    pub position: f64,
    /// Acceleration in meters per second squared.
    pub acceleration: f64,
}

/// Stateful 1D motion profile generator.
///
/// The profile is a state machine advanced one `dt` tick at a time by
/// [`calculate`](MotionProfile::calculate). Phases run
/// `Accelerating -> Cruising -> Decelerating -> Finished`; a move too short
/// to reach cruise velocity skips `Cruising` (triangular profile).
///
/// Integration rule: acceleration is set per phase, then velocity is
/// integrated first and position second (semi-implicit Euler):
/// `v += a*dt; p += v*dt`. Elapsed time is `tick * dt` so that sample times
/// do not accumulate rounding error.
#[derive(Debug, Clone)]
pub struct MotionProfile {
    /// Sample time step in seconds.
    dt: f64,

    /// Time at which the acceleration phase ends.
    t1: f64,

    /// Time at which the cruise phase ends and deceleration begins.
    t2: f64,

    /// Cruise velocity in meters per second.
    target_velocity: f64,

    /// Target distance in meters.
    target_distance: f64,

    /// Acceleration magnitude during ramp phases.
    ramp_rate: f64,

    /// Jerk bound for acceleration changes (0 = unlimited).
    max_jerk: f64,

    /// Ticks elapsed since the start of the profile.
    tick: u64,

    /// Current position in meters.
    position: f64,

    /// Current velocity in meters per second.
    velocity: f64,

    /// Acceleration applied on the last tick.
    acceleration: f64,

    /// Current phase.
    phase: MotionPhase,
}

impl MotionProfile {
    /// Create a profile from pre-supplied phase boundaries.
    ///
    /// This matches the external envelope shape: `t1` is the end of the
    /// acceleration phase, `t2` the start of deceleration, `target_velocity`
    /// the programmed cruise velocity and `target_distance` the total move.
    /// The ramp rate is derived as `target_velocity / t1`; `t1 = 0` means
    /// the profile starts directly at cruise velocity.
    ///
    /// # Errors
    ///
    /// Fails fast with a `ConfigError` on a non-positive `dt`, phase times
    /// violating `0 <= t1 <= t2` (or `t2 = 0` for a nonzero move), a
    /// negative or non-finite distance, or a non-positive cruise velocity
    /// for a nonzero move.
    pub fn new(
        dt: Seconds,
        t1: Seconds,
        t2: Seconds,
        target_velocity: MetersPerSec,
        target_distance: Meters,
    ) -> Result<Self> {
        let (dt, t1, t2) = (dt.0, t1.0, t2.0);
        let (velocity, distance) = (target_velocity.0, target_distance.0);

        if !dt.is_finite() || dt <= 0.0 {
            return Err(ConfigError::InvalidTimeStep(dt).into());
        }
        if !t1.is_finite() || !t2.is_finite() || t1 < 0.0 || t2 < t1 {
            return Err(ConfigError::InvalidPhaseTimes { t1, t2 }.into());
        }
        if !distance.is_finite() || distance < 0.0 {
            return Err(ConfigError::InvalidTargetDistance(distance).into());
        }
        if distance > 0.0 {
            if !velocity.is_finite() || velocity <= 0.0 {
                return Err(ConfigError::InvalidTargetVelocity(velocity).into());
            }
            // A move with no ramp and no cruise window can never progress
            if t2 <= 0.0 {
                return Err(ConfigError::InvalidPhaseTimes { t1, t2 }.into());
            }
        }

        let ramp_rate = if t1 > 0.0 { velocity / t1 } else { 0.0 };

        Ok(Self::with_params(
            dt, t1, t2, velocity, distance, ramp_rate, 0.0,
        ))
    }

    /// Create a profile from kinematic limits over a given distance.
    ///
    /// Phase boundaries follow the standard trapezoidal equations:
    /// `t1 = v/a` and `t2 = t1 + (d - v*t1)/v`. When the distance is too
    /// short to reach the configured velocity, the cruise velocity is
    /// recomputed as `sqrt(d*a)` and the profile is triangular (`t2 = t1`).
    ///
    /// # Errors
    ///
    /// Fails fast with a `ConfigError` on invalid limits, a non-positive
    /// `dt`, or a negative or non-finite distance.
    pub fn from_limits(
        dt: Seconds,
        limits: &KinematicLimits,
        target_distance: Meters,
    ) -> Result<Self> {
        let dt = dt.0;
        let distance = target_distance.0;

        if !dt.is_finite() || dt <= 0.0 {
            return Err(ConfigError::InvalidTimeStep(dt).into());
        }
        limits.validate()?;
        if !distance.is_finite() || distance < 0.0 {
            return Err(ConfigError::InvalidTargetDistance(distance).into());
        }

        let accel = limits.max_acceleration.0;
        let mut velocity = limits.max_velocity.0;
        let mut t1 = velocity / accel;
        let t2;

        if velocity * t1 >= distance {
            // Triangular profile: cruise velocity is unreachable
            velocity = sqrt(distance * accel);
            t1 = velocity / accel;
            t2 = t1;
        } else {
            t2 = t1 + (distance - velocity * t1) / velocity;
        }

        Ok(Self::with_params(
            dt,
            t1,
            t2,
            velocity,
            distance,
            accel,
            limits.max_jerk.0,
        ))
    }

    fn with_params(
        dt: f64,
        t1: f64,
        t2: f64,
        target_velocity: f64,
        target_distance: f64,
        ramp_rate: f64,
        max_jerk: f64,
    ) -> Self {
        let phase = if target_distance <= POSITION_EPSILON {
            MotionPhase::Finished
        } else {
            MotionPhase::Accelerating
        };

        Self {
            dt,
            t1,
            t2,
            target_velocity,
            target_distance,
            ramp_rate,
            max_jerk,
            tick: 0,
            position: 0.0,
            velocity: 0.0,
            acceleration: 0.0,
            phase,
        }
    }

    /// Check if the profile is complete.
    ///
    /// A zero-distance profile is finished from construction and emits no
    /// samples.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.phase == MotionPhase::Finished
    }

    /// Get the current phase.
    #[inline]
    pub fn phase(&self) -> MotionPhase {
        self.phase
    }

    /// Get the elapsed time.
    #[inline]
    pub fn elapsed_time(&self) -> Seconds {
        Seconds(self.tick as f64 * self.dt)
    }

    /// Get the current position.
    #[inline]
    pub fn position(&self) -> Meters {
        Meters(self.position)
    }

    /// Get the current velocity.
    #[inline]
    pub fn velocity(&self) -> MetersPerSec {
        MetersPerSec(self.velocity)
    }

    /// Get the cruise velocity for this profile.
    ///
    /// For a triangular profile this is the recomputed peak velocity, not
    /// the configured maximum.
    #[inline]
    pub fn target_velocity(&self) -> MetersPerSec {
        MetersPerSec(self.target_velocity)
    }

    /// Get the target distance.
    #[inline]
    pub fn target_distance(&self) -> Meters {
        Meters(self.target_distance)
    }

    /// End of the acceleration phase.
    #[inline]
    pub fn t1(&self) -> Seconds {
        Seconds(self.t1)
    }

    /// Start of the deceleration phase.
    #[inline]
    pub fn t2(&self) -> Seconds {
        Seconds(self.t2)
    }

    /// Advance the profile by one `dt` tick and return the next sample.
    ///
    /// # Errors
    ///
    /// Returns `MotionError::SequenceExhausted` once the profile has
    /// finished. Callers should check [`is_finished`](Self::is_finished)
    /// first, or drive the profile through its `Iterator` impl.
    pub fn calculate(&mut self) -> Result<MotionSample> {
        if self.phase == MotionPhase::Finished {
            return Err(MotionError::SequenceExhausted.into());
        }

        self.tick += 1;
        let time = self.tick as f64 * self.dt;

        // Phase selection is time-driven; the boundary tick belongs to the
        // later phase
        let (phase, target_accel) = if time + TIME_EPSILON < self.t1 {
            (MotionPhase::Accelerating, self.ramp_rate)
        } else if time + TIME_EPSILON < self.t2 {
            (MotionPhase::Cruising, 0.0)
        } else {
            (MotionPhase::Decelerating, -self.ramp_rate)
        };
        self.phase = phase;

        if self.max_jerk > 0.0 {
            // Slew acceleration toward the phase target at most max_jerk
            let max_delta = self.max_jerk * self.dt;
            let delta = (target_accel - self.acceleration).clamp(-max_delta, max_delta);
            self.acceleration += delta;
        } else {
            self.acceleration = target_accel;
        }

        if self.phase == MotionPhase::Cruising && self.max_jerk == 0.0 {
            // Ideal trapezoid cruises at exactly the programmed velocity
            self.velocity = self.target_velocity;
        } else {
            self.velocity += self.acceleration * self.dt;
            self.velocity = if self.phase == MotionPhase::Decelerating {
                self.velocity.max(0.0)
            } else {
                self.velocity.clamp(0.0, self.target_velocity)
            };
        }
        self.position += self.velocity * self.dt;

        let sample = MotionSample {
            time,
            velocity: self.velocity,
            position: self.position,
            acceleration: self.acceleration,
        };

        // A deceleration ramp runs to a full stop; the position check covers
        // phases that cannot bring the velocity to zero
        let finished = if self.phase == MotionPhase::Decelerating && self.ramp_rate > 0.0 {
            self.velocity <= 0.0
        } else {
            self.position + POSITION_EPSILON >= self.target_distance
        };
        if finished {
            self.phase = MotionPhase::Finished;
        }

        Ok(sample)
    }
}

impl Iterator for MotionProfile {
    type Item = MotionSample;

    fn next(&mut self) -> Option<MotionSample> {
        if self.is_finished() {
            None
        } else {
            self.calculate().ok()
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::config::units::UnitExt;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn distance_converges_within_tolerance(
            dt in 0.001f64..0.01,
            max_velocity in 0.5f64..10.0,
            max_acceleration in 0.5f64..5.0,
            distance in 0.1f64..50.0,
        ) {
            let limits = KinematicLimits::new(
                max_velocity.meters_per_sec(),
                max_acceleration.meters_per_sec_squared(),
                0.0.meters_per_sec_cubed(),
            );
            let mut profile =
                MotionProfile::from_limits(dt.seconds(), &limits, distance.meters()).unwrap();

            let mut last = None;
            while !profile.is_finished() {
                last = Some(profile.calculate().unwrap());
            }
            let last = last.expect("nonzero move must emit samples");

            prop_assert!((last.position - distance).abs() <= dt * max_velocity + 1e-9);
            prop_assert!(last.velocity.abs() < 1e-9);
        }

        #[test]
        fn samples_are_monotonic(
            dt in 0.001f64..0.01,
            max_velocity in 0.5f64..10.0,
            max_acceleration in 0.5f64..5.0,
            distance in 0.1f64..50.0,
        ) {
            let limits = KinematicLimits::new(
                max_velocity.meters_per_sec(),
                max_acceleration.meters_per_sec_squared(),
                0.0.meters_per_sec_cubed(),
            );
            let profile =
                MotionProfile::from_limits(dt.seconds(), &limits, distance.meters()).unwrap();

            let mut prev: Option<MotionSample> = None;
            for sample in profile {
                if let Some(p) = prev {
                    prop_assert!(sample.time > p.time);
                    prop_assert!(sample.position >= p.position);
                }
                prop_assert!(sample.velocity >= 0.0);
                prop_assert!(sample.velocity <= max_velocity + 1e-9);
                prev = Some(sample);
            }
        }

        #[test]
        fn short_moves_peak_below_cruise(
            max_velocity in 2.0f64..10.0,
            max_acceleration in 0.5f64..4.0,
        ) {
            // Pick a distance guaranteed to be triangular
            let distance = 0.5 * max_velocity * max_velocity / max_acceleration * 0.5;
            let limits = KinematicLimits::new(
                max_velocity.meters_per_sec(),
                max_acceleration.meters_per_sec_squared(),
                0.0.meters_per_sec_cubed(),
            );
            let profile =
                MotionProfile::from_limits(0.005.seconds(), &limits, distance.meters()).unwrap();

            let expected_peak = sqrt(distance * max_acceleration);
            prop_assert!(expected_peak < max_velocity);
            for sample in profile {
                prop_assert!(sample.velocity <= expected_peak + 1e-9);
            }
        }
    }
}
