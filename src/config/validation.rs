//! Request validation.

use crate::error::{ConfigError, Error, Result};

use super::request::{MotionRequest, PathRequest, RequestConfig};

/// Validate a request envelope.
///
/// Checks:
/// - Exactly one of `[motion]` / `[path]` is present
/// - Time steps are positive and finite
/// - Phase times satisfy 0 <= t1 <= t2
/// - Kinematic limits are positive (jerk may be 0)
/// - Waypoint count and spacing are valid
pub fn validate_request(config: &RequestConfig) -> Result<()> {
    match (&config.motion, &config.path) {
        (Some(_), Some(_)) => Err(Error::Config(ConfigError::AmbiguousRequest)),
        (None, None) => Err(Error::Config(ConfigError::MissingRequest)),
        (Some(motion), None) => validate_motion(motion),
        (None, Some(path)) => validate_path(path),
    }
}

/// Validate a 1D motion request.
pub fn validate_motion(request: &MotionRequest) -> Result<()> {
    // Construction performs the same checks; validation here means a bad
    // envelope is rejected before any generator state exists.
    request.build().map(|_| ())
}

/// Validate a 2D path request.
pub fn validate_path(request: &PathRequest) -> Result<()> {
    let dt = request.dt.0;
    if !dt.is_finite() || dt <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidTimeStep(dt)));
    }

    request.limits.validate()?;
    request.effective_limits()?;

    // Waypoint count and coincidence checks live with the path type
    request.waypoint_path().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{Meters, MetersPerSec, Seconds};
    use crate::error::PathError;

    fn motion_request(dt: f64, t1: f64, t2: f64, v: f64, dist: f64) -> MotionRequest {
        MotionRequest {
            dt: Seconds(dt),
            t1: Seconds(t1),
            t2: Seconds(t2),
            target_velocity: MetersPerSec(v),
            target_distance: Meters(dist),
        }
    }

    #[test]
    fn test_empty_request_rejected() {
        let config = RequestConfig {
            motion: None,
            path: None,
        };
        assert!(matches!(
            validate_request(&config),
            Err(Error::Config(ConfigError::MissingRequest))
        ));
    }

    #[test]
    fn test_ambiguous_request_rejected() {
        let config = RequestConfig {
            motion: Some(motion_request(0.1, 1.0, 2.0, 2.0, 4.0)),
            path: Some(PathRequest {
                dt: Seconds(0.02),
                limits: crate::KinematicLimits::new(
                    MetersPerSec(5.0),
                    crate::config::units::MetersPerSecSquared(2.0),
                    crate::config::units::MetersPerSecCubed(0.0),
                ),
                velocity_percent: 100,
                waypoints: heapless::Vec::new(),
            }),
        };
        assert!(matches!(
            validate_request(&config),
            Err(Error::Config(ConfigError::AmbiguousRequest))
        ));
    }

    #[test]
    fn test_valid_motion_request() {
        let config = RequestConfig {
            motion: Some(motion_request(0.1, 1.0, 2.0, 2.0, 4.0)),
            path: None,
        };
        assert!(validate_request(&config).is_ok());
    }

    #[test]
    fn test_motion_request_bad_dt() {
        assert!(matches!(
            validate_motion(&motion_request(0.0, 1.0, 2.0, 2.0, 4.0)),
            Err(Error::Config(ConfigError::InvalidTimeStep(_)))
        ));
    }

    #[test]
    fn test_motion_request_bad_phase_times() {
        assert!(matches!(
            validate_motion(&motion_request(0.1, 2.0, 1.0, 2.0, 4.0)),
            Err(Error::Config(ConfigError::InvalidPhaseTimes { .. }))
        ));
    }

    #[test]
    fn test_path_request_too_few_waypoints() {
        let mut waypoints = heapless::Vec::new();
        let _ = waypoints.push(crate::config::request::WaypointConfig {
            x: Meters(0.0),
            y: Meters(0.0),
            heading_degrees: None,
        });
        let request = PathRequest {
            dt: Seconds(0.02),
            limits: crate::KinematicLimits::new(
                MetersPerSec(5.0),
                crate::config::units::MetersPerSecSquared(2.0),
                crate::config::units::MetersPerSecCubed(0.0),
            ),
            velocity_percent: 100,
            waypoints,
        };
        assert!(matches!(
            validate_path(&request),
            Err(Error::Path(PathError::TooFewWaypoints(1)))
        ));
    }
}
