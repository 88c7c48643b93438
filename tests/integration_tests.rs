//! Integration tests for the motion-profiles library.
//!
//! These tests verify the complete workflow from TOML parsing to profile
//! and trajectory generation.

use motion_profiles::config::units::UnitExt;
use motion_profiles::error::{ConfigError, Error, MotionError, PathError};
use motion_profiles::{
    parse_request, KinematicLimits, MotionProfile, MotionSample, PathSample,
    PathTrajectoryGenerator, WaypointPathBuilder,
};

// =============================================================================
// Test request data
// =============================================================================

const MOTION_REQUEST: &str = r#"
[motion]
dt = 0.1
t1 = 1.0
t2 = 2.0
v_prog = 2.0
dist = 4.0
"#;

const PATH_REQUEST: &str = r#"
[path]
dt = 0.02

[path.limits]
max_velocity_m_per_sec = 5.0
max_acceleration_m_per_sec2 = 2.0
max_jerk_m_per_sec3 = 0.0

[[path.waypoints]]
x = 0.0
y = 0.0
heading_degrees = 0.0

[[path.waypoints]]
x = 10.0
y = 0.0
"#;

const CURVED_PATH_REQUEST: &str = r#"
[path]
dt = 0.02
velocity_percent = 50

[path.limits]
max_velocity_m_per_sec = 4.0
max_acceleration_m_per_sec2 = 2.0

[[path.waypoints]]
x = 0.0
y = 0.0

[[path.waypoints]]
x = 5.0
y = 3.0

[[path.waypoints]]
x = 10.0
y = 0.0
"#;

// =============================================================================
// Motion request workflow
// =============================================================================

#[test]
fn motion_request_round_trip() {
    let request = parse_request(MOTION_REQUEST).expect("request should parse");
    let motion = request.motion.expect("motion section should be present");

    let samples: Vec<MotionSample> = motion.build().expect("profile should build").collect();

    // Cruise is entered at t1 and deceleration at t2; the move completes
    // around t = 3.0 with zero final velocity
    let at_cruise = samples
        .iter()
        .find(|s| (s.time - 1.0).abs() < 1e-9)
        .expect("sample at t=1.0");
    assert!((at_cruise.velocity - 2.0).abs() < 1e-9);
    assert!(at_cruise.acceleration.abs() < 1e-9);

    let at_decel = samples
        .iter()
        .find(|s| (s.time - 2.0).abs() < 1e-9)
        .expect("sample at t=2.0");
    assert!(at_decel.acceleration < 0.0);

    let last = samples.last().expect("profile should emit samples");
    assert!((last.time - 3.0).abs() < 0.15);
    assert!(last.velocity.abs() < 1e-9);
    assert!((last.position - 4.0).abs() <= 0.1 * 2.0 + 1e-9);
}

#[test]
fn motion_profile_fails_loudly_when_exhausted() {
    let request = parse_request(MOTION_REQUEST).unwrap();
    let mut profile = request.motion.unwrap().build().unwrap();

    while !profile.is_finished() {
        profile.calculate().unwrap();
    }
    assert!(matches!(
        profile.calculate(),
        Err(Error::Motion(MotionError::SequenceExhausted))
    ));
}

// =============================================================================
// Path request workflow
// =============================================================================

#[test]
fn path_request_round_trip() {
    let request = parse_request(PATH_REQUEST).expect("request should parse");
    let path = request.path.expect("path section should be present");

    let trajectory = path
        .build()
        .expect("generator should build")
        .calculate()
        .expect("trajectory should generate");

    // All-zero start pose first
    assert_eq!(trajectory[0], PathSample::zero());

    // Straight line along x: flat heading, zero y throughout
    for sample in &trajectory[1..] {
        assert!(sample.y.abs() < 1e-6);
        assert!(sample.heading.abs() < 1e-6);
    }

    let last = trajectory.last().unwrap();
    assert!((last.x - 10.0).abs() <= 0.02 * 5.0 + 1e-6);
}

#[test]
fn curved_path_applies_velocity_percent() {
    let request = parse_request(CURVED_PATH_REQUEST).unwrap();
    let path = request.path.unwrap();

    let effective = path.effective_limits().unwrap();
    assert!((effective.max_velocity.0 - 2.0).abs() < 1e-12);

    let trajectory = path.build().unwrap().calculate().unwrap();
    for sample in &trajectory {
        assert!(sample.velocity <= 2.0 + 1e-9);
    }

    // Passes through the final waypoint
    let last = trajectory.last().unwrap();
    let miss = ((last.x - 10.0).powi(2) + last.y.powi(2)).sqrt();
    assert!(miss <= 0.02 * 2.0 + 1e-6);
}

#[test]
fn path_calculate_twice_is_identical() {
    let request = parse_request(PATH_REQUEST).unwrap();
    let generator = request.path.unwrap().build().unwrap();

    assert_eq!(generator.calculate().unwrap(), generator.calculate().unwrap());
}

// =============================================================================
// Programmatic construction
// =============================================================================

#[test]
fn build_generator_without_config() {
    let path = WaypointPathBuilder::new()
        .waypoint_with_heading(0.0, 0.0, 0.0)
        .waypoint(6.0, 4.0)
        .build()
        .unwrap();
    let limits = KinematicLimits::new(
        3.0.meters_per_sec(),
        1.5.meters_per_sec_squared(),
        0.0.meters_per_sec_cubed(),
    );

    let generator = PathTrajectoryGenerator::new(path, limits, 0.02.seconds()).unwrap();
    let trajectory = generator.calculate().unwrap();

    assert!(generator.total_length().0 >= 6.0_f64.hypot(4.0));
    assert!(trajectory.len() > 2);
}

#[test]
fn zero_distance_profile_emits_no_samples() {
    let limits = KinematicLimits::new(
        3.0.meters_per_sec(),
        1.5.meters_per_sec_squared(),
        0.0.meters_per_sec_cubed(),
    );
    let profile = MotionProfile::from_limits(0.02.seconds(), &limits, 0.0.meters()).unwrap();
    assert!(profile.is_finished());
    assert_eq!(profile.count(), 0);
}

// =============================================================================
// Failure modes
// =============================================================================

#[test]
fn rejects_empty_and_ambiguous_requests() {
    assert!(matches!(
        parse_request(""),
        Err(Error::Config(ConfigError::MissingRequest))
    ));

    let both = format!("{}{}", MOTION_REQUEST, PATH_REQUEST);
    assert!(matches!(
        parse_request(&both),
        Err(Error::Config(ConfigError::AmbiguousRequest))
    ));
}

#[test]
fn rejects_degenerate_waypoints() {
    let toml = r#"
[path]

[path.limits]
max_velocity_m_per_sec = 5.0
max_acceleration_m_per_sec2 = 2.0

[[path.waypoints]]
x = 1.0
y = 1.0

[[path.waypoints]]
x = 1.0
y = 1.0
"#;

    assert!(matches!(
        parse_request(toml),
        Err(Error::Path(PathError::CoincidentWaypoints { index: 0 }))
    ));
}

#[test]
fn rejects_single_waypoint_path() {
    let toml = r#"
[path]

[path.limits]
max_velocity_m_per_sec = 5.0
max_acceleration_m_per_sec2 = 2.0

[[path.waypoints]]
x = 1.0
y = 1.0
"#;

    assert!(matches!(
        parse_request(toml),
        Err(Error::Path(PathError::TooFewWaypoints(1)))
    ));
}

#[test]
fn rejects_invalid_limits() {
    let toml = r#"
[path]

[path.limits]
max_velocity_m_per_sec = 5.0
max_acceleration_m_per_sec2 = -2.0

[[path.waypoints]]
x = 0.0
y = 0.0

[[path.waypoints]]
x = 1.0
y = 0.0
"#;

    assert!(matches!(
        parse_request(toml),
        Err(Error::Config(ConfigError::InvalidMaxAcceleration(_)))
    ));
}

#[test]
fn rejects_invalid_velocity_percent() {
    let toml = r#"
[path]
velocity_percent = 250

[path.limits]
max_velocity_m_per_sec = 5.0
max_acceleration_m_per_sec2 = 2.0

[[path.waypoints]]
x = 0.0
y = 0.0

[[path.waypoints]]
x = 1.0
y = 0.0
"#;

    assert!(matches!(
        parse_request(toml),
        Err(Error::Config(ConfigError::InvalidVelocityPercent(250)))
    ));
}
