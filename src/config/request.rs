//! Request envelope configuration.
//!
//! Mirrors the external command envelope: a request carries either a
//! `[motion]` section (1D point-to-point profile) or a `[path]` section
//! (2D waypoint trajectory), never both.

use heapless::Vec;
use serde::Deserialize;

use crate::error::Result;
use crate::motion::MotionProfile;
use crate::path::{Waypoint, WaypointPath, MAX_WAYPOINTS};

use super::limits::KinematicLimits;
use super::units::{Meters, MetersPerSec, Radians, Seconds};

/// Root request structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestConfig {
    /// 1D motion profile request.
    #[serde(default)]
    pub motion: Option<MotionRequest>,

    /// 2D path trajectory request.
    #[serde(default)]
    pub path: Option<PathRequest>,
}

/// Parameters for a 1D point-to-point motion profile.
///
/// Field names follow the external envelope: `v_prog` is the programmed
/// cruise velocity and `dist` the target distance.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MotionRequest {
    /// Sample time step in seconds.
    pub dt: Seconds,

    /// Time at which the acceleration phase ends.
    pub t1: Seconds,

    /// Time at which the cruise phase ends and deceleration begins.
    pub t2: Seconds,

    /// Programmed cruise velocity in meters per second.
    #[serde(rename = "v_prog")]
    pub target_velocity: MetersPerSec,

    /// Target distance in meters.
    #[serde(rename = "dist")]
    pub target_distance: Meters,
}

impl MotionRequest {
    /// Build the motion profile generator for this request.
    pub fn build(&self) -> Result<MotionProfile> {
        MotionProfile::new(
            self.dt,
            self.t1,
            self.t2,
            self.target_velocity,
            self.target_distance,
        )
    }
}

/// Parameters for a 2D path trajectory.
#[derive(Debug, Clone, Deserialize)]
pub struct PathRequest {
    /// Sample time step in seconds.
    #[serde(default = "default_dt")]
    pub dt: Seconds,

    /// Kinematic limits for the whole path.
    pub limits: KinematicLimits,

    /// Velocity as percentage of the configured max (1-200).
    #[serde(default = "default_velocity_percent")]
    pub velocity_percent: u8,

    /// Ordered waypoints the path must pass through (2 to 32).
    pub waypoints: Vec<WaypointConfig, MAX_WAYPOINTS>,
}

fn default_dt() -> Seconds {
    Seconds(0.02)
}

fn default_velocity_percent() -> u8 {
    100
}

impl PathRequest {
    /// Effective kinematic limits after applying the velocity percentage.
    pub fn effective_limits(&self) -> Result<KinematicLimits> {
        self.limits.with_velocity_percent(self.velocity_percent)
    }

    /// Build the validated waypoint path for this request.
    pub fn waypoint_path(&self) -> Result<WaypointPath> {
        let mut path = Vec::<Waypoint, MAX_WAYPOINTS>::new();
        for wp in &self.waypoints {
            // Capacity matches, push cannot fail
            let _ = path.push(wp.to_waypoint());
        }
        WaypointPath::new(path)
    }

    /// Build the path trajectory generator for this request.
    #[cfg(any(feature = "std", feature = "alloc"))]
    pub fn build(&self) -> Result<crate::path::PathTrajectoryGenerator> {
        crate::path::PathTrajectoryGenerator::new(
            self.waypoint_path()?,
            self.effective_limits()?,
            self.dt,
        )
    }
}

/// A single waypoint from configuration.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WaypointConfig {
    /// X position in meters.
    pub x: Meters,

    /// Y position in meters.
    pub y: Meters,

    /// Optional heading constraint in degrees (tangent direction at this
    /// waypoint). Absent means the heading is inferred from neighbors.
    #[serde(default)]
    pub heading_degrees: Option<f64>,
}

impl WaypointConfig {
    /// Convert to the runtime waypoint type (degrees to radians).
    pub fn to_waypoint(&self) -> Waypoint {
        Waypoint {
            x: self.x.0,
            y: self.y.0,
            heading: self.heading_degrees.map(|d| Radians::from_degrees(d).0),
        }
    }
}
