//! Path module for motion-profiles.
//!
//! Provides waypoint paths, curve geometry, and 2D trajectory generation.
//! Trajectory generation materializes its sample sequence and therefore
//! needs the `std` or `alloc` feature; waypoint paths themselves do not.

#[cfg(any(feature = "std", feature = "alloc"))]
mod curve;
#[cfg(any(feature = "std", feature = "alloc"))]
mod generator;
mod waypoint;

#[cfg(any(feature = "std", feature = "alloc"))]
pub use curve::{CurvePoint, PathCurve};
#[cfg(any(feature = "std", feature = "alloc"))]
pub use generator::{PathSample, PathTrajectoryGenerator};
pub use waypoint::{Waypoint, WaypointPath, WaypointPathBuilder, MAX_WAYPOINTS};
