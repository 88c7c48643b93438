//! Configuration module for motion-profiles.
//!
//! Provides types for loading and validating request envelopes from TOML
//! (with `std` feature) or pre-parsed data.

mod limits;
#[cfg(feature = "std")]
mod loader;
mod request;
pub mod units;
mod validation;

pub use limits::KinematicLimits;
pub use request::{MotionRequest, PathRequest, RequestConfig, WaypointConfig};
pub use validation::{validate_motion, validate_path, validate_request};

#[cfg(feature = "std")]
pub use loader::{load_request, parse_request};

// Re-export unit types at config level
pub use units::{Meters, MetersPerSec, MetersPerSecCubed, MetersPerSecSquared, Radians, Seconds};
