//! # motion-profiles
//!
//! Time-parameterized kinematic profiles for motion control.
//!
//! ## Features
//!
//! - **1D motion profiles**: trapezoidal (or triangular) velocity profiles
//!   over a fixed distance, pulled one sample at a time
//! - **2D path trajectories**: waypoint paths turned into sampled
//!   trajectories with position, velocity, acceleration, jerk, and heading
//! - **Configuration-driven**: request envelopes loaded from TOML files
//! - **no_std compatible**: profile generation works without the standard
//!   library; trajectory output needs `alloc`
//! - **Jerk limiting**: optional acceleration slewing for smoother ramps
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use motion_profiles::{load_request, MotionProfile};
//!
//! // Load a request envelope from TOML
//! let request = motion_profiles::load_request("request.toml")?;
//!
//! if let Some(motion) = request.motion {
//!     let mut profile = motion.build()?;
//!     while !profile.is_finished() {
//!         let sample = profile.calculate()?;
//!         // (sample.time, sample.velocity, sample.position, sample.acceleration)
//!     }
//! }
//!
//! if let Some(path) = request.path {
//!     let trajectory = path.build()?.calculate()?;
//!     // first record is the all-zero start pose
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt formatting for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod error;
pub mod motion;
pub mod path;

// Re-exports for ergonomic API
pub use config::{validate_request, KinematicLimits, MotionRequest, PathRequest, RequestConfig};
pub use error::{Error, Result};
pub use motion::{MotionPhase, MotionProfile, MotionSample};
pub use path::{Waypoint, WaypointPath, WaypointPathBuilder};

#[cfg(any(feature = "std", feature = "alloc"))]
pub use path::{PathSample, PathTrajectoryGenerator};

// Request loading (std only)
#[cfg(feature = "std")]
pub use config::{load_request, parse_request};

// Unit types
pub use config::units::{
    Meters, MetersPerSec, MetersPerSecCubed, MetersPerSecSquared, Radians, Seconds,
};
