//! Motion module for motion-profiles.
//!
//! Provides 1D motion profile calculation.

mod profile;

pub use profile::{MotionPhase, MotionProfile, MotionSample};
