//! Error types for the motion-profiles library.
//!
//! Provides unified error handling across configuration, profile generation,
//! and path trajectory generation.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all motion-profiles operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motion profile generation error
    Motion(MotionError),
    /// Waypoint path or trajectory error
    Path(PathError),
}

/// Configuration-related errors.
///
/// All of these are raised at construction or parse time, never partway
/// through sample generation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Invalid time step (must be > 0 and finite)
    InvalidTimeStep(f64),
    /// Invalid phase boundary times (requires 0 <= t1 <= t2)
    InvalidPhaseTimes {
        /// End of the acceleration phase
        t1: f64,
        /// Start of the deceleration phase
        t2: f64,
    },
    /// Invalid programmed velocity (must be > 0 for a nonzero move)
    InvalidTargetVelocity(f64),
    /// Invalid target distance (must be >= 0 and finite)
    InvalidTargetDistance(f64),
    /// Invalid max velocity (must be > 0 and finite)
    InvalidMaxVelocity(f64),
    /// Invalid max acceleration (must be > 0 and finite)
    InvalidMaxAcceleration(f64),
    /// Invalid max jerk (must be >= 0 and finite; 0 disables jerk limiting)
    InvalidMaxJerk(f64),
    /// Invalid velocity percent (must be 1-200)
    InvalidVelocityPercent(u8),
    /// Request contains neither a motion nor a path section
    MissingRequest,
    /// Request contains both a motion and a path section
    AmbiguousRequest,
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motion profile generation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionError {
    /// `calculate()` was called on a finished profile
    SequenceExhausted,
}

/// Waypoint path and trajectory errors.
#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    /// Fewer than two waypoints were supplied
    TooFewWaypoints(usize),
    /// More waypoints than the path can hold (max 32)
    TooManyWaypoints(usize),
    /// Two consecutive waypoints are coincident
    CoincidentWaypoints {
        /// Index of the first waypoint of the degenerate pair
        index: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motion(e) => write!(f, "Motion error: {}", e),
            Error::Path(e) => write!(f, "Path error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidTimeStep(v) => {
                write!(f, "Invalid time step: {}. Must be > 0", v)
            }
            ConfigError::InvalidPhaseTimes { t1, t2 } => {
                write!(
                    f,
                    "Invalid phase times: t1 = {}, t2 = {}. Requires 0 <= t1 <= t2",
                    t1, t2
                )
            }
            ConfigError::InvalidTargetVelocity(v) => {
                write!(f, "Invalid target velocity: {}. Must be > 0", v)
            }
            ConfigError::InvalidTargetDistance(v) => {
                write!(f, "Invalid target distance: {}. Must be >= 0", v)
            }
            ConfigError::InvalidMaxVelocity(v) => {
                write!(f, "Invalid max velocity: {}. Must be > 0", v)
            }
            ConfigError::InvalidMaxAcceleration(v) => {
                write!(f, "Invalid max acceleration: {}. Must be > 0", v)
            }
            ConfigError::InvalidMaxJerk(v) => write!(f, "Invalid max jerk: {}. Must be >= 0", v),
            ConfigError::InvalidVelocityPercent(v) => {
                write!(f, "Invalid velocity percent: {}. Must be 1-200", v)
            }
            ConfigError::MissingRequest => {
                write!(f, "Request must contain a [motion] or [path] section")
            }
            ConfigError::AmbiguousRequest => {
                write!(f, "Request must contain only one of [motion] and [path]")
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::SequenceExhausted => {
                write!(f, "Profile is finished; no further samples can be produced")
            }
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::TooFewWaypoints(n) => {
                write!(f, "Path needs at least 2 waypoints, got {}", n)
            }
            PathError::TooManyWaypoints(n) => {
                write!(f, "Too many waypoints: {} (max 32)", n)
            }
            PathError::CoincidentWaypoints { index } => {
                write!(f, "Waypoints {} and {} are coincident", index, index + 1)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotionError> for Error {
    fn from(e: MotionError) -> Self {
        Error::Motion(e)
    }
}

impl From<PathError> for Error {
    fn from(e: PathError) -> Self {
        Error::Path(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotionError {}

#[cfg(feature = "std")]
impl std::error::Error for PathError {}
