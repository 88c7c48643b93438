//! Waypoint sequences for path trajectories.

use heapless::Vec;
use libm::hypot;

use crate::error::{PathError, Result};

/// Maximum number of waypoints in a path.
pub const MAX_WAYPOINTS: usize = 32;

/// Two consecutive waypoints closer than this are considered coincident.
const COINCIDENT_EPSILON: f64 = 1e-9;

/// A fixed point the path must pass through, with an optional heading
/// constraint on the path tangent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Waypoint {
    /// X position in meters.
    pub x: f64,
    /// Y position in meters.
    pub y: f64,
    /// Tangent direction in radians at this waypoint. Absent means the
    /// direction is inferred from the neighboring waypoints.
    pub heading: Option<f64>,
}

impl Waypoint {
    /// Create a waypoint with an inferred heading.
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            heading: None,
        }
    }

    /// Create a waypoint with an explicit heading constraint in radians.
    pub const fn with_heading(x: f64, y: f64, heading: f64) -> Self {
        Self {
            x,
            y,
            heading: Some(heading),
        }
    }

    /// Straight-line distance to another waypoint.
    #[inline]
    pub fn distance_to(&self, other: &Waypoint) -> f64 {
        hypot(other.x - self.x, other.y - self.y)
    }
}

/// A validated, ordered sequence of waypoints.
///
/// Invariants checked at construction: at least two waypoints, no two
/// consecutive waypoints coincident.
#[derive(Debug, Clone)]
pub struct WaypointPath {
    waypoints: Vec<Waypoint, MAX_WAYPOINTS>,
}

impl WaypointPath {
    /// Create a path from a waypoint sequence.
    ///
    /// # Errors
    ///
    /// Returns `PathError::TooFewWaypoints` for fewer than two waypoints
    /// and `PathError::CoincidentWaypoints` when two consecutive waypoints
    /// share a position.
    pub fn new(waypoints: Vec<Waypoint, MAX_WAYPOINTS>) -> Result<Self> {
        if waypoints.len() < 2 {
            return Err(PathError::TooFewWaypoints(waypoints.len()).into());
        }
        for (index, pair) in waypoints.windows(2).enumerate() {
            if pair[0].distance_to(&pair[1]) < COINCIDENT_EPSILON {
                return Err(PathError::CoincidentWaypoints { index }.into());
            }
        }
        Ok(Self { waypoints })
    }

    /// Create a path from a waypoint slice.
    ///
    /// # Errors
    ///
    /// As [`new`](Self::new), plus `PathError::TooManyWaypoints` when the
    /// slice exceeds [`MAX_WAYPOINTS`].
    pub fn from_slice(waypoints: &[Waypoint]) -> Result<Self> {
        let vec = Vec::from_slice(waypoints)
            .map_err(|_| PathError::TooManyWaypoints(waypoints.len()))?;
        Self::new(vec)
    }

    /// Get the waypoints in order.
    #[inline]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Number of waypoints in the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// A valid path is never empty; provided for completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Sum of the straight-line distances between consecutive waypoints.
    ///
    /// A lower bound on the arc length of any curve through the waypoints.
    pub fn chord_length(&self) -> f64 {
        self.waypoints
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }
}

/// Builder for creating waypoint paths programmatically.
#[derive(Debug, Clone, Default)]
pub struct WaypointPathBuilder {
    waypoints: Vec<Waypoint, MAX_WAYPOINTS>,
    overflowed: bool,
}

impl WaypointPathBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            waypoints: Vec::new(),
            overflowed: false,
        }
    }

    /// Add a waypoint at the given position.
    pub fn waypoint(mut self, x: f64, y: f64) -> Self {
        self.push(Waypoint::new(x, y));
        self
    }

    /// Add a waypoint with an explicit heading in radians.
    pub fn waypoint_with_heading(mut self, x: f64, y: f64, heading: f64) -> Self {
        self.push(Waypoint::with_heading(x, y, heading));
        self
    }

    /// Add multiple waypoints.
    pub fn waypoints(mut self, waypoints: &[Waypoint]) -> Self {
        for wp in waypoints {
            self.push(*wp);
        }
        self
    }

    fn push(&mut self, waypoint: Waypoint) {
        if self.waypoints.push(waypoint).is_err() {
            self.overflowed = true;
        }
    }

    /// Build the validated path.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`WaypointPath::new`], plus
    /// `PathError::TooManyWaypoints` when more than [`MAX_WAYPOINTS`]
    /// waypoints were added.
    pub fn build(self) -> Result<WaypointPath> {
        if self.overflowed {
            return Err(PathError::TooManyWaypoints(MAX_WAYPOINTS + 1).into());
        }
        WaypointPath::new(self.waypoints)
    }
}
