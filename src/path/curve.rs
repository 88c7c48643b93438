//! Curve geometry for waypoint paths.
//!
//! Builds a piecewise cubic Hermite spline through the waypoints and
//! parameterizes it by arc length. The spline passes through every waypoint
//! in order and has a continuous tangent direction at interior waypoints, so
//! the reported heading never jumps between segments.
//!
//! Tangent directions come from explicit waypoint headings where annotated,
//! otherwise from the chord between the neighboring waypoints. Tangent
//! magnitudes are scaled by the segment chord length.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use libm::{atan2, cos, hypot, sin};

use super::waypoint::{Waypoint, WaypointPath};

/// Arc-length samples per spline segment.
const SUBDIVISIONS: usize = 64;

/// A point on the curve with its tangent direction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CurvePoint {
    /// X position in meters.
    pub x: f64,
    /// Y position in meters.
    pub y: f64,
    /// Tangent direction in radians.
    pub heading: f64,
}

/// One cubic Hermite segment between two waypoints.
#[derive(Debug, Clone, Copy)]
struct HermiteSegment {
    p0: (f64, f64),
    p1: (f64, f64),
    m0: (f64, f64),
    m1: (f64, f64),
}

impl HermiteSegment {
    /// Evaluate the segment position at parameter `t` in [0, 1].
    fn point(&self, t: f64) -> (f64, f64) {
        let t2 = t * t;
        let t3 = t2 * t;
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;
        (
            h00 * self.p0.0 + h10 * self.m0.0 + h01 * self.p1.0 + h11 * self.m1.0,
            h00 * self.p0.1 + h10 * self.m0.1 + h01 * self.p1.1 + h11 * self.m1.1,
        )
    }

    /// Evaluate the segment derivative at parameter `t` in [0, 1].
    fn derivative(&self, t: f64) -> (f64, f64) {
        let t2 = t * t;
        let h00 = 6.0 * t2 - 6.0 * t;
        let h10 = 3.0 * t2 - 4.0 * t + 1.0;
        let h01 = -6.0 * t2 + 6.0 * t;
        let h11 = 3.0 * t2 - 2.0 * t;
        (
            h00 * self.p0.0 + h10 * self.m0.0 + h01 * self.p1.0 + h11 * self.m1.0,
            h00 * self.p0.1 + h10 * self.m0.1 + h01 * self.p1.1 + h11 * self.m1.1,
        )
    }
}

/// Index entry mapping a cumulative arc length to a segment parameter.
#[derive(Debug, Clone, Copy)]
struct ArcEntry {
    length: f64,
    segment: usize,
    t: f64,
}

/// Arc-length parameterized curve through a waypoint path.
#[derive(Debug, Clone)]
pub struct PathCurve {
    segments: Vec<HermiteSegment>,
    table: Vec<ArcEntry>,
    total_length: f64,
}

impl PathCurve {
    /// Build the curve for a validated waypoint path.
    pub fn from_path(path: &WaypointPath) -> Self {
        let waypoints = path.waypoints();
        let tangents = tangent_directions(waypoints);

        let mut segments = Vec::with_capacity(waypoints.len() - 1);
        for i in 0..waypoints.len() - 1 {
            let chord = waypoints[i].distance_to(&waypoints[i + 1]);
            segments.push(HermiteSegment {
                p0: (waypoints[i].x, waypoints[i].y),
                p1: (waypoints[i + 1].x, waypoints[i + 1].y),
                m0: (tangents[i].0 * chord, tangents[i].1 * chord),
                m1: (tangents[i + 1].0 * chord, tangents[i + 1].1 * chord),
            });
        }

        let mut table = Vec::with_capacity(segments.len() * SUBDIVISIONS + 1);
        table.push(ArcEntry {
            length: 0.0,
            segment: 0,
            t: 0.0,
        });

        let mut length = 0.0;
        for (segment, seg) in segments.iter().enumerate() {
            let mut prev = seg.point(0.0);
            for k in 1..=SUBDIVISIONS {
                let t = k as f64 / SUBDIVISIONS as f64;
                let point = seg.point(t);
                length += hypot(point.0 - prev.0, point.1 - prev.1);
                table.push(ArcEntry { length, segment, t });
                prev = point;
            }
        }

        Self {
            segments,
            table,
            total_length: length,
        }
    }

    /// Total arc length of the curve in meters.
    #[inline]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Map an arc length to a position and heading on the curve.
    ///
    /// The input is clamped to `[0, total_length]`.
    pub fn sample_at(&self, arc_length: f64) -> CurvePoint {
        let s = arc_length.clamp(0.0, self.total_length);

        let idx = self.table.partition_point(|e| e.length < s);
        if idx == 0 {
            return self.eval(0, 0.0);
        }

        let hi = self.table[idx.min(self.table.len() - 1)];
        let lo = self.table[idx - 1];

        // Across a segment boundary the lower bracket restarts at t = 0
        let lo_t = if lo.segment == hi.segment { lo.t } else { 0.0 };

        let span = hi.length - lo.length;
        let fraction = if span > 0.0 { (s - lo.length) / span } else { 0.0 };
        let t = lo_t + fraction * (hi.t - lo_t);

        self.eval(hi.segment, t)
    }

    fn eval(&self, segment: usize, t: f64) -> CurvePoint {
        let seg = &self.segments[segment];
        let (x, y) = seg.point(t);
        let (dx, dy) = seg.derivative(t);
        CurvePoint {
            x,
            y,
            heading: atan2(dy, dx),
        }
    }
}

/// Unit tangent direction at every waypoint.
///
/// An annotated heading wins; otherwise endpoints take the adjacent chord
/// and interior waypoints the chord between their neighbors.
fn tangent_directions(waypoints: &[Waypoint]) -> Vec<(f64, f64)> {
    let last = waypoints.len() - 1;
    waypoints
        .iter()
        .enumerate()
        .map(|(i, wp)| {
            if let Some(heading) = wp.heading {
                return (cos(heading), sin(heading));
            }
            let (from, to) = if i == 0 {
                (&waypoints[0], &waypoints[1])
            } else if i == last {
                (&waypoints[last - 1], &waypoints[last])
            } else {
                (&waypoints[i - 1], &waypoints[i + 1])
            };
            let dx = to.x - from.x;
            let dy = to.y - from.y;
            let norm = hypot(dx, dy);
            // Neighbor chords are nonzero for a validated path; a straddling
            // chord can only vanish if the path doubles back exactly, in
            // which case the direction of the incoming chord is used
            if norm > 0.0 {
                (dx / norm, dy / norm)
            } else {
                let dx = waypoints[i].x - waypoints[i - 1].x;
                let dy = waypoints[i].y - waypoints[i - 1].y;
                let norm = hypot(dx, dy);
                (dx / norm, dy / norm)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::WaypointPathBuilder;

    fn straight_path() -> WaypointPath {
        WaypointPathBuilder::new()
            .waypoint(0.0, 0.0)
            .waypoint(10.0, 0.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_straight_line_length() {
        let curve = PathCurve::from_path(&straight_path());
        assert!((curve.total_length() - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_straight_line_samples() {
        let curve = PathCurve::from_path(&straight_path());
        for s in [0.0, 2.5, 5.0, 9.9] {
            let point = curve.sample_at(s);
            assert!((point.x - s).abs() < 1e-6);
            assert!(point.y.abs() < 1e-9);
            assert!(point.heading.abs() < 1e-9);
        }
    }

    #[test]
    fn test_curve_passes_through_waypoints() {
        let path = WaypointPathBuilder::new()
            .waypoint(0.0, 0.0)
            .waypoint(4.0, 3.0)
            .waypoint(8.0, 0.0)
            .build()
            .unwrap();
        let curve = PathCurve::from_path(&path);

        let start = curve.sample_at(0.0);
        assert!((start.x, start.y) == (0.0, 0.0));

        let end = curve.sample_at(curve.total_length());
        assert!((end.x - 8.0).abs() < 1e-9);
        assert!(end.y.abs() < 1e-9);
    }

    #[test]
    fn test_heading_continuous_at_join() {
        let path = WaypointPathBuilder::new()
            .waypoint(0.0, 0.0)
            .waypoint(5.0, 1.0)
            .waypoint(10.0, 0.0)
            .build()
            .unwrap();
        let curve = PathCurve::from_path(&path);

        // Arc length of the first segment bounds the join
        let join = curve.total_length() / 2.0;
        let before = curve.sample_at(join - 1e-4);
        let after = curve.sample_at(join + 1e-4);
        assert!((before.heading - after.heading).abs() < 1e-2);
    }

    #[test]
    fn test_explicit_heading_respected() {
        let path = WaypointPathBuilder::new()
            .waypoint_with_heading(0.0, 0.0, core::f64::consts::FRAC_PI_4)
            .waypoint(10.0, 0.0)
            .build()
            .unwrap();
        let curve = PathCurve::from_path(&path);

        let start = curve.sample_at(0.0);
        assert!((start.heading - core::f64::consts::FRAC_PI_4).abs() < 1e-9);
    }

    #[test]
    fn test_sample_clamps_out_of_range() {
        let curve = PathCurve::from_path(&straight_path());
        let before = curve.sample_at(-5.0);
        assert!((before.x, before.y) == (0.0, 0.0));

        let after = curve.sample_at(100.0);
        assert!((after.x - 10.0).abs() < 1e-9);
    }
}
