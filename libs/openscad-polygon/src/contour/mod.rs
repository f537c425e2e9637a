//! # Contour
//!
//! One closed loop of a polygon-with-holes. A contour only ever grows:
//! every tessellation appender pushes points onto the end, so an index
//! into the contour stays valid for its whole life. The first and last
//! points are implicitly connected; no appender closes the loop.
//!
//! ## Appenders
//!
//! | Operation | Points appended |
//! |---|---|
//! | [`Contour::append_point`] | 1 |
//! | [`Contour::append_arc`] | `count` (both end points included) |
//! | [`Contour::append_circle`] | `count` (loop not closed) |
//! | [`Contour::append_rotated_rectangle`] | 4 |
//! | [`Contour::append_slot`] | `2 * arc_point_count` |

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;

use config::constants::{MIN_ARC_POINTS, MIN_CIRCLE_POINTS, RECTANGLE_CORNERS};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{PolygonError, PolygonResult};
use crate::point::Point;

/// An ordered, growable loop of points.
///
/// # Example
///
/// ```rust
/// use openscad_polygon::{Contour, Point};
///
/// let mut hole = Contour::new("mount hole");
/// hole.append_circle(Point::xy(10.0, 5.0), 3.0, 16)?;
/// assert_eq!(hole.len(), 16);
/// # Ok::<(), openscad_polygon::PolygonError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contour {
    name: String,
    points: Vec<Point>,
}

impl Contour {
    /// Creates an empty contour. The name only appears in diagnostics and
    /// in comments of rendered output.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }

    /// Creates a contour seeded with a copy of `points`.
    pub fn with_points(name: impl Into<String>, points: &[Point]) -> Self {
        Self {
            name: name.into(),
            points: points.to_vec(),
        }
    }

    /// Returns the contour name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no points have been appended.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points in order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the point at `index`.
    ///
    /// # Errors
    ///
    /// [`PolygonError::IndexOutOfRange`] when `index >= len()`.
    pub fn point_at(&self, index: usize) -> PolygonResult<Point> {
        self.points
            .get(index)
            .copied()
            .ok_or_else(|| PolygonError::out_of_range("Contour", &self.name, index, self.points.len()))
    }

    /// Appends a single point.
    pub fn append_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Appends `count` points evenly spaced in angle from `start_angle` to
    /// `end_angle`, both included, on the circle of `radius` around `center`.
    ///
    /// Angles are radians and are not normalized, so a negative span sweeps
    /// clockwise. Appended points lie in the XY plane.
    ///
    /// # Errors
    ///
    /// [`PolygonError::InvalidPointCount`] when `count < 2`; nothing is
    /// appended in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use openscad_polygon::{Contour, Point};
    /// use std::f64::consts::PI;
    ///
    /// let mut contour = Contour::new("half");
    /// contour.append_arc(Point::ORIGIN, 2.0, 0.0, PI, 3)?;
    /// let top = contour.point_at(1)?;
    /// assert!(top.x.abs() < 1e-12 && (top.y - 2.0).abs() < 1e-12);
    /// # Ok::<(), openscad_polygon::PolygonError>(())
    /// ```
    pub fn append_arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        count: usize,
    ) -> PolygonResult<()> {
        check_count("arc", count, MIN_ARC_POINTS)?;
        trace!(
            contour = %self.name,
            radius,
            start_angle,
            end_angle,
            count,
            "appending arc"
        );

        let delta_angle = (end_angle - start_angle) / (count - 1) as f64;
        self.points.reserve(count);
        for index in 0..count {
            let angle = start_angle + index as f64 * delta_angle;
            self.points.push(on_circle(center, radius, angle));
        }
        Ok(())
    }

    /// Appends `count` points evenly spaced over a full turn of the circle
    /// with `diameter` around `center`, starting at angle 0.
    ///
    /// The first point is not repeated at the end; the loop closes
    /// implicitly.
    ///
    /// # Errors
    ///
    /// [`PolygonError::InvalidPointCount`] when `count == 0`.
    pub fn append_circle(&mut self, center: Point, diameter: f64, count: usize) -> PolygonResult<()> {
        check_count("circle", count, MIN_CIRCLE_POINTS)?;
        trace!(contour = %self.name, diameter, count, "appending circle");

        let delta_angle = TAU / count as f64;
        let radius = diameter / 2.0;
        self.points.reserve(count);
        for index in 0..count {
            self.points.push(on_circle(center, radius, index as f64 * delta_angle));
        }
        Ok(())
    }

    /// Appends the four corners of a `width` × `height` rectangle rotated by
    /// `angle` radians and centered on `center`.
    ///
    /// Corners are appended upper-right, lower-right, lower-left, upper-left
    /// as seen on the unrotated rectangle.
    pub fn append_rotated_rectangle(&mut self, center: Point, width: f64, height: f64, angle: f64) {
        trace!(contour = %self.name, width, height, angle, "appending rotated rectangle");

        let half_width = width / 2.0;
        let half_height = height / 2.0;
        let corners: [Point; RECTANGLE_CORNERS] = [
            Point::xy(half_width, half_height),
            Point::xy(half_width, -half_height),
            Point::xy(-half_width, -half_height),
            Point::xy(-half_width, half_height),
        ];
        self.points
            .extend(corners.iter().map(|corner| center + corner.rotate2d(angle)));
    }

    /// Appends a slot with rounded ends.
    ///
    /// `end1` and `end2` fix the slot's center line: the slot is centered on
    /// their midpoint and aligned with the line through them. `slot_length`
    /// is the distance between the centers of the two end caps and
    /// `slot_width` the full width. Each cap is a half circle of
    /// `arc_point_count` points, so `2 * arc_point_count` points are
    /// appended as one continuous loop.
    ///
    /// # Errors
    ///
    /// [`PolygonError::InvalidPointCount`] when `arc_point_count < 2`;
    /// nothing is appended in that case.
    pub fn append_slot(
        &mut self,
        end1: Point,
        end2: Point,
        slot_length: f64,
        slot_width: f64,
        arc_point_count: usize,
    ) -> PolygonResult<()> {
        check_count("slot", arc_point_count, MIN_ARC_POINTS)?;
        trace!(
            contour = %self.name,
            slot_length,
            slot_width,
            arc_point_count,
            "appending slot"
        );

        let center = end1.midpoint(&end2);
        let slot_angle = (end1.y - end2.y).atan2(end1.x - end2.x);
        let radius = slot_width / 2.0;
        let half_length = slot_length / 2.0;

        let cap1_center = on_circle(center, half_length, slot_angle);
        let cap2_center = on_circle(center, half_length, slot_angle + PI);

        self.append_arc(
            cap1_center,
            radius,
            slot_angle - FRAC_PI_2,
            slot_angle + FRAC_PI_2,
            arc_point_count,
        )?;
        self.append_arc(
            cap2_center,
            radius,
            slot_angle + PI - FRAC_PI_2,
            slot_angle + PI + FRAC_PI_2,
            arc_point_count,
        )
    }
}

impl fmt::Display for Contour {
    /// Short summary: all points when there are at most two, otherwise
    /// the first and last.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |p: &Point| format!("P[{:.3}, {:.3}]", p.x, p.y);
        let summary = match self.points.as_slice() {
            [first, .., last] if self.points.len() > 2 => {
                format!("{}, ..., {}", show(first), show(last))
            }
            points => points.iter().map(show).collect::<Vec<_>>().join(", "),
        };
        write!(f, "Contour('{}', [{}])", self.name, summary)
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Point at `angle` on the circle of `radius` around `center`, in the XY plane.
#[inline]
fn on_circle(center: Point, radius: f64, angle: f64) -> Point {
    Point::xy(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

fn check_count(operation: &'static str, count: usize, min: usize) -> PolygonResult<()> {
    if count < min {
        return Err(PolygonError::InvalidPointCount { operation, count, min });
    }
    Ok(())
}
