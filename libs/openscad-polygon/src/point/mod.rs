//! Three-component point value shared by every tessellation routine.
//!
//! Points are plain `Copy` values; every operation returns a new point.
//! Conversions to and from `glam::DVec3` keep the vector math in `glam`
//! while the kernel API stays in terms of [`Point`].

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use config::constants::COORDINATE_DECIMALS;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::format::format_coordinate;

/// A point (or vector) in model space.
///
/// Only `x` and `y` take part in 2D tessellation; `z` is carried along.
///
/// # Examples
/// ```
/// use openscad_polygon::Point;
///
/// let a = Point::xy(1.0, 2.0);
/// let b = Point::xy(3.0, 4.0);
/// assert_eq!(a + b, Point::xy(4.0, 6.0));
/// assert_eq!(2.0 * a, a * 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    #[serde(default)]
    pub z: f64,
}

impl Point {
    /// The origin.
    pub const ORIGIN: Point = Point::new(0.0, 0.0, 0.0);

    /// Creates a point from all three coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a point in the XY plane.
    #[inline]
    pub const fn xy(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Euclidean distance in 3D.
    ///
    /// # Examples
    /// ```
    /// use openscad_polygon::Point;
    /// assert_eq!(Point::xy(0.0, 0.0).distance(&Point::xy(3.0, 4.0)), 5.0);
    /// ```
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        DVec3::from(*self).distance(DVec3::from(*other))
    }

    /// Point halfway between `self` and `other`.
    #[inline]
    pub fn midpoint(&self, other: &Point) -> Point {
        (*self + *other) / 2.0
    }

    /// Rotates the XY part counter-clockwise about the origin.
    ///
    /// `x' = x·cos θ − y·sin θ`, `y' = y·cos θ + x·sin θ`. The result lies
    /// in the XY plane (`z` is zero).
    ///
    /// # Examples
    /// ```
    /// use openscad_polygon::Point;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let p = Point::xy(1.0, 0.0).rotate2d(FRAC_PI_2);
    /// assert!((p.x - 0.0).abs() < 1e-12 && (p.y - 1.0).abs() < 1e-12);
    /// ```
    pub fn rotate2d(&self, angle: f64) -> Point {
        let rotated = DVec2::from_angle(angle).rotate(DVec2::new(self.x, self.y));
        Point::xy(rotated.x, rotated.y)
    }

    /// Mirrors the point across the Y axis.
    ///
    /// Negates `x` and also `z`, matching the model files this kernel was
    /// written against. All 2D callers have `z == 0`.
    #[inline]
    pub fn mirror_y(&self) -> Point {
        Point::new(-self.x, self.y, -self.z)
    }
}

impl From<DVec3> for Point {
    #[inline]
    fn from(v: DVec3) -> Self {
        Point::new(v.x, v.y, v.z)
    }
}

impl From<Point> for DVec3 {
    #[inline]
    fn from(p: Point) -> Self {
        DVec3::new(p.x, p.y, p.z)
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        (DVec3::from(self) + DVec3::from(rhs)).into()
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        (DVec3::from(self) - DVec3::from(rhs)).into()
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, scale: f64) -> Point {
        (DVec3::from(self) * scale).into()
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    #[inline]
    fn mul(self, point: Point) -> Point {
        point * self
    }
}

impl Div<f64> for Point {
    type Output = Point;

    /// Componentwise division; dividing by zero yields IEEE infinities/NaN.
    #[inline]
    fn div(self, scale: f64) -> Point {
        (DVec3::from(self) / scale).into()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P({}, {}, {})",
            format_coordinate(self.x, COORDINATE_DECIMALS),
            format_coordinate(self.y, COORDINATE_DECIMALS),
            format_coordinate(self.z, COORDINATE_DECIMALS)
        )
    }
}
