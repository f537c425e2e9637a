//! # Configuration Constants
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Tessellation**: Minimum point counts for arcs and circles
//! - **Output**: Layout of the generated OpenSCAD text

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Tessellated points are compared against their analytic positions with
/// this tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-9;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Minimum number of points for an arc.
///
/// An arc includes both of its end points, so the angular step is
/// `(end - start) / (count - 1)` and needs at least two points.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_ARC_POINTS;
///
/// let requested = 1;
/// assert!(requested < MIN_ARC_POINTS);
/// ```
pub const MIN_ARC_POINTS: usize = 2;

/// Minimum number of points for a full circle.
///
/// The angular step is `2π / count`, so zero points is rejected.
pub const MIN_CIRCLE_POINTS: usize = 1;

/// Number of corners appended by a rotated rectangle.
pub const RECTANGLE_CORNERS: usize = 4;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Digits after the decimal point for every emitted coordinate.
///
/// # Example
///
/// ```rust
/// use config::constants::COORDINATE_DECIMALS;
///
/// assert_eq!(format!("{:.*}", COORDINATE_DECIMALS, 2.0), "2.000");
/// ```
pub const COORDINATE_DECIMALS: usize = 3;

/// Points emitted per line of the `points = [...]` array.
pub const POINTS_PER_LINE: usize = 4;

/// Indices emitted per line of a `paths = [...]` entry.
pub const INDICES_PER_LINE: usize = 25;
