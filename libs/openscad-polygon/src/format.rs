//! # Text Formatting
//!
//! Fixed-precision number formatting and line layout shared by every
//! OpenSCAD renderer in this crate.

use config::constants::{COORDINATE_DECIMALS, INDICES_PER_LINE, POINTS_PER_LINE};
use serde::{Deserialize, Serialize};

use crate::point::Point;

// =============================================================================
// RENDER CONFIG
// =============================================================================

/// Layout parameters for rendered OpenSCAD text.
///
/// The default reproduces the canonical layout: three decimals, four points
/// per line and twenty-five path indices per line. Line grouping carries no
/// meaning for OpenSCAD.
///
/// ## Example
///
/// ```rust
/// use openscad_polygon::RenderConfig;
///
/// let config = RenderConfig::default();
/// assert_eq!(config.decimals, 3);
///
/// let wide = RenderConfig { points_per_line: 8, ..RenderConfig::default() };
/// assert_eq!(wide.points_per_line(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Digits after the decimal point for coordinates.
    pub decimals: usize,
    /// Points emitted per line of the points array.
    pub points_per_line: usize,
    /// Indices emitted per line of a path.
    pub indices_per_line: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            decimals: COORDINATE_DECIMALS,
            points_per_line: POINTS_PER_LINE,
            indices_per_line: INDICES_PER_LINE,
        }
    }
}

impl RenderConfig {
    /// Points per line, never less than one.
    #[inline]
    pub fn points_per_line(&self) -> usize {
        self.points_per_line.max(1)
    }

    /// Indices per line, never less than one.
    #[inline]
    pub fn indices_per_line(&self) -> usize {
        self.indices_per_line.max(1)
    }
}

// =============================================================================
// NUMBERS
// =============================================================================

/// Formats `value` with exactly `decimals` fractional digits.
///
/// Values that round to zero from below would print as `-0.000`; the sign
/// is dropped so they print as `0.000`.
///
/// # Examples
/// ```
/// use openscad_polygon::format::format_coordinate;
///
/// assert_eq!(format_coordinate(-0.0000001, 3), "0.000");
/// assert_eq!(format_coordinate(-1.25, 3), "-1.250");
/// assert_eq!(format_coordinate(2.0, 1), "2.0");
/// ```
pub fn format_coordinate(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value);
    match text.strip_prefix('-') {
        Some(magnitude) if magnitude.bytes().all(|b| b == b'0' || b == b'.') => magnitude.to_string(),
        _ => text,
    }
}

/// Formats the XY part of a point as an OpenSCAD vector `[x, y]`.
///
/// # Examples
/// ```
/// use openscad_polygon::{format::format_point_2d, Point};
///
/// assert_eq!(format_point_2d(&Point::xy(5.0, -5.0), 3), "[5.000, -5.000]");
/// ```
pub fn format_point_2d(point: &Point, decimals: usize) -> String {
    format!(
        "[{}, {}]",
        format_coordinate(point.x, decimals),
        format_coordinate(point.y, decimals)
    )
}

// =============================================================================
// LABELS
// =============================================================================

/// Label for a run of `count` contours, `[0-{count-1}]`.
///
/// An empty run is labelled `[]`.
pub fn contour_range(count: usize) -> String {
    match count {
        0 => "[]".to_string(),
        n => format!("[0-{}]", n - 1),
    }
}

/// Label for the global index run `start..end` as `start:last`.
///
/// Empty runs keep the `start:start-1` shape so the label still shows where
/// the contour would have started.
pub(crate) fn index_span(start: usize, end: usize) -> String {
    if end > start {
        format!("{}:{}", start, end - 1)
    } else {
        format!("{}:{}", start, start as i64 - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_zero_is_normalized() {
        assert_eq!(format_coordinate(-0.0, 3), "0.000");
        assert_eq!(format_coordinate(-0.0000001, 3), "0.000");
        assert_eq!(format_coordinate(-0.0004, 3), "0.000");
    }

    #[test]
    fn test_small_negative_keeps_sign() {
        assert_eq!(format_coordinate(-0.0006, 3), "-0.001");
    }

    #[test]
    fn test_zero_decimals() {
        assert_eq!(format_coordinate(-0.2, 0), "0");
        assert_eq!(format_coordinate(3.0, 0), "3");
    }

    #[test]
    fn test_point_2d_ignores_z() {
        let p = Point::new(1.0, 2.0, 3.0);
        assert_eq!(format_point_2d(&p, 3), "[1.000, 2.000]");
    }

    #[test]
    fn test_contour_range() {
        assert_eq!(contour_range(0), "[]");
        assert_eq!(contour_range(1), "[0-0]");
        assert_eq!(contour_range(5), "[0-4]");
    }

    #[test]
    fn test_index_span() {
        assert_eq!(index_span(0, 4), "0:3");
        assert_eq!(index_span(4, 4), "4:3");
        assert_eq!(index_span(0, 0), "0:-1");
    }

    #[test]
    fn test_zero_chunk_sizes_are_clamped() {
        let config = RenderConfig {
            decimals: 3,
            points_per_line: 0,
            indices_per_line: 0,
        };
        assert_eq!(config.points_per_line(), 1);
        assert_eq!(config.indices_per_line(), 1);
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: RenderConfig = serde_json::from_str(r#"{"decimals": 2}"#).unwrap();
        assert_eq!(config.decimals, 2);
        assert_eq!(config.points_per_line, POINTS_PER_LINE);
    }
}
