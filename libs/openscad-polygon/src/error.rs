//! # Error Types
//!
//! Error types for contour tessellation and polygon rendering.
//!
//! ## Error Policy
//!
//! - NO fallback mechanisms when operations fail
//! - Failures are reported before any point is appended
//! - Errors include context for debugging

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or rendering polygons.
///
/// ## Example
///
/// ```rust
/// use openscad_polygon::{Contour, PolygonError};
///
/// let contour = Contour::new("empty");
/// match contour.point_at(3) {
///     Err(PolygonError::IndexOutOfRange { index, len, .. }) => {
///         assert_eq!((index, len), (3, 0));
///     }
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum PolygonError {
    /// An element was requested outside `[0, len)`.
    #[error("{owner} '{name}' has {len} entries and index={index} is out of range")]
    IndexOutOfRange {
        /// Kind of container that was indexed (`Contour`, `PolygonSet`)
        owner: &'static str,
        /// Name of the indexed container
        name: String,
        /// Requested index
        index: usize,
        /// Number of entries held
        len: usize,
    },

    /// A tessellation operation was asked for too few points.
    #[error("{operation} needs at least {min} points, got {count}")]
    InvalidPointCount {
        /// Tessellation operation name
        operation: &'static str,
        /// Requested point count
        count: usize,
        /// Smallest accepted point count
        min: usize,
    },

    /// Writing rendered text to the caller's sink failed.
    #[error("Failed to write OpenSCAD output: {0}")]
    Io(#[from] std::io::Error),
}

impl PolygonError {
    /// Creates an out-of-range error.
    pub fn out_of_range(owner: &'static str, name: impl Into<String>, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            owner,
            name: name.into(),
            index,
            len,
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for polygon operations.
pub type PolygonResult<T> = Result<T, PolygonError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let range_err = PolygonError::out_of_range("Contour", "outline", 7, 4);
        let text = range_err.to_string();
        assert!(text.contains("Contour 'outline'"));
        assert!(text.contains("index=7"));

        let count_err = PolygonError::InvalidPointCount {
            operation: "arc",
            count: 1,
            min: 2,
        };
        assert_eq!(count_err.to_string(), "arc needs at least 2 points, got 1");
    }

    /// Test io errors convert through `?`.
    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: PolygonError = io.into();
        assert!(matches!(err, PolygonError::Io(_)));
    }

    /// Test error types are Send + Sync.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PolygonError>();
    }
}
