//! # OpenSCAD Polygon
//!
//! Tessellation kernel for flat part outlines. Arcs, circles, slots and
//! rotated rectangles are tessellated into [`Contour`]s, which a
//! [`PolygonSet`] flattens into one OpenSCAD `polygon(points, paths)`
//! statement: a single point array plus one index path per contour.
//!
//! ## Architecture
//!
//! ```text
//! Point → Contour (append_arc / append_circle / append_slot / ...)
//!       ↓
//! PolygonSet (flatten on demand)
//!       ↓
//! ScadRender → OpenSCAD text
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use openscad_polygon::{Contour, Point, PolygonSet, ScadRender};
//!
//! let mut outline = Contour::new("plate");
//! outline.append_rotated_rectangle(Point::ORIGIN, 60.0, 40.0, 0.0);
//!
//! let mut slot = Contour::new("slot");
//! slot.append_slot(Point::xy(-10.0, 0.0), Point::xy(10.0, 0.0), 20.0, 4.0, 8)?;
//!
//! let plate = PolygonSet::new("plate", vec![outline, slot]);
//! let scad = plate.render();
//! assert!(scad.contains("polygon(points = ["));
//! # Ok::<(), openscad_polygon::PolygonError>(())
//! ```

pub mod contour;
pub mod error;
pub mod format;
pub mod point;
pub mod polygon_set;
pub mod render;

pub use contour::Contour;
pub use error::{PolygonError, PolygonResult};
pub use format::RenderConfig;
pub use point::Point;
pub use polygon_set::{FlattenedPolygon, PolygonSet};
pub use render::ScadRender;
