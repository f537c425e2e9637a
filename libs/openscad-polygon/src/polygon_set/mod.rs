//! # Polygon Set
//!
//! Collects contours into one OpenSCAD `polygon(points, paths)` statement.
//!
//! ## Flattening
//!
//! ```text
//! contours:  [outline: 4 pts] [hole A: 16 pts] [hole B: 6 pts]
//! points:    0..4             4..20            20..26
//! paths:     [0..3]           [4..19]          [20..25]
//! ```
//!
//! Offsets are computed on every call from the current contours, never
//! cached, so a contour changed through [`PolygonSet::contour_mut`] after
//! being added is rendered in its latest state. By convention the first
//! contour is the outer boundary and the rest are holes; the set itself
//! does not enforce roles.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::contour::Contour;
use crate::error::{PolygonError, PolygonResult};
use crate::format::{contour_range, format_point_2d, index_span, RenderConfig};
use crate::point::Point;
use crate::render::ScadRender;

/// A named, ordered collection of contours rendered as one polygon.
///
/// Every contour gets a path, including an empty one: it renders as `[]`
/// and OpenSCAD receives an empty loop. Skip empty contours before
/// appending them if that is not wanted.
///
/// # Example
///
/// ```rust
/// use openscad_polygon::{Contour, Point, PolygonSet, ScadRender};
///
/// let mut outline = Contour::new("plate");
/// outline.append_rotated_rectangle(Point::ORIGIN, 40.0, 20.0, 0.0);
/// let mut hole = Contour::new("hole");
/// hole.append_circle(Point::ORIGIN, 5.0, 8)?;
///
/// let set = PolygonSet::new("part", vec![outline, hole]).with_convexity(4);
/// assert_eq!(set.point_count(), 12);
/// assert!(set.render().contains("convexity=4"));
/// # Ok::<(), openscad_polygon::PolygonError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolygonSet {
    name: String,
    contours: Vec<Contour>,
    convexity: Option<u32>,
}

/// Contours flattened into one point buffer plus one index path each.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlattenedPolygon {
    /// Every point of every contour, in contour order.
    pub points: Vec<Point>,
    /// One path of indices into `points` per contour.
    pub paths: Vec<Vec<usize>>,
}

impl PolygonSet {
    /// Creates a set from a finished list of contours.
    pub fn new(name: impl Into<String>, contours: Vec<Contour>) -> Self {
        Self {
            name: name.into(),
            contours,
            convexity: None,
        }
    }

    /// Sets the convexity hint passed to OpenSCAD. Zero omits the hint.
    pub fn with_convexity(mut self, convexity: u32) -> Self {
        self.convexity = Some(convexity);
        self
    }

    /// Returns the set name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the convexity hint, if one will be emitted.
    pub fn convexity(&self) -> Option<u32> {
        self.convexity.filter(|&c| c > 0)
    }

    /// Returns the number of contours.
    #[inline]
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    /// Returns true if the set holds no contours.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Returns the contours in order.
    #[inline]
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    /// Returns the contour at `index`.
    ///
    /// # Errors
    ///
    /// [`PolygonError::IndexOutOfRange`] when `index >= len()`.
    pub fn contour_at(&self, index: usize) -> PolygonResult<&Contour> {
        let len = self.contours.len();
        self.contours
            .get(index)
            .ok_or_else(|| PolygonError::out_of_range("PolygonSet", &self.name, index, len))
    }

    /// Returns the contour at `index` for further appends.
    ///
    /// # Errors
    ///
    /// [`PolygonError::IndexOutOfRange`] when `index >= len()`.
    pub fn contour_mut(&mut self, index: usize) -> PolygonResult<&mut Contour> {
        let len = self.contours.len();
        let name = &self.name;
        self.contours
            .get_mut(index)
            .ok_or_else(|| PolygonError::out_of_range("PolygonSet", name, index, len))
    }

    /// Appends one contour after the existing ones.
    pub fn append_contour(&mut self, contour: Contour) {
        self.contours.push(contour);
    }

    /// Appends contours after the existing ones, keeping their order.
    pub fn append_contours(&mut self, contours: impl IntoIterator<Item = Contour>) {
        self.contours.extend(contours);
    }

    /// Total number of points over all contours.
    pub fn point_count(&self) -> usize {
        self.contours.iter().map(Contour::len).sum()
    }

    /// Global index range of each contour's points, in contour order.
    pub fn path_ranges(&self) -> Vec<Range<usize>> {
        let mut offset = 0;
        self.contours
            .iter()
            .map(|contour| {
                let range = offset..offset + contour.len();
                offset = range.end;
                range
            })
            .collect()
    }

    /// Flattens the current contours into one point buffer and paths.
    pub fn flatten(&self) -> FlattenedPolygon {
        let points: Vec<Point> = self
            .contours
            .iter()
            .flat_map(|contour| contour.points().iter().copied())
            .collect();
        let paths: Vec<Vec<usize>> = self
            .path_ranges()
            .into_iter()
            .map(|range| range.collect::<Vec<usize>>())
            .collect();
        debug!(
            name = %self.name,
            contours = self.contours.len(),
            points = points.len(),
            "flattened polygon set"
        );
        FlattenedPolygon { points, paths }
    }
}

impl ScadRender for PolygonSet {
    fn scad_name(&self) -> &str {
        &self.name
    }

    fn render_lines(&self, lines: &mut Vec<String>, indent: &str, config: &RenderConfig) {
        let label = contour_range(self.contours.len());
        let next_indent = format!("{indent} ");
        let ranges = self.path_ranges();
        debug!(
            name = %self.name,
            contours = self.contours.len(),
            points = ranges.last().map_or(0, |r| r.end),
            "rendering polygon set"
        );

        lines.push(format!("{indent}// ScadPolygon '{}' {}", self.name, label));
        lines.push(format!("{indent}polygon(points = ["));
        for (contour, range) in self.contours.iter().zip(&ranges) {
            points_lines(lines, &next_indent, contour, range, config);
        }

        lines.push(format!("{indent} ], paths = ["));
        for (contour, range) in self.contours.iter().zip(&ranges) {
            path_lines(lines, &next_indent, contour, range, config);
        }

        let convexity = self
            .convexity()
            .map(|c| format!(", convexity={c}"))
            .unwrap_or_default();
        lines.push(format!(
            "{indent} ]{convexity}); // End ScadPolygon '{}' {}",
            self.name, label
        ));
    }
}

/// Appends the coordinates of one contour, a fixed number of points per line.
fn points_lines(
    lines: &mut Vec<String>,
    indent: &str,
    contour: &Contour,
    range: &Range<usize>,
    config: &RenderConfig,
) {
    lines.push(format!(
        "{indent} // Polygon '{}' {}",
        contour.name(),
        index_span(range.start, range.end)
    ));

    let per_line = config.points_per_line();
    for (chunk_index, chunk) in contour.points().chunks(per_line).enumerate() {
        let chunk_start = range.start + chunk_index * per_line;
        let text = chunk
            .iter()
            .map(|point| format_point_2d(point, config.decimals))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!(
            "{indent}  {text}, // {}",
            index_span(chunk_start, chunk_start + chunk.len())
        ));
    }
}

/// Appends the path of one contour, a fixed number of indices per line.
fn path_lines(
    lines: &mut Vec<String>,
    indent: &str,
    contour: &Contour,
    range: &Range<usize>,
    config: &RenderConfig,
) {
    lines.push(format!(
        "{indent} // Polygon '{}' {}",
        contour.name(),
        index_span(range.start, range.end)
    ));

    if range.is_empty() {
        lines.push(format!("{indent}  [],"));
        return;
    }

    let indices: Vec<usize> = range.clone().collect();
    let chunks: Vec<&[usize]> = indices.chunks(config.indices_per_line()).collect();
    let last = chunks.len() - 1;
    for (chunk_index, chunk) in chunks.iter().enumerate() {
        let text = chunk
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let front = if chunk_index == 0 { "  [" } else { "  " };
        let end = if chunk_index == last { "]," } else { "," };
        lines.push(format!("{indent}{front}{text}{end}"));
    }
}
