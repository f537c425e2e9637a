//! # OpenSCAD Rendering
//!
//! [`ScadRender`] is implemented by every value that can be emitted as
//! OpenSCAD source. Implementors only append their own lines; the provided
//! methods turn those lines into text or a complete `.scad` file.

use std::io::Write;

use tracing::debug;

use crate::error::PolygonResult;
use crate::format::RenderConfig;

/// Something that renders to OpenSCAD source lines.
///
/// ## Example
///
/// ```rust
/// use openscad_polygon::{Contour, Point, PolygonSet, ScadRender};
///
/// let mut square = Contour::new("square");
/// square.append_rotated_rectangle(Point::ORIGIN, 10.0, 10.0, 0.0);
/// let set = PolygonSet::new("demo", vec![square]);
///
/// let mut file = Vec::new();
/// set.write_scad(&mut file)?;
/// let text = String::from_utf8(file).unwrap();
/// assert!(text.starts_with("// 'demo' File\n"));
/// # Ok::<(), openscad_polygon::PolygonError>(())
/// ```
pub trait ScadRender {
    /// Name used in comments of the rendered output.
    fn scad_name(&self) -> &str;

    /// Appends the OpenSCAD lines for `self`, each prefixed by `indent`.
    fn render_lines(&self, lines: &mut Vec<String>, indent: &str, config: &RenderConfig);

    /// Renders with the default layout. Lines end with `\n`.
    fn render(&self) -> String {
        self.render_with(&RenderConfig::default())
    }

    /// Renders with an explicit layout. Lines end with `\n`.
    fn render_with(&self, config: &RenderConfig) -> String {
        let mut lines = Vec::new();
        self.render_lines(&mut lines, "", config);
        join_lines(&lines)
    }

    /// Writes a complete `.scad` file: a header comment followed by the
    /// rendered statement.
    ///
    /// # Errors
    ///
    /// [`crate::PolygonError::Io`] when `writer` fails.
    fn write_scad<W: Write>(&self, writer: &mut W) -> PolygonResult<()>
    where
        Self: Sized,
    {
        let mut lines = vec![format!("// '{}' File", self.scad_name())];
        self.render_lines(&mut lines, "", &RenderConfig::default());
        let text = join_lines(&lines);
        debug!(name = self.scad_name(), bytes = text.len(), "writing scad file");
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

fn join_lines(lines: &[String]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct Comment;

    impl ScadRender for Comment {
        fn scad_name(&self) -> &str {
            "comment"
        }

        fn render_lines(&self, lines: &mut Vec<String>, indent: &str, _config: &RenderConfig) {
            lines.push(format!("{indent}// first"));
            lines.push(format!("{indent}// second"));
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_render_joins_lines() {
        assert_eq!(Comment.render(), "// first\n// second\n");
    }

    #[test]
    fn test_write_scad_adds_file_header() {
        let mut out = Vec::new();
        Comment.write_scad(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "// 'comment' File\n// first\n// second\n"
        );
    }

    #[test]
    fn test_write_scad_surfaces_io_errors() {
        let err = Comment.write_scad(&mut FailingWriter).unwrap_err();
        assert!(matches!(err, crate::PolygonError::Io(_)));
    }
}
