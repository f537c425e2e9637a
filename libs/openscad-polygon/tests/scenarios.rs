use std::f64::consts::{FRAC_PI_2, PI};

use openscad_polygon::{Contour, Point, PolygonError, PolygonSet, ScadRender};

/// Rounded plate outline: two half circles joined by straight edges, plus
/// a row of mounting holes, a battery slot and a rotated cut-out.
fn plate() -> Result<PolygonSet, PolygonError> {
    let mut outline = Contour::new("outline");
    outline.append_arc(Point::xy(0.0, 20.0), 80.0, 0.0, PI, 33)?;
    outline.append_arc(Point::xy(0.0, -20.0), 80.0, PI, 2.0 * PI, 33)?;

    let mut holes = Vec::new();
    for i in 0..5 {
        let mut hole = Contour::new(format!("hole {i}"));
        hole.append_circle(Point::xy(-40.0 + 20.0 * i as f64, 50.0), 3.0, 8)?;
        holes.push(hole);
    }

    let mut slot = Contour::new("battery slot");
    slot.append_slot(Point::xy(-30.0, 0.0), Point::xy(30.0, 0.0), 50.0, 6.0, 9)?;

    let mut cutout = Contour::new("cutout");
    cutout.append_rotated_rectangle(Point::xy(0.0, -50.0), 20.0, 8.0, FRAC_PI_2 / 3.0);

    let mut set = PolygonSet::new("plate", vec![outline]);
    set.append_contours(holes);
    set.append_contour(slot);
    set.append_contour(cutout);
    Ok(set.with_convexity(10))
}

#[test]
fn square_in_demo_set() {
    let mut square = Contour::new("square");
    square.append_rotated_rectangle(Point::ORIGIN, 10.0, 10.0, 0.0);
    let set = PolygonSet::new("demo", vec![square]);

    let flat = set.flatten();
    assert_eq!(
        flat.points,
        vec![
            Point::xy(5.0, 5.0),
            Point::xy(5.0, -5.0),
            Point::xy(-5.0, -5.0),
            Point::xy(-5.0, 5.0),
        ]
    );
    assert_eq!(flat.paths, vec![vec![0, 1, 2, 3]]);

    let text = set.render();
    assert!(text.contains("[5.000, 5.000], [5.000, -5.000], [-5.000, -5.000], [-5.000, 5.000]"));
    assert!(text.contains("   [0, 1, 2, 3],\n"));
}

#[test]
fn plate_layout() {
    let set = plate().unwrap();
    assert_eq!(set.len(), 8);
    assert_eq!(set.point_count(), 66 + 5 * 8 + 18 + 4);

    let ranges = set.path_ranges();
    assert_eq!(ranges[0], 0..66);
    assert_eq!(ranges[1], 66..74);
    assert_eq!(ranges[6], 106..124);
    assert_eq!(ranges[7], 124..128);
}

#[test]
fn plate_renders_one_statement() {
    let text = plate().unwrap().render();

    assert!(text.starts_with("// ScadPolygon 'plate' [0-7]\npolygon(points = [\n"));
    assert!(text.ends_with(" ], convexity=10); // End ScadPolygon 'plate' [0-7]\n"));
    assert_eq!(text.matches("polygon(").count(), 1);
    // Every contour is named once among the points and once among the paths
    assert_eq!(text.matches("// Polygon 'battery slot' 106:123").count(), 2);
    assert!(!text.contains("-0.000"));
}

#[test]
fn plate_writes_scad_file() {
    let set = plate().unwrap();
    let mut file = Vec::new();
    set.write_scad(&mut file).unwrap();
    let text = String::from_utf8(file).unwrap();

    assert!(text.starts_with("// 'plate' File\n// ScadPolygon 'plate' [0-7]\n"));
    assert!(text.ends_with(&set.render()));
}

#[test]
fn invalid_request_leaves_contour_untouched() {
    let mut contour = Contour::new("outline");
    contour.append_circle(Point::ORIGIN, 10.0, 6).unwrap();
    let err = contour.append_arc(Point::ORIGIN, 5.0, 0.0, PI, 0).unwrap_err();
    assert!(err.to_string().contains("arc needs at least 2 points"));
    assert_eq!(contour.len(), 6);
}

#[test]
fn negative_zero_rounds_to_zero() {
    let set = PolygonSet::new(
        "tiny",
        vec![Contour::with_points("p", &[Point::xy(-0.0000001, 0.0)])],
    );
    let text = set.render();
    assert!(text.contains("[0.000, 0.000]"));
    assert!(!text.contains("-0.000"));
}
