use squircle_core::{outline, Path, PathCommand, Point2, ShapeSpec};
use squircle_export::svg::{svg_document, svg_path_data, SvgError, SvgOptions};

fn spec(width: f64, height: f64, corner_radius: f64, smoothing: f64) -> ShapeSpec {
    ShapeSpec {
        width,
        height,
        corner_radius,
        smoothing,
        preserve_smoothing: false,
    }
}

fn extract_path(svg: &str) -> &str {
    let needle = "<path d=\"";
    let start = svg
        .find(needle)
        .map(|idx| idx + needle.len())
        .expect("missing path");
    let rest = &svg[start..];
    let end = rest.find('"').expect("missing path end");
    &rest[..end]
}

fn count_command(path: &str, cmd: &str) -> usize {
    path.split_whitespace().filter(|tok| *tok == cmd).count()
}

#[test]
fn document_wraps_a_plain_rectangle() {
    let path = outline(&spec(100.0, 60.0, 0.0, 0.0));
    let got = svg_document(&path, 100.0, 60.0, &SvgOptions::default()).unwrap();
    let expected = "<svg width=\"100\" height=\"60\" viewBox=\"0 0 100 60\" xmlns=\"http://www.w3.org/2000/svg\"><path d=\"M 100 0 L 100 60 L 0 60 L 0 0 Z\" fill=\"#000\"/></svg>";
    assert_eq!(got, expected);
}

#[test]
fn rounded_rectangle_uses_four_arc_segments() {
    let path = outline(&spec(100.0, 60.0, 20.0, 0.0));
    let data = svg_path_data(&path);

    assert!(data.starts_with("M 80 0 A 20 20 0 0 1 100 20 L 100 40"), "{data}");
    assert_eq!(count_command(&data, "A"), 4);
    assert_eq!(count_command(&data, "C"), 0);
    assert_eq!(count_command(&data, "L"), 3);
    assert!(data.ends_with('Z'));
}

#[test]
fn full_smoothing_replaces_arcs_with_cubics() {
    // Budget is min(100, 60) / 2 = 30, so radius 10 leaves smoothing 1.0
    // unclamped and the arc collapses to nothing.
    let path = outline(&spec(100.0, 60.0, 10.0, 1.0));
    let data = svg_path_data(&path);

    assert_eq!(count_command(&data, "C"), 8);
    assert_eq!(count_command(&data, "A"), 0);
}

#[test]
fn moderate_smoothing_mixes_cubics_and_arcs() {
    let path = outline(&spec(100.0, 60.0, 10.0, 0.6));
    let data = svg_path_data(&path);

    assert_eq!(count_command(&data, "C"), 8);
    assert_eq!(count_command(&data, "A"), 4);
}

#[test]
fn path_data_formats_every_command() {
    let path = Path {
        commands: vec![
            PathCommand::MoveTo {
                to: Point2 { x: 0.0, y: 0.0 },
            },
            PathCommand::CubicTo {
                ctrl1: Point2 { x: 1.0, y: 0.0 },
                ctrl2: Point2 { x: 2.0, y: 0.0 },
                to: Point2 { x: 3.0, y: 1.0 },
            },
            PathCommand::ArcTo {
                radius: 2.0,
                large_arc: false,
                sweep_clockwise: true,
                to: Point2 { x: 5.0, y: 3.0 },
            },
            PathCommand::Close,
        ],
    };

    assert_eq!(svg_path_data(&path), "M 0 0 C 1 0 2 0 3 1 A 2 2 0 0 1 5 3 Z");
}

#[test]
fn tiny_coordinates_snap_to_zero() {
    let path = Path {
        commands: vec![PathCommand::MoveTo {
            to: Point2 { x: 1e-12, y: -3e-10 },
        }],
    };

    assert_eq!(svg_path_data(&path), "M 0 0");
}

#[test]
fn stroke_attributes_appear_only_when_requested() {
    let path = outline(&spec(40.0, 40.0, 8.0, 0.6));

    let plain = svg_document(&path, 40.0, 40.0, &SvgOptions::default()).unwrap();
    assert!(!plain.contains("stroke-width"));

    let styled = svg_document(
        &path,
        40.0,
        40.0,
        &SvgOptions {
            fill: "#fff".to_string(),
            stroke: "#ff0000".to_string(),
            stroke_width: 1.5,
        },
    )
    .unwrap();
    assert!(styled.contains("fill=\"#fff\""));
    assert!(styled.contains(" stroke=\"#ff0000\" stroke-width=\"1.5\""));
}

#[test]
fn empty_outline_is_rejected() {
    let err = svg_document(&Path::new(), 10.0, 10.0, &SvgOptions::default()).unwrap_err();
    match err {
        SvgError::Empty => {}
    }

    let path = outline(&spec(10.0, 10.0, 2.0, 0.0));
    let err = svg_document(&path, 0.0, 10.0, &SvgOptions::default()).unwrap_err();
    match err {
        SvgError::Empty => {}
    }

    let err = svg_document(&path, f64::NAN, 10.0, &SvgOptions::default()).unwrap_err();
    match err {
        SvgError::Empty => {}
    }
}
