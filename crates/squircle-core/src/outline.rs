use crate::{CurveParams, Path, PathCommand, Point2, ShapeSpec};

// Segment extents at or below this count as zero-length and are omitted.
const EPS: f64 = 1e-9;

// One corner of the clockwise traversal: the corner point, the unit
// direction of travel entering it, and the unit direction leaving it.
struct CornerFrame {
    corner: (f64, f64),
    entry: (f64, f64),
    exit: (f64, f64),
}

// Clockwise from the top edge: top-right, bottom-right, bottom-left,
// top-left. Each frame is the previous one rotated 90 degrees about the box
// center, which is what makes a square outline exactly 4-fold symmetric.
fn corner_frames(width: f64, height: f64) -> [CornerFrame; 4] {
    [
        CornerFrame {
            corner: (width, 0.0),
            entry: (1.0, 0.0),
            exit: (0.0, 1.0),
        },
        CornerFrame {
            corner: (width, height),
            entry: (0.0, 1.0),
            exit: (-1.0, 0.0),
        },
        CornerFrame {
            corner: (0.0, height),
            entry: (-1.0, 0.0),
            exit: (0.0, -1.0),
        },
        CornerFrame {
            corner: (0.0, 0.0),
            entry: (0.0, -1.0),
            exit: (1.0, 0.0),
        },
    ]
}

/// Build the outline for `spec`: solve the corner geometry, then assemble.
///
/// Returns an empty path unless both dimensions are finite and positive,
/// the "not yet laid out" outcome callers must treat as non-fatal.
pub fn outline(spec: &ShapeSpec) -> Path {
    // NaN fails every comparison, so drawability is tested as a positive
    // requirement instead of `<= 0.0` checks.
    if !(spec.width.is_finite() && spec.width > 0.0)
        || !(spec.height.is_finite() && spec.height > 0.0)
    {
        return Path::new();
    }
    let params = CurveParams::solve(spec);
    assemble(spec.width, spec.height, &params)
}

/// Assemble the closed contour for solved corner parameters.
///
/// Every corner emits the same pattern in its own frame: an entry cubic, a
/// central arc, and the mirrored exit cubic, connected corner to corner by
/// straight edges. Zero-length commands are omitted, so a zero radius
/// yields a plain rectangle and full smoothing drops the arc.
pub fn assemble(width: f64, height: f64, params: &CurveParams) -> Path {
    let CurveParams {
        a,
        b,
        c,
        d,
        p,
        arc_section_length,
        effective_radius,
    } = *params;

    // Cubic presence is judged by endpoint displacement, arc presence by
    // chord length.
    let has_cubic = (a + b + c).abs() > EPS || d.abs() > EPS;
    let has_arc = arc_section_length.abs() > EPS;

    let mut path = Path::new();
    let mut current: Option<Point2> = None;

    for frame in corner_frames(width, height) {
        let (ex, ey) = frame.entry;
        let (fx, fy) = frame.exit;
        let start = Point2 {
            x: frame.corner.0 - p * ex,
            y: frame.corner.1 - p * ey,
        };

        match current {
            None => path.commands.push(PathCommand::MoveTo { to: start }),
            Some(pos) => {
                if (pos.x - start.x).abs() > EPS || (pos.y - start.y).abs() > EPS {
                    path.commands.push(PathCommand::LineTo { to: start });
                }
            }
        }

        let mut pos = start;
        if has_cubic {
            let to = Point2 {
                x: pos.x + (a + b + c) * ex + d * fx,
                y: pos.y + (a + b + c) * ey + d * fy,
            };
            path.commands.push(PathCommand::CubicTo {
                ctrl1: Point2 {
                    x: pos.x + a * ex,
                    y: pos.y + a * ey,
                },
                ctrl2: Point2 {
                    x: pos.x + (a + b) * ex,
                    y: pos.y + (a + b) * ey,
                },
                to,
            });
            pos = to;
        }
        if has_arc {
            let to = Point2 {
                x: pos.x + arc_section_length * (ex + fx),
                y: pos.y + arc_section_length * (ey + fy),
            };
            path.commands.push(PathCommand::ArcTo {
                radius: effective_radius,
                large_arc: false,
                sweep_clockwise: true,
                to,
            });
            pos = to;
        }
        if has_cubic {
            let to = Point2 {
                x: pos.x + d * ex + (a + b + c) * fx,
                y: pos.y + d * ey + (a + b + c) * fy,
            };
            path.commands.push(PathCommand::CubicTo {
                ctrl1: Point2 {
                    x: pos.x + d * ex + c * fx,
                    y: pos.y + d * ey + c * fy,
                },
                ctrl2: Point2 {
                    x: pos.x + d * ex + (b + c) * fx,
                    y: pos.y + d * ey + (b + c) * fy,
                },
                to,
            });
            pos = to;
        }
        current = Some(pos);
    }

    // The closing command draws the remaining top edge back to the start.
    path.commands.push(PathCommand::Close);
    path
}
