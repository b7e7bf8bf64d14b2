use serde::{Deserialize, Serialize};

/// A point in the box coordinate space: origin at the top-left, y down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One drawing command of an outline, in absolute coordinates.
///
/// `ArcTo` keeps the SVG endpoint parameterization (radius plus flags), so a
/// consumer gets the same radius-correction semantics an SVG engine applies
/// when the chord exceeds the diameter (the ultra-smooth range relies on
/// this).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo {
        to: Point2,
    },
    LineTo {
        to: Point2,
    },
    CubicTo {
        ctrl1: Point2,
        ctrl2: Point2,
        to: Point2,
    },
    ArcTo {
        radius: f64,
        large_arc: bool,
        sweep_clockwise: bool,
        to: Point2,
    },
    Close,
}

/// A closed squircle contour as an ordered command list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    pub commands: Vec<PathCommand>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Shift every coordinate by `(dx, dy)`.
    ///
    /// Callers that inset the box by a stroke width recenter the stroked
    /// outline with a half-width translation.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        let shift = |p: &mut Point2| {
            p.x += dx;
            p.y += dy;
        };
        for command in &mut self.commands {
            match command {
                PathCommand::MoveTo { to } | PathCommand::LineTo { to } => shift(to),
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    shift(ctrl1);
                    shift(ctrl2);
                    shift(to);
                }
                PathCommand::ArcTo { to, .. } => shift(to),
                PathCommand::Close => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_shifts_every_variant() {
        let mut path = Path {
            commands: vec![
                PathCommand::MoveTo {
                    to: Point2::new(1.0, 2.0),
                },
                PathCommand::CubicTo {
                    ctrl1: Point2::new(0.0, 0.0),
                    ctrl2: Point2::new(1.0, 1.0),
                    to: Point2::new(2.0, 2.0),
                },
                PathCommand::ArcTo {
                    radius: 5.0,
                    large_arc: false,
                    sweep_clockwise: true,
                    to: Point2::new(3.0, 3.0),
                },
                PathCommand::Close,
            ],
        };
        path.translate(10.0, -1.0);

        assert_eq!(
            path.commands,
            vec![
                PathCommand::MoveTo {
                    to: Point2::new(11.0, 1.0),
                },
                PathCommand::CubicTo {
                    ctrl1: Point2::new(10.0, -1.0),
                    ctrl2: Point2::new(11.0, 0.0),
                    to: Point2::new(12.0, 1.0),
                },
                PathCommand::ArcTo {
                    radius: 5.0,
                    large_arc: false,
                    sweep_clockwise: true,
                    to: Point2::new(13.0, 2.0),
                },
                PathCommand::Close,
            ]
        );
    }

    #[test]
    fn commands_serialize_self_describing() {
        let move_to = PathCommand::MoveTo {
            to: Point2::new(1.0, 2.0),
        };
        assert_eq!(
            serde_json::to_string(&move_to).unwrap(),
            r#"{"type":"move_to","to":{"x":1.0,"y":2.0}}"#
        );

        let close = PathCommand::Close;
        assert_eq!(serde_json::to_string(&close).unwrap(), r#"{"type":"close"}"#);

        let round_trip: PathCommand =
            serde_json::from_str(r#"{"type":"line_to","to":{"x":0.5,"y":-1.0}}"#).unwrap();
        assert_eq!(
            round_trip,
            PathCommand::LineTo {
                to: Point2::new(0.5, -1.0),
            }
        );
    }
}
