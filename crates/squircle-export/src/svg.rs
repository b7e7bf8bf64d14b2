use squircle_core::{Path, PathCommand};

#[derive(Debug, thiserror::Error)]
pub enum SvgError {
    #[error("SVG export requires a non-empty outline")]
    Empty,
}

/// Presentation attributes for the emitted `<path>` element.
#[derive(Debug, Clone)]
pub struct SvgOptions {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            fill: "#000".to_string(),
            stroke: "#000".to_string(),
            stroke_width: 0.0,
        }
    }
}

/// Serializes a path as SVG path data with absolute commands.
///
/// Outline coordinates are already y-down, matching SVG user space, so
/// points pass through untransformed and a clockwise sweep maps to
/// sweep flag 1.
pub fn svg_path_data(path: &Path) -> String {
    let mut out = String::new();
    for cmd in &path.commands {
        if !out.is_empty() {
            out.push(' ');
        }
        match *cmd {
            PathCommand::MoveTo { to } => {
                out.push_str(&format!("M {} {}", fmt_num(to.x), fmt_num(to.y)));
            }
            PathCommand::LineTo { to } => {
                out.push_str(&format!("L {} {}", fmt_num(to.x), fmt_num(to.y)));
            }
            PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                out.push_str(&format!(
                    "C {} {} {} {} {} {}",
                    fmt_num(ctrl1.x),
                    fmt_num(ctrl1.y),
                    fmt_num(ctrl2.x),
                    fmt_num(ctrl2.y),
                    fmt_num(to.x),
                    fmt_num(to.y)
                ));
            }
            PathCommand::ArcTo {
                radius,
                large_arc,
                sweep_clockwise,
                to,
            } => {
                let r = fmt_num(radius.abs());
                let large = if large_arc { 1 } else { 0 };
                let sweep = if sweep_clockwise { 1 } else { 0 };
                out.push_str(&format!(
                    "A {r} {r} 0 {large} {sweep} {} {}",
                    fmt_num(to.x),
                    fmt_num(to.y)
                ));
            }
            PathCommand::Close => out.push('Z'),
        }
    }
    out
}

/// Wraps a path in a standalone SVG document sized to the shape box.
pub fn svg_document(
    path: &Path,
    width: f64,
    height: f64,
    options: &SvgOptions,
) -> Result<String, SvgError> {
    // The negated form rejects NaN dimensions along with non-positive ones.
    if path.is_empty()
        || !(width.is_finite() && width > 0.0)
        || !(height.is_finite() && height > 0.0)
    {
        return Err(SvgError::Empty);
    }

    let stroke = if options.stroke_width > 0.0 {
        format!(
            " stroke=\"{}\" stroke-width=\"{}\"",
            options.stroke,
            fmt_num(options.stroke_width)
        )
    } else {
        String::new()
    };

    Ok(format!(
        "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\"><path d=\"{d}\" fill=\"{fill}\"{stroke}/></svg>",
        w = fmt_num(width),
        h = fmt_num(height),
        d = svg_path_data(path),
        fill = options.fill,
        stroke = stroke
    ))
}

fn fmt_num(v: f64) -> String {
    let v = if v.abs() < 1e-9 { 0.0 } else { v };
    let mut buf = ryu::Buffer::new();
    let s = buf.format(v);
    s.strip_suffix(".0").unwrap_or(s).to_string()
}
