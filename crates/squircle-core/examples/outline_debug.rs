use squircle_core::{outline, CurveParams, PathCommand, ShapeSpec};

fn main() {
    let mut args = std::env::args().skip(1);
    let width: f64 = args
        .next()
        .expect("usage: outline_debug <width> <height> <radius> [smoothing] [preserve]")
        .parse()
        .unwrap();
    let height: f64 = args.next().expect("height").parse().unwrap();
    let corner_radius: f64 = args.next().expect("radius").parse().unwrap();
    let smoothing: f64 = args.next().map(|s| s.parse().unwrap()).unwrap_or(0.0);
    let preserve_smoothing = args.next().map(|s| s == "preserve").unwrap_or(false);

    let spec = ShapeSpec {
        width,
        height,
        corner_radius,
        smoothing,
        preserve_smoothing,
    };
    let params = CurveParams::solve(&spec);
    println!(
        "a={} b={} c={} d={} p={} arc={} radius={}",
        params.a,
        params.b,
        params.c,
        params.d,
        params.p,
        params.arc_section_length,
        params.effective_radius
    );

    let path = outline(&spec);
    let mut lines = 0;
    let mut cubics = 0;
    let mut arcs = 0;
    let mut minx = f64::INFINITY;
    let mut miny = f64::INFINITY;
    let mut maxx = f64::NEG_INFINITY;
    let mut maxy = f64::NEG_INFINITY;
    for cmd in &path.commands {
        let points = match *cmd {
            PathCommand::MoveTo { to } => vec![to],
            PathCommand::LineTo { to } => {
                lines += 1;
                vec![to]
            }
            PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                cubics += 1;
                vec![ctrl1, ctrl2, to]
            }
            PathCommand::ArcTo { to, .. } => {
                arcs += 1;
                vec![to]
            }
            PathCommand::Close => vec![],
        };
        for p in points {
            minx = minx.min(p.x);
            miny = miny.min(p.y);
            maxx = maxx.max(p.x);
            maxy = maxy.max(p.y);
        }
    }
    println!(
        "commands={} segs(line={lines} cubic={cubics} arc={arcs}) bbox=({minx},{miny})..({maxx},{maxy})",
        path.commands.len()
    );
    if std::env::var("DUMP_COMMANDS").is_ok() {
        for (i, cmd) in path.commands.iter().enumerate() {
            println!("  c{i}: {cmd:?}");
        }
    }
}
