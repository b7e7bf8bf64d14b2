use std::path::{Path, PathBuf};

use serde::Serialize;
use squircle_core::{outline, CurveParams, ShapeSpec};
use squircle_export::svg::{svg_document, SvgOptions};

use crate::config::Config;
use crate::error::CliError;

pub fn run_render(
    input: PathBuf,
    output: PathBuf,
    debug: bool,
    clean: bool,
) -> Result<(), CliError> {
    let raw = std::fs::read_to_string(&input)
        .map_err(|e| CliError::input(format!("Could not read config {}: {e}", input.display())))?;
    let config: Config = serde_yaml::from_str(&raw).map_err(|e| CliError::input(e.to_string()))?;

    println!("Parsing shapes...");
    if config.shapes.is_empty() {
        println!("No shapes defined, nothing to do.");
        return Ok(());
    }

    if clean {
        println!("Cleaning output folder...");
        if output.exists() {
            std::fs::remove_dir_all(&output).map_err(|e| CliError::processing(e.to_string()))?;
        }
    }
    std::fs::create_dir_all(&output).map_err(|e| CliError::processing(e.to_string()))?;

    println!("Writing output to disk...");
    for (name, entry) in &config.shapes {
        if !entry.width.is_finite() || !entry.height.is_finite() {
            return Err(CliError::input(format!(
                "Shape {name}: dimensions must be finite, got {} x {}",
                entry.width, entry.height
            )));
        }
        let border_width = entry.border_width(name);
        // The stroke is centered on the path, so the outline shrinks by the
        // full border width and shifts by half of it to keep the stroke's
        // outer edge on the box boundary.
        let spec = entry.spec(name, entry.width - border_width, entry.height - border_width);

        let mut path = outline(&spec);
        if path.is_empty() {
            return Err(CliError::input(format!(
                "Shape {name}: {} x {} with border_width {border_width} leaves nothing to draw",
                entry.width, entry.height
            )));
        }
        path.translate(border_width / 2.0, border_width / 2.0);

        let options = SvgOptions {
            fill: entry.fill.clone(),
            stroke: entry.border_color.clone(),
            stroke_width: border_width,
        };
        let svg = svg_document(&path, entry.width, entry.height, &options)
            .map_err(|e| CliError::processing(e.to_string()))?;
        std::fs::write(output.join(format!("{name}.svg")), svg)
            .map_err(|e| CliError::processing(e.to_string()))?;

        if debug {
            write_debug_artifacts(&output, name, &spec, &path)?;
        }
    }

    println!("Done.");
    Ok(())
}

fn write_debug_artifacts(
    output: &Path,
    name: &str,
    spec: &ShapeSpec,
    path: &squircle_core::Path,
) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(path).map_err(|e| CliError::processing(e.to_string()))?;
    std::fs::write(output.join(format!("{name}.path.json")), json)
        .map_err(|e| CliError::processing(e.to_string()))?;

    let params = CurveParams::solve(spec);
    std::fs::write(
        output.join(format!("{name}.curve.yaml")),
        serialize_yaml_no_doc(&params)?,
    )
    .map_err(|e| CliError::processing(e.to_string()))?;

    Ok(())
}

fn serialize_yaml_no_doc<T: Serialize>(value: &T) -> Result<String, CliError> {
    let mut s = serde_yaml::to_string(value).map_err(|e| CliError::processing(e.to_string()))?;
    if let Some(rest) = s.strip_prefix("---\n") {
        s = rest.to_string();
    }
    Ok(s)
}
