use indexmap::IndexMap;
use serde::Deserialize;
use squircle_core::ShapeSpec;

/// Top-level YAML config. Shapes render in declaration order.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub shapes: IndexMap<String, ShapeEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ShapeEntry {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub corner_radius: f64,
    /// Corner smoothing as a percentage, 0..=200.
    #[serde(default = "default_corner_smoothing")]
    pub corner_smoothing: f64,
    #[serde(default)]
    pub preserve_smoothing: bool,
    #[serde(default)]
    pub border_width: f64,
    #[serde(default = "default_color")]
    pub fill: String,
    #[serde(default = "default_color")]
    pub border_color: String,
}

fn default_corner_smoothing() -> f64 {
    100.0
}

fn default_color() -> String {
    "#000".to_string()
}

impl ShapeEntry {
    /// Builds the core spec for the given (border-inset) box, normalizing
    /// the percent smoothing into the solver's [0, 2] domain. Non-finite
    /// numbers fall back to their field defaults with a warning.
    pub fn spec(&self, name: &str, width: f64, height: f64) -> ShapeSpec {
        let mut percent = self.corner_smoothing;
        if !percent.is_finite() {
            tracing::warn!(
                shape = name,
                corner_smoothing = percent,
                "corner_smoothing is not a finite number, using the default"
            );
            percent = default_corner_smoothing();
        } else if !(0.0..=200.0).contains(&percent) {
            tracing::warn!(
                shape = name,
                corner_smoothing = percent,
                "corner_smoothing outside 0..=200, clamping"
            );
            percent = percent.clamp(0.0, 200.0);
        }
        let mut corner_radius = self.corner_radius;
        if !corner_radius.is_finite() {
            tracing::warn!(
                shape = name,
                corner_radius,
                "corner_radius is not a finite number, using 0"
            );
            corner_radius = 0.0;
        }
        ShapeSpec {
            width,
            height,
            corner_radius,
            smoothing: percent / 100.0,
            preserve_smoothing: self.preserve_smoothing,
        }
    }

    pub fn border_width(&self, name: &str) -> f64 {
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            tracing::warn!(
                shape = name,
                border_width = self.border_width,
                "border_width must be finite and non-negative, using 0"
            );
            0.0
        } else {
            self.border_width
        }
    }
}
