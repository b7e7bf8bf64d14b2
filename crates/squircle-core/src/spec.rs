use serde::{Deserialize, Serialize};

/// Input for one squircle layout pass.
///
/// `width` and `height` are the box the outline must fit, with any stroke
/// inset already subtracted by the caller. `smoothing` lives in the
/// normalized [0, 2] domain (0%-200%); percentage-based callers divide by
/// 100 before building the spec.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeSpec {
    pub width: f64,
    pub height: f64,
    /// Requested corner radius; clamped to half the shortest side.
    pub corner_radius: f64,
    /// Corner smoothing in [0, 2]. Out-of-range values are clamped.
    pub smoothing: f64,
    /// Keep the requested smoothing shape on boxes too small for it,
    /// redistributing segment lengths instead of clamping the smoothing.
    /// Extreme inputs may then self-intersect.
    #[serde(default)]
    pub preserve_smoothing: bool,
}

impl ShapeSpec {
    /// A spec with no smoothing: a classic rounded rectangle.
    #[must_use]
    pub fn new(width: f64, height: f64, corner_radius: f64) -> Self {
        Self {
            width,
            height,
            corner_radius,
            smoothing: 0.0,
            preserve_smoothing: false,
        }
    }
}
