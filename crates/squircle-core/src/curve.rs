use std::f64::consts::SQRT_2;

use serde::Serialize;

use crate::ShapeSpec;

/// Upper bound of the smoothing domain (200%).
pub const MAX_SMOOTHING: f64 = 2.0;

/// Control geometry for one corner, shared by all four through symmetry.
///
/// `a`, `b`, `c`, `d` are the successive control offsets of the corner's two
/// cubic sections, `p` the straight-edge inset the corner consumes from each
/// adjacent edge, `arc_section_length` the chord of the central circular arc.
/// After every solve, `p == a + b + c + d + arc_section_length`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub p: f64,
    pub arc_section_length: f64,
    pub effective_radius: f64,
}

impl CurveParams {
    /// Solve the corner control geometry for `spec`.
    ///
    /// Pure and total: out-of-range inputs are corrected locally (radius and
    /// smoothing clamps) and the worst outcome is an all-zero parameter set
    /// describing a sharp rectangle.
    #[must_use]
    pub fn solve(spec: &ShapeSpec) -> Self {
        // One corner may consume at most half the shortest side before it
        // collides with its neighbor.
        let budget = spec.width.min(spec.height) / 2.0;
        let radius = spec
            .corner_radius
            .max(0.0)
            .min(spec.width / 2.0)
            .min(spec.height / 2.0);
        let mut smoothing = spec.smoothing.clamp(0.0, MAX_SMOOTHING);

        let mut p = (1.0 + smoothing) * radius;
        if !spec.preserve_smoothing {
            // Smoothing is a no-op at radius 0, and budget / radius is
            // undefined there.
            if radius > 0.0 {
                let max_smoothing = (budget / radius - 1.0).min(MAX_SMOOTHING);
                smoothing = smoothing.min(max_smoothing);
            }
            p = p.min(budget);
        }

        // Up to 100% smoothing the arc shrinks linearly from a quarter
        // circle to nothing; past 100% the measure goes negative, an
        // empirical continuation without a closed-form derivation.
        let arc_measure = if smoothing <= 1.0 {
            90.0 * (1.0 - smoothing)
        } else {
            -45.0 * (smoothing - 1.0)
        };
        let arc_section_length = if arc_measure >= 0.0 {
            (arc_measure / 2.0).to_radians().sin() * radius * SQRT_2
        } else {
            radius * SQRT_2 * (1.0 + arc_measure.abs() / 90.0)
        };

        let angle_alpha = (90.0 - arc_measure).abs() / 2.0;
        let p3_to_p4 = radius * (angle_alpha / 2.0).to_radians().tan();
        let angle_beta = if smoothing <= 1.0 {
            45.0 * smoothing
        } else {
            45.0 + 45.0 * (smoothing - 1.0)
        };

        let c = p3_to_p4 * angle_beta.to_radians().cos();
        let d = c * angle_beta.to_radians().tan();
        let mut b = (p - arc_section_length - c - d) / 3.0;
        let mut a = 2.0 * b;

        if spec.preserve_smoothing && p > budget {
            // Shrink only the straight cubic allowance; the arc and the
            // requested beta shape stay untouched.
            let remaining = budget - d - arc_section_length - c;
            let min_a = remaining / 6.0;
            b = b.min(remaining - min_a);
            a = remaining - b;
            p = p.min(budget);
        }

        Self {
            a,
            b,
            c,
            d,
            p,
            arc_section_length,
            effective_radius: radius,
        }
    }
}
