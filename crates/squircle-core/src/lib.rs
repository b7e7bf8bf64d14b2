//! Squircle outline geometry.
//!
//! Two pure stages: [`CurveParams::solve`] turns a [`ShapeSpec`] into the
//! control geometry of one corner, and [`assemble`] replicates that corner
//! around the box into a closed [`Path`] of drawing commands. [`outline`]
//! runs both.

pub mod curve;
pub mod outline;
pub mod path;
pub mod spec;

pub use curve::{CurveParams, MAX_SMOOTHING};
pub use outline::{assemble, outline};
pub use path::{Path, PathCommand, Point2};
pub use spec::ShapeSpec;
