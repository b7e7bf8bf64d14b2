//! SVG writers for squircle outlines.

pub mod svg;
