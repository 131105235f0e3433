//! SVG renderer for floor plans
//!
//! This module takes a FloorPlan and produces an SVG string with one band
//! per floor and one card per room, colored by status.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_svg, render_svg_with_stylesheet};
