//! Vector geometry construction and measurement
//!
//! - Builder: validated point / line / polygon construction
//! - Measure: centroid, area, length

mod builder;
mod measure;

pub use builder::{build_line, build_point, build_polygon, BuildMode, BuildParams, Vertex};
pub use measure::{area, centroid, length};
