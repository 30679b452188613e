//! # Reitti Core
//!
//! Vector geometry construction and travel-time line analysis.
//!
//! This crate provides:
//! - Validated construction of point, line and polygon geometries from
//!   heterogeneous coordinate input
//! - Geometric measurements: centroid, area, length
//! - A reader and row-wise geometry derivation for semicolon-delimited
//!   travel-time tables

pub mod error;
pub mod geometry;
pub mod travel;

pub use error::{Error, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{
        area, build_line, build_point, build_polygon, centroid, length, BuildMode, BuildParams,
        Vertex,
    };
    pub use crate::travel::{mean_line_length, od_lines, read_travel_times, TravelRecord};
}
