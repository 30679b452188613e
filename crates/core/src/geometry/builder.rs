//! Geometry construction with input validation
//!
//! Builds points, lines and polygons from heterogeneous coordinate input.
//! Invalid elements (non-finite ordinates) are either skipped with a warning
//! or fail the whole call, depending on [`BuildMode`].

use geo_types::{LineString, Point, Polygon};
use tracing::warn;

use crate::error::{Error, Result};

/// A candidate vertex for line or polygon construction.
///
/// Input data may mix point geometries and raw coordinate pairs; both
/// resolve to the same (x, y) pair at build time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Vertex {
    /// An existing point geometry
    Point(Point<f64>),
    /// A raw (x, y) coordinate pair
    Coord(f64, f64),
}

impl Vertex {
    /// The (x, y) pair of this vertex
    pub fn xy(&self) -> (f64, f64) {
        match self {
            Vertex::Point(p) => (p.x(), p.y()),
            Vertex::Coord(x, y) => (*x, *y),
        }
    }

    /// True if both ordinates are finite numbers
    pub fn is_valid(&self) -> bool {
        let (x, y) = self.xy();
        x.is_finite() && y.is_finite()
    }
}

impl From<Point<f64>> for Vertex {
    fn from(p: Point<f64>) -> Self {
        Vertex::Point(p)
    }
}

impl From<(f64, f64)> for Vertex {
    fn from((x, y): (f64, f64)) -> Self {
        Vertex::Coord(x, y)
    }
}

/// Policy for handling invalid input elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    /// Skip invalid elements with a warning and build from the rest
    #[default]
    Lenient,
    /// Fail the whole call on the first invalid element
    Strict,
}

/// Parameters for geometry construction
#[derive(Debug, Clone, Default)]
pub struct BuildParams {
    /// How to treat invalid elements (default: lenient)
    pub mode: BuildMode,
}

impl BuildParams {
    /// Parameters with strict validation
    pub fn strict() -> Self {
        Self {
            mode: BuildMode::Strict,
        }
    }
}

/// Create a point geometry from an (x, y) pair.
///
/// Returns `Error::InvalidElement` if either ordinate is not finite.
pub fn build_point(x: f64, y: f64) -> Result<Point<f64>> {
    if !(x.is_finite() && y.is_finite()) {
        return Err(Error::InvalidElement { index: 0, x, y });
    }
    Ok(Point::new(x, y))
}

/// Create a line geometry from a sequence of vertices.
///
/// Input order is preserved. At least 2 valid vertices are required;
/// otherwise `Error::InsufficientElements` is returned.
///
/// # Arguments
/// * `vertices` - Candidate vertices (points or coordinate pairs)
/// * `params` - Validation policy
pub fn build_line<V>(vertices: &[V], params: &BuildParams) -> Result<LineString<f64>>
where
    V: Into<Vertex> + Copy,
{
    let coords = checked_coords(vertices, params)?;
    if coords.len() < 2 {
        return Err(Error::InsufficientElements {
            needed: 2,
            got: coords.len(),
        });
    }
    Ok(LineString::from(coords))
}

/// Create a polygon geometry from a sequence of vertices.
///
/// Input order is preserved and the exterior ring is closed by the polygon
/// type itself. At least 3 valid vertices are required; otherwise
/// `Error::InsufficientElements` is returned.
///
/// # Arguments
/// * `vertices` - Candidate vertices (points or coordinate pairs)
/// * `params` - Validation policy
pub fn build_polygon<V>(vertices: &[V], params: &BuildParams) -> Result<Polygon<f64>>
where
    V: Into<Vertex> + Copy,
{
    let coords = checked_coords(vertices, params)?;
    if coords.len() < 3 {
        return Err(Error::InsufficientElements {
            needed: 3,
            got: coords.len(),
        });
    }
    Ok(Polygon::new(LineString::from(coords), vec![]))
}

/// Resolve vertices to (x, y) pairs, applying the validation policy.
fn checked_coords<V>(vertices: &[V], params: &BuildParams) -> Result<Vec<(f64, f64)>>
where
    V: Into<Vertex> + Copy,
{
    let mut coords = Vec::with_capacity(vertices.len());
    for (index, v) in vertices.iter().enumerate() {
        let vertex: Vertex = (*v).into();
        if vertex.is_valid() {
            coords.push(vertex.xy());
        } else {
            let (x, y) = vertex.xy();
            match params.mode {
                BuildMode::Lenient => {
                    warn!("skipping element {} with non-finite coordinate ({}, {})", index, x, y);
                }
                BuildMode::Strict => {
                    return Err(Error::InvalidElement { index, x, y });
                }
            }
        }
    }
    Ok(coords)
}
