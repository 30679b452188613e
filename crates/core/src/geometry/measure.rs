//! Geometric measurements: centroid, area, length

use geo::{Area as GeoArea, Centroid as GeoCentroid, Euclidean, Geometry, Length, Point};

use crate::error::{Error, Result};

/// Compute the centroid of a geometry.
///
/// Defined for all geometry types; returns `None` only for empty
/// collections.
pub fn centroid(geom: &Geometry<f64>) -> Option<Point<f64>> {
    match geom {
        Geometry::Point(p) => Some(*p),
        Geometry::Line(l) => Some(l.centroid()),
        Geometry::LineString(ls) => ls.centroid(),
        Geometry::Polygon(p) => p.centroid(),
        Geometry::MultiPoint(mp) => mp.centroid(),
        Geometry::MultiLineString(mls) => mls.centroid(),
        Geometry::MultiPolygon(mp) => mp.centroid(),
        Geometry::Rect(r) => Some(r.centroid()),
        _ => None,
    }
}

/// Calculate the area of a polygonal geometry.
///
/// Returns unsigned area in CRS units squared. Points and linear
/// geometries have no area and yield `Error::GeometryType`.
pub fn area(geom: &Geometry<f64>) -> Result<f64> {
    match geom {
        Geometry::Polygon(p) => Ok(p.unsigned_area()),
        Geometry::MultiPolygon(mp) => Ok(mp.unsigned_area()),
        Geometry::Rect(r) => Ok(r.unsigned_area()),
        other => Err(Error::GeometryType {
            operation: "area",
            actual: geometry_name(other),
        }),
    }
}

/// Calculate the length of a linear or polygonal geometry.
///
/// Returns Euclidean length in CRS units. For polygons this is the
/// perimeter (exterior plus interior rings). Points have no length and
/// yield `Error::GeometryType`.
pub fn length(geom: &Geometry<f64>) -> Result<f64> {
    match geom {
        Geometry::LineString(ls) => Ok(ls.length::<Euclidean>()),
        Geometry::MultiLineString(mls) => {
            Ok(mls.0.iter().map(|ls| ls.length::<Euclidean>()).sum())
        }
        Geometry::Line(l) => {
            let dx = l.end.x - l.start.x;
            let dy = l.end.y - l.start.y;
            Ok((dx * dx + dy * dy).sqrt())
        }
        Geometry::Polygon(p) => Ok(perimeter(p)),
        Geometry::MultiPolygon(mp) => Ok(mp.0.iter().map(perimeter).sum()),
        other => Err(Error::GeometryType {
            operation: "length",
            actual: geometry_name(other),
        }),
    }
}

fn perimeter(p: &geo::Polygon<f64>) -> f64 {
    let ext = p.exterior().length::<Euclidean>();
    let int: f64 = p.interiors().iter().map(|r| r.length::<Euclidean>()).sum();
    ext + int
}

fn geometry_name(geom: &Geometry<f64>) -> &'static str {
    match geom {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
