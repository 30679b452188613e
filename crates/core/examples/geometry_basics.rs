//! Example: Basic vector geometry workflow
//!
//! This example demonstrates how to use reitti_core:
//! 1. Build points from coordinates
//! 2. Build a line and a polygon from those points
//! 3. Query centroid, area and length

use geo::Geometry;
use reitti_core::geometry::{
    area, build_line, build_point, build_polygon, centroid, length, BuildParams, Vertex,
};

fn main() -> reitti_core::Result<()> {
    let params = BuildParams::default();

    let p1 = build_point(2.2, 4.2)?;
    let p2 = build_point(7.2, -25.1)?;
    let p3 = build_point(9.26, -2.456)?;

    let line = build_line(&[p1, p2, p3], &params)?;
    println!("Line with {} vertices", line.0.len());

    // Polygons accept a mix of points and raw coordinate pairs
    let poly = build_polygon(
        &[
            Vertex::Point(p1),
            Vertex::Coord(7.2, -25.1),
            Vertex::Coord(9.26, -2.456),
        ],
        &params,
    )?;

    let line_geom = Geometry::LineString(line);
    let poly_geom = Geometry::Polygon(poly);

    if let Some(c) = centroid(&line_geom) {
        println!("Line centroid: ({:.4}, {:.4})", c.x(), c.y());
    }
    println!("Line length: {:.4}", length(&line_geom)?);
    println!("Polygon area: {:.4}", area(&poly_geom)?);
    println!("Polygon perimeter: {:.4}", length(&poly_geom)?);

    // Area of a line is a type error, not a silent zero
    match area(&line_geom) {
        Ok(_) => unreachable!(),
        Err(e) => println!("As expected: {}", e),
    }

    Ok(())
}
