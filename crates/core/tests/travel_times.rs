//! Integration tests for the travel-time table pipeline:
//! parse a semicolon-delimited latin-1 table, derive per-row geometries,
//! and aggregate line lengths.

use geo::Geometry;
use reitti_core::geometry::{centroid, length};
use reitti_core::travel::{from_latin1_reader, mean_line_length, od_lines};

/// A small table in the Helsinki travel-time matrix layout. The extra
/// columns (`fromid_to_id`, `route_number`, `at`) are present in the real
/// export and must be ignored by the reader.
fn fixture() -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(
        b"from_id;to_id;fromid_to_id;route_number;at;from_x;from_y;to_x;to_y;total_route_time\n",
    );
    bytes.extend_from_slice(b"5785640;5785641;57856405785641;1;08:00;0.0;0.0;3.0;4.0;42.5\n");
    bytes.extend_from_slice(b"5785642;5785643;57856425785643;2;08:00;1.0;1.0;1.0;11.0;37.0\n");
    bytes.extend_from_slice(b"5785644;5785645;57856445785645;3;08:00;2.0;2.0;2.0;2.0;0.0\n");
    bytes
}

/// Same table with a latin-1 encoded text column (0xF6 = 'ö').
fn fixture_latin1() -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"from_id;to_id;from_name;from_x;from_y;to_x;to_y\n");
    bytes.extend_from_slice(b"1;2;T\xF6\xF6l\xF6;0.0;0.0;3.0;4.0\n");
    bytes
}

#[test]
fn test_parse_travel_table() {
    let records = from_latin1_reader(fixture().as_slice()).expect("parse failed");
    assert_eq!(records.len(), 3);

    assert_eq!(records[0].from_id, 5785640);
    assert_eq!(records[0].to_id, 5785641);
    assert_eq!(records[0].from_x, 0.0);
    assert_eq!(records[0].to_y, 4.0);
    assert_eq!(records[0].total_route_time, Some(42.5));
    assert_eq!(records[0].route_distance, None);
}

#[test]
fn test_parse_latin1_text_column() {
    let records = from_latin1_reader(fixture_latin1().as_slice()).expect("parse failed");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].to_x, 3.0);
}

#[test]
fn test_row_geometries() {
    let records = from_latin1_reader(fixture().as_slice()).unwrap();

    let origin = records[1].origin().unwrap();
    assert_eq!(origin.x(), 1.0);
    assert_eq!(origin.y(), 1.0);

    let line = records[0].od_line().unwrap();
    let l = length(&Geometry::LineString(line.clone())).unwrap();
    assert!((l - 5.0).abs() < 1e-10);

    let c = centroid(&Geometry::LineString(line)).unwrap();
    assert!((c.x() - 1.5).abs() < 1e-10);
    assert!((c.y() - 2.0).abs() < 1e-10);
}

#[test]
fn test_mean_length_matches_analytic() {
    let records = from_latin1_reader(fixture().as_slice()).unwrap();

    // The third row is degenerate (origin == destination): length 0.
    let lines = od_lines(&records);
    assert_eq!(lines.len(), 3);

    // Lengths 5, 10, 0 -> mean 5
    let mean = mean_line_length(&records).unwrap();
    assert!((mean - 5.0).abs() < 1e-10);
}
