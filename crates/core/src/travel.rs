//! Travel-time matrix records
//!
//! Reads semicolon-delimited, latin-1 encoded travel-time tables (the
//! Helsinki region travel time matrix format) and derives origin /
//! destination geometries per row.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use geo_types::{LineString, Point};
use serde::Deserialize;
use tracing::warn;

use crate::error::Result;
use crate::geometry::{build_line, build_point, BuildParams};

/// One row of a travel-time matrix.
///
/// Coordinates are origin (`from_x`, `from_y`) and destination
/// (`to_x`, `to_y`) in the CRS of the source file. Route attributes are
/// optional since not every export carries them.
#[derive(Debug, Clone, Deserialize)]
pub struct TravelRecord {
    pub from_id: i64,
    pub to_id: i64,
    pub from_x: f64,
    pub from_y: f64,
    pub to_x: f64,
    pub to_y: f64,
    #[serde(default)]
    pub total_route_time: Option<f64>,
    #[serde(default)]
    pub route_distance: Option<f64>,
}

impl TravelRecord {
    /// Origin point of this record
    pub fn origin(&self) -> Result<Point<f64>> {
        build_point(self.from_x, self.from_y)
    }

    /// Destination point of this record
    pub fn destination(&self) -> Result<Point<f64>> {
        build_point(self.to_x, self.to_y)
    }

    /// Straight line from origin to destination
    pub fn od_line(&self) -> Result<LineString<f64>> {
        let points = [self.origin()?, self.destination()?];
        build_line(&points, &BuildParams::default())
    }
}

/// Read a travel-time table from a semicolon-delimited, latin-1 file.
pub fn read_travel_times<P: AsRef<Path>>(path: P) -> Result<Vec<TravelRecord>> {
    let file = File::open(path.as_ref())?;
    from_latin1_reader(file)
}

/// Read a travel-time table from any latin-1 byte source.
///
/// Latin-1 maps each byte to the Unicode scalar of the same value, so the
/// decode is a direct byte-to-char widening.
pub fn from_latin1_reader<R: Read>(mut reader: R) -> Result<Vec<TravelRecord>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text: String = bytes.iter().map(|&b| b as char).collect();

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let record: TravelRecord = row?;
        records.push(record);
    }
    Ok(records)
}

/// Build origin-destination lines for every record.
///
/// Records with non-finite coordinates are skipped with a warning, so one
/// bad row does not invalidate the whole table.
pub fn od_lines(records: &[TravelRecord]) -> Vec<LineString<f64>> {
    records
        .iter()
        .filter_map(|r| match r.od_line() {
            Ok(line) => Some(line),
            Err(e) => {
                warn!("skipping record {} -> {}: {}", r.from_id, r.to_id, e);
                None
            }
        })
        .collect()
}

/// Arithmetic mean of the Euclidean lengths of all origin-destination lines.
///
/// Returns `None` for an empty table or when every record is invalid.
pub fn mean_line_length(records: &[TravelRecord]) -> Option<f64> {
    let lines = od_lines(records);
    if lines.is_empty() {
        return None;
    }
    let total: f64 = lines
        .iter()
        .map(|ls| {
            use geo::{Euclidean, Length};
            ls.length::<Euclidean>()
        })
        .sum();
    Some(total / lines.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: (f64, f64), to: (f64, f64)) -> TravelRecord {
        TravelRecord {
            from_id: 1,
            to_id: 2,
            from_x: from.0,
            from_y: from.1,
            to_x: to.0,
            to_y: to.1,
            total_route_time: None,
            route_distance: None,
        }
    }

    #[test]
    fn test_od_line_length() {
        let r = record((0.0, 0.0), (3.0, 4.0));
        let line = r.od_line().unwrap();
        assert_eq!(line.0.len(), 2);
        use geo::{Euclidean, Length};
        assert!((line.length::<Euclidean>() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_od_line_rejects_non_finite() {
        let r = record((f64::NAN, 0.0), (3.0, 4.0));
        assert!(r.od_line().is_err());
    }

    #[test]
    fn test_mean_line_length() {
        let records = vec![
            record((0.0, 0.0), (3.0, 4.0)),  // length 5
            record((0.0, 0.0), (0.0, 10.0)), // length 10
        ];
        let mean = mean_line_length(&records).unwrap();
        assert!((mean - 7.5).abs() < 1e-10);
    }

    #[test]
    fn test_mean_line_length_skips_invalid_rows() {
        let records = vec![
            record((0.0, 0.0), (3.0, 4.0)),
            record((f64::INFINITY, 0.0), (1.0, 1.0)),
        ];
        let mean = mean_line_length(&records).unwrap();
        assert!((mean - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_mean_line_length_empty() {
        assert!(mean_line_length(&[]).is_none());
    }
}
