//! CSV point reader
//!
//! Expects a header row with `x` and `y` columns (matched case-insensitively,
//! in any position). Other columns are ignored.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use morph_core::Point;

use crate::reader::{IoError, IoResult};

/// Read the `x`/`y` columns of a CSV file
pub fn read_points(path: &Path) -> IoResult<Vec<Point>> {
    if !path.exists() {
        return Err(IoError::FileNotFound(path.display().to_string()));
    }

    let file =
        File::open(path).map_err(|e| IoError::OpenFailed(format!("{}: {}", path.display(), e)))?;
    read_points_from(BufReader::new(file))
}

/// Read the `x`/`y` columns from any CSV source
pub fn read_points_from<R: Read>(source: R) -> IoResult<Vec<Point>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| IoError::InvalidFormat(e.to_string()))?
        .clone();
    let x_index = column_index(&headers, "x")?;
    let y_index = column_index(&headers, "y")?;

    let mut points = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;
        let x = parse_field(&record, x_index, row, "x")?;
        let y = parse_field(&record, y_index, row, "y")?;
        points.push(Point::new(x, y));
    }

    Ok(points)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> IoResult<usize> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| IoError::ColumnNotFound(name.to_string()))
}

fn parse_field(record: &csv::StringRecord, index: usize, row: usize, column: &str) -> IoResult<f64> {
    let raw = record.get(index).unwrap_or_default();
    raw.parse::<f64>().map_err(|_| IoError::InvalidValue {
        row,
        column: column.to_string(),
        value: raw.to_string(),
    })
}
