//! Coordinate input parsing for single points and point files

use std::fs;
use std::path::Path;

use crate::io::configuration::{COMMENT_PREFIX, COORDINATE_SEPARATOR};
use crate::io::error::{Result, WithContext, file_system_error, invalid_coordinate};
use crate::spatial::location::Location;

/// A coordinate pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub long: f64,
}

impl Point {
    /// Create a point from latitude and longitude
    pub const fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }

    /// Create a point, rejecting non-finite components
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinate` if either component is `NaN` or infinite
    pub fn finite(lat: f64, long: f64) -> Result<Self> {
        if !lat.is_finite() || !long.is_finite() {
            return Err(invalid_coordinate(
                &format!("{lat}{COORDINATE_SEPARATOR}{long}"),
                &"coordinates must be finite",
            ));
        }
        Ok(Self::new(lat, long))
    }

    /// Quantize this point onto a grid
    pub fn locate(&self, resolution: u32, slice: u32) -> Location {
        Location::compute(self.lat, self.long, resolution, slice)
    }
}

/// Parse a `LAT,LONG` pair, tolerating whitespace around each number
///
/// # Errors
///
/// Returns `InvalidCoordinate` if the separator is missing, either side is not
/// a number, or either number is not finite
pub fn parse_point(text: &str) -> Result<Point> {
    let Some((lat_text, long_text)) = text.split_once(COORDINATE_SEPARATOR) else {
        return Err(invalid_coordinate(
            &text,
            &format!("expected LAT{COORDINATE_SEPARATOR}LONG"),
        ));
    };

    let lat = parse_component(text, lat_text, "latitude")?;
    let long = parse_component(text, long_text, "longitude")?;
    Ok(Point::new(lat, long))
}

fn parse_component(text: &str, component: &str, name: &str) -> Result<f64> {
    let value = component
        .trim()
        .parse::<f64>()
        .map_err(|err| invalid_coordinate(&text, &format!("{name} is not a number: {err}")))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid_coordinate(&text, &format!("{name} must be finite")))
    }
}

/// Parse one point per line, skipping blank lines and comments
///
/// # Errors
///
/// Returns the first `InvalidCoordinate`, stamped with its one-based line number
pub fn parse_points(content: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }
        points.push(parse_point(line).with_line(index + 1)?);
    }
    Ok(points)
}

/// Read and parse a point file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, or the first
/// `InvalidCoordinate` found in its contents
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let content =
        fs::read_to_string(path).map_err(|err| file_system_error(path, "read", err))?;
    parse_points(&content)
}
