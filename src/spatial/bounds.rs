//! Numeric cell edges and their geocell string form

use std::str::FromStr;

use crate::io::configuration::{GEOCELL_FIELDS, GEOCELL_SEPARATOR};
use crate::io::error::{GeoboxError, Result, malformed_geocell};
use crate::math::decimal::format_fixed;
use crate::math::snap::snap_to_upper_edge;

/// Four edges of a rectangular grid cell in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBounds {
    /// Upper latitude edge
    pub top: f64,
    /// Lower longitude edge
    pub left: f64,
    /// Lower latitude edge
    pub bottom: f64,
    /// Upper longitude edge
    pub right: f64,
}

impl CellBounds {
    /// Bounds of the cell containing `(lat, long)` on a grid of `cell_size`
    ///
    /// Latitude and longitude are snapped independently to the upper edge of
    /// their cell. The lower edges sit one `cell_size` below.
    pub fn containing(lat: f64, long: f64, cell_size: f64) -> Self {
        let top = snap_to_upper_edge(lat, cell_size);
        let right = snap_to_upper_edge(long, cell_size);
        Self {
            top,
            left: right - cell_size,
            bottom: top - cell_size,
            right,
        }
    }

    /// Shift by whole cells, `rows` along latitude and `cols` along longitude
    ///
    /// Each offset is computed as `cell_size * n` and added to the edge, never
    /// accumulated step by step, so ring cells agree with direct quantization.
    pub fn offset(&self, rows: i64, cols: i64, cell_size: f64) -> Self {
        let lat_offset = cell_size * rows as f64;
        let long_offset = cell_size * cols as f64;
        Self {
            top: self.top + lat_offset,
            left: self.left + long_offset,
            bottom: self.bottom + lat_offset,
            right: self.right + long_offset,
        }
    }

    /// Render as `top|left|bottom|right` with `resolution` fractional digits
    pub fn to_geocell(&self, resolution: u32) -> String {
        let fields = [self.top, self.left, self.bottom, self.right];
        let mut geocell = String::new();
        for (index, edge) in fields.iter().enumerate() {
            if index > 0 {
                geocell.push(GEOCELL_SEPARATOR);
            }
            geocell.push_str(&format_fixed(*edge, resolution));
        }
        geocell
    }

    /// Parse a geocell string back into numeric edges
    ///
    /// The result carries the decimal values as written, so edges are only as
    /// precise as the resolution the geocell was rendered with.
    ///
    /// # Errors
    ///
    /// Returns `MalformedGeocell` if the string does not have exactly four
    /// separator-delimited fields or a field is not a finite number
    pub fn parse_geocell(geocell: &str) -> Result<Self> {
        let mut edges = [0.0_f64; GEOCELL_FIELDS];
        let mut count = 0;

        for field in geocell.split(GEOCELL_SEPARATOR) {
            let Some(slot) = edges.get_mut(count) else {
                return Err(malformed_geocell(
                    &geocell,
                    &format!("expected {GEOCELL_FIELDS} fields"),
                ));
            };
            let value: f64 = field.trim().parse().map_err(|err| {
                malformed_geocell(&geocell, &format!("field '{field}' is not a number: {err}"))
            })?;
            if !value.is_finite() {
                return Err(malformed_geocell(
                    &geocell,
                    &format!("field '{field}' is not finite"),
                ));
            }
            *slot = value;
            count += 1;
        }

        if count != GEOCELL_FIELDS {
            return Err(malformed_geocell(
                &geocell,
                &format!("expected {GEOCELL_FIELDS} fields, found {count}"),
            ));
        }

        let [top, left, bottom, right] = edges;
        Ok(Self {
            top,
            left,
            bottom,
            right,
        })
    }

    /// Check whether a point lies inside the cell, edges included
    pub fn contains(&self, lat: f64, long: f64) -> bool {
        lat >= self.bottom && lat <= self.top && long >= self.left && long <= self.right
    }

    /// Latitude extent of the cell
    pub fn edge_length(&self) -> f64 {
        self.top - self.bottom
    }
}

impl FromStr for CellBounds {
    type Err = GeoboxError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_geocell(s)
    }
}
