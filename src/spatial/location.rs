//! Quantized locations and the coordinate-to-geocell function
//!
//! A [`Location`] pairs the raw coordinate with the grid it was quantized on
//! and the resulting geocell. It can only be built through [`compute`], so the
//! geocell always matches its source fields.

use std::fmt;

use crate::math::snap::cell_size;
use crate::spatial::bounds::CellBounds;
use crate::spatial::neighbors;

/// A coordinate quantized onto a geocell grid
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    lat: f64,
    long: f64,
    resolution: u32,
    slice: u32,
    geocell: String,
}

impl Location {
    /// Quantize a coordinate, same as [`compute`]
    pub fn compute(lat: f64, long: f64, resolution: u32, slice: u32) -> Self {
        let size = cell_size(resolution, slice);
        let geocell = CellBounds::containing(lat, long, size).to_geocell(resolution);
        Self {
            lat,
            long,
            resolution,
            slice,
            geocell,
        }
    }

    /// Original, unquantized latitude
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Original, unquantized longitude
    pub const fn long(&self) -> f64 {
        self.long
    }

    /// Fractional digits used in the geocell
    pub const fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Cell edge length in units of `10^-resolution` degrees
    pub const fn slice(&self) -> u32 {
        self.slice
    }

    /// Identifier of the containing cell
    pub fn geocell(&self) -> &str {
        &self.geocell
    }

    /// Cell edge length in degrees
    pub fn cell_size(&self) -> f64 {
        cell_size(self.resolution, self.slice)
    }

    /// Numeric edges of the containing cell
    pub fn bounds(&self) -> CellBounds {
        CellBounds::containing(self.lat, self.long, self.cell_size())
    }

    /// Geocells of every cell within `tier` cells of this one, itself included
    ///
    /// See [`neighbors::compute_set`].
    pub fn compute_set(&self, tier: u32) -> Vec<String> {
        neighbors::compute_set(self, tier)
    }

    /// Consume the location, keeping only its geocell
    pub fn into_geocell(self) -> String {
        self.geocell
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.geocell)
    }
}

/// Quantize `(lat, long)` into the geocell of its containing cell
///
/// The grid has cells `slice * 10^-resolution` degrees on a side and every
/// edge is rendered with `resolution` fractional digits, giving
/// `top|left|bottom|right`.
///
/// `slice` must be at least one and both coordinates finite. Other inputs do
/// not panic but produce meaningless geocells (`NaN` fields for a zero slice).
pub fn compute(lat: f64, long: f64, resolution: u32, slice: u32) -> Location {
    Location::compute(lat, long, resolution, slice)
}
