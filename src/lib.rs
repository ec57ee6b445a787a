//! Coordinate quantization into string geocells for spatial indexing
//!
//! A geocell names the grid cell containing a coordinate as
//! `top|left|bottom|right`, each edge rendered with a fixed number of decimal
//! digits. Cells can be enumerated in square neighbourhoods around a point
//! for proximity lookups against an index keyed by geocell.

#![forbid(unsafe_code)]

/// Command-line surface, input parsing, configuration and errors
pub mod io;
/// Snapping and decimal formatting primitives
pub mod math;
/// Geocell quantization and neighbourhood enumeration
pub mod spatial;

pub use io::error::{GeoboxError, Result};
pub use spatial::{CellBounds, Location, compute, compute_grid, compute_set};
