//! Geocell quantization and neighbourhood enumeration
//!
//! This module contains the spatial core of the crate:
//! - Numeric cell bounds and the geocell string format
//! - Quantized locations
//! - Square neighbourhood expansion

/// Cell edges and geocell formatting/parsing
pub mod bounds;
/// Quantized locations and the quantizer
pub mod location;
/// Neighbourhood expansion around a location
pub mod neighbors;

pub use bounds::CellBounds;
pub use location::{Location, compute};
pub use neighbors::{compute_grid, compute_set};
