//! Grid snapping onto the upper edge of the containing cell
//!
//! The snap uses truncating remainder semantics (`%` on floats, the sign of the
//! remainder follows the dividend) together with an explicit sign branch. The
//! two combine into a convention that differs on either side of zero: a
//! non-negative coordinate lying exactly on a grid line snaps to the next line
//! above it, while a negative coordinate on a grid line snaps to itself.
//! Geocell identity downstream depends on this convention, so it is kept as is.

use num_traits::Float;

/// Snap a coordinate to the upper (top or right) edge of its cell
///
/// `cell_size` must be positive and `coord` finite. Outside of that the result
/// is unspecified (a zero cell size yields `NaN`).
pub fn snap_to_upper_edge<T: Float>(coord: T, cell_size: T) -> T {
    let remainder = coord % cell_size;
    if coord.is_sign_negative() {
        coord - remainder
    } else {
        coord - remainder + cell_size
    }
}

/// Edge length in degrees of a cell spanning `slice` units of `10^-resolution`
///
/// The base unit is computed as a reciprocal before scaling so that cell sizes,
/// and therefore every derived edge, are bit-identical across implementations
/// keyed on the same geocell strings.
pub fn cell_size(resolution: u32, slice: u32) -> f64 {
    let unit = 1.0 / pow10(resolution);
    f64::from(slice) * unit
}

/// Correctly rounded `10^exponent`
///
/// Products of tens are only exact up to 1e22, so the power is read from its
/// decimal literal instead, which rounds once like a table of powers would.
fn pow10(exponent: u32) -> f64 {
    format!("1e{exponent}")
        .parse()
        .unwrap_or(f64::INFINITY)
}
