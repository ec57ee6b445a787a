//! Square neighbourhood expansion around a quantized location
//!
//! A tier `t` neighbourhood is the `(2t+1) x (2t+1)` block of cells centred on
//! the origin cell. Offsets along latitude (`x`) form the outer axis and
//! offsets along longitude (`y`) the inner one.

use ndarray::Array2;

use crate::spatial::bounds::CellBounds;
use crate::spatial::location::Location;

/// Number of cells in a tier `tier` neighbourhood
pub const fn ring_size(tier: u32) -> usize {
    let side = side_length(tier);
    side * side
}

const fn side_length(tier: u32) -> usize {
    2 * tier as usize + 1
}

/// Origin edges and grid parameters shared by every cell of one expansion
///
/// Edges are recomputed from the location's stored coordinate rather than
/// parsed from its geocell, so offsets are applied at full precision and only
/// rounded when formatted.
struct Expansion {
    origin: CellBounds,
    cell_size: f64,
    resolution: u32,
}

impl Expansion {
    fn new(location: &Location) -> Self {
        Self {
            origin: location.bounds(),
            cell_size: location.cell_size(),
            resolution: location.resolution(),
        }
    }

    fn geocell_at(&self, x: i64, y: i64) -> String {
        self.origin
            .offset(x, y, self.cell_size)
            .to_geocell(self.resolution)
    }
}

/// Geocells of every cell within `tier` cells of `location`, itself included
///
/// Returns exactly `(2*tier+1)^2` distinct entries in row-major order over the
/// latitude offset then the longitude offset. The order is not sorted; callers
/// that compare sets should sort first. Tier zero yields the origin geocell.
pub fn compute_set(location: &Location, tier: u32) -> Vec<String> {
    let expansion = Expansion::new(location);
    let mut geocells = Vec::with_capacity(ring_size(tier));
    let tier = i64::from(tier);

    for x in -tier..=tier {
        for y in -tier..=tier {
            geocells.push(expansion.geocell_at(x, y));
        }
    }
    geocells
}

/// Geocells of the neighbourhood as a matrix indexed by `[x + tier, y + tier]`
///
/// The centre element `[tier, tier]` is the origin geocell, and reading the
/// matrix in row-major order gives the same sequence as [`compute_set`].
pub fn compute_grid(location: &Location, tier: u32) -> Array2<String> {
    let expansion = Expansion::new(location);
    let side = side_length(tier);
    let tier = i64::from(tier);

    Array2::from_shape_fn((side, side), |(row, col)| {
        expansion.geocell_at(row as i64 - tier, col as i64 - tier)
    })
}
