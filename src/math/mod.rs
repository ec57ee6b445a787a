//! Numeric primitives shared by the quantizer and the neighbour expander

/// Fixed-point decimal formatting of cell edges
pub mod decimal;
/// Grid snapping and cell size computation
pub mod snap;
