//! Fixed-point decimal rendering of cell edges

/// Format a value with exactly `digits` fractional digits
///
/// Rounds to nearest from the exact binary value rather than truncating, so
/// `38.999_999_999_999_996` renders as `39.0` at one digit. Negative zero keeps
/// its sign (`-0.0`), matching the boundary convention of the snap.
pub fn format_fixed(value: f64, digits: u32) -> String {
    format!("{value:.prec$}", prec = digits as usize)
}
