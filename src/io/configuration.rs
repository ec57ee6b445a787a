//! Geocell format constants and runtime configuration defaults

// Wire format of a geocell, relied on byte-for-byte by index consumers
/// Separator between the four edges of a geocell
pub const GEOCELL_SEPARATOR: char = '|';
/// Number of edges in a geocell (top, left, bottom, right)
pub const GEOCELL_FIELDS: usize = 4;

// Default values for configurable parameters
/// Default number of fractional digits in a geocell
pub const DEFAULT_RESOLUTION: u32 = 5;
/// Default cell edge length in resolution units
pub const DEFAULT_SLICE: u32 = 10;

// f64 carries roughly 15-17 significant digits
/// Maximum accepted resolution
pub const MAX_RESOLUTION: u32 = 15;

// Safety limit to prevent excessive output (a tier-500 ring is ~1M cells)
/// Maximum accepted neighbour tier
pub const MAX_TIER: u32 = 500;

// Input file settings
/// Lines starting with this character are skipped
pub const COMMENT_PREFIX: char = '#';
/// Separator between latitude and longitude on an input line
pub const COORDINATE_SEPARATOR: char = ',';

// Progress bar display settings
/// Number of input points above which a progress bar is shown
pub const PROGRESS_THRESHOLD: usize = 1000;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
