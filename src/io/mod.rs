//! Command-line surface, input parsing, configuration and errors

/// Command-line interface and the geocell processing pipeline
pub mod cli;
/// Format constants and parameter defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Progress reporting for point files
pub mod progress;
/// Coordinate input parsing
pub mod records;
