//! Error types and context management for geocell operations
//!
//! Quantizing and expanding cells never fail. Errors arise only at the edges
//! of the crate: reading coordinates, validating grid parameters and parsing
//! geocell strings back into numbers.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all fallible geocell operations
#[derive(Debug)]
pub enum GeoboxError {
    /// Grid or expansion parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Coordinate input could not be turned into a usable point
    InvalidCoordinate {
        /// Raw text that was rejected
        input: String,
        /// One-based line number when read from a file
        line: Option<usize>,
        /// Explanation of why the input was rejected
        reason: String,
    },

    /// Geocell string does not have four numeric pipe-separated fields
    MalformedGeocell {
        /// The offending geocell text
        geocell: String,
        /// Description of what is wrong with it
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GeoboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidCoordinate {
                input,
                line: Some(line),
                reason,
            } => {
                write!(f, "Invalid coordinate '{input}' on line {line}: {reason}")
            }
            Self::InvalidCoordinate {
                input,
                line: None,
                reason,
            } => {
                write!(f, "Invalid coordinate '{input}': {reason}")
            }
            Self::MalformedGeocell { geocell, reason } => {
                write!(f, "Malformed geocell '{geocell}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GeoboxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for geocell results
pub type Result<T> = std::result::Result<T, GeoboxError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// One-based input line being processed
    pub line: Option<usize>,
    /// File being read
    pub path: Option<PathBuf>,
}

/// Enriches error messages with input position information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the line number context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the line number applied
    fn with_line(self, line: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<GeoboxError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                GeoboxError::InvalidCoordinate { line, .. } => {
                    if context.line.is_some() {
                        *line = context.line;
                    }
                }
                GeoboxError::FileSystem { path, .. } => {
                    if let Some(context_path) = context.path {
                        *path = context_path;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_line(self, line: usize) -> Result<T> {
        self.with_context(ErrorContext {
            line: Some(line),
            ..Default::default()
        })
    }
}

impl From<std::io::Error> for GeoboxError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GeoboxError {
    GeoboxError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid coordinate error without line information
pub fn invalid_coordinate(input: &impl ToString, reason: &impl ToString) -> GeoboxError {
    GeoboxError::InvalidCoordinate {
        input: input.to_string(),
        line: None,
        reason: reason.to_string(),
    }
}

/// Create a malformed geocell error
pub fn malformed_geocell(geocell: &impl ToString, reason: &impl ToString) -> GeoboxError {
    GeoboxError::MalformedGeocell {
        geocell: geocell.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for a known path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> GeoboxError {
    GeoboxError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
