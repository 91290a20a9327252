//! Error types for the geo crate.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur during geo operations.
///
/// Every variant is raised at the call that caused it and leaves the state of
/// the receiver untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// A point with non-finite or out-of-range coordinates
    #[error("Invalid point: ({latitude}, {longitude})")]
    InvalidPoint {
        /// Offending latitude in degrees
        latitude: f64,
        /// Offending longitude in degrees
        longitude: f64,
    },

    /// A vector with a missing or invalid endpoint
    #[error("Invalid vector: both endpoints must be valid points")]
    InvalidVector,

    /// A sort direction other than `asc` or `desc`
    #[error("Invalid sort direction: {0:?} (expected \"asc\" or \"desc\")")]
    InvalidSortDirection(String),
}

impl From<std::convert::Infallible> for GeoError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

/// Error code for integration with callers' error reporting.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Invalid point
    InvalidPoint = 10001,
    /// Invalid vector
    InvalidVector = 10002,
    /// Invalid sort direction
    InvalidSortDirection = 10003,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::InvalidPoint { .. } => GeoErrorCode::InvalidPoint,
            GeoError::InvalidVector => GeoErrorCode::InvalidVector,
            GeoError::InvalidSortDirection(_) => GeoErrorCode::InvalidSortDirection,
        }
    }
}
