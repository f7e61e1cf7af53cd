//! Error types for measurement operations.

use thiserror::Error;

/// Result type alias for measurement operations.
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Errors that can occur during measurement operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasureError {
    /// No triangle was accumulated, so the bounding box never left its sentinels.
    #[error("could not parse STL: no valid vertices found")]
    NoGeometry,

    /// Invalid measurement parameters.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

impl MeasureError {
    /// Create an invalid params error.
    #[must_use]
    pub fn invalid_params(details: impl Into<String>) -> Self {
        Self::InvalidParams(details.into())
    }
}
