//! Error types for STL analysis.

use mesh_io::IoError;
use mesh_measure::MeasureError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for analysis operations.
pub type AnalyzeResult<T> = Result<T, AnalysisError>;

/// Errors that can occur while analyzing an STL buffer.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The buffer is not a decodable STL file.
    #[error(transparent)]
    Format(#[from] IoError),

    /// Decoding produced no usable triangle.
    #[error(transparent)]
    Measure(#[from] MeasureError),

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The input file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path as given by the caller.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl AnalysisError {
    /// Create a read error for `path`.
    #[must_use]
    pub fn read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Coarse category of this error, stable across message changes.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Format(_) => ErrorKind::Format,
            Self::Measure(MeasureError::NoGeometry) => ErrorKind::NoGeometry,
            Self::Measure(MeasureError::InvalidParams(_)) | Self::Config(_) => {
                ErrorKind::InvalidInput
            }
            Self::Read { .. } => ErrorKind::Read,
        }
    }
}

/// Category of an [`AnalysisError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// Structurally invalid file, e.g. a binary buffer under 84 bytes.
    Format,
    /// No triangle could be decoded.
    NoGeometry,
    /// Bad parameters or configuration.
    InvalidInput,
    /// The file could not be read at all.
    Read,
}

impl ErrorKind {
    /// Stable identifier used in reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Format => "format",
            Self::NoGeometry => "noGeometry",
            Self::InvalidInput => "invalidInput",
            Self::Read => "read",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
