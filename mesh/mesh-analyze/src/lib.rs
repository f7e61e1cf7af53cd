//! One-call STL analysis.
//!
//! Ties the pieces together: sniff the encoding, decode triangles lazily,
//! fold them into [`GeometryMetrics`] and optionally rank the figure-scale
//! catalog against the model height.
//!
//! Two entry points are provided:
//!
//! - [`try_analyze`] returns a `Result` and is what Rust callers should use.
//! - [`analyze`] never fails. On error it returns a report with
//!   `success == false`, the error message and kind, and a zeroed metrics
//!   record, so a front end always has something to render.
//!
//! # Example
//!
//! ```
//! use mesh_analyze::analyze;
//!
//! // ASCII, but the only facet block is malformed
//! let stl = b"solid cube\nfacet normal 0 0 1\nendfacet\nendsolid cube\n";
//! let report = analyze(stl, stl.len() as u64, Some("cube.stl"));
//!
//! assert!(!report.success);
//! assert_eq!(report.error.as_deref(), Some("could not parse STL: no valid vertices found"));
//! assert_eq!(report.metrics.volume, 0.0);
//! ```
//!
//! # Concurrency
//!
//! Analysis is a pure function of its input buffer. It holds no global
//! state, so any number of buffers may be analyzed on separate threads.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod config;
mod error;

pub use config::AnalysisConfig;
pub use error::{AnalysisError, AnalyzeResult, ErrorKind};

pub use mesh_io::StlEncoding;
pub use mesh_measure::{GeometryMetrics, MeasureOptions, ScaleReport};

use mesh_io::StlTriangles;
use mesh_measure::{match_scales, measure_triangles};
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

/// How the decoder fared on the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeStats {
    /// Triangle count from the binary header; `None` for ASCII.
    pub declared_triangles: Option<u32>,
    /// The binary buffer ended before the declared count was reached.
    pub truncated: bool,
    /// ASCII facet blocks that did not match the grammar and were skipped.
    pub skipped_blocks: usize,
}

/// Result of a successful analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Detected encoding.
    pub encoding: StlEncoding,
    /// `solid` name or binary header text.
    pub label: Option<String>,
    /// Decoder diagnostics.
    pub decode: DecodeStats,
    /// Measured geometry.
    pub metrics: GeometryMetrics,
    /// Scale catalog ranking, if enabled and the model has a positive height.
    pub scale: Option<ScaleReport>,
}

/// Always-renderable analysis record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Display name supplied by the caller.
    pub file_name: Option<String>,
    /// Whether analysis succeeded.
    pub success: bool,
    /// Error message when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Error category when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    /// Detected encoding, when sniffing got that far.
    pub encoding: Option<StlEncoding>,
    /// `solid` name or binary header text.
    pub label: Option<String>,
    /// Decoder diagnostics.
    pub decode: DecodeStats,
    /// Measured geometry; zeroed on failure.
    pub metrics: GeometryMetrics,
    /// Scale catalog ranking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<ScaleReport>,
}

impl AnalysisReport {
    fn success(analysis: Analysis, file_name: Option<String>) -> Self {
        Self {
            file_name,
            success: true,
            error: None,
            error_kind: None,
            encoding: Some(analysis.encoding),
            label: analysis.label,
            decode: analysis.decode,
            metrics: analysis.metrics,
            scale: analysis.scale,
        }
    }

    /// Failed report for `err`: the message and kind, and zeroed metrics.
    ///
    /// Front ends use this for errors raised before analysis starts, such as
    /// a file that could not be read.
    #[must_use]
    pub fn failure(err: &AnalysisError, file_size: u64, file_name: Option<String>) -> Self {
        Self {
            file_name,
            success: false,
            error: Some(err.to_string()),
            error_kind: Some(err.kind()),
            encoding: None,
            label: None,
            decode: DecodeStats::default(),
            metrics: GeometryMetrics::zeroed(file_size),
            scale: None,
        }
    }
}

/// Analyze an STL buffer with the default configuration.
///
/// `file_size` is reported as-is; `name` is carried through for display.
#[must_use]
pub fn analyze(bytes: &[u8], file_size: u64, name: Option<&str>) -> AnalysisReport {
    analyze_with(bytes, file_size, name, &AnalysisConfig::default())
}

/// Analyze an STL buffer, never failing.
#[must_use]
pub fn analyze_with(
    bytes: &[u8],
    file_size: u64,
    name: Option<&str>,
    config: &AnalysisConfig,
) -> AnalysisReport {
    let _span = info_span!(
        "analyze",
        name = name.unwrap_or("<unnamed>"),
        bytes = bytes.len()
    )
    .entered();
    let file_name = name.map(str::to_owned);

    match try_analyze(bytes, config) {
        Ok(mut analysis) => {
            analysis.metrics.file_size = file_size;
            info!(
                triangles = analysis.metrics.triangle_count,
                volume = analysis.metrics.volume,
                "analysis complete"
            );
            AnalysisReport::success(analysis, file_name)
        }
        Err(err) => {
            warn!(error = %err, kind = %err.kind(), "analysis failed");
            AnalysisReport::failure(&err, file_size, file_name)
        }
    }
}

/// Analyze an STL buffer.
///
/// The reported file size is the buffer length.
///
/// # Errors
///
/// - [`AnalysisError::Format`] if the buffer is binary and under 84 bytes.
/// - [`AnalysisError::Measure`] if no triangle could be decoded, or the
///   configured vertex epsilon or scale tolerance is invalid.
pub fn try_analyze(bytes: &[u8], config: &AnalysisConfig) -> AnalyzeResult<Analysis> {
    let mut triangles = StlTriangles::from_bytes(bytes)?;
    let encoding = triangles.encoding();
    let label = triangles.label();

    let mut decode = DecodeStats::default();
    if let StlTriangles::Binary(binary) = &triangles {
        decode.declared_triangles = Some(binary.declared_count());
        decode.truncated = binary.is_truncated();
    }

    let metrics = measure_triangles(triangles.by_ref(), bytes.len() as u64, &config.measure)?;

    if let StlTriangles::Ascii(ascii) = &triangles {
        decode.skipped_blocks = ascii.skipped_blocks();
    }

    let height = metrics.model_height();
    let scale = match (config.scale_matching, height > 0.0) {
        (true, true) => Some(match_scales(height, config.scale_tolerance)?),
        (true, false) => {
            debug!("model has zero height, skipping scale matching");
            None
        }
        (false, _) => None,
    };

    Ok(Analysis {
        encoding,
        label,
        decode,
        metrics,
        scale,
    })
}
