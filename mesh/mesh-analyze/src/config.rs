//! Analysis configuration.

use mesh_measure::{DEFAULT_SCALE_TOLERANCE, MeasureOptions};
use serde::{Deserialize, Serialize};

use crate::error::AnalyzeResult;

/// Configuration for [`try_analyze`](crate::try_analyze).
///
/// Every field has a default, so a JSON document only needs the keys it
/// overrides.
///
/// # Example
///
/// ```
/// use mesh_analyze::AnalysisConfig;
///
/// let config = AnalysisConfig::from_json_str(r#"{ "scaleTolerance": 0.1 }"#).unwrap();
/// assert!(config.scale_matching);
/// assert!((config.scale_tolerance - 0.1).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisConfig {
    /// Which metrics to accumulate.
    pub measure: MeasureOptions,

    /// Rank the scale catalog against the model height.
    pub scale_matching: bool,

    /// Scale match tolerance as a fraction of the reference height.
    pub scale_tolerance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            measure: MeasureOptions::default(),
            scale_matching: true,
            scale_tolerance: DEFAULT_SCALE_TOLERANCE,
        }
    }
}

impl AnalysisConfig {
    /// Bounds, volume and area only.
    #[must_use]
    pub fn fast() -> Self {
        Self {
            measure: MeasureOptions::fast(),
            scale_matching: false,
            ..Self::default()
        }
    }

    /// Parse a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Config`](crate::AnalysisError::Config) if the
    /// document is not valid JSON or has a field of the wrong type.
    pub fn from_json_str(json: &str) -> AnalyzeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
