//! Measurement options.

use mesh_quality::DEFAULT_VERTEX_EPSILON;

use crate::error::{MeasureError, MeasureResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Triangle count above which mesh-quality analysis is skipped by default.
pub const DEFAULT_QUALITY_TRIANGLE_LIMIT: usize = 5_000_000;

/// Which optional metrics to accumulate.
///
/// Bounds, volume and area are always computed. Everything else can be
/// switched off to save time or memory.
///
/// # Example
///
/// ```
/// use mesh_measure::MeasureOptions;
///
/// let options = MeasureOptions {
///     center_of_mass: false,
///     ..MeasureOptions::default()
/// };
/// assert!(options.mesh_quality);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct MeasureOptions {
    /// Compute the area-weighted center of mass.
    pub center_of_mass: bool,

    /// Compute min / max / mean triangle area.
    pub triangle_area_stats: bool,

    /// Build edge and vertex maps for watertightness diagnostics.
    pub mesh_quality: bool,

    /// Stop mesh-quality analysis once this many triangles have been seen.
    ///
    /// The edge map grows with the mesh, so very large inputs are measured
    /// without it. `None` means no limit.
    pub quality_triangle_limit: Option<usize>,

    /// Grid spacing (mm) used to decide that two corners are the same vertex.
    pub vertex_epsilon: f64,
}

impl Default for MeasureOptions {
    fn default() -> Self {
        Self {
            center_of_mass: true,
            triangle_area_stats: true,
            mesh_quality: true,
            quality_triangle_limit: Some(DEFAULT_QUALITY_TRIANGLE_LIMIT),
            vertex_epsilon: DEFAULT_VERTEX_EPSILON,
        }
    }
}

impl MeasureOptions {
    /// Only bounds, volume and area; constant memory regardless of input size.
    #[must_use]
    pub fn fast() -> Self {
        Self {
            center_of_mass: false,
            triangle_area_stats: false,
            mesh_quality: false,
            ..Self::default()
        }
    }

    /// Check that the options describe a usable measurement.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::InvalidParams`] if `vertex_epsilon` is not a
    /// positive finite number.
    pub fn validate(&self) -> MeasureResult<()> {
        if !self.vertex_epsilon.is_finite() || self.vertex_epsilon <= 0.0 {
            return Err(MeasureError::invalid_params(format!(
                "vertex epsilon must be positive, got {}",
                self.vertex_epsilon
            )));
        }
        Ok(())
    }

    /// Set whether to run mesh-quality analysis.
    #[must_use]
    pub const fn with_mesh_quality(mut self, enabled: bool) -> Self {
        self.mesh_quality = enabled;
        self
    }

    /// Set the quality triangle limit.
    #[must_use]
    pub const fn with_quality_triangle_limit(mut self, limit: Option<usize>) -> Self {
        self.quality_triangle_limit = limit;
        self
    }

    /// Set the vertex snapping epsilon.
    #[must_use]
    pub const fn with_vertex_epsilon(mut self, epsilon: f64) -> Self {
        self.vertex_epsilon = epsilon;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_everything() {
        let options = MeasureOptions::default();
        assert!(options.center_of_mass);
        assert!(options.triangle_area_stats);
        assert!(options.mesh_quality);
        assert_eq!(
            options.quality_triangle_limit,
            Some(DEFAULT_QUALITY_TRIANGLE_LIMIT)
        );
    }

    #[test]
    fn fast_disables_optional_metrics() {
        let options = MeasureOptions::fast();
        assert!(!options.center_of_mass);
        assert!(!options.triangle_area_stats);
        assert!(!options.mesh_quality);
    }

    #[test]
    fn validate_vertex_epsilon() {
        assert!(MeasureOptions::default().validate().is_ok());
        assert!(MeasureOptions::fast().with_vertex_epsilon(0.0).validate().is_err());
        assert!(MeasureOptions::fast().with_vertex_epsilon(f64::NAN).validate().is_err());
        assert!(MeasureOptions::fast().with_vertex_epsilon(-1.0).validate().is_err());
    }

    #[test]
    fn builders() {
        let options = MeasureOptions::fast()
            .with_mesh_quality(true)
            .with_quality_triangle_limit(None)
            .with_vertex_epsilon(1e-3);
        assert!(options.mesh_quality);
        assert_eq!(options.quality_triangle_limit, None);
        assert!((options.vertex_epsilon - 1e-3).abs() < f64::EPSILON);
    }
}
