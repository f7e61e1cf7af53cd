//! Figure-scale matching.
//!
//! Collectible figures are sold at fixed scales of a human figure. Given the
//! height of a model, [`match_scales`] ranks every catalog scale by how close
//! its reference height is and flags the ones within tolerance.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{MeasureError, MeasureResult};
use crate::{Dimensions, GeometryMetrics};

/// Default match tolerance as a fraction of the reference height.
pub const DEFAULT_SCALE_TOLERANCE: f64 = 0.15;

const MM_PER_INCH: f64 = 25.4;

/// One figure scale and the height (mm) of an 1800 mm figure at that scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScaleCatalogEntry {
    /// Scale label, e.g. `"1/6"`.
    pub label: &'static str,
    /// Height of the reference figure at this scale.
    pub reference_height_mm: f64,
}

impl ScaleCatalogEntry {
    const fn new(label: &'static str, reference_height_mm: f64) -> Self {
        Self {
            label,
            reference_height_mm,
        }
    }
}

/// Figure scales from 1/4 down to 1/72, largest first.
pub const SCALE_CATALOG: [ScaleCatalogEntry; 14] = [
    ScaleCatalogEntry::new("1/4", 450.0),
    ScaleCatalogEntry::new("1/6", 300.0),
    ScaleCatalogEntry::new("1/7", 257.0),
    ScaleCatalogEntry::new("1/8", 225.0),
    ScaleCatalogEntry::new("1/9", 200.0),
    ScaleCatalogEntry::new("1/10", 180.0),
    ScaleCatalogEntry::new("1/12", 150.0),
    ScaleCatalogEntry::new("1/18", 100.0),
    ScaleCatalogEntry::new("1/24", 75.0),
    ScaleCatalogEntry::new("1/32", 56.0),
    ScaleCatalogEntry::new("1/35", 51.0),
    ScaleCatalogEntry::new("1/43", 42.0),
    ScaleCatalogEntry::new("1/48", 37.5),
    ScaleCatalogEntry::new("1/72", 25.0),
];

/// A catalog entry evaluated against one model height.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScaleMatch {
    /// The catalog entry.
    pub entry: ScaleCatalogEntry,
    /// Reference height in centimeters.
    pub height_cm: f64,
    /// Reference height in inches.
    pub height_in: f64,
    /// `|model height - reference height|` in mm.
    pub difference_mm: f64,
    /// Largest difference still counted as a match.
    pub tolerance_mm: f64,
    /// Model height is within tolerance of the reference height.
    pub is_match: bool,
    /// Factor that resizes the model to this scale, `reference / model`.
    pub ratio: f64,
}

impl ScaleMatch {
    fn evaluate(entry: ScaleCatalogEntry, model_height: f64, tolerance_fraction: f64) -> Self {
        let reference = entry.reference_height_mm;
        let difference_mm = (model_height - reference).abs();
        let tolerance_mm = reference * tolerance_fraction;
        Self {
            entry,
            height_cm: reference / 10.0,
            height_in: reference / MM_PER_INCH,
            difference_mm,
            tolerance_mm,
            is_match: difference_mm <= tolerance_mm,
            ratio: reference / model_height,
        }
    }

    /// Metrics the model would have if resized to this scale.
    ///
    /// Lengths scale by `ratio`, areas by `ratio²` and volumes by `ratio³`.
    #[must_use]
    pub fn scaled(&self, metrics: &GeometryMetrics) -> ScaledMetrics {
        let r = self.ratio;
        ScaledMetrics {
            label: self.entry.label,
            ratio: r,
            dimensions: metrics.dimensions.scaled(r),
            surface_area: metrics.surface_area * r * r,
            volume: metrics.volume * r * r * r,
        }
    }
}

/// Linear, area and volume metrics after resizing to a catalog scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScaledMetrics {
    /// Scale label.
    pub label: &'static str,
    /// Linear factor applied.
    pub ratio: f64,
    /// Resized extents.
    pub dimensions: Dimensions,
    /// Resized surface area.
    pub surface_area: f64,
    /// Resized volume.
    pub volume: f64,
}

/// Every catalog entry evaluated against a model height.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScaleReport {
    /// Height the catalog was compared against (mm).
    pub model_height_mm: f64,
    /// Tolerance fraction used.
    pub tolerance_fraction: f64,
    /// One entry per catalog scale, in catalog order.
    pub matches: Vec<ScaleMatch>,
    /// Closest scale; the first in catalog order wins a tie.
    pub best_match: Option<ScaleMatch>,
}

impl ScaleReport {
    /// Entries within tolerance, in catalog order.
    pub fn within_tolerance(&self) -> impl Iterator<Item = &ScaleMatch> {
        self.matches.iter().filter(|m| m.is_match)
    }
}

/// Rank [`SCALE_CATALOG`] against a model height.
///
/// # Errors
///
/// Returns [`MeasureError::InvalidParams`] if `model_height` is not a
/// positive finite number or `tolerance_fraction` is negative or not finite.
///
/// # Example
///
/// ```
/// use mesh_measure::{match_scales, DEFAULT_SCALE_TOLERANCE};
///
/// let report = match_scales(300.0, DEFAULT_SCALE_TOLERANCE).unwrap();
/// let best = report.best_match.unwrap();
///
/// assert_eq!(best.entry.label, "1/6");
/// assert_eq!(best.difference_mm, 0.0);
/// assert!(best.is_match);
/// ```
pub fn match_scales(model_height: f64, tolerance_fraction: f64) -> MeasureResult<ScaleReport> {
    match_scales_in(&SCALE_CATALOG, model_height, tolerance_fraction)
}

/// Rank an arbitrary catalog against a model height.
///
/// # Errors
///
/// Same as [`match_scales`].
pub fn match_scales_in(
    catalog: &[ScaleCatalogEntry],
    model_height: f64,
    tolerance_fraction: f64,
) -> MeasureResult<ScaleReport> {
    if !model_height.is_finite() || model_height <= 0.0 {
        return Err(MeasureError::invalid_params(format!(
            "model height must be positive, got {model_height}"
        )));
    }
    if !tolerance_fraction.is_finite() || tolerance_fraction < 0.0 {
        return Err(MeasureError::invalid_params(format!(
            "tolerance fraction must be non-negative, got {tolerance_fraction}"
        )));
    }

    let matches: Vec<_> = catalog
        .iter()
        .map(|&entry| ScaleMatch::evaluate(entry, model_height, tolerance_fraction))
        .collect();

    let mut best_match: Option<ScaleMatch> = None;
    for candidate in &matches {
        if best_match.is_none_or(|best| candidate.difference_mm < best.difference_mm) {
            best_match = Some(*candidate);
        }
    }

    Ok(ScaleReport {
        model_height_mm: model_height,
        tolerance_fraction,
        matches,
        best_match,
    })
}
