//! The geometry metrics record.

use mesh_quality::MeshQuality;
use mesh_types::{Aabb, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Dimensions;

/// Everything measured about one model.
///
/// Lengths are in the file's units, which STL convention takes to be mm.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GeometryMetrics {
    /// Triangles that contributed to the metrics.
    pub triangle_count: usize,

    /// Decoded triangles dropped because a coordinate was NaN or infinite.
    pub rejected_triangle_count: usize,

    /// Extent along each axis.
    pub dimensions: Dimensions,

    /// Axis-aligned bounding box.
    pub bounds: Aabb,

    /// Enclosed volume, `|signed_volume|` (mm³).
    pub volume: f64,

    /// Sum of origin tetrahedron volumes; negative when the winding is inverted.
    pub signed_volume: f64,

    /// Total surface area (mm²).
    pub surface_area: f64,

    /// Size of the source file in bytes.
    pub file_size: u64,

    /// Area-weighted surface centroid.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub center_of_mass: Option<CenterOfMass>,

    /// Watertightness and topology diagnostics.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub mesh_quality: Option<MeshQuality>,

    /// Per-triangle area statistics.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub triangle_areas: Option<TriangleAreaStats>,
}

impl GeometryMetrics {
    /// A record with every numeric field zeroed.
    ///
    /// Returned alongside an error so a caller always has something to render.
    #[must_use]
    pub fn zeroed(file_size: u64) -> Self {
        Self {
            triangle_count: 0,
            rejected_triangle_count: 0,
            dimensions: Dimensions::default(),
            bounds: Aabb::new(Point3::origin(), Point3::origin()),
            volume: 0.0,
            signed_volume: 0.0,
            surface_area: 0.0,
            file_size,
            center_of_mass: None,
            mesh_quality: None,
            triangle_areas: None,
        }
    }

    /// Orientation-agnostic model height: the largest of the three extents.
    #[must_use]
    pub const fn model_height(&self) -> f64 {
        self.dimensions.max_extent()
    }

    /// Check whether the facets are wound inward (negative signed volume).
    #[must_use]
    pub fn is_inside_out(&self) -> bool {
        self.signed_volume < 0.0
    }
}

/// Center of mass in absolute and bounding-box-relative terms.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CenterOfMass {
    /// Position in model coordinates.
    pub absolute: Point3<f64>,
    /// Position as a percentage of the bounding-box span on each axis.
    pub relative_percent: Vector3<f64>,
}

/// Min / max / mean of per-triangle areas (mm²).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleAreaStats {
    /// Smallest triangle area.
    pub min: f64,
    /// Largest triangle area.
    pub max: f64,
    /// Mean triangle area.
    pub avg: f64,
}

impl std::fmt::Display for GeometryMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Geometry:")?;
        writeln!(f, "  Triangles: {}", self.triangle_count)?;
        if self.rejected_triangle_count > 0 {
            writeln!(f, "  Rejected triangles: {}", self.rejected_triangle_count)?;
        }
        writeln!(
            f,
            "  Dimensions: {:.2} x {:.2} x {:.2} mm",
            self.dimensions.x, self.dimensions.y, self.dimensions.z
        )?;
        writeln!(f, "  Volume: {:.2} mm³", self.volume)?;
        writeln!(f, "  Surface area: {:.2} mm²", self.surface_area)?;
        writeln!(f, "  File size: {} bytes", self.file_size)?;

        if let Some(com) = &self.center_of_mass {
            writeln!(
                f,
                "  Center of mass: ({:.2}, {:.2}, {:.2}) [{:.1}%, {:.1}%, {:.1}%]",
                com.absolute.x,
                com.absolute.y,
                com.absolute.z,
                com.relative_percent.x,
                com.relative_percent.y,
                com.relative_percent.z
            )?;
        }
        if let Some(areas) = &self.triangle_areas {
            writeln!(
                f,
                "  Triangle area: min {:.4}, max {:.4}, avg {:.4} mm²",
                areas.min, areas.max, areas.avg
            )?;
        }
        if self.is_inside_out() {
            writeln!(f, "  Warning: facets are wound inward")?;
        }
        if let Some(quality) = &self.mesh_quality {
            write!(f, "{quality}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_record_has_no_geometry() {
        let metrics = GeometryMetrics::zeroed(42);
        assert_eq!(metrics.triangle_count, 0);
        assert_eq!(metrics.file_size, 42);
        assert_eq!(metrics.volume, 0.0);
        assert_eq!(metrics.model_height(), 0.0);
        assert!(!metrics.is_inside_out());
        assert!(metrics.bounds.min.coords.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn display_mentions_inverted_winding() {
        let metrics = GeometryMetrics {
            signed_volume: -1.0,
            volume: 1.0,
            ..GeometryMetrics::zeroed(0)
        };
        let text = metrics.to_string();
        assert!(text.contains("wound inward"));
        assert!(text.contains("Volume: 1.00"));
    }
}
