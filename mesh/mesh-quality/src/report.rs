//! Mesh-quality report.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Watertightness and topology signals for a triangle soup.
///
/// Edges and vertices are identified after snapping corners onto the grid
/// described by [`VertexKey`](crate::VertexKey).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MeshQuality {
    /// No open edges (and at least one edge exists).
    pub is_watertight: bool,
    /// No edge is used by more than two triangles.
    pub is_manifold: bool,
    /// Edges used by exactly one triangle.
    pub open_edge_count: usize,
    /// Edges used by three or more triangles.
    pub non_manifold_edge_count: usize,
    /// Distinct edges.
    pub edge_count: usize,
    /// Fraction of distinct edges used by exactly two triangles.
    pub watertight_ratio: f64,
    /// Snapped positions onto which more than one raw corner collapsed.
    pub duplicate_vertex_count: usize,
    /// Distinct snapped positions.
    pub unique_vertex_count: usize,
    /// Triangles whose corners collapsed onto fewer than three vertices.
    pub degenerate_triangle_count: usize,
}

impl MeshQuality {
    /// Check if any topology problem was found.
    ///
    /// Duplicate vertices are expected in STL and are not an issue.
    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.is_watertight || !self.is_manifold || self.degenerate_triangle_count > 0
    }
}

impl std::fmt::Display for MeshQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let yes_no = |b: bool| if b { "Yes" } else { "No" };

        writeln!(f, "Mesh Quality:")?;
        writeln!(f, "  Watertight: {}", yes_no(self.is_watertight))?;
        writeln!(f, "  Manifold: {}", yes_no(self.is_manifold))?;
        writeln!(
            f,
            "  Edges: {} ({:.1}% shared by two faces)",
            self.edge_count,
            self.watertight_ratio * 100.0
        )?;
        writeln!(
            f,
            "  Vertices: {} unique, {} duplicated",
            self.unique_vertex_count, self.duplicate_vertex_count
        )?;

        if self.open_edge_count > 0 {
            writeln!(f, "  Open edges: {}", self.open_edge_count)?;
        }
        if self.non_manifold_edge_count > 0 {
            writeln!(f, "  Non-manifold edges: {}", self.non_manifold_edge_count)?;
        }
        if self.degenerate_triangle_count > 0 {
            writeln!(f, "  Degenerate triangles: {}", self.degenerate_triangle_count)?;
        }

        Ok(())
    }
}
