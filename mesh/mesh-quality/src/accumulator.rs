//! Single-pass edge and vertex bookkeeping.

use hashbrown::HashMap;
use mesh_types::Triangle;

use crate::key::VertexKey;
use crate::report::MeshQuality;

/// Builds edge-use and vertex-use counts one triangle at a time.
///
/// Memory grows with the number of distinct vertices and edges, not with the
/// number of triangles pushed, so a mesh can be streamed through without
/// being materialized.
#[derive(Debug, Clone)]
pub struct QualityAccumulator {
    epsilon: f64,
    /// Maps snapped position to a compact vertex id.
    vertex_ids: HashMap<VertexKey, u32>,
    /// Raw corners that landed on each vertex id.
    vertex_uses: Vec<u32>,
    /// Maps edge (v0, v1) to the number of triangles using it. v0 < v1.
    edge_uses: HashMap<(u32, u32), u32>,
    triangle_count: usize,
    collapsed_count: usize,
}

impl QualityAccumulator {
    /// Create an empty accumulator snapping vertices to `epsilon`.
    #[must_use]
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            vertex_ids: HashMap::new(),
            vertex_uses: Vec::new(),
            edge_uses: HashMap::new(),
            triangle_count: 0,
            collapsed_count: 0,
        }
    }

    /// Grid spacing used for vertex identity.
    #[must_use]
    pub const fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Number of triangles pushed so far.
    #[must_use]
    pub const fn triangle_count(&self) -> usize {
        self.triangle_count
    }

    /// Record one triangle.
    ///
    /// A triangle whose corners collapse onto fewer than three distinct
    /// vertices is counted as degenerate and contributes no edges.
    pub fn push(&mut self, triangle: &Triangle) {
        self.triangle_count += 1;

        let epsilon = self.epsilon;
        let [a, b, c] = triangle
            .vertices()
            .map(|p| self.intern(VertexKey::quantize(&p, epsilon)));
        if a == b || b == c || c == a {
            self.collapsed_count += 1;
            return;
        }

        for edge in [normalize_edge(a, b), normalize_edge(b, c), normalize_edge(c, a)] {
            *self.edge_uses.entry(edge).or_insert(0) += 1;
        }
    }

    /// Summarize the counts gathered so far.
    #[must_use]
    pub fn finish(&self) -> MeshQuality {
        let mut open = 0;
        let mut shared = 0;
        let mut non_manifold = 0;
        for &uses in self.edge_uses.values() {
            match uses {
                1 => open += 1,
                2 => shared += 1,
                _ => non_manifold += 1,
            }
        }

        let edge_count = self.edge_uses.len();
        #[allow(clippy::cast_precision_loss)]
        // Precision: ratio is reported, not used for identity
        let watertight_ratio = if edge_count == 0 {
            0.0
        } else {
            shared as f64 / edge_count as f64
        };

        MeshQuality {
            is_watertight: edge_count > 0 && open == 0,
            is_manifold: non_manifold == 0,
            open_edge_count: open,
            non_manifold_edge_count: non_manifold,
            edge_count,
            watertight_ratio,
            duplicate_vertex_count: self.vertex_uses.iter().filter(|&&uses| uses > 1).count(),
            unique_vertex_count: self.vertex_uses.len(),
            degenerate_triangle_count: self.collapsed_count,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    // Truncation: meshes with >4B distinct vertices are unsupported
    fn intern(&mut self, key: VertexKey) -> u32 {
        let next_id = self.vertex_uses.len() as u32;
        let id = *self.vertex_ids.entry(key).or_insert(next_id);

        if id == next_id {
            self.vertex_uses.push(0);
        }
        self.vertex_uses[id as usize] += 1;
        id
    }
}

/// Compute mesh-quality signals for a sequence of triangles in one pass.
///
/// # Example
///
/// ```
/// use mesh_quality::{mesh_quality, DEFAULT_VERTEX_EPSILON};
/// use mesh_types::Triangle;
///
/// let tri = Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
/// let quality = mesh_quality(&[tri], DEFAULT_VERTEX_EPSILON);
///
/// assert!(!quality.is_watertight);
/// assert_eq!(quality.open_edge_count, 3);
/// ```
#[must_use]
pub fn mesh_quality<'a>(triangles: impl IntoIterator<Item = &'a Triangle>, epsilon: f64) -> MeshQuality {
    let mut acc = QualityAccumulator::new(epsilon);
    for triangle in triangles {
        acc.push(triangle);
    }
    acc.finish()
}

/// Normalize edge direction so v0 < v1.
#[inline]
fn normalize_edge(v0: u32, v1: u32) -> (u32, u32) {
    if v0 < v1 { (v0, v1) } else { (v1, v0) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_VERTEX_EPSILON;
    use approx::assert_relative_eq;
    use mesh_types::unit_cube;

    fn quality_of(triangles: &[Triangle]) -> MeshQuality {
        mesh_quality(triangles, DEFAULT_VERTEX_EPSILON)
    }

    #[test]
    fn closed_cube_is_watertight() {
        let q = quality_of(&unit_cube());

        assert!(q.is_watertight);
        assert!(q.is_manifold);
        assert_eq!(q.open_edge_count, 0);
        assert_eq!(q.non_manifold_edge_count, 0);
        assert_eq!(q.edge_count, 18);
        assert_eq!(q.unique_vertex_count, 8);
        assert_relative_eq!(q.watertight_ratio, 1.0);
        assert!(!q.has_issues());
    }

    #[test]
    fn cube_missing_one_triangle_has_three_open_edges() {
        let mut cube = unit_cube();
        cube.pop();
        let q = quality_of(&cube);

        assert!(!q.is_watertight);
        assert_eq!(q.open_edge_count, 3);
        assert_eq!(q.non_manifold_edge_count, 0);
        assert_relative_eq!(q.watertight_ratio, 15.0 / 18.0);
        assert!(q.has_issues());
    }

    #[test]
    fn duplicate_vertices_count_shared_corners() {
        // Every cube corner is written once per incident facet.
        let q = quality_of(&unit_cube());
        assert_eq!(q.duplicate_vertex_count, 8);

        let single = Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert_eq!(quality_of(&[single]).duplicate_vertex_count, 0);
    }

    #[test]
    fn jittered_corners_still_share_edges() {
        let a = Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let b = Triangle::from_arrays([1.000_000_1, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 0.999_999_9, 0.0]);
        let q = quality_of(&[a, b]);

        assert_eq!(q.unique_vertex_count, 4);
        assert_eq!(q.edge_count, 5);
        assert_eq!(q.open_edge_count, 4);
    }

    #[test]
    fn three_triangles_on_one_edge_are_non_manifold() {
        let tris = [
            Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, -1.0, 0.0]),
            Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ];
        let q = quality_of(&tris);

        assert_eq!(q.non_manifold_edge_count, 1);
        assert!(!q.is_manifold);
        assert_eq!(q.open_edge_count, 6);
    }

    #[test]
    fn collapsed_triangle_contributes_no_edges() {
        let sliver = Triangle::from_arrays([0.0, 0.0, 0.0], [0.0, 0.0, 0.000_000_1], [1.0, 0.0, 0.0]);
        let q = quality_of(&[sliver]);

        assert_eq!(q.degenerate_triangle_count, 1);
        assert_eq!(q.edge_count, 0);
        assert!(!q.is_watertight);
        assert_relative_eq!(q.watertight_ratio, 0.0);
    }

    #[test]
    fn empty_input() {
        let q = quality_of(&[]);
        assert_eq!(q.edge_count, 0);
        assert_eq!(q.unique_vertex_count, 0);
        assert!(!q.is_watertight);
    }

    #[test]
    fn winding_does_not_affect_edge_sharing() {
        let cube: Vec<_> = unit_cube()
            .iter()
            .enumerate()
            .map(|(i, t)| if i % 2 == 0 { t.reversed() } else { *t })
            .collect();
        assert!(quality_of(&cube).is_watertight);
    }

    #[test]
    fn accumulator_tracks_triangle_count() {
        let mut acc = QualityAccumulator::new(DEFAULT_VERTEX_EPSILON);
        for tri in &unit_cube() {
            acc.push(tri);
        }
        assert_eq!(acc.triangle_count(), 12);
        assert_relative_eq!(acc.epsilon(), DEFAULT_VERTEX_EPSILON);
    }
}
