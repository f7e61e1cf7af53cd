//! Vertex quantization.

use mesh_types::Point3;

/// Default grid spacing for treating two corners as the same vertex (mm).
pub const DEFAULT_VERTEX_EPSILON: f64 = 1e-5;

/// A vertex position snapped to a grid of spacing `epsilon`.
///
/// Each coordinate is mapped to `round(c / epsilon)`. Two points share a key
/// when they round to the same cell, which absorbs the float jitter that
/// exporters introduce when writing the same corner for adjacent facets.
///
/// # Example
///
/// ```
/// use mesh_quality::VertexKey;
/// use mesh_types::Point3;
///
/// let a = VertexKey::quantize(&Point3::new(1.0, 2.0, 3.0), 1e-5);
/// let b = VertexKey::quantize(&Point3::new(1.000_000_1, 2.0, 2.999_999_9), 1e-5);
/// assert_eq!(a, b);
///
/// let c = VertexKey::quantize(&Point3::new(1.001, 2.0, 3.0), 1e-5);
/// assert_ne!(a, c);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexKey(pub [i64; 3]);

impl VertexKey {
    /// Snap a point onto the grid.
    ///
    /// Coordinates beyond the `i64` range saturate; NaN maps to 0. Callers
    /// are expected to filter non-finite triangles first.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: saturating float-to-int cast is the intended behavior
    pub fn quantize(point: &Point3<f64>, epsilon: f64) -> Self {
        let snap = |c: f64| (c / epsilon).round() as i64;
        Self([snap(point.x), snap(point.y), snap(point.z)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_coordinates_round_to_nearest() {
        let key = VertexKey::quantize(&Point3::new(-0.4e-5, -1.4e-5, -1.6e-5), 1e-5);
        assert_eq!(key, VertexKey([0, -1, -2]));
    }

    #[test]
    fn coarser_epsilon_merges_more() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(0.0004, 0.0, 0.0);
        assert_ne!(VertexKey::quantize(&a, 1e-5), VertexKey::quantize(&b, 1e-5));
        assert_eq!(VertexKey::quantize(&a, 1e-3), VertexKey::quantize(&b, 1e-3));
    }

    #[test]
    fn huge_coordinates_saturate() {
        let key = VertexKey::quantize(&Point3::new(1e300, -1e300, 0.0), 1e-5);
        assert_eq!(key, VertexKey([i64::MAX, i64::MIN, 0]));
    }
}
