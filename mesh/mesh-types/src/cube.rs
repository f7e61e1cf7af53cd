//! Reference solid used by tests, benchmarks and doc examples.

use crate::Triangle;

/// Corner positions of the unit cube, indexed by the face table below.
const CORNERS: [[f64; 3]; 8] = [
    [0.0, 0.0, 0.0], // 0
    [1.0, 0.0, 0.0], // 1
    [1.0, 1.0, 0.0], // 2
    [0.0, 1.0, 0.0], // 3
    [0.0, 0.0, 1.0], // 4
    [1.0, 0.0, 1.0], // 5
    [1.0, 1.0, 1.0], // 6
    [0.0, 1.0, 1.0], // 7
];

/// 12 triangles (2 per face), CCW winding when viewed from outside.
const FACES: [[usize; 3]; 12] = [
    // Bottom (z=0), normal -Z
    [0, 2, 1],
    [0, 3, 2],
    // Top (z=1), normal +Z
    [4, 5, 6],
    [4, 6, 7],
    // Front (y=0), normal -Y
    [0, 1, 5],
    [0, 5, 4],
    // Back (y=1), normal +Y
    [3, 7, 6],
    [3, 6, 2],
    // Left (x=0), normal -X
    [0, 4, 7],
    [0, 7, 3],
    // Right (x=1), normal +X
    [1, 2, 6],
    [1, 6, 5],
];

/// Create a closed, watertight unit cube spanning `[0, 1]` on every axis.
///
/// Volume is 1 and surface area is 6. Triangles are wound outward, so the
/// summed signed volume is positive.
///
/// # Example
///
/// ```
/// use mesh_types::unit_cube;
///
/// let cube = unit_cube();
/// assert_eq!(cube.len(), 12);
/// let volume: f64 = cube.iter().map(|t| t.signed_volume()).sum();
/// assert!((volume - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn unit_cube() -> Vec<Triangle> {
    FACES
        .iter()
        .map(|&[a, b, c]| Triangle::from_arrays(CORNERS[a], CORNERS[b], CORNERS[c]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unit_cube_surface_area() {
        let area: f64 = unit_cube().iter().map(Triangle::area).sum();
        assert_relative_eq!(area, 6.0, epsilon = 1e-12);
    }

    #[test]
    fn unit_cube_normals_point_outward() {
        for tri in unit_cube() {
            let n = tri.normal_unnormalized();
            let outward = tri.centroid() - nalgebra::Point3::new(0.5, 0.5, 0.5);
            assert!(n.dot(&outward) > 0.0);
        }
    }
}
