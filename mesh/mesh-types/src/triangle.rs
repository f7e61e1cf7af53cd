//! Triangle type for geometric calculations.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle with concrete vertex positions.
///
/// This is the unit the decoder produces and the metrics engine consumes.
/// The facet normal stored in STL files is advisory and is not kept; the
/// geometric normal is derived from the winding instead.
///
/// Winding is **counter-clockwise (CCW) when viewed from outside**
/// (normal points away from the solid).
///
/// # Example
///
/// ```
/// use mesh_types::{Triangle, Point3};
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
///
/// // Area of a right triangle with legs 1 and 1
/// assert!((tri.area() - 0.5).abs() < 1e-10);
///
/// // Normal points in +Z direction, with length twice the area
/// let normal = tri.normal_unnormalized();
/// assert!((normal.z - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// First vertex.
    pub v0: Point3<f64>,
    /// Second vertex.
    pub v1: Point3<f64>,
    /// Third vertex.
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Create a new triangle from three points.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Create a triangle from coordinate arrays.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::Triangle;
    ///
    /// let tri = Triangle::from_arrays(
    ///     [0.0, 0.0, 0.0],
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    /// );
    /// assert_eq!(tri.v1.x, 1.0);
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_arrays(v0: [f64; 3], v1: [f64; 3], v2: [f64; 3]) -> Self {
        Self {
            v0: Point3::new(v0[0], v0[1], v0[2]),
            v1: Point3::new(v1[0], v1[1], v1[2]),
            v2: Point3::new(v2[0], v2[1], v2[2]),
        }
    }

    /// Create a triangle from single-precision coordinates, widening to `f64`.
    ///
    /// This is how binary STL records enter the pipeline.
    #[inline]
    #[must_use]
    pub fn from_f32_arrays(v0: [f32; 3], v1: [f32; 3], v2: [f32; 3]) -> Self {
        let widen = |v: [f32; 3]| Point3::new(f64::from(v[0]), f64::from(v[1]), f64::from(v[2]));
        Self {
            v0: widen(v0),
            v1: widen(v1),
            v2: widen(v2),
        }
    }

    /// Compute the (unnormalized) face normal via cross product.
    ///
    /// The direction follows the right-hand rule with CCW winding.
    /// The magnitude equals twice the triangle's area.
    #[inline]
    #[must_use]
    pub fn normal_unnormalized(&self) -> Vector3<f64> {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        e1.cross(&e2)
    }

    /// Compute the area of the triangle: half the magnitude of the cross
    /// product of two edge vectors.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Triangle, Point3};
    ///
    /// // Right triangle with legs 3 and 4
    /// let tri = Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(3.0, 0.0, 0.0),
    ///     Point3::new(0.0, 4.0, 0.0),
    /// );
    /// assert!((tri.area() - 6.0).abs() < 1e-10);
    /// ```
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.normal_unnormalized().norm() * 0.5
    }

    /// Signed volume of the tetrahedron spanned by this triangle and the origin.
    ///
    /// `(v0 · (v1 × v2)) / 6`. Summed over a closed, outward-wound mesh this
    /// yields the enclosed volume; for an open mesh the sum is deterministic
    /// but not a meaningful volume.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::Triangle;
    ///
    /// let tri = Triangle::from_arrays([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]);
    /// assert!((tri.signed_volume() - 1.0 / 6.0).abs() < 1e-12);
    /// assert!((tri.reversed().signed_volume() + 1.0 / 6.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let (v0, v1, v2) = (&self.v0, &self.v1, &self.v2);

        // Using mul_add for better numerical accuracy
        let cross = Vector3::new(
            v1.y.mul_add(v2.z, -(v1.z * v2.y)),
            v1.z.mul_add(v2.x, -(v1.x * v2.z)),
            v1.x.mul_add(v2.y, -(v1.y * v2.x)),
        );
        v0.z.mul_add(cross.z, v0.x.mul_add(cross.x, v0.y * cross.y)) / 6.0
    }

    /// Compute the centroid (mean of the three vertices).
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Triangle, Point3};
    ///
    /// let tri = Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(3.0, 0.0, 0.0),
    ///     Point3::new(0.0, 3.0, 0.0),
    /// );
    /// let c = tri.centroid();
    /// assert!((c.x - 1.0).abs() < 1e-10);
    /// assert!((c.y - 1.0).abs() < 1e-10);
    /// ```
    #[inline]
    #[must_use]
    pub fn centroid(&self) -> Point3<f64> {
        Point3::new(
            (self.v0.x + self.v1.x + self.v2.x) / 3.0,
            (self.v0.y + self.v1.y + self.v2.y) / 3.0,
            (self.v0.z + self.v1.z + self.v2.z) / 3.0,
        )
    }

    /// Check whether every coordinate is finite.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.vertices()
            .iter()
            .all(|p| p.x.is_finite() && p.y.is_finite() && p.z.is_finite())
    }

    /// Get vertices as an array.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> [Point3<f64>; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Create a new triangle with reversed winding (flipped normal).
    #[inline]
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            v0: self.v0,
            v1: self.v2,
            v2: self.v1,
        }
    }
}
