//! Axis-aligned bounding box.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Triangle;

/// An axis-aligned bounding box (AABB).
///
/// Starts out [empty](Aabb::empty) with `(+∞, −∞)` sentinels on every axis and
/// is widened monotonically as vertices stream in. Once at least one point
/// has been included, `min <= max` holds on every axis.
///
/// # Example
///
/// ```
/// use mesh_types::{Aabb, Point3};
///
/// let aabb = Aabb::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 10.0, 10.0),
/// );
///
/// assert_eq!(aabb.size(), Point3::new(10.0, 10.0, 10.0).coords);
/// assert!(aabb.contains(&Point3::new(5.0, 5.0, 5.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner (smallest x, y, z values).
    pub min: Point3<f64>,
    /// Maximum corner (largest x, y, z values).
    pub max: Point3<f64>,
}

impl Aabb {
    /// Create a new AABB from minimum and maximum corners.
    ///
    /// The corners are automatically corrected if min > max for any axis.
    #[must_use]
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self {
            min: Point3::new(min.x.min(max.x), min.y.min(max.y), min.z.min(max.z)),
            max: Point3::new(min.x.max(max.x), min.y.max(max.y), min.z.max(max.z)),
        }
    }

    /// Create an empty (invalid) AABB.
    ///
    /// An empty AABB has min > max, which is the starting point for expanding
    /// to include points and the marker for "no vertices seen".
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Aabb, Point3};
    ///
    /// let mut aabb = Aabb::empty();
    /// assert!(aabb.is_empty());
    ///
    /// aabb.expand_to_include(&Point3::new(1.0, 2.0, 3.0));
    /// assert!(!aabb.is_empty());
    /// ```
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Check if the AABB is empty (no point has been included).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Get the size (dimensions) of the AABB.
    ///
    /// Returns a zero vector for empty AABBs.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        if self.is_empty() {
            return Vector3::zeros();
        }
        self.max - self.min
    }

    /// Check if a point is inside the AABB (inclusive on every face).
    #[inline]
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Expand the AABB to include a point.
    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Expand the AABB to include all three vertices of a triangle.
    pub fn include_triangle(&mut self, triangle: &Triangle) {
        self.expand_to_include(&triangle.v0);
        self.expand_to_include(&triangle.v1);
        self.expand_to_include(&triangle.v2);
    }

    /// Express a point as a percentage of the box span on each axis.
    ///
    /// `(p - min) / (max - min) * 100`. An axis with zero span reports 0%.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Aabb, Point3};
    ///
    /// let aabb = Aabb::new(Point3::new(0.0, 0.0, 5.0), Point3::new(10.0, 4.0, 5.0));
    /// let rel = aabb.relative_position(&Point3::new(2.5, 2.0, 5.0));
    /// assert!((rel.x - 25.0).abs() < 1e-12);
    /// assert!((rel.y - 50.0).abs() < 1e-12);
    /// assert_eq!(rel.z, 0.0);
    /// ```
    #[must_use]
    pub fn relative_position(&self, point: &Point3<f64>) -> Vector3<f64> {
        let size = self.size();
        let offset = point - self.min;
        let percent = |offset: f64, span: f64| {
            if span > 0.0 {
                offset / span * 100.0
            } else {
                0.0
            }
        };
        Vector3::new(
            percent(offset.x, size.x),
            percent(offset.y, size.y),
            percent(offset.z, size.z),
        )
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}
