//! Bounding-box dimensions.

use mesh_types::Aabb;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Extent of a model along each axis, in mm.
///
/// # Example
///
/// ```
/// use mesh_measure::Dimensions;
/// use mesh_types::{Aabb, Point3};
///
/// let dims = Dimensions::from_bounds(&Aabb::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(20.0, 35.0, 120.0),
/// ));
/// assert_eq!(dims.max_extent(), 120.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    /// Extent along X.
    pub x: f64,
    /// Extent along Y.
    pub y: f64,
    /// Extent along Z.
    pub z: f64,
}

impl Dimensions {
    /// Create dimensions from per-axis extents.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// `max - min` on each axis; all zeros for an empty box.
    #[must_use]
    pub fn from_bounds(bounds: &Aabb) -> Self {
        let size = bounds.size();
        Self::new(size.x, size.y, size.z)
    }

    /// Get the longest dimension.
    ///
    /// Used as the orientation-agnostic model height: no up-axis is assumed.
    #[must_use]
    pub const fn max_extent(&self) -> f64 {
        self.x.max(self.y).max(self.z)
    }

    /// Uniformly scale every extent.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bounds_give_zero_dimensions() {
        assert_eq!(Dimensions::from_bounds(&Aabb::empty()), Dimensions::default());
    }

    #[test]
    fn scaled_dimensions() {
        let dims = Dimensions::new(1.0, 2.0, 4.0).scaled(2.5);
        assert_eq!(dims, Dimensions::new(2.5, 5.0, 10.0));
        assert_eq!(dims.max_extent(), 10.0);
    }
}
