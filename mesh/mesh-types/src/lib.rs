//! Core geometry types for the STL analyzer.
//!
//! This crate provides the foundational types shared by the decoder and the
//! metrics engine:
//!
//! - [`Triangle`] - A facet with concrete `f64` vertex positions
//! - [`Aabb`] - Axis-aligned bounding box, widened as triangles stream in
//! - [`unit_cube`] - A closed 12-triangle reference solid
//!
//! # Units
//!
//! STL carries no unit. Every crate in this workspace treats coordinates as
//! millimeters, so volumes are mm³ and areas mm².
//!
//! # Precision
//!
//! Binary STL stores 32-bit floats. Coordinates are widened to `f64` on
//! decode and every derived quantity is computed in `f64`.
//!
//! # Example
//!
//! ```
//! use mesh_types::{Aabb, Triangle, Vector3};
//!
//! let tri = Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
//! assert!((tri.area() - 0.5).abs() < 1e-12);
//!
//! let mut bounds = Aabb::empty();
//! bounds.include_triangle(&tri);
//! assert_eq!(bounds.size(), Vector3::new(1.0, 1.0, 0.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod bounds;
mod cube;
mod triangle;

pub use bounds::Aabb;
pub use cube::unit_cube;
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
