//! Geometric metrics for STL triangle streams.
//!
//! This crate consumes triangles one at a time and accumulates everything the
//! analyzer reports about a model in a single pass:
//!
//! - **Dimensions**: axis-aligned bounding box and per-axis extent
//! - **Volume**: signed tetrahedron decomposition against the origin
//! - **Surface area**: half the cross-product magnitude per triangle
//! - **Triangle areas**: min / max / mean
//! - **Center of mass**: area-weighted surface centroid
//! - **Mesh quality**: watertightness and topology via [`mesh_quality`]
//! - **Scale matching**: rank a catalog of figure scales by model height
//!
//! # Example
//!
//! ```
//! use mesh_measure::{measure_triangles, MeasureOptions};
//! use mesh_types::unit_cube;
//!
//! let metrics = measure_triangles(unit_cube(), 684, &MeasureOptions::default()).unwrap();
//!
//! assert_eq!(metrics.triangle_count, 12);
//! assert!((metrics.volume - 1.0).abs() < 1e-9);
//! assert!((metrics.surface_area - 6.0).abs() < 1e-9);
//! assert!(metrics.mesh_quality.unwrap().is_watertight);
//! ```
//!
//! # Precision
//!
//! Volume and area are accumulated in `f64` with compensated summation, so
//! the error stays bounded across millions of triangles even though binary
//! STL only stores `f32` coordinates.
//!
//! # Closed meshes
//!
//! The enclosed volume is only meaningful for a closed, consistently wound
//! mesh. For open meshes the reported number is deterministic but does not
//! measure anything; check [`MeshQuality::is_watertight`](mesh_quality::MeshQuality::is_watertight).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod accumulator;
mod dimensions;
mod error;
mod metrics;
mod options;
mod scale;

pub use accumulator::{MetricsAccumulator, measure_triangles};
pub use dimensions::Dimensions;
pub use error::{MeasureError, MeasureResult};
pub use metrics::{CenterOfMass, GeometryMetrics, TriangleAreaStats};
pub use options::{DEFAULT_QUALITY_TRIANGLE_LIMIT, MeasureOptions};
pub use scale::{
    DEFAULT_SCALE_TOLERANCE, SCALE_CATALOG, ScaleCatalogEntry, ScaleMatch, ScaleReport,
    ScaledMetrics, match_scales, match_scales_in,
};

pub use mesh_quality::MeshQuality;
// Re-export nalgebra types for convenience
pub use mesh_types::{Point3, Vector3};
