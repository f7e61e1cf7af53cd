//! Mesh-quality diagnostics for STL triangle soups.
//!
//! STL stores every facet with its own copy of each corner, so adjacency has
//! to be recovered from positions. This crate snaps corners onto a fixed grid
//! ([`VertexKey`]) and counts how many facets use each resulting edge:
//!
//! - Edges used once are **open** (boundary of a hole)
//! - Edges used three or more times are **non-manifold**
//! - A mesh with no open edges is **watertight**
//!
//! The same quantization is used for duplicate-vertex detection, so both
//! diagnostics agree on what "same vertex" means. Volume and area are not
//! computed here and never see snapped coordinates.
//!
//! # Example
//!
//! ```
//! use mesh_quality::{QualityAccumulator, DEFAULT_VERTEX_EPSILON};
//! use mesh_types::unit_cube;
//!
//! let mut acc = QualityAccumulator::new(DEFAULT_VERTEX_EPSILON);
//! for tri in &unit_cube() {
//!     acc.push(tri);
//! }
//! let quality = acc.finish();
//!
//! assert!(quality.is_watertight);
//! assert_eq!(quality.open_edge_count, 0);
//! assert_eq!(quality.edge_count, 18);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod accumulator;
mod key;
mod report;

pub use accumulator::{QualityAccumulator, mesh_quality};
pub use key::{DEFAULT_VERTEX_EPSILON, VertexKey};
pub use report::MeshQuality;
