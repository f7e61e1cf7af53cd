//! STL decoding for the analyzer.
//!
//! This crate turns the raw bytes of an `.stl` file into a lazy, single-pass
//! sequence of [`Triangle`](mesh_types::Triangle)s. It never touches the
//! filesystem: callers hand over a buffer they already hold.
//!
//! - [`StlEncoding::detect`] - ASCII vs binary sniffing from the header
//! - [`AsciiTriangles`] - token scanner over `facet ... endfacet` blocks
//! - [`BinaryTriangles`] - fixed 50-byte record reader
//! - [`StlTriangles`] - either of the above behind one iterator
//!
//! # Example
//!
//! ```
//! use mesh_io::{StlEncoding, StlTriangles};
//!
//! let text = b"solid demo
//!   facet normal 0 0 1
//!     outer loop
//!       vertex 0 0 0
//!       vertex 1 0 0
//!       vertex 0 1 0
//!     endloop
//!   endfacet
//! endsolid demo";
//!
//! let triangles = StlTriangles::from_bytes(text).unwrap();
//! assert_eq!(triangles.encoding(), StlEncoding::Ascii);
//! assert_eq!(triangles.count(), 1);
//! ```
//!
//! # Leniency
//!
//! Malformed ASCII blocks are skipped and a truncated trailing binary record
//! is dropped. The only hard failure is a binary buffer too short to hold its
//! header, reported as [`IoError::FileTooSmall`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod stl;

pub use error::{IoError, IoResult};
pub use stl::{
    AsciiTriangles, BINARY_HEADER_SIZE, BINARY_MIN_SIZE, BINARY_TRIANGLE_SIZE, BinaryTriangles,
    StlEncoding, StlTriangles,
};
