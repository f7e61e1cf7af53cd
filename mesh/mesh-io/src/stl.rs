//! STL (Stereolithography) decoding.
//!
//! Supports both ASCII and binary STL.
//!
//! # Format Detection
//!
//! An 80-byte binary header may legally start with the bytes `solid`, so the
//! keyword alone is not enough. A buffer is treated as ASCII only when the
//! header starts with `solid` (case-insensitive, after optional whitespace)
//! *and* the token `facet` appears within the first 200 bytes. This is a
//! heuristic: an ASCII file with a very long solid name, or a binary header
//! that happens to spell both words, is misclassified.
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header (ignored for geometry)
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector (advisory, not read)
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (skipped)
//! end
//! ```
//!
//! # ASCII Format
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```

mod ascii;
mod binary;

pub use ascii::AsciiTriangles;
pub use binary::{BINARY_HEADER_SIZE, BINARY_MIN_SIZE, BINARY_TRIANGLE_SIZE, BinaryTriangles};

use mesh_types::Triangle;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::IoResult;

/// Number of leading bytes searched for the `facet` keyword.
const FACET_PROBE_LEN: usize = 200;

/// The two STL sub-formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StlEncoding {
    /// Textual `solid ... endsolid` encoding.
    Ascii,
    /// 80-byte header, triangle count, 50-byte records.
    Binary,
}

impl StlEncoding {
    /// Classify a buffer as ASCII or binary STL.
    ///
    /// Pure function of the buffer prefix. See the module docs for the
    /// heuristic and its limits.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_io::StlEncoding;
    ///
    /// assert_eq!(StlEncoding::detect(b"solid cube\n facet normal 0 0 1"), StlEncoding::Ascii);
    /// // "solid" alone is not enough
    /// assert_eq!(StlEncoding::detect(b"solid exported by CAD"), StlEncoding::Binary);
    /// assert_eq!(StlEncoding::detect(&[0u8; 84]), StlEncoding::Binary);
    /// ```
    #[must_use]
    pub fn detect(bytes: &[u8]) -> Self {
        let header = &bytes[..bytes.len().min(BINARY_HEADER_SIZE)];
        let header = header.trim_ascii_start();
        let starts_with_solid = header
            .get(..5)
            .is_some_and(|word| word.eq_ignore_ascii_case(b"solid"));

        if !starts_with_solid {
            return Self::Binary;
        }

        let probe = &bytes[..bytes.len().min(FACET_PROBE_LEN)];
        if contains_ignore_ascii_case(probe, b"facet") {
            Self::Ascii
        } else {
            Self::Binary
        }
    }

    /// Get a lowercase name for the encoding.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Binary => "binary",
        }
    }
}

impl std::fmt::Display for StlEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lazy triangle sequence over either STL encoding.
///
/// Finite and single-pass: to iterate again, construct a new one over the
/// same buffer.
#[derive(Debug, Clone)]
pub enum StlTriangles<'a> {
    /// Decoding an ASCII buffer.
    Ascii(AsciiTriangles<'a>),
    /// Decoding a binary buffer.
    Binary(BinaryTriangles<'a>),
}

impl<'a> StlTriangles<'a> {
    /// Sniff the encoding and build the matching decoder.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::FileTooSmall`](crate::IoError::FileTooSmall) if the
    /// buffer is classified as binary but is shorter than 84 bytes.
    pub fn from_bytes(bytes: &'a [u8]) -> IoResult<Self> {
        let encoding = StlEncoding::detect(bytes);
        debug!(%encoding, len = bytes.len(), "Detected STL encoding");

        match encoding {
            StlEncoding::Ascii => Ok(Self::Ascii(AsciiTriangles::new(bytes))),
            StlEncoding::Binary => BinaryTriangles::new(bytes).map(Self::Binary),
        }
    }

    /// The encoding being decoded.
    #[must_use]
    pub const fn encoding(&self) -> StlEncoding {
        match self {
            Self::Ascii(_) => StlEncoding::Ascii,
            Self::Binary(_) => StlEncoding::Binary,
        }
    }

    /// The model label embedded in the file, if any.
    ///
    /// For ASCII this is the name after `solid`; for binary it is the
    /// printable text of the 80-byte header.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        match self {
            Self::Ascii(ascii) => ascii.solid_name(),
            Self::Binary(binary) => binary.header_text(),
        }
    }
}

impl Iterator for StlTriangles<'_> {
    type Item = Triangle;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Ascii(ascii) => ascii.next(),
            Self::Binary(binary) => binary.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Ascii(ascii) => ascii.size_hint(),
            Self::Binary(binary) => binary.size_hint(),
        }
    }
}

/// Case-insensitive substring search over raw bytes.
fn contains_ignore_ascii_case(haystack: &[u8], needle: &[u8]) -> bool {
    haystack
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}
