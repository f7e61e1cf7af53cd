//! Binary STL record reader.

use std::iter::Take;
use std::slice::ChunksExact;

use mesh_types::Triangle;
use tracing::{debug, warn};

use crate::error::{IoError, IoResult};

/// STL binary header size in bytes.
pub const BINARY_HEADER_SIZE: usize = 80;

/// Smallest valid binary STL: header plus the 4-byte triangle count.
pub const BINARY_MIN_SIZE: usize = BINARY_HEADER_SIZE + 4;

/// Size of one triangle record (normal + 3 vertices + attribute).
pub const BINARY_TRIANGLE_SIZE: usize = 50;

/// Lazy decoder over the 50-byte records of a binary STL buffer.
///
/// Yields `min(declared, complete records present)` triangles. When the
/// declared count runs past the end of the buffer, decoding stops after the
/// last complete record and the partial trailing record is dropped without an
/// error.
#[derive(Debug, Clone)]
pub struct BinaryTriangles<'a> {
    header: &'a [u8],
    records: Take<ChunksExact<'a, u8>>,
    declared: u32,
    available: usize,
}

impl<'a> BinaryTriangles<'a> {
    /// Validate the header and prepare to read records.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::FileTooSmall`] if the buffer is shorter than
    /// [`BINARY_MIN_SIZE`] bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_io::BinaryTriangles;
    ///
    /// let mut bytes = vec![0u8; 84];
    /// bytes[80..84].copy_from_slice(&0u32.to_le_bytes());
    /// let binary = BinaryTriangles::new(&bytes).unwrap();
    /// assert_eq!(binary.declared_count(), 0);
    /// assert_eq!(binary.count(), 0);
    ///
    /// assert!(BinaryTriangles::new(&[0u8; 83]).is_err());
    /// ```
    pub fn new(bytes: &'a [u8]) -> IoResult<Self> {
        if bytes.len() < BINARY_MIN_SIZE {
            return Err(IoError::file_too_small(BINARY_MIN_SIZE, bytes.len()));
        }

        let declared = u32::from_le_bytes([
            bytes[BINARY_HEADER_SIZE],
            bytes[BINARY_HEADER_SIZE + 1],
            bytes[BINARY_HEADER_SIZE + 2],
            bytes[BINARY_HEADER_SIZE + 3],
        ]);

        let body = &bytes[BINARY_MIN_SIZE..];
        let present = body.len() / BINARY_TRIANGLE_SIZE;
        let available = present.min(declared as usize);

        if available < declared as usize {
            warn!(
                declared,
                available, "Binary STL is truncated, reading complete records only"
            );
        } else if present > available || body.len() % BINARY_TRIANGLE_SIZE != 0 {
            debug!(
                declared,
                trailing_bytes = body.len() - available * BINARY_TRIANGLE_SIZE,
                "Ignoring data after the declared triangles"
            );
        }

        Ok(Self {
            header: &bytes[..BINARY_HEADER_SIZE],
            records: body.chunks_exact(BINARY_TRIANGLE_SIZE).take(available),
            declared,
            available,
        })
    }

    /// Triangle count stored in the file.
    #[must_use]
    pub const fn declared_count(&self) -> u32 {
        self.declared
    }

    /// Number of complete records that will be read (at most the declared count).
    #[must_use]
    pub const fn available_count(&self) -> usize {
        self.available
    }

    /// Whether the buffer holds fewer complete records than declared.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.available < self.declared as usize
    }

    /// Printable text of the 80-byte header, trimmed.
    ///
    /// Stops at the first NUL byte. Returns `None` if nothing printable remains.
    #[must_use]
    pub fn header_text(&self) -> Option<String> {
        let end = self
            .header
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.header.len());
        let text = String::from_utf8_lossy(&self.header[..end]);
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

impl Iterator for BinaryTriangles<'_> {
    type Item = Triangle;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        // Skip normal (bytes 0..12) and attribute (bytes 48..50)
        Some(Triangle::from_f32_arrays(
            read_vec3(record, 12),
            read_vec3(record, 24),
            read_vec3(record, 36),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl ExactSizeIterator for BinaryTriangles<'_> {}

/// Read 3 little-endian f32s starting at `offset`.
fn read_vec3(record: &[u8], offset: usize) -> [f32; 3] {
    let read = |at: usize| {
        f32::from_le_bytes([record[at], record[at + 1], record[at + 2], record[at + 3]])
    };
    [read(offset), read(offset + 4), read(offset + 8)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn record(vertices: [[f32; 3]; 3]) -> Vec<u8> {
        let mut out = Vec::with_capacity(BINARY_TRIANGLE_SIZE);
        // Deliberately bogus normal; it must not influence decoding.
        for n in [9.0f32, 9.0, 9.0] {
            out.extend_from_slice(&n.to_le_bytes());
        }
        for v in vertices {
            for c in v {
                out.extend_from_slice(&c.to_le_bytes());
            }
        }
        out.extend_from_slice(&0xABCDu16.to_le_bytes());
        out
    }

    fn buffer(declared: u32, records: &[Vec<u8>]) -> Vec<u8> {
        let mut out = b"binary header".to_vec();
        out.resize(BINARY_HEADER_SIZE, 0);
        out.extend_from_slice(&declared.to_le_bytes());
        for r in records {
            out.extend_from_slice(r);
        }
        out
    }

    const TRI: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];

    #[test]
    fn reads_declared_triangles() {
        let bytes = buffer(2, &[record(TRI), record([[1.5, 2.5, 3.5], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]])]);
        let triangles: Vec<_> = BinaryTriangles::new(&bytes).unwrap().collect();

        assert_eq!(triangles.len(), 2);
        assert_relative_eq!(triangles[0].v1.x, 1.0);
        assert_relative_eq!(triangles[1].v0.y, 2.5);
        assert_relative_eq!(triangles[1].v2.z, 9.0);
    }

    #[test]
    fn too_small() {
        let err = BinaryTriangles::new(&[0u8; 83]).unwrap_err();
        assert_eq!(err, IoError::file_too_small(84, 83));
    }

    #[test]
    fn declared_count_exceeds_buffer() {
        let mut bytes = buffer(1000, &[record(TRI), record(TRI)]);
        // Half of a third record
        bytes.extend_from_slice(&record(TRI)[..25]);

        let binary = BinaryTriangles::new(&bytes).unwrap();
        assert_eq!(binary.declared_count(), 1000);
        assert_eq!(binary.available_count(), 2);
        assert!(binary.is_truncated());
        assert_eq!(binary.len(), 2);
        assert_eq!(binary.count(), 2);
    }

    #[test]
    fn huge_declared_count_does_not_overflow() {
        let bytes = buffer(u32::MAX, &[record(TRI)]);
        let binary = BinaryTriangles::new(&bytes).unwrap();
        assert_eq!(binary.count(), 1);
    }

    #[test]
    fn trailing_data_after_declared_is_ignored() {
        let bytes = buffer(1, &[record(TRI), record(TRI), vec![1, 2, 3]]);
        let binary = BinaryTriangles::new(&bytes).unwrap();
        assert!(!binary.is_truncated());
        assert_eq!(binary.count(), 1);
    }

    #[test]
    fn zero_declared_is_valid() {
        let bytes = buffer(0, &[]);
        assert_eq!(BinaryTriangles::new(&bytes).unwrap().count(), 0);
    }

    #[test]
    fn header_text() {
        let bytes = buffer(0, &[]);
        let binary = BinaryTriangles::new(&bytes).unwrap();
        assert_eq!(binary.header_text().as_deref(), Some("binary header"));

        let blank = vec![0u8; BINARY_MIN_SIZE];
        assert_eq!(BinaryTriangles::new(&blank).unwrap().header_text(), None);
    }
}
