//! Conformance tests for the STL decoders.
//!
//! The same geometry is encoded as ASCII and binary STL and both decoders must
//! agree. Property tests feed arbitrary buffers to make sure decoding never
//! panics or reads past the end of the input.
//!
//! To run: cargo test -p mesh-io --test decode_conformance

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fmt::Write as _;

use mesh_io::{BINARY_MIN_SIZE, BINARY_TRIANGLE_SIZE, StlEncoding, StlTriangles};
use mesh_types::{Triangle, unit_cube};
use proptest::prelude::*;

// =============================================================================
// Encoders for test fixtures
// =============================================================================

#[allow(clippy::cast_possible_truncation)]
fn encode_binary(triangles: &[Triangle], declared: u32) -> Vec<u8> {
    let mut out = b"solid-looking header from a CAD exporter".to_vec();
    out.resize(80, b' ');
    out.extend_from_slice(&declared.to_le_bytes());
    for tri in triangles {
        out.extend_from_slice(&[0u8; 12]);
        for v in tri.vertices() {
            for c in [v.x as f32, v.y as f32, v.z as f32] {
                out.extend_from_slice(&c.to_le_bytes());
            }
        }
        out.extend_from_slice(&[0u8; 2]);
    }
    out
}

fn encode_ascii(triangles: &[Triangle]) -> Vec<u8> {
    let mut out = String::from("solid cube\n");
    for tri in triangles {
        let n = tri.normal_unnormalized();
        writeln!(out, "  facet normal {:e} {:e} {:e}", n.x, n.y, n.z).unwrap();
        out.push_str("    outer loop\n");
        for v in tri.vertices() {
            writeln!(out, "      vertex {:e} {:e} {:e}", v.x, v.y, v.z).unwrap();
        }
        out.push_str("    endloop\n  endfacet\n");
    }
    out.push_str("endsolid cube\n");
    out.into_bytes()
}

// =============================================================================
// Equivalence
// =============================================================================

#[test]
fn ascii_and_binary_decode_identically() {
    let cube = unit_cube();
    let declared = u32::try_from(cube.len()).unwrap();

    let ascii_bytes = encode_ascii(&cube);
    let ascii = StlTriangles::from_bytes(&ascii_bytes).unwrap();
    assert_eq!(ascii.encoding(), StlEncoding::Ascii);
    assert_eq!(ascii.label().as_deref(), Some("cube"));
    let from_ascii: Vec<_> = ascii.collect();

    let binary_bytes = encode_binary(&cube, declared);
    let binary = StlTriangles::from_bytes(&binary_bytes).unwrap();
    // Header starts with "solid" but has no "facet": must still be binary.
    assert_eq!(binary.encoding(), StlEncoding::Binary);
    let from_binary: Vec<_> = binary.collect();

    assert_eq!(from_ascii.len(), 12);
    assert_eq!(from_ascii.len(), from_binary.len());
    for (a, b) in from_ascii.iter().zip(&from_binary) {
        for (pa, pb) in a.vertices().iter().zip(b.vertices().iter()) {
            assert!((pa - pb).norm() < 1e-6);
        }
    }
}

#[test]
fn decoding_preserves_file_order() {
    let cube = unit_cube();
    let decoded: Vec<_> = StlTriangles::from_bytes(&encode_ascii(&cube))
        .unwrap()
        .collect();
    assert_eq!(decoded, cube);
}

#[test]
fn decoder_is_lazy_and_single_pass() {
    let bytes = encode_binary(&unit_cube(), 12);
    let mut triangles = StlTriangles::from_bytes(&bytes).unwrap();
    assert!(triangles.next().is_some());
    assert_eq!(triangles.by_ref().count(), 11);
    assert!(triangles.next().is_none());
}

// =============================================================================
// Robustness
// =============================================================================

proptest! {
    #[test]
    fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..600)) {
        if let Ok(triangles) = StlTriangles::from_bytes(&bytes) {
            let _ = triangles.count();
        }
    }

    #[test]
    fn arbitrary_text_never_panics(text in "(solid |facet |normal |outer |loop |vertex |endloop |endfacet |[-0-9.e]{1,6} ){0,80}") {
        let mut bytes = b"solid p facet ".to_vec();
        bytes.extend_from_slice(text.as_bytes());
        let triangles = StlTriangles::from_bytes(&bytes).unwrap();
        prop_assert_eq!(triangles.encoding(), StlEncoding::Ascii);
        let _ = triangles.count();
    }

    #[test]
    fn truncated_binary_reads_complete_records_only(
        declared in 0u32..64,
        cut in 0usize..(12 * BINARY_TRIANGLE_SIZE),
    ) {
        let mut cube = unit_cube();
        cube.extend(unit_cube());
        let full = encode_binary(&cube, declared);
        let len = (BINARY_MIN_SIZE + cut).min(full.len());
        let triangles = StlTriangles::from_bytes(&full[..len]).unwrap();

        let complete = (len - BINARY_MIN_SIZE) / BINARY_TRIANGLE_SIZE;
        prop_assert_eq!(triangles.count(), complete.min(declared as usize));
    }
}
