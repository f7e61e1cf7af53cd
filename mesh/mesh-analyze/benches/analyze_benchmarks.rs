//! Benchmarks for decoding and measuring STL buffers.
//!
//! Run with: cargo bench -p mesh-analyze
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p mesh-analyze -- --save-baseline main
//! 2. After changes: cargo bench -p mesh-analyze -- --baseline main

#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

use std::fmt::Write as _;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mesh_analyze::{AnalysisConfig, try_analyze};

// =============================================================================
// Test Mesh Generation
// =============================================================================

/// Closed height-field box: an `n x n` grid on top, a flat bottom, and walls.
///
/// Produces `4n² + 8n` triangles that share edges the way exported CAD
/// meshes do.
fn grid_triangles(n: usize) -> Vec<[[f32; 3]; 3]> {
    let height = |i: usize, j: usize| 10.0 + ((i * 7 + j * 13) % 5) as f32 * 0.1;
    let p = |i: usize, j: usize, z: f32| [i as f32, j as f32, z];
    let mut tris = Vec::with_capacity(4 * n * n + 8 * n);

    for i in 0..n {
        for j in 0..n {
            let (a, b) = (p(i, j, height(i, j)), p(i + 1, j, height(i + 1, j)));
            let (c, d) = (p(i + 1, j + 1, height(i + 1, j + 1)), p(i, j + 1, height(i, j + 1)));
            tris.push([a, b, c]);
            tris.push([a, c, d]);

            let (a, b, c, d) = (p(i, j, 0.0), p(i + 1, j, 0.0), p(i + 1, j + 1, 0.0), p(i, j + 1, 0.0));
            tris.push([a, c, b]);
            tris.push([a, d, c]);
        }
    }

    for k in 0..n {
        let walls = [
            ((k, 0), (k + 1, 0)),
            ((n, k), (n, k + 1)),
            ((k + 1, n), (k, n)),
            ((0, k + 1), (0, k)),
        ];
        for ((i0, j0), (i1, j1)) in walls {
            let (lo0, lo1) = (p(i0, j0, 0.0), p(i1, j1, 0.0));
            let (hi0, hi1) = (p(i0, j0, height(i0, j0)), p(i1, j1, height(i1, j1)));
            tris.push([lo0, lo1, hi1]);
            tris.push([lo0, hi1, hi0]);
        }
    }

    tris
}

fn encode_binary(tris: &[[[f32; 3]; 3]]) -> Vec<u8> {
    let mut out = vec![0u8; 80];
    out.extend_from_slice(&(tris.len() as u32).to_le_bytes());
    for tri in tris {
        out.extend_from_slice(&[0u8; 12]);
        for c in tri.iter().flatten() {
            out.extend_from_slice(&c.to_le_bytes());
        }
        out.extend_from_slice(&[0u8; 2]);
    }
    out
}

fn encode_ascii(tris: &[[[f32; 3]; 3]]) -> Vec<u8> {
    let mut out = String::from("solid grid\n");
    for tri in tris {
        out.push_str("facet normal 0 0 0\nouter loop\n");
        for [x, y, z] in tri {
            let _ = writeln!(out, "vertex {x:e} {y:e} {z:e}");
        }
        out.push_str("endloop\nendfacet\n");
    }
    out.push_str("endsolid grid\n");
    out.into_bytes()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for n in [32, 128] {
        let tris = grid_triangles(n);
        let binary = encode_binary(&tris);
        let ascii = encode_ascii(&tris);
        group.throughput(Throughput::Elements(tris.len() as u64));

        group.bench_with_input(BenchmarkId::new("binary_full", n), &binary, |b, bytes| {
            let config = AnalysisConfig::default();
            b.iter(|| try_analyze(black_box(bytes), &config));
        });
        group.bench_with_input(BenchmarkId::new("binary_fast", n), &binary, |b, bytes| {
            let config = AnalysisConfig::fast();
            b.iter(|| try_analyze(black_box(bytes), &config));
        });
        group.bench_with_input(BenchmarkId::new("ascii_full", n), &ascii, |b, bytes| {
            let config = AnalysisConfig::default();
            b.iter(|| try_analyze(black_box(bytes), &config));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
