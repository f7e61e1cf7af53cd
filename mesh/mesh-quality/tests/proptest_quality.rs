//! Property-based tests for mesh-quality diagnostics.
//!
//! Run with: cargo test -p mesh-quality -- proptest

use mesh_quality::{DEFAULT_VERTEX_EPSILON, mesh_quality};
use mesh_types::{Triangle, Vector3, unit_cube};
use proptest::prelude::*;

fn arb_triangle() -> impl Strategy<Value = Triangle> {
    prop::array::uniform3(prop::array::uniform3(-10i32..10)).prop_map(|[a, b, c]| {
        let p = |v: [i32; 3]| [f64::from(v[0]), f64::from(v[1]), f64::from(v[2])];
        Triangle::from_arrays(p(a), p(b), p(c))
    })
}

proptest! {
    #[test]
    fn counts_are_consistent(tris in prop::collection::vec(arb_triangle(), 0..60)) {
        let q = mesh_quality(&tris, DEFAULT_VERTEX_EPSILON);

        prop_assert!(q.open_edge_count + q.non_manifold_edge_count <= q.edge_count);
        prop_assert!((0.0..=1.0).contains(&q.watertight_ratio));
        prop_assert!(q.duplicate_vertex_count <= q.unique_vertex_count);
        prop_assert!(q.unique_vertex_count <= 3 * tris.len());
        prop_assert!(q.degenerate_triangle_count <= tris.len());
        prop_assert_eq!(q.is_watertight, q.edge_count > 0 && q.open_edge_count == 0);
    }

    #[test]
    fn transformed_cube_stays_watertight(
        scale in 0.5f64..500.0,
        offset in prop::array::uniform3(-1000.0f64..1000.0),
    ) {
        let shift = Vector3::new(offset[0], offset[1], offset[2]);
        let cube: Vec<_> = unit_cube()
            .iter()
            .map(|t| {
                let [a, b, c] = t.vertices().map(|p| (p * scale) + shift);
                Triangle::new(a, b, c)
            })
            .collect();

        let q = mesh_quality(&cube, DEFAULT_VERTEX_EPSILON);
        prop_assert!(q.is_watertight);
        prop_assert_eq!(q.unique_vertex_count, 8);
        prop_assert_eq!(q.edge_count, 18);
    }
}
