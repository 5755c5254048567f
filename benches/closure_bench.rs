use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use mesh_incidence::mesh_generation::{unit_cube_tetrahedra, unit_square_quads};
use mesh_incidence::prelude::*;

fn bench_quad_closure(c: &mut Criterion) {
    let (nv, cells) = unit_square_quads(64, 64);
    c.bench_function("quad_64x64_edge_synthesis", |b| {
        b.iter_batched(
            || MeshTopology::build(CellType::Quadrilateral, nv, &cells).unwrap(),
            |topo| topo.num_entities(1).unwrap(),
            BatchSize::SmallInput,
        )
    });
    c.bench_function("quad_64x64_vertex_adjacency", |b| {
        b.iter_batched(
            || MeshTopology::build(CellType::Quadrilateral, nv, &cells).unwrap(),
            |topo| topo.connectivity(0, 0).unwrap().total_connections(),
            BatchSize::SmallInput,
        )
    });
}

fn bench_tet_closure(c: &mut Criterion) {
    let (nv, cells) = unit_cube_tetrahedra(8, 8, 8);
    c.bench_function("tet_8x8x8_full_closure", |b| {
        b.iter_batched(
            || MeshTopology::build(CellType::Tetrahedron, nv, &cells).unwrap(),
            |topo| {
                for d0 in 0..=3 {
                    for d1 in 0..=3 {
                        topo.connectivity(d0, d1).unwrap();
                    }
                }
                topo.num_entities(2).unwrap()
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_quad_closure, bench_tet_closure);
criterion_main!(benches);
