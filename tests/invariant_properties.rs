//! Quantified invariants of the closure engine, checked over structured
//! meshes and cell-relabelling permutations.

use std::collections::BTreeSet;

use proptest::prelude::*;

use mesh_incidence::mesh_generation::{
    unit_cube_tetrahedra, unit_square_quads, unit_square_triangles,
};
use mesh_incidence::prelude::*;
use mesh_incidence::topology::reference_cell;

fn close_all(topo: &MeshTopology) {
    for d0 in 0..=topo.dim() {
        for d1 in 0..=topo.dim() {
            topo.connectivity(d0, d1).unwrap();
        }
    }
}

fn sample_meshes() -> Vec<MeshTopology> {
    let (nv_t, cells_t) = unit_square_triangles(3, 2);
    let (nv_q, cells_q) = unit_square_quads(3, 3);
    let (nv_x, cells_x) = unit_cube_tetrahedra(2, 2, 2);
    vec![
        MeshTopology::build(CellType::Triangle, nv_t, &cells_t).unwrap(),
        MeshTopology::build(CellType::Quadrilateral, nv_q, &cells_q).unwrap(),
        MeshTopology::build(CellType::Tetrahedron, nv_x, &cells_x).unwrap(),
    ]
}

#[test]
fn cardinality_symmetry_holds_for_every_pair() {
    for topo in sample_meshes() {
        close_all(&topo);
        for d0 in 0..=topo.dim() {
            for d1 in 0..=topo.dim() {
                let forward = topo.connectivity(d0, d1).unwrap().total_connections();
                let backward = topo.connectivity(d1, d0).unwrap().total_connections();
                assert_eq!(forward, backward, "({d0},{d1}) vs ({d1},{d0})");
            }
        }
    }
}

#[test]
fn row_arities_match_the_reference_cell() {
    for topo in sample_meshes() {
        close_all(&topo);
        let tdim = topo.dim();
        let cell_type = topo.cell_type();
        for d in 1..tdim {
            let m = reference_cell::num_entities(cell_type, d).unwrap();
            let n = reference_cell::num_vertices_per_entity(cell_type, d).unwrap();
            assert!(topo
                .connectivity(tdim, d)
                .unwrap()
                .rows()
                .all(|r| r.len() == m));
            assert!(topo.connectivity(d, 0).unwrap().rows().all(|r| r.len() == n));
        }
    }
}

#[test]
fn vertex_sets_are_unique_per_dimension() {
    for topo in sample_meshes() {
        close_all(&topo);
        for d in 1..=topo.dim() {
            let ev = topo.connectivity(d, 0).unwrap();
            let mut seen = BTreeSet::new();
            for row in ev.rows() {
                let mut key = row.to_vec();
                key.sort_unstable();
                assert!(seen.insert(key), "duplicate vertex set in dimension {d}");
            }
        }
    }
}

#[test]
fn local_entities_follow_the_canonical_tuples() {
    for topo in sample_meshes() {
        close_all(&topo);
        validate_closure(&topo).unwrap();
    }
}

#[test]
fn repeated_requests_return_identical_arrays() {
    let (nv, cells) = unit_square_triangles(2, 2);
    let a = MeshTopology::build(CellType::Triangle, nv, &cells).unwrap();
    let b = MeshTopology::build(CellType::Triangle, nv, &cells).unwrap();
    close_all(&a);
    close_all(&b);
    for d0 in 0..=2 {
        for d1 in 0..=2 {
            assert_eq!(
                a.connectivity(d0, d1).unwrap(),
                b.connectivity(d0, d1).unwrap(),
                "({d0},{d1}) must be reproducible"
            );
        }
    }
    // A second request on the same mesh is a no-op returning the same store.
    let first = a.connectivity(2, 1).unwrap() as *const Connectivity;
    let second = a.connectivity(2, 1).unwrap() as *const Connectivity;
    assert_eq!(first, second);
}

#[test]
fn transpose_round_trips_up_to_row_order() {
    fn transpose(conn: &Connectivity, num_targets: usize) -> Vec<Vec<u32>> {
        let mut rows = vec![Vec::new(); num_targets];
        for (i, row) in conn.rows().enumerate() {
            for &j in row {
                rows[j as usize].push(i as u32);
            }
        }
        rows
    }

    for topo in sample_meshes() {
        close_all(&topo);
        let tdim = topo.dim();
        let ce = topo.connectivity(tdim, 1).unwrap();
        let n1 = topo.num_entities(1).unwrap();
        let once = transpose(ce, n1);
        let twice = transpose(&Connectivity::from_ragged(&once), topo.num_cells());
        for (orig, round) in ce.rows().zip(&twice) {
            let mut orig = orig.to_vec();
            let mut round = round.clone();
            orig.sort_unstable();
            round.sort_unstable();
            assert_eq!(orig, round);
        }
    }
}

/// Sorted vertex tuples of the `d`-entities of one cell.
fn cell_entity_sets(topo: &MeshTopology, c: usize, d: u8) -> BTreeSet<Vec<u32>> {
    let ce = topo.connectivity(topo.dim(), d).unwrap();
    ce.row(c)
        .iter()
        .map(|&e| {
            let mut vs = topo.entity_vertices(d, e).unwrap().to_vec();
            vs.sort_unstable();
            vs
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Relabelling cells permutes entity numbering but leaves counts and
    /// per-cell vertex sets untouched.
    #[test]
    fn cell_relabelling_is_a_renumbering(
        (nx, ny, perm) in (1usize..4, 1usize..4).prop_flat_map(|(nx, ny)| {
            let ncells = 2 * nx * ny;
            (
                Just(nx),
                Just(ny),
                Just((0..ncells).collect::<Vec<usize>>()).prop_shuffle(),
            )
        })
    ) {
        let (nv, cells) = unit_square_triangles(nx, ny);
        let arity = 3;
        let mut shuffled = Vec::with_capacity(cells.len());
        for &old in &perm {
            shuffled.extend_from_slice(&cells[old * arity..(old + 1) * arity]);
        }

        let original = MeshTopology::build(CellType::Triangle, nv, &cells).unwrap();
        let relabelled = MeshTopology::build(CellType::Triangle, nv, &shuffled).unwrap();

        prop_assert_eq!(
            original.num_entities(1).unwrap(),
            relabelled.num_entities(1).unwrap()
        );
        for (new_cell, &old_cell) in perm.iter().enumerate() {
            prop_assert_eq!(
                cell_entity_sets(&original, old_cell, 1),
                cell_entity_sets(&relabelled, new_cell, 1)
            );
        }
    }

    /// Closure of a random-size quad grid satisfies the audit.
    #[test]
    fn quad_grids_validate((nx, ny) in (1usize..5, 1usize..5)) {
        let (nv, cells) = unit_square_quads(nx, ny);
        let topo = MeshTopology::build(CellType::Quadrilateral, nv, &cells).unwrap();
        close_all(&topo);
        validate_closure(&topo).unwrap();
        prop_assert_eq!(
            topo.num_entities(1).unwrap(),
            nx * (ny + 1) + ny * (nx + 1)
        );
    }
}
