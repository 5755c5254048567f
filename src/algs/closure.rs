//! Incidence-lattice closure: derive any `(d0, d1)` incidence on demand.
//!
//! Three primitives are composed by [`compute_connectivity`]:
//!
//! 1. [`compute_entities`]: derive the `d`-entities themselves, writing
//!    `(D, d)` and `(d, 0)` from the primitive cell-vertex incidence;
//! 2. [`compute_from_transpose`]: derive `(d0, d1)` from `(d1, d0)`;
//! 3. [`compute_from_intersection`]: derive `(d0, d1)` by composing
//!    `(d0, d)` with `(d, d1)` under a containment filter.
//!
//! Entity indices are assigned in ascending cell-then-local-slot order, so
//! given the same cell-vertex table the derived arrays are bit-identical
//! across runs. Rows produced by transpose are sorted ascending; rows
//! produced by synthesis and intersection follow construction order.

use log::{debug, trace};
use smallvec::SmallVec;

use crate::mesh_error::MeshIncidenceError;
use crate::topology::connectivity::Connectivity;
use crate::topology::mesh_topology::MeshTopology;
use crate::topology::reference_cell;

/// Vertex tuple of a single entity; no supported cell has more than 8
/// vertices per sub-entity.
type VertexTuple = SmallVec<[u32; 8]>;

/// Derive all entities of dimension `dim`, assigning fresh indices
/// `0..N_dim` and storing both `(D, dim)` and `(dim, 0)`.
///
/// Entities are generated per cell, and a candidate is matched against the
/// entities of previously visited vertex-adjacent cells so each distinct
/// vertex set is created exactly once. Returns `N_dim`. No-op when the
/// entities already exist.
pub fn compute_entities(topo: &MeshTopology, dim: u8) -> Result<usize, MeshIncidenceError> {
    if let Some(&n) = topo.count_cell(dim).get() {
        return Ok(n);
    }
    let tdim = topo.dim();
    assert!(
        dim > 0 && dim < tdim,
        "vertices and cells are supplied at construction, not derived"
    );
    debug!("computing entities of dimension {dim}");

    // Cell-cell adjacency through shared vertices; duplicates of a shared
    // entity can only appear in cells that share all of its vertices.
    compute_connectivity(topo, tdim, tdim)?;
    let cell_vertices = topo
        .stored_connectivity(tdim, 0)
        .expect("cell-vertex connectivity is supplied at construction");
    let cell_cell = topo
        .stored_connectivity(tdim, tdim)
        .expect("cell-cell adjacency was just computed");

    let tables = reference_cell::local_entities(topo.cell_type(), dim)?;
    let m = tables.len();
    let num_cells = topo.num_cells();

    // Per cell: (entity index, sorted vertex tuple) for every local slot
    // seen so far. The sorted tuple is the dedup key; the canonical tuple
    // is what gets stored.
    let mut cell_entities: Vec<Vec<(u32, VertexTuple)>> = vec![Vec::with_capacity(m); num_cells];
    let mut cell_to_entity: Vec<u32> = Vec::with_capacity(num_cells * m);
    let mut entity_vertices: Vec<VertexTuple> = Vec::new();
    let mut next: u32 = 0;

    for c in 0..num_cells {
        let cv = cell_vertices.row(c);
        for tuple in tables {
            let canonical: VertexTuple = tuple.iter().map(|&lv| cv[lv as usize]).collect();
            let mut key = canonical.clone();
            key.sort_unstable();

            let mut entity = None;
            'search: for &c0 in cell_cell.row(c) {
                if c0 as usize >= c {
                    continue;
                }
                for (e, other) in &cell_entities[c0 as usize] {
                    if *other == key {
                        entity = Some(*e);
                        break 'search;
                    }
                }
            }
            let e = match entity {
                Some(e) => e,
                None => {
                    let e = next;
                    entity_vertices.push(canonical);
                    next += 1;
                    e
                }
            };
            cell_to_entity.push(e);
            cell_entities[c].push((e, key));
        }
    }

    topo.set_entity_count(dim, next as usize);
    topo.set_connectivity(tdim, dim, Connectivity::from_flat(cell_to_entity, num_cells, m));
    topo.set_connectivity(dim, 0, Connectivity::from_ragged(&entity_vertices));
    Ok(next as usize)
}

/// Derive the `(d0, d1)` incidence, recursively deriving any prerequisites.
///
/// For `d0 < d1` the transpose of `(d1, d0)` is taken; otherwise `(d0, d*)`
/// and `(d*, d1)` are composed, with `d* = D` for vertex-vertex adjacency
/// and `d* = 0` for every other pair. Returns immediately when the
/// incidence is already present.
pub fn compute_connectivity(
    topo: &MeshTopology,
    d0: u8,
    d1: u8,
) -> Result<(), MeshIncidenceError> {
    trace!("requesting connectivity {d0} - {d1}");
    if topo.stored_connectivity(d0, d1).is_some() {
        return Ok(());
    }

    if topo.count_cell(d0).get().is_none() {
        compute_entities(topo, d0)?;
    }
    if topo.count_cell(d1).get().is_none() {
        compute_entities(topo, d1)?;
    }
    // Entity synthesis may already have produced the requested incidence.
    if topo.stored_connectivity(d0, d1).is_some() {
        return Ok(());
    }

    if d0 < d1 {
        compute_connectivity(topo, d1, d0)?;
        compute_from_transpose(topo, d0, d1);
    } else {
        // (d0, 0) is written by construction or by entity synthesis.
        assert!(
            !(d0 > 0 && d1 == 0),
            "connectivity ({d0},0) must already exist"
        );
        let d = if d0 == 0 && d1 == 0 { topo.dim() } else { 0 };
        compute_connectivity(topo, d0, d)?;
        compute_connectivity(topo, d, d1)?;
        compute_from_intersection(topo, d0, d1, d);
    }
    Ok(())
}

/// Derive `(d0, d1)` as the transpose of `(d1, d0)`. Two passes: count the
/// connections per `d0`-entity, then fill through a per-row cursor. Within
/// each row the targets come out sorted ascending.
pub(crate) fn compute_from_transpose(topo: &MeshTopology, d0: u8, d1: u8) {
    debug!("computing connectivity {d0} - {d1} from transpose");
    let source = topo
        .stored_connectivity(d1, d0)
        .expect("transpose requires the reversed incidence");
    let n0 = topo.size(d0);

    let mut sizes = vec![0u32; n0];
    for row in source.rows() {
        for &e0 in row {
            sizes[e0 as usize] += 1;
        }
    }

    let mut conn = Connectivity::from_sizes(&sizes);
    let mut cursor = vec![0usize; n0];
    for (e1, row) in source.rows().enumerate() {
        for &e0 in row {
            conn.set(e0 as usize, e1 as u32, cursor[e0 as usize]);
            cursor[e0 as usize] += 1;
        }
    }
    topo.set_connectivity(d0, d1, conn);
}

/// Derive `(d0, d1)` by composing `(d0, d)` with `(d, d1)`.
///
/// Requires `d0 >= d1`. For `d0 == d1` a candidate survives when it is not
/// the source itself; for `d0 > d1` it must be contained in the source
/// (vertex-set inclusion). Rows keep first-discovery order.
pub(crate) fn compute_from_intersection(topo: &MeshTopology, d0: u8, d1: u8, d: u8) {
    debug!("computing connectivity {d0} - {d1} from intersection {d0} - {d} - {d1}");
    assert!(d0 >= d1);
    let c0d = topo
        .stored_connectivity(d0, d)
        .expect("intersection requires (d0, d)");
    let cd1 = topo
        .stored_connectivity(d, d1)
        .expect("intersection requires (d, d1)");
    // Vertex sets for the containment test; trivially present when d0 > d1
    // because both dimensions have derived entities.
    let vertex_sets = (d0 > d1).then(|| {
        (
            topo.stored_connectivity(d0, 0)
                .expect("intersection requires (d0, 0)"),
            topo.stored_connectivity(d1, 0)
                .expect("intersection requires (d1, 0)"),
        )
    });

    let n0 = topo.size(d0);
    let mut rows: Vec<Vec<u32>> = vec![Vec::new(); n0];
    let mut max_size = 1;
    for (e0, entities) in rows.iter_mut().enumerate() {
        entities.reserve(max_size);
        for &e in c0d.row(e0) {
            for &e1 in cd1.row(e as usize) {
                let keep = match vertex_sets {
                    None => e1 as usize != e0,
                    Some((v0, v1)) => is_vertex_subset(v1.row(e1 as usize), v0.row(e0)),
                };
                if keep && !entities.contains(&e1) {
                    entities.push(e1);
                }
            }
        }
        max_size = max_size.max(entities.len());
    }
    topo.set_connectivity(d0, d1, Connectivity::from_ragged(&rows));
}

/// True when every vertex of `sub` occurs in `sup`.
fn is_vertex_subset(sub: &[u32], sup: &[u32]) -> bool {
    sub.iter().all(|v| sup.contains(v))
}
