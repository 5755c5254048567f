//! Topology audit helpers.
//!
//! [`validate_closure`] checks every incidence currently stored in a
//! [`MeshTopology`] against the structural invariants of the closure engine
//! and returns the first violation. It never triggers derivation; audit what
//! has been computed, then request more and audit again if needed.

use hashbrown::HashMap;

use crate::mesh_error::MeshIncidenceError;
use crate::topology::mesh_topology::MeshTopology;
use crate::topology::reference_cell;

/// Audit all stored incidences of `topo`.
///
/// Checks, for whatever is present:
/// - every row is a set, with no self entry when `d0 == d1`;
/// - forward/transposed incidences agree on total cardinality;
/// - `(D, d)` rows have `m_T(d)` entries and `(d, 0)` rows have `n_T(d)`;
/// - no two entities of one dimension share a vertex set;
/// - each cell's `k`-th local entity matches the reference-cell tuple
///   applied to the cell's vertices.
pub fn validate_closure(topo: &MeshTopology) -> Result<(), MeshIncidenceError> {
    let tdim = topo.dim();
    for d0 in 0..=tdim {
        for d1 in 0..=tdim {
            let Some(conn) = topo.stored_connectivity(d0, d1) else {
                continue;
            };
            check_rows_are_sets(conn, d0, d1)?;
            if let Some(transposed) = topo.stored_connectivity(d1, d0) {
                if conn.total_connections() != transposed.total_connections() {
                    return Err(MeshIncidenceError::CardinalityMismatch {
                        d0,
                        d1,
                        forward: conn.total_connections(),
                        backward: transposed.total_connections(),
                    });
                }
            }
        }
    }
    check_arities(topo)?;
    check_vertex_set_uniqueness(topo)?;
    check_local_order(topo)?;
    Ok(())
}

fn check_rows_are_sets(
    conn: &crate::topology::connectivity::Connectivity,
    d0: u8,
    d1: u8,
) -> Result<(), MeshIncidenceError> {
    for (i, row) in conn.rows().enumerate() {
        for (k, &j) in row.iter().enumerate() {
            let self_entry = d0 == d1 && j as usize == i;
            if self_entry || row[..k].contains(&j) {
                return Err(MeshIncidenceError::NonSetRow {
                    d0,
                    d1,
                    entity: i as u32,
                });
            }
        }
    }
    Ok(())
}

fn check_arities(topo: &MeshTopology) -> Result<(), MeshIncidenceError> {
    let tdim = topo.dim();
    let cell_type = topo.cell_type();
    for d in 0..=tdim {
        if let Some(ce) = topo.stored_connectivity(tdim, d).filter(|_| d != tdim) {
            // (D, 0) holds the cells' own vertices; its arity is primitive
            // and needs no reference-cell table.
            let m = if d == 0 {
                cell_type.num_vertices()
            } else {
                reference_cell::num_entities(cell_type, d)?
            };
            for (c, row) in ce.rows().enumerate() {
                if row.len() != m {
                    return Err(MeshIncidenceError::RowArityMismatch {
                        d0: tdim,
                        d1: d,
                        entity: c as u32,
                        expected: m,
                        found: row.len(),
                    });
                }
            }
        }
        if d == 0 {
            continue;
        }
        if let Some(ev) = topo.stored_connectivity(d, 0) {
            let n = if d == tdim {
                cell_type.num_vertices()
            } else {
                reference_cell::num_vertices_per_entity(cell_type, d)?
            };
            for (e, row) in ev.rows().enumerate() {
                if row.len() != n {
                    return Err(MeshIncidenceError::RowArityMismatch {
                        d0: d,
                        d1: 0,
                        entity: e as u32,
                        expected: n,
                        found: row.len(),
                    });
                }
            }
        }
    }
    Ok(())
}

fn check_vertex_set_uniqueness(topo: &MeshTopology) -> Result<(), MeshIncidenceError> {
    for d in 1..=topo.dim() {
        let Some(ev) = topo.stored_connectivity(d, 0) else {
            continue;
        };
        let mut seen: HashMap<Vec<u32>, u32> = HashMap::with_capacity(ev.len());
        for (e, row) in ev.rows().enumerate() {
            let mut key = row.to_vec();
            key.sort_unstable();
            if let Some(&first) = seen.get(&key) {
                return Err(MeshIncidenceError::DuplicateVertexSet {
                    dim: d,
                    first,
                    second: e as u32,
                });
            }
            seen.insert(key, e as u32);
        }
    }
    Ok(())
}

fn check_local_order(topo: &MeshTopology) -> Result<(), MeshIncidenceError> {
    let tdim = topo.dim();
    let Some(cv) = topo.stored_connectivity(tdim, 0) else {
        return Ok(());
    };
    for d in 1..tdim {
        let (Some(ce), Some(ev)) = (
            topo.stored_connectivity(tdim, d),
            topo.stored_connectivity(d, 0),
        ) else {
            continue;
        };
        let tables = reference_cell::local_entities(topo.cell_type(), d)?;
        for (c, entities) in ce.rows().enumerate() {
            let vertices = cv.row(c);
            for (k, &e) in entities.iter().enumerate() {
                let mut expected: Vec<u32> =
                    tables[k].iter().map(|&lv| vertices[lv as usize]).collect();
                let mut found = ev.row(e as usize).to_vec();
                expected.sort_unstable();
                found.sort_unstable();
                if expected != found {
                    return Err(MeshIncidenceError::LocalOrderMismatch {
                        cell: c as u32,
                        dim: d,
                        local: k,
                    });
                }
            }
        }
    }
    Ok(())
}
