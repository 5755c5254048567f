//! Reference-cell combinatorics: the local-vertex composition of sub-entities.
//!
//! For a cell type `T` and an entity dimension `d`, [`local_entities`] yields
//! the fixed table of local vertex-index tuples defining the `d`-entities of
//! the reference cell, in canonical local order. Simplices follow the
//! opposite-vertex convention (local entity `k` is opposite local vertex `k`);
//! tensor-product cells number vertices lexicographically and enumerate
//! edges and faces in lexicographic order.

use crate::mesh_error::MeshIncidenceError;
use crate::topology::cell_type::CellType;

// Interval: v0 -- v1.
static INTERVAL_VERTICES: [&[u8]; 2] = [&[0], &[1]];
static INTERVAL_CELL: [&[u8]; 1] = [&[0, 1]];

// Triangle: edge k opposes vertex k.
static TRIANGLE_VERTICES: [&[u8]; 3] = [&[0], &[1], &[2]];
static TRIANGLE_EDGES: [&[u8]; 3] = [&[1, 2], &[0, 2], &[0, 1]];
static TRIANGLE_CELL: [&[u8]; 1] = [&[0, 1, 2]];

// Quadrilateral: v0=(0,0) v1=(1,0) v2=(0,1) v3=(1,1).
static QUAD_VERTICES: [&[u8]; 4] = [&[0], &[1], &[2], &[3]];
static QUAD_EDGES: [&[u8]; 4] = [&[0, 1], &[0, 2], &[1, 3], &[2, 3]];
static QUAD_CELL: [&[u8]; 1] = [&[0, 1, 2, 3]];

// Tetrahedron: edge/face k opposes vertex k (faces directly, edges pairwise).
static TET_VERTICES: [&[u8]; 4] = [&[0], &[1], &[2], &[3]];
static TET_EDGES: [&[u8]; 6] = [&[2, 3], &[1, 3], &[1, 2], &[0, 3], &[0, 2], &[0, 1]];
static TET_FACES: [&[u8]; 4] = [&[1, 2, 3], &[0, 2, 3], &[0, 1, 3], &[0, 1, 2]];
static TET_CELL: [&[u8]; 1] = [&[0, 1, 2, 3]];

// Hexahedron: v_i at coordinates (i & 1, (i >> 1) & 1, (i >> 2) & 1).
static HEX_VERTICES: [&[u8]; 8] = [&[0], &[1], &[2], &[3], &[4], &[5], &[6], &[7]];
static HEX_EDGES: [&[u8]; 12] = [
    &[0, 1],
    &[0, 2],
    &[0, 4],
    &[1, 3],
    &[1, 5],
    &[2, 3],
    &[2, 6],
    &[3, 7],
    &[4, 5],
    &[4, 6],
    &[5, 7],
    &[6, 7],
];
static HEX_FACES: [&[u8]; 6] = [
    &[0, 1, 2, 3],
    &[0, 1, 4, 5],
    &[0, 2, 4, 6],
    &[1, 3, 5, 7],
    &[2, 3, 6, 7],
    &[4, 5, 6, 7],
];
static HEX_CELL: [&[u8]; 1] = [&[0, 1, 2, 3, 4, 5, 6, 7]];

/// Local vertex tuples of the `dim`-entities of `cell_type`, in canonical
/// local order.
pub fn local_entities(
    cell_type: CellType,
    dim: u8,
) -> Result<&'static [&'static [u8]], MeshIncidenceError> {
    let table: Option<&'static [&'static [u8]]> = match (cell_type, dim) {
        (CellType::Interval, 0) => Some(&INTERVAL_VERTICES),
        (CellType::Interval, 1) => Some(&INTERVAL_CELL),
        (CellType::Triangle, 0) => Some(&TRIANGLE_VERTICES),
        (CellType::Triangle, 1) => Some(&TRIANGLE_EDGES),
        (CellType::Triangle, 2) => Some(&TRIANGLE_CELL),
        (CellType::Quadrilateral, 0) => Some(&QUAD_VERTICES),
        (CellType::Quadrilateral, 1) => Some(&QUAD_EDGES),
        (CellType::Quadrilateral, 2) => Some(&QUAD_CELL),
        (CellType::Tetrahedron, 0) => Some(&TET_VERTICES),
        (CellType::Tetrahedron, 1) => Some(&TET_EDGES),
        (CellType::Tetrahedron, 2) => Some(&TET_FACES),
        (CellType::Tetrahedron, 3) => Some(&TET_CELL),
        (CellType::Hexahedron, 0) => Some(&HEX_VERTICES),
        (CellType::Hexahedron, 1) => Some(&HEX_EDGES),
        (CellType::Hexahedron, 2) => Some(&HEX_FACES),
        (CellType::Hexahedron, 3) => Some(&HEX_CELL),
        _ => None,
    };
    table.ok_or(MeshIncidenceError::UnsupportedCellType { cell_type, dim })
}

/// Number of `dim`-entities per cell of `cell_type` (`m_T(d)`).
pub fn num_entities(cell_type: CellType, dim: u8) -> Result<usize, MeshIncidenceError> {
    local_entities(cell_type, dim).map(<[_]>::len)
}

/// Number of vertices per `dim`-entity of `cell_type` (`n_T(d)`).
pub fn num_vertices_per_entity(cell_type: CellType, dim: u8) -> Result<usize, MeshIncidenceError> {
    local_entities(cell_type, dim).map(|t| t[0].len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_edges_oppose_vertices() {
        let edges = local_entities(CellType::Triangle, 1).unwrap();
        assert_eq!(edges, &[&[1, 2][..], &[0, 2], &[0, 1]]);
        for (k, edge) in edges.iter().enumerate() {
            assert!(!edge.contains(&(k as u8)));
        }
    }

    #[test]
    fn tetrahedron_counts() {
        assert_eq!(num_entities(CellType::Tetrahedron, 1).unwrap(), 6);
        assert_eq!(num_entities(CellType::Tetrahedron, 2).unwrap(), 4);
        assert_eq!(num_vertices_per_entity(CellType::Tetrahedron, 2).unwrap(), 3);
        let faces = local_entities(CellType::Tetrahedron, 2).unwrap();
        for (k, face) in faces.iter().enumerate() {
            assert!(!face.contains(&(k as u8)));
        }
    }

    #[test]
    fn hexahedron_edges_are_axis_aligned() {
        let edges = local_entities(CellType::Hexahedron, 1).unwrap();
        assert_eq!(edges.len(), 12);
        for edge in edges {
            let diff = edge[0] ^ edge[1];
            assert!(diff.is_power_of_two(), "edge {edge:?} spans more than one axis");
        }
    }

    #[test]
    fn hexahedron_faces_fix_one_axis() {
        let faces = local_entities(CellType::Hexahedron, 2).unwrap();
        assert_eq!(faces.len(), 6);
        for face in faces {
            let and = face.iter().fold(0xffu8, |a, &v| a & v);
            let or = face.iter().fold(0u8, |a, &v| a | v);
            // Exactly one coordinate bit is constant across the four corners.
            assert_eq!((and ^ or).count_ones(), 2);
        }
    }

    #[test]
    fn prism_is_unsupported() {
        assert_eq!(
            local_entities(CellType::Prism, 2).unwrap_err(),
            MeshIncidenceError::UnsupportedCellType {
                cell_type: CellType::Prism,
                dim: 2
            }
        );
    }
}
