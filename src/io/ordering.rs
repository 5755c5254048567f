//! Node-ordering permutations between external formats and the internal
//! convention.
//!
//! The internal convention numbers simplex vertices so that local entity `k`
//! opposes local vertex `k`, and numbers tensor-product vertices
//! lexicographically. VTK and Gmsh instead walk quadrilateral and hexahedral
//! vertices counterclockwise around each face, so their cells must be
//! permuted on the way in. Linear simplices coincide in all conventions.
//!
//! A permutation `perm` is read as: internal node `i` is source node
//! `perm[i]`.

use crate::mesh_error::MeshIncidenceError;
use crate::topology::cell_type::CellType;

/// Source orderings convertible to the internal convention.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeOrdering {
    /// The crate's own convention; the identity permutation.
    Internal,
    /// VTK / XDMF linear cells.
    Vtk,
    /// Gmsh linear elements (coincides with VTK for the supported types).
    Gmsh,
    /// Lexicographic coordinate ordering (coincides with the internal
    /// tensor-product numbering).
    Lexicographic,
}

static IDENTITY_2: [u8; 2] = [0, 1];
static IDENTITY_3: [u8; 3] = [0, 1, 2];
static IDENTITY_4: [u8; 4] = [0, 1, 2, 3];
static IDENTITY_8: [u8; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

// VTK quad: counterclockwise (0,0) (1,0) (1,1) (0,1).
static VTK_QUAD: [u8; 4] = [0, 1, 3, 2];
// VTK hex: bottom face counterclockwise, then top face counterclockwise.
static VTK_HEX: [u8; 8] = [0, 1, 3, 2, 4, 5, 7, 6];

/// Per-cell permutation taking `ordering` to the internal convention.
pub fn permutation(
    ordering: NodeOrdering,
    cell_type: CellType,
) -> Result<&'static [u8], MeshIncidenceError> {
    let identity: Option<&'static [u8]> = match cell_type {
        CellType::Interval => Some(&IDENTITY_2),
        CellType::Triangle => Some(&IDENTITY_3),
        CellType::Quadrilateral | CellType::Tetrahedron => Some(&IDENTITY_4),
        CellType::Hexahedron => Some(&IDENTITY_8),
        _ => None,
    };
    let identity = identity.ok_or(MeshIncidenceError::UnsupportedCellType {
        cell_type,
        dim: cell_type.dimension(),
    })?;
    Ok(match (ordering, cell_type) {
        (NodeOrdering::Vtk | NodeOrdering::Gmsh, CellType::Quadrilateral) => &VTK_QUAD,
        (NodeOrdering::Vtk | NodeOrdering::Gmsh, CellType::Hexahedron) => &VTK_HEX,
        _ => identity,
    })
}

/// Invert a permutation.
pub fn inverse_permutation(perm: &[u8]) -> Vec<u8> {
    let mut inv = vec![0u8; perm.len()];
    for (i, &p) in perm.iter().enumerate() {
        inv[p as usize] = i as u8;
    }
    inv
}

/// Remap a row-major cell-vertex table from `ordering` to the internal
/// convention.
pub fn apply_cell_permutation(
    cell_vertices: &[u32],
    cell_type: CellType,
    ordering: NodeOrdering,
) -> Result<Vec<u32>, MeshIncidenceError> {
    let perm = permutation(ordering, cell_type)?;
    let arity = perm.len();
    if cell_vertices.len() % arity != 0 {
        return Err(MeshIncidenceError::CellTableShapeMismatch {
            cell_type,
            expected: arity,
            len: cell_vertices.len(),
        });
    }
    let mut out = Vec::with_capacity(cell_vertices.len());
    for cell in cell_vertices.chunks_exact(arity) {
        out.extend(perm.iter().map(|&p| cell[p as usize]));
    }
    Ok(out)
}
