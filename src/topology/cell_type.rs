//! Cell type metadata for mesh cells.

/// Cell types accepted as mesh cells.
///
/// `Prism` and `Pyramid` are carried as tags but have no reference-cell
/// tables (their facets mix triangles and quadrilaterals, which the fixed
/// per-entity arity of the incidence stores cannot express); requesting
/// their tables surfaces [`UnsupportedCellType`](crate::mesh_error::MeshIncidenceError::UnsupportedCellType).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellType {
    /// 0D vertex.
    Vertex,
    /// 1D interval.
    Interval,
    /// 2D simplex.
    Triangle,
    /// 2D tensor-product cell.
    Quadrilateral,
    /// 3D simplex.
    Tetrahedron,
    /// 3D tensor-product cell.
    Hexahedron,
    /// 3D wedge.
    Prism,
    /// 3D pyramid.
    Pyramid,
}

impl CellType {
    /// Topological dimension of the cell.
    pub fn dimension(self) -> u8 {
        match self {
            CellType::Vertex => 0,
            CellType::Interval => 1,
            CellType::Triangle | CellType::Quadrilateral => 2,
            CellType::Tetrahedron | CellType::Hexahedron | CellType::Prism | CellType::Pyramid => 3,
        }
    }

    /// Number of vertices of the cell.
    pub fn num_vertices(self) -> usize {
        match self {
            CellType::Vertex => 1,
            CellType::Interval => 2,
            CellType::Triangle => 3,
            CellType::Quadrilateral => 4,
            CellType::Tetrahedron => 4,
            CellType::Prism => 6,
            CellType::Pyramid => 5,
            CellType::Hexahedron => 8,
        }
    }
}
