//! Mesh topology: per-dimension entity counts plus the incidence matrix.
//!
//! [`MeshTopology`] owns the `(D+1) x (D+1)` matrix of optional
//! [`Connectivity`] stores and the per-dimension entity counts. Every count
//! and every store sits behind a [`OnceCell`] and transitions exactly once
//! from absent to present; afterwards it is read-only. This makes closure
//! requests idempotent, lets derivation run through `&self`, and keeps the
//! table safe to read from multiple threads once all writes have quiesced.
//!
//! Only cells and vertices are supplied at construction; everything else is
//! derived on demand by [`crate::algs::closure`].

use once_cell::sync::OnceCell;

use crate::algs::closure;
use crate::mesh_error::MeshIncidenceError;
use crate::topology::cell_type::CellType;
use crate::topology::connectivity::Connectivity;

/// Topology of an unstructured mesh of a single cell type.
///
/// # Example
/// ```rust
/// use mesh_incidence::topology::cell_type::CellType;
/// use mesh_incidence::topology::mesh_topology::MeshTopology;
/// # fn main() -> Result<(), mesh_incidence::mesh_error::MeshIncidenceError> {
/// // Two triangles sharing the edge {1, 2}.
/// let topo = MeshTopology::build(CellType::Triangle, 4, &[0, 1, 2, 1, 3, 2])?;
/// assert_eq!(topo.num_entities(1)?, 5);
/// let edge_cells = topo.connectivity(1, 2)?;
/// assert_eq!(edge_cells.rows().filter(|r| r.len() == 2).count(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct MeshTopology {
    cell_type: CellType,
    dim: u8,
    /// `counts[d]` is the number of `d`-entities, absent until derived.
    counts: Vec<OnceCell<usize>>,
    /// Row-major `(dim+1) x (dim+1)` matrix of incidence stores.
    conn: Vec<OnceCell<Connectivity>>,
}

impl MeshTopology {
    /// Build a topology from its cells.
    ///
    /// `cell_vertices` is a row-major `N_D x n_T(D)` table of vertex indices
    /// in the internal ordering (see [`crate::io::ordering`] for conversions
    /// from external formats). The table is validated: rows must have
    /// exactly `n_T(D)` entries and every index must be below `num_vertices`.
    pub fn build(
        cell_type: CellType,
        num_vertices: usize,
        cell_vertices: &[u32],
    ) -> Result<Self, MeshIncidenceError> {
        let dim = cell_type.dimension();
        if dim == 0 {
            return Err(MeshIncidenceError::ZeroDimensionalCellType { cell_type });
        }
        let arity = cell_type.num_vertices();
        if cell_vertices.len() % arity != 0 {
            return Err(MeshIncidenceError::CellTableShapeMismatch {
                cell_type,
                expected: arity,
                len: cell_vertices.len(),
            });
        }
        for (pos, &v) in cell_vertices.iter().enumerate() {
            if v as usize >= num_vertices {
                return Err(MeshIncidenceError::VertexOutOfRange {
                    cell: pos / arity,
                    vertex: v,
                    num_vertices,
                });
            }
        }
        let num_cells = cell_vertices.len() / arity;

        let n = dim as usize + 1;
        let topo = Self {
            cell_type,
            dim,
            counts: (0..n).map(|_| OnceCell::new()).collect(),
            conn: (0..n * n).map(|_| OnceCell::new()).collect(),
        };
        topo.set_entity_count(0, num_vertices);
        topo.set_entity_count(dim, num_cells);
        topo.set_connectivity(
            dim,
            0,
            Connectivity::from_flat(cell_vertices.to_vec(), num_cells, arity),
        );
        Ok(topo)
    }

    /// Topological dimension `D`.
    #[inline]
    pub fn dim(&self) -> u8 {
        self.dim
    }

    /// The cell type of the mesh.
    #[inline]
    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    /// Number of `d`-entities, or 0 when not yet derived. Never computes.
    #[inline]
    pub fn size(&self, d: u8) -> usize {
        debug_assert!(d <= self.dim, "dimension {d} exceeds {}", self.dim);
        self.counts
            .get(d as usize)
            .and_then(|c| c.get())
            .copied()
            .unwrap_or(0)
    }

    /// Number of cells (`N_D`).
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.size(self.dim)
    }

    /// Number of vertices (`N_0`).
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.size(0)
    }

    /// Number of `d`-entities, deriving them on first request.
    pub fn num_entities(&self, d: u8) -> Result<usize, MeshIncidenceError> {
        self.check_dim(d)?;
        if let Some(&n) = self.count_cell(d).get() {
            return Ok(n);
        }
        closure::compute_entities(self, d)
    }

    /// The `(d0, d1)` incidence, computing it (and any prerequisites) on
    /// first access.
    pub fn connectivity(&self, d0: u8, d1: u8) -> Result<&Connectivity, MeshIncidenceError> {
        self.check_dim(d0)?;
        self.check_dim(d1)?;
        closure::compute_connectivity(self, d0, d1)?;
        Ok(self
            .stored_connectivity(d0, d1)
            .expect("closure left the requested incidence absent"))
    }

    /// The `(d0, d1)` incidence if already present. Never computes.
    #[inline]
    pub fn stored_connectivity(&self, d0: u8, d1: u8) -> Option<&Connectivity> {
        if d0 > self.dim || d1 > self.dim {
            return None;
        }
        self.conn[self.index(d0, d1)].get()
    }

    /// Vertex indices of entity `e` of dimension `d`, in canonical local
    /// order. Shorthand for `connectivity(d, 0).row(e)`.
    pub fn entity_vertices(&self, d: u8, e: u32) -> Result<&[u32], MeshIncidenceError> {
        let conn = self.connectivity(d, 0)?;
        if e as usize >= conn.len() {
            return Err(MeshIncidenceError::EntityOutOfRange {
                dim: d,
                entity: e,
                count: conn.len(),
            });
        }
        Ok(conn.row(e as usize))
    }

    /// Iterate over all entities of dimension `d`, deriving them on first
    /// request.
    pub fn entities(&self, d: u8) -> Result<std::ops::Range<u32>, MeshIncidenceError> {
        let n = self.num_entities(d)?;
        Ok(0..n as u32)
    }

    /// Iterate over the `d1`-neighbours of entity `e` of dimension `d0`, in
    /// stored order, computing the incidence on first request.
    pub fn entity_neighbors(
        &self,
        d0: u8,
        e: u32,
        d1: u8,
    ) -> Result<impl Iterator<Item = u32> + '_, MeshIncidenceError> {
        let conn = self.connectivity(d0, d1)?;
        if e as usize >= conn.len() {
            return Err(MeshIncidenceError::EntityOutOfRange {
                dim: d0,
                entity: e,
                count: conn.len(),
            });
        }
        Ok(conn.row(e as usize).iter().copied())
    }

    #[inline]
    fn check_dim(&self, d: u8) -> Result<(), MeshIncidenceError> {
        if d > self.dim {
            return Err(MeshIncidenceError::DimensionOutOfRange {
                dim: d,
                max: self.dim,
            });
        }
        Ok(())
    }

    #[inline]
    fn index(&self, d0: u8, d1: u8) -> usize {
        debug_assert!(d0 <= self.dim && d1 <= self.dim);
        d0 as usize * (self.dim as usize + 1) + d1 as usize
    }

    pub(crate) fn count_cell(&self, d: u8) -> &OnceCell<usize> {
        &self.counts[d as usize]
    }

    /// Record the number of `d`-entities. A count transitions exactly once.
    pub(crate) fn set_entity_count(&self, d: u8, n: usize) {
        assert!(
            self.counts[d as usize].set(n).is_ok(),
            "entity count for dimension {d} already set"
        );
    }

    /// Store the `(d0, d1)` incidence. A store transitions exactly once.
    pub(crate) fn set_connectivity(&self, d0: u8, d1: u8, conn: Connectivity) {
        assert!(
            self.conn[self.index(d0, d1)].set(conn).is_ok(),
            "connectivity ({d0},{d1}) already present"
        );
    }
}
