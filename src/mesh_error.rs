//! `MeshIncidenceError`: unified error type for mesh-incidence public APIs
//!
//! Fallible public APIs return this error instead of panicking. Internal
//! invariant breaks (prerequisite violations, double initialization of an
//! incidence) are programmer errors and abort via assertions.

use crate::topology::cell_type::CellType;
use thiserror::Error;

/// Unified error type for mesh-incidence operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshIncidenceError {
    /// The given cell type cannot serve as a mesh cell.
    #[error("cell type {cell_type:?} has dimension 0 and cannot be a mesh cell")]
    ZeroDimensionalCellType { cell_type: CellType },
    /// The flat cell-vertex table does not divide into rows of the expected arity.
    #[error(
        "cell-vertex table of length {len} is not a multiple of {expected} vertices per {cell_type:?}"
    )]
    CellTableShapeMismatch {
        cell_type: CellType,
        expected: usize,
        len: usize,
    },
    /// A cell references a vertex index outside `[0, num_vertices)`.
    #[error("cell {cell} references vertex {vertex} but the mesh has {num_vertices} vertices")]
    VertexOutOfRange {
        cell: usize,
        vertex: u32,
        num_vertices: usize,
    },
    /// The reference-cell tables do not cover this cell type / dimension pair.
    #[error("no entity table for cell type {cell_type:?} and dimension {dim}")]
    UnsupportedCellType { cell_type: CellType, dim: u8 },
    /// A requested dimension exceeds the topological dimension of the mesh.
    #[error("dimension {dim} exceeds topological dimension {max}")]
    DimensionOutOfRange { dim: u8, max: u8 },
    /// An entity index is outside `[0, N_d)`.
    #[error("entity {entity} out of range for dimension {dim} ({count} entities)")]
    EntityOutOfRange { dim: u8, entity: u32, count: usize },
    /// Audit: a connectivity row contains a duplicate or self entry.
    #[error("connectivity ({d0},{d1}) row {entity} contains a duplicate or self entry")]
    NonSetRow { d0: u8, d1: u8, entity: u32 },
    /// Audit: forward and transposed incidences disagree on total cardinality.
    #[error(
        "connectivity ({d0},{d1}) stores {forward} connections but its transpose stores {backward}"
    )]
    CardinalityMismatch {
        d0: u8,
        d1: u8,
        forward: usize,
        backward: usize,
    },
    /// Audit: two distinct entities of one dimension share a vertex set.
    #[error("entities {first} and {second} of dimension {dim} share a vertex set")]
    DuplicateVertexSet { dim: u8, first: u32, second: u32 },
    /// Audit: a connectivity row has the wrong number of entries.
    #[error("connectivity ({d0},{d1}) row {entity} has {found} entries, expected {expected}")]
    RowArityMismatch {
        d0: u8,
        d1: u8,
        entity: u32,
        expected: usize,
        found: usize,
    },
    /// Audit: a cell's local entity disagrees with the reference-cell tuple.
    #[error("cell {cell} local {dim}-entity {local} does not match the reference-cell vertex tuple")]
    LocalOrderMismatch { cell: u32, dim: u8, local: usize },
}
