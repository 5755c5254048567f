//! # mesh-incidence
//!
//! mesh-incidence is a topology engine for unstructured finite-element
//! meshes: given only the cell-vertex connectivity, it derives on demand
//! every intermediate entity (edges, faces) and the incidence relation
//! between entities of any pair of dimensions, up to the full incidence
//! lattice.
//!
//! ## Features
//! - Entity synthesis with duplicate-free numbering from local, per-cell
//!   information only
//! - CSR incidence stores with O(1) adjacency lookup
//! - Lazy, idempotent derivation: each incidence is computed once on first
//!   request and immutable afterwards
//! - Deterministic output: identical inputs produce bit-identical arrays
//! - Reference-cell tables for interval, triangle, quadrilateral,
//!   tetrahedron and hexahedron cells
//! - Node-ordering permutations for VTK, Gmsh and lexicographic input
//!
//! ## Usage
//!
//! ```rust
//! use mesh_incidence::prelude::*;
//! # fn main() -> Result<(), mesh_incidence::mesh_error::MeshIncidenceError> {
//! // Two triangles sharing an edge.
//! let topo = MeshTopology::build(CellType::Triangle, 4, &[0, 1, 2, 1, 3, 2])?;
//!
//! // Five distinct edges, one of them shared.
//! assert_eq!(topo.num_entities(1)?, 5);
//!
//! // Vertex-vertex adjacency goes through the cells.
//! let vv = topo.connectivity(0, 0)?;
//! assert_eq!(vv.row(1), &[0, 2, 3]);
//! # Ok(())
//! # }
//! ```
//!
//! Geometry (vertex coordinates), file I/O, partitioning and mesh
//! modification are out of scope; the topology is frozen once built and
//! only grows by derivation.

pub mod algs;
pub mod io;
pub mod mesh_error;
pub mod mesh_generation;
pub mod topology;

/// A convenient prelude importing the most-used types.
pub mod prelude {
    pub use crate::io::ordering::{apply_cell_permutation, NodeOrdering};
    pub use crate::mesh_error::MeshIncidenceError;
    pub use crate::topology::cell_type::CellType;
    pub use crate::topology::connectivity::Connectivity;
    pub use crate::topology::mesh_topology::MeshTopology;
    pub use crate::topology::validation::validate_closure;
}
