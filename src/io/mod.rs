//! Format-facing helpers.
//!
//! No file formats are read or written here; this module only carries the
//! per-cell node-ordering permutations needed to hand externally numbered
//! cells to [`MeshTopology::build`](crate::topology::mesh_topology::MeshTopology::build).

pub mod ordering;

pub use ordering::{apply_cell_permutation, NodeOrdering};
