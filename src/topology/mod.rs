//! Top-level module for mesh topology abstractions.
//!
//! This module provides the core types for representing the topology of an
//! unstructured mesh:
//! - [`CellType`] and the reference-cell tables
//! - [`Connectivity`], the CSR store for one incidence relation
//! - [`MeshTopology`], the per-mesh table of counts and incidences
//!
//! Most users will build a [`MeshTopology`] and request incidences through
//! it; derivation happens lazily in [`crate::algs::closure`].

pub mod cell_type;
pub mod connectivity;
pub mod mesh_topology;
pub mod reference_cell;
pub mod validation;

pub use cell_type::CellType;
pub use connectivity::Connectivity;
pub use mesh_topology::MeshTopology;
pub use validation::validate_closure;
