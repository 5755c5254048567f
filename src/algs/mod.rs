//! Algorithm module: derivation of entities and incidences.

pub mod closure;

pub use closure::{compute_connectivity, compute_entities};
