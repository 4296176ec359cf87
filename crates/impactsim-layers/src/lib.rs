//! Layer composition for IMPACTSIM.
//!
//! Tracks six independently toggle-able overlay groups and the geometry
//! each one owns. Toggling one group never hides, duplicates, or removes
//! geometry owned by another.

pub mod manager;
pub mod zones;

pub use impactsim_core as core;
