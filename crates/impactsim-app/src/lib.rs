//! Application wiring for IMPACTSIM.
//!
//! Owns the long-lived state (catalog, layer composition, orchestrator)
//! and translates shell commands into core events.

pub mod config;
pub mod context;
