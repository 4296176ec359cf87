//! Simulation orchestration for IMPACTSIM.
//!
//! Wraps the external physics service behind a trait, and implements the
//! single policy point that decides between the remote service and the
//! local fallback model for every request.

pub mod client;
pub mod orchestrator;

pub use impactsim_core as core;
