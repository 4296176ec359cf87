//! Pure impact physics for IMPACTSIM.
//!
//! Implements the always-available local effect model and the NEO risk
//! scorer. Both are pure functions over plain data — no I/O, no state,
//! no randomness — so the orchestrator can fall back to them at any time.

pub mod impact;
pub mod risk;

pub use impactsim_core as core;

#[cfg(test)]
mod tests;
