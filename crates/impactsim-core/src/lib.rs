//! Core types and definitions for the IMPACTSIM assessment engine.
//!
//! This crate defines the vocabulary shared across all other crates:
//! impact parameters, simulation results, NEO records, overlay groups,
//! shell commands, core events, and constants. It has no dependency on
//! any runtime, network, or rendering framework.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
