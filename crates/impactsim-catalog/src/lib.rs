//! NEO catalog ingestion for IMPACTSIM.
//!
//! Produces a ranked, de-duplicated catalog of `NeoRecord`s from exactly
//! one of three sources, in fixed priority order: remote catalog service,
//! delimited-text file, synthetic generator. A later source is tried only
//! when the previous one is entirely unavailable; partially malformed
//! input never falls through.

pub mod ingestor;
pub mod parse;
pub mod query;
pub mod record;
pub mod stats;
pub mod synthetic;

pub use impactsim_core as core;
