//! Error taxonomy for the assessment engine.
//!
//! Remote-service failures (`ServiceUnavailable`, `InvalidResponse`) are
//! always recovered by the orchestrator's local fallback and never reach
//! the shell. `MalformedRecord` is recovered by skipping the row. A flyby
//! is not an error at all — see `ScenarioOutcome::NoImpact`.

use thiserror::Error;

/// Result alias used across the workspace.
pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The external physics/catalog service could not be reached or timed out.
    #[error("service unavailable: {reason}")]
    ServiceUnavailable { reason: String },

    /// The external service answered, but not with anything usable.
    #[error("invalid service response: {reason}")]
    InvalidResponse { reason: String },

    /// A catalog row failed its schema constraints.
    #[error("malformed catalog record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// A catalog source (file, remote feed) is entirely unavailable.
    #[error("catalog source unavailable: {reason}")]
    SourceUnavailable { reason: String },

    /// Manual input parameters outside their documented ranges.
    #[error("invalid impact parameters: {reason}")]
    InvalidParameters { reason: String },

    /// A catalog-object scenario referenced an id not in the catalog.
    #[error("unknown catalog object: {id}")]
    UnknownObject { id: String },
}
