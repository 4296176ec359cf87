//! Shell commands sent from the presentation shell to the core.
//!
//! The shell is responsible for basic input validation (e.g. requiring an
//! impact point before a manual run); the core re-checks parameter ranges
//! as a backstop.

use serde::{Deserialize, Serialize};

use crate::enums::OverlayGroup;
use crate::types::{GeoPoint, ImpactParameters};

/// All shell-facing operations on the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShellCommand {
    /// Run a manual-parameter impact scenario.
    RunScenario {
        params: ImpactParameters,
        impact_point: Option<GeoPoint>,
    },
    /// Run an impact scenario for a catalog object.
    RunCatalogObjectScenario { id: String },
    /// Show or hide an overlay group.
    ToggleLayer { group: OverlayGroup, visible: bool },
    /// Load (or reload) the NEO catalog, replacing it wholesale.
    LoadCatalog,
    /// Disable every overlay group and clear materialization bookkeeping.
    ResetLayers,
    /// Compare the most recent user simulation against the reference scenario.
    CompareWithReference,
}
