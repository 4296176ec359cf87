//! Application state snapshot — the shell-pollable view of the core.

use serde::{Deserialize, Serialize};

use crate::enums::{CatalogSource, OverlayGroup};
use crate::types::SimulationResult;

/// Aggregate statistics over the loaded catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogStatistics {
    pub total: usize,
    /// Records whose latest approach was closer than 0.1 AU.
    pub close_approaches: usize,
    pub low_risk: usize,
    pub medium_risk: usize,
    pub high_risk: usize,
    /// Largest estimated diameter in the catalog (meters).
    pub largest_diameter_m: f64,
    /// Mean diameter over records with a positive diameter (meters).
    pub average_diameter_m: f64,
    /// Mean relative velocity over records with a positive velocity (km/s).
    pub average_velocity_kms: f64,
}

/// Snapshot of the core for synchronous shell queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSnapshot {
    pub statistics: CatalogStatistics,
    /// Which source the active catalog came from; `None` before the first load.
    pub catalog_source: Option<CatalogSource>,
    /// Overlay groups currently visible.
    pub visible_layers: Vec<OverlayGroup>,
    /// The most recent simulation result, if any.
    pub last_result: Option<SimulationResult>,
}
