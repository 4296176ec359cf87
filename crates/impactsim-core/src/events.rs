//! Events emitted by the core for the presentation shell.

use serde::{Deserialize, Serialize};

use crate::enums::{CatalogSource, OverlayGroup};
use crate::types::{ComparisonReport, GeometryHandle, SimulationResult, ZoneGeometry};

/// Layer composition transitions, emitted incrementally so the shell never
/// has to re-scan global render state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LayerEvent {
    /// An overlay group changed visibility.
    LayerChanged { group: OverlayGroup, visible: bool },
    /// A geometry element was materialized for a group.
    GeometryAdded {
        handle: GeometryHandle,
        group: OverlayGroup,
        shape: ZoneGeometry,
    },
    /// A geometry element owned by a group was removed.
    GeometryRemoved {
        handle: GeometryHandle,
        group: OverlayGroup,
    },
}

/// All events the core emits toward the shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CoreEvent {
    /// A simulation produced a result (real or fallback).
    ResultReady { result: SimulationResult },
    /// A catalog-object scenario resolved to a flyby.
    NoImpact { id: String, miss_distance_km: f64 },
    /// The catalog was replaced; `count` records are now ranked and ready.
    CatalogReady { count: usize, source: CatalogSource },
    /// Comparison against the reference scenario.
    ComparisonReady { report: ComparisonReport },
    /// A command was rejected before any computation ran. Only invalid
    /// parameters or an unknown object id produce this; remote failures
    /// are recovered by fallback and never surface here.
    CommandFailed { reason: String },
    /// A layer composition transition. Untagged so the inner event's own
    /// `type` tag is the only one on the wire; must stay the last variant.
    #[serde(untagged)]
    Layer(LayerEvent),
}

impl From<LayerEvent> for CoreEvent {
    fn from(event: LayerEvent) -> Self {
        CoreEvent::Layer(event)
    }
}
