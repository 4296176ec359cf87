//! The layer composition state machine.
//!
//! Six independent boolean flags, one per overlay group, with an explicit
//! handle-to-group index maintained incrementally — no transition ever
//! re-scans global render state. Transitions are synchronous and never
//! call back into the manager, so a toggle arriving while an earlier
//! toggle's events are still being drained cannot corrupt the index.

use std::collections::HashMap;

use tracing::debug;

use impactsim_core::enums::OverlayGroup;
use impactsim_core::events::LayerEvent;
use impactsim_core::types::{GeometryHandle, SimulationResult, ZoneGeometry};

use crate::zones;

/// Tracks visibility and owned geometry per overlay group.
#[derive(Debug, Default)]
pub struct LayerCompositionManager {
    visible: HashMap<OverlayGroup, bool>,
    /// Geometry handles owned by each group. A handle belongs to exactly
    /// one group for its whole lifetime.
    owned: HashMap<OverlayGroup, Vec<GeometryHandle>>,
    /// Most recent result per simulation group.
    results: HashMap<OverlayGroup, SimulationResult>,
    next_handle: u64,
}

impl LayerCompositionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a group is currently visible.
    pub fn is_visible(&self, group: OverlayGroup) -> bool {
        self.visible.get(&group).copied().unwrap_or(false)
    }

    /// Visible groups in display order.
    pub fn visible_groups(&self) -> Vec<OverlayGroup> {
        OverlayGroup::ALL
            .into_iter()
            .filter(|group| self.is_visible(*group))
            .collect()
    }

    /// Handles owned by a group.
    pub fn handles(&self, group: OverlayGroup) -> &[GeometryHandle] {
        self.owned.get(&group).map_or(&[], Vec::as_slice)
    }

    /// Total materialized geometry count across all groups.
    pub fn handle_count(&self) -> usize {
        self.owned.values().map(Vec::len).sum()
    }

    /// Show or hide a group.
    pub fn toggle(&mut self, group: OverlayGroup, visible: bool) -> Vec<LayerEvent> {
        if visible {
            self.enable(group)
        } else {
            self.disable(group)
        }
    }

    /// Turn a group on, materializing its geometry. Idempotent: enabling
    /// a visible group is a no-op.
    pub fn enable(&mut self, group: OverlayGroup) -> Vec<LayerEvent> {
        if self.is_visible(group) {
            return Vec::new();
        }
        debug!(?group, "enabling overlay group");
        self.visible.insert(group, true);

        let mut events = self.materialize(group);
        events.push(LayerEvent::LayerChanged {
            group,
            visible: true,
        });
        events
    }

    /// Turn a group off, removing only geometry it owns. Idempotent.
    pub fn disable(&mut self, group: OverlayGroup) -> Vec<LayerEvent> {
        if !self.is_visible(group) {
            return Vec::new();
        }
        debug!(?group, "disabling overlay group");
        self.visible.insert(group, false);

        let mut events = self.remove_owned(group);
        events.push(LayerEvent::LayerChanged {
            group,
            visible: false,
        });
        events
    }

    /// Replace the active result for a simulation group. The previous
    /// result's geometry is removed before the new geometry is added, so
    /// rerunning a scenario never duplicates zones. Results for groups
    /// that are not simulation groups are ignored.
    pub fn set_result(&mut self, group: OverlayGroup, result: SimulationResult) -> Vec<LayerEvent> {
        if !group.is_simulation() {
            return Vec::new();
        }
        self.results.insert(group, result);

        if self.is_visible(group) {
            let mut events = self.remove_owned(group);
            events.extend(self.materialize(group));
            events
        } else {
            Vec::new()
        }
    }

    /// Disable every group and clear all materialization bookkeeping, so
    /// re-enabling a group reliably re-materializes it.
    pub fn reset_all(&mut self) -> Vec<LayerEvent> {
        let mut events = Vec::new();
        for group in OverlayGroup::ALL {
            events.extend(self.disable(group));
        }
        self.results.clear();
        events
    }

    fn materialize(&mut self, group: OverlayGroup) -> Vec<LayerEvent> {
        let shapes: Vec<ZoneGeometry> = match group {
            OverlayGroup::UserSimulation | OverlayGroup::ObjectSimulation => self
                .results
                .get(&group)
                .map(zones::impact_zones)
                .unwrap_or_default(),
            OverlayGroup::ReferenceImpact => zones::reference_zone(),
            OverlayGroup::Terrain | OverlayGroup::Population | OverlayGroup::Coastlines => {
                zones::overlay_geometry(group)
            }
        };

        shapes
            .into_iter()
            .map(|shape| {
                let handle = self.alloc_handle();
                self.owned.entry(group).or_default().push(handle);
                LayerEvent::GeometryAdded {
                    handle,
                    group,
                    shape,
                }
            })
            .collect()
    }

    fn remove_owned(&mut self, group: OverlayGroup) -> Vec<LayerEvent> {
        self.owned
            .remove(&group)
            .unwrap_or_default()
            .into_iter()
            .map(|handle| LayerEvent::GeometryRemoved { handle, group })
            .collect()
    }

    fn alloc_handle(&mut self) -> GeometryHandle {
        let handle = GeometryHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }
}
