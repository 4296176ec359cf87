//! Enumeration types used throughout the assessment engine.

use serde::{Deserialize, Serialize};

/// Categorical risk level assigned by the risk scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

/// Where a simulation result came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Computed by the external physics service.
    Real,
    /// Computed by the local simplified model.
    #[default]
    Fallback,
}

/// Independently toggle-able map overlay groups.
///
/// Groups are never mutually exclusive: any subset may be visible at once,
/// and toggling one must not disturb another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayGroup {
    /// The fixed reference impact zone.
    ReferenceImpact,
    /// Zones from the most recent manual-parameter simulation.
    UserSimulation,
    /// Zones from the most recent catalog-object simulation.
    ObjectSimulation,
    /// Informational terrain overlay.
    Terrain,
    /// Informational population-density overlay.
    Population,
    /// Informational coastline overlay.
    Coastlines,
}

impl OverlayGroup {
    /// Every overlay group, in display order.
    pub const ALL: [OverlayGroup; 6] = [
        OverlayGroup::ReferenceImpact,
        OverlayGroup::UserSimulation,
        OverlayGroup::ObjectSimulation,
        OverlayGroup::Terrain,
        OverlayGroup::Population,
        OverlayGroup::Coastlines,
    ];

    /// Whether this group's geometry is derived from a simulation result.
    pub fn is_simulation(self) -> bool {
        matches!(
            self,
            OverlayGroup::UserSimulation | OverlayGroup::ObjectSimulation
        )
    }
}

/// Kind of impact zone circle within a simulation overlay group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    /// Thermal fireball extent.
    Fireball,
    /// Crater rim.
    Crater,
    /// Outer shockwave / ejecta ring.
    Shockwave,
    /// The fixed reference zone.
    Reference,
}

/// Which source the active catalog was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    /// Remote catalog service.
    Remote,
    /// Local delimited-text file.
    File,
    /// Synthetic generator (last resort, cannot fail).
    Synthetic,
}
