//! Geometry derivation for overlay groups.
//!
//! Simulation groups materialize three concentric circles from the most
//! recent matching result; the reference group has a fixed zone; the
//! informational groups resolve to shell-side overlay data.

use impactsim_core::constants::*;
use impactsim_core::enums::{OverlayGroup, ZoneKind};
use impactsim_core::types::{GeoPoint, SimulationResult, ZoneGeometry};

/// Impact zones for a simulation result: fireball, crater rim, and outer
/// shockwave ring, centered on the impact point. A result without an
/// impact point has nothing to draw.
pub fn impact_zones(result: &SimulationResult) -> Vec<ZoneGeometry> {
    let Some(center) = result.impact_point else {
        return Vec::new();
    };
    vec![
        ZoneGeometry::Circle {
            center,
            radius_m: result.fireball_radius_km * 1000.0,
            kind: ZoneKind::Fireball,
        },
        ZoneGeometry::Circle {
            center,
            radius_m: result.crater_diameter_km * 1000.0,
            kind: ZoneKind::Crater,
        },
        ZoneGeometry::Circle {
            center,
            radius_m: result.crater_diameter_km * 2000.0,
            kind: ZoneKind::Shockwave,
        },
    ]
}

/// The fixed reference impact zone (mid-Pacific, 500 km radius).
pub fn reference_zone() -> Vec<ZoneGeometry> {
    vec![ZoneGeometry::Circle {
        center: GeoPoint::new(REFERENCE_IMPACT_LAT, REFERENCE_IMPACT_LON),
        radius_m: REFERENCE_ZONE_RADIUS_M,
        kind: ZoneKind::Reference,
    }]
}

/// Descriptor for an informational overlay; the shell supplies the data.
pub fn overlay_geometry(group: OverlayGroup) -> Vec<ZoneGeometry> {
    vec![ZoneGeometry::MapOverlay { group }]
}
