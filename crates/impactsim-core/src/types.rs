//! Fundamental data types: impact parameters, simulation results, and
//! NEO catalog records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{Provenance, RiskLevel};
use crate::error::CoreError;

/// A geographic point (degrees).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Immutable input to a simulation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactParameters {
    /// Impactor diameter (meters, > 0).
    pub diameter_m: f64,
    /// Entry velocity (km/s, > 0).
    pub velocity_kms: f64,
    /// Entry angle from horizontal (degrees, 0–90).
    /// Accepted but not yet used by the local effect formulas.
    pub angle_deg: f64,
    /// Impactor density (kg/m³, > 0).
    pub density_kgm3: f64,
}

impl ImpactParameters {
    pub fn new(diameter_m: f64, velocity_kms: f64, angle_deg: f64, density_kgm3: f64) -> Self {
        Self {
            diameter_m,
            velocity_kms,
            angle_deg,
            density_kgm3,
        }
    }

    /// Check the documented input ranges. The shell is expected to reject
    /// bad input before it reaches the core; this is the core's backstop.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(self.diameter_m > 0.0 && self.diameter_m.is_finite()) {
            return Err(CoreError::InvalidParameters {
                reason: format!("diameter must be positive, got {}", self.diameter_m),
            });
        }
        if !(self.velocity_kms > 0.0 && self.velocity_kms.is_finite()) {
            return Err(CoreError::InvalidParameters {
                reason: format!("velocity must be positive, got {}", self.velocity_kms),
            });
        }
        if !(0.0..=90.0).contains(&self.angle_deg) {
            return Err(CoreError::InvalidParameters {
                reason: format!("entry angle must be 0–90°, got {}", self.angle_deg),
            });
        }
        if !(self.density_kgm3 > 0.0 && self.density_kgm3.is_finite()) {
            return Err(CoreError::InvalidParameters {
                reason: format!("density must be positive, got {}", self.density_kgm3),
            });
        }
        Ok(())
    }
}

/// Canonical impact-effect estimate. Immutable once produced; a new
/// scenario produces a new result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Impact energy (megatons TNT equivalent).
    pub energy_mt: f64,
    /// Final crater diameter (km).
    pub crater_diameter_km: f64,
    /// Fireball radius (km).
    pub fireball_radius_km: f64,
    /// Tsunami height for an ocean impact (m).
    pub tsunami_height_m: f64,
    /// Richter-like seismic magnitude, floored at 0.
    pub seismic_magnitude: f64,
    /// Estimated affected population.
    pub affected_population: u64,
    /// Impactor mass (kg), when the computing side reports it.
    pub mass_kg: Option<f64>,
    /// Kinetic energy (J), when the computing side reports it.
    pub kinetic_energy_j: Option<f64>,
    /// Real (remote service) or fallback (local model).
    pub provenance: Provenance,
    /// Geographic impact point, when one was chosen or resolved.
    pub impact_point: Option<GeoPoint>,
}

/// Outcome of a catalog-object scenario. A flyby is a first-class result,
/// not an error and not a zero-filled impact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum ScenarioOutcome {
    Impact(SimulationResult),
    NoImpact { miss_distance_km: f64 },
}

/// Risk classification plus the score that produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub score: u32,
}

/// A normalized near-Earth object record.
///
/// Constructed once per ingestion pass; read-only afterward. The catalog
/// is replaced wholesale on reload, never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeoRecord {
    pub id: String,
    pub name: String,
    pub designation: String,
    pub absolute_magnitude: f64,
    pub is_potentially_hazardous: bool,
    pub is_sentry_object: bool,
    /// Estimated diameter bounds (meters).
    pub diameter_min_m: f64,
    pub diameter_max_m: f64,
    /// Derived working diameter (meters) — the catalog average.
    pub diameter_m: f64,
    pub orbital_period_days: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub perihelion_au: f64,
    pub aphelion_au: f64,
    /// Latest close-approach miss distance (km) and its AU equivalent.
    pub miss_distance_km: f64,
    pub miss_distance_au: f64,
    /// Latest close-approach relative velocity (km/s).
    pub velocity_kms: f64,
    pub orbiting_body: String,
    /// Latest close-approach date, when parseable.
    pub approach_date: Option<NaiveDate>,
    pub risk: RiskAssessment,
}

/// A geometry element owned by exactly one overlay group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "kebab-case")]
pub enum ZoneGeometry {
    /// A circular impact zone on the map.
    Circle {
        center: GeoPoint,
        radius_m: f64,
        kind: crate::enums::ZoneKind,
    },
    /// An informational overlay with no simulation dependency; the shell
    /// resolves it to its own tile or vector data.
    MapOverlay { group: crate::enums::OverlayGroup },
}

/// Opaque handle for a materialized geometry element. Issued by the layer
/// composition manager; belongs to exactly one overlay group.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GeometryHandle(pub u64);

/// Side-by-side comparison of a result against the reference scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub energy_mt: f64,
    pub reference_energy_mt: f64,
    pub crater_diameter_km: f64,
    pub reference_crater_km: f64,
    pub tsunami_height_m: f64,
    pub reference_tsunami_m: f64,
}

impl ComparisonReport {
    /// Compare a simulation result against the fixed reference scenario.
    pub fn against_reference(result: &SimulationResult) -> Self {
        Self {
            energy_mt: result.energy_mt,
            reference_energy_mt: REFERENCE_ENERGY_MT,
            crater_diameter_km: result.crater_diameter_km,
            reference_crater_km: REFERENCE_CRATER_KM,
            tsunami_height_m: result.tsunami_height_m,
            reference_tsunami_m: REFERENCE_TSUNAMI_M,
        }
    }
}
