//! Raw catalog records and normalization into `NeoRecord`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use impactsim_core::constants::{KM_PER_AU, SECONDS_PER_HOUR};
use impactsim_core::types::NeoRecord;
use impactsim_physics::risk;

/// A catalog record as delivered by a source, before derivation.
///
/// Field names match the remote catalog service's JSON payload; the
/// delimited-text schema maps onto the same fields positionally. All
/// fields default so a sparse remote payload still deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawNeoRecord {
    pub id: String,
    pub neo_reference_id: String,
    pub name: String,
    pub designation: String,
    pub absolute_magnitude: f64,
    pub is_potentially_hazardous: bool,
    pub is_sentry_object: bool,
    pub diameter_min_m: f64,
    pub diameter_max_m: f64,
    pub diameter_avg_m: f64,
    pub orbital_period_days: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub perihelion_au: f64,
    pub aphelion_au: f64,
    /// Latest close-approach date, ISO `YYYY-MM-DD`.
    pub last_approach_date: String,
    pub miss_distance_km: f64,
    pub relative_velocity_kmh: f64,
    pub orbiting_body: String,
}

/// Normalize a raw record: compute derived fields and assign risk.
///
/// The working diameter is the catalog average, pulled inside
/// `[diameter_min_m, diameter_max_m]` when both bounds are present (a
/// missing average becomes the midpoint).
pub fn normalize(raw: &RawNeoRecord) -> NeoRecord {
    let diameter_m = working_diameter(raw);
    let velocity_kms = raw.relative_velocity_kmh / SECONDS_PER_HOUR;
    let miss_distance_au = raw.miss_distance_km / KM_PER_AU;
    let risk = risk::assess(diameter_m, raw.miss_distance_km, velocity_kms);

    NeoRecord {
        id: raw.id.clone(),
        name: raw.name.clone(),
        designation: raw.designation.clone(),
        absolute_magnitude: raw.absolute_magnitude,
        is_potentially_hazardous: raw.is_potentially_hazardous,
        is_sentry_object: raw.is_sentry_object,
        diameter_min_m: raw.diameter_min_m,
        diameter_max_m: raw.diameter_max_m,
        diameter_m,
        orbital_period_days: raw.orbital_period_days,
        eccentricity: raw.eccentricity,
        inclination_deg: raw.inclination_deg,
        perihelion_au: raw.perihelion_au,
        aphelion_au: raw.aphelion_au,
        miss_distance_km: raw.miss_distance_km,
        miss_distance_au,
        velocity_kms,
        orbiting_body: raw.orbiting_body.clone(),
        approach_date: NaiveDate::parse_from_str(&raw.last_approach_date, "%Y-%m-%d").ok(),
        risk,
    }
}

fn working_diameter(raw: &RawNeoRecord) -> f64 {
    let (min, max) = (raw.diameter_min_m, raw.diameter_max_m);
    if min > 0.0 && max >= min {
        if raw.diameter_avg_m <= 0.0 {
            (min + max) / 2.0
        } else {
            raw.diameter_avg_m.clamp(min, max)
        }
    } else {
        raw.diameter_avg_m
    }
}
