//! Local simplified impact-effect model.
//!
//! Used whenever the external physics service is unreachable. The scaling
//! laws are deliberately simple power laws over impact energy; the entry
//! angle is accepted but does not enter the formulas yet (known
//! limitation of the model, preserved as-is).

use std::f64::consts::PI;

use impactsim_core::constants::*;
use impactsim_core::enums::Provenance;
use impactsim_core::types::{GeoPoint, ImpactParameters, SimulationResult};

/// Compute impact effects from first principles.
///
/// Every output is finite and non-negative for valid parameters. The
/// seismic magnitude is floored at 0.0 so that tiny or non-positive
/// energies produce a defined value instead of NaN or -Inf.
pub fn simulate(params: &ImpactParameters, impact_point: Option<GeoPoint>) -> SimulationResult {
    let radius_m = params.diameter_m / 2.0;
    let mass_kg = (4.0 / 3.0) * PI * radius_m.powi(3) * params.density_kgm3;

    let velocity_ms = params.velocity_kms * 1000.0;
    let kinetic_energy_j = 0.5 * mass_kg * velocity_ms * velocity_ms;
    let energy_mt = kinetic_energy_j / JOULES_PER_MEGATON;

    SimulationResult {
        energy_mt,
        crater_diameter_km: energy_mt.powf(CRATER_EXPONENT),
        fireball_radius_km: energy_mt.powf(FIREBALL_EXPONENT),
        tsunami_height_m: TSUNAMI_SCALE_M * energy_mt.powf(TSUNAMI_EXPONENT),
        seismic_magnitude: seismic_magnitude(energy_mt),
        affected_population: (POPULATION_SCALE * energy_mt.powf(POPULATION_EXPONENT)).round()
            as u64,
        mass_kg: Some(mass_kg),
        kinetic_energy_j: Some(kinetic_energy_j),
        provenance: Provenance::Fallback,
        impact_point,
    }
}

/// Richter-like magnitude, floored at 0.0. `log10` is undefined for
/// non-positive energies; those map to the floor rather than NaN.
fn seismic_magnitude(energy_mt: f64) -> f64 {
    if energy_mt <= 0.0 {
        return 0.0;
    }
    (energy_mt.log10() + SEISMIC_OFFSET).max(0.0)
}
