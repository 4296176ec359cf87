//! Remote-first simulation with local fallback.
//!
//! Every scenario request goes through [`SimulationOrchestrator`], the
//! single place that decides whether a result comes from the external
//! physics service or the local model. Callers always get a result; a
//! remote failure downgrades provenance, it never propagates.

use std::sync::Arc;

use tracing::{debug, warn};

use impactsim_core::constants::{DEFAULT_DENSITY_KGM3, DEFAULT_ENTRY_ANGLE_DEG, EARTH_RADIUS_KM};
use impactsim_core::enums::Provenance;
use impactsim_core::types::{
    GeoPoint, ImpactParameters, NeoRecord, ScenarioOutcome, SimulationResult,
};
use impactsim_physics::impact;

use crate::client::{PhysicsService, RemoteImpactEffects, RemoteObjectImpact};

/// Decides between the remote physics service and the local model.
pub struct SimulationOrchestrator {
    service: Arc<dyn PhysicsService>,
}

impl SimulationOrchestrator {
    pub fn new(service: Arc<dyn PhysicsService>) -> Self {
        Self { service }
    }

    /// Run a manual-parameter scenario.
    ///
    /// Tries the remote service first; on any failure, falls back to the
    /// local model with the same parameters. The chosen impact point rides
    /// along unchanged in both cases.
    pub async fn run_scenario(
        &self,
        params: &ImpactParameters,
        impact_point: Option<GeoPoint>,
    ) -> SimulationResult {
        match self.service.calculate_impact(params).await {
            Ok(effects) => {
                debug!("scenario computed by remote physics service");
                result_from_effects(effects, impact_point)
            }
            Err(err) => {
                warn!(%err, "physics service failed, using local model");
                impact::simulate(params, impact_point)
            }
        }
    }

    /// Run a scenario for a catalog object.
    ///
    /// A record whose close-approach miss distance exceeds one Earth
    /// radius is a flyby and short-circuits before any service call. When
    /// the service is unhealthy or the object calculation fails, the local
    /// model runs on the record's diameter and velocity with the default
    /// entry angle and density.
    pub async fn run_object_scenario(&self, neo: &NeoRecord) -> ScenarioOutcome {
        if neo.miss_distance_km > EARTH_RADIUS_KM {
            debug!(id = %neo.id, miss_km = neo.miss_distance_km, "object misses Earth");
            return ScenarioOutcome::NoImpact {
                miss_distance_km: neo.miss_distance_km,
            };
        }

        if let Err(err) = self.service.health().await {
            warn!(%err, id = %neo.id, "physics service unhealthy, using local model");
            return ScenarioOutcome::Impact(self.local_object_result(neo));
        }

        match self.service.calculate_object_impact(&neo.id).await {
            Ok(remote) => {
                // The service may resolve a more precise trajectory than
                // the catalog row carried.
                if let Some(miss_km) = remote.miss_distance_km {
                    if miss_km > EARTH_RADIUS_KM {
                        debug!(id = %neo.id, miss_km, "service resolved a flyby");
                        return ScenarioOutcome::NoImpact {
                            miss_distance_km: miss_km,
                        };
                    }
                }
                ScenarioOutcome::Impact(result_from_effects(
                    remote.effects.clone(),
                    resolved_point(&remote),
                ))
            }
            Err(err) => {
                warn!(%err, id = %neo.id, "object calculation failed, using local model");
                ScenarioOutcome::Impact(self.local_object_result(neo))
            }
        }
    }

    fn local_object_result(&self, neo: &NeoRecord) -> SimulationResult {
        let params = ImpactParameters::new(
            neo.diameter_m,
            neo.velocity_kms,
            DEFAULT_ENTRY_ANGLE_DEG,
            DEFAULT_DENSITY_KGM3,
        );
        impact::simulate(&params, None)
    }
}

fn result_from_effects(
    effects: RemoteImpactEffects,
    impact_point: Option<GeoPoint>,
) -> SimulationResult {
    SimulationResult {
        energy_mt: effects.energy_mt,
        crater_diameter_km: effects.crater_diameter_km,
        fireball_radius_km: effects.fireball_radius_km,
        tsunami_height_m: effects.tsunami_height_m,
        seismic_magnitude: effects.seismic_magnitude,
        affected_population: effects.affected_population,
        mass_kg: effects.mass_kg,
        kinetic_energy_j: effects.kinetic_energy_j,
        provenance: Provenance::Real,
        impact_point,
    }
}

fn resolved_point(remote: &RemoteObjectImpact) -> Option<GeoPoint> {
    match (remote.impact_latitude, remote.impact_longitude) {
        (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
        _ => None,
    }
}
