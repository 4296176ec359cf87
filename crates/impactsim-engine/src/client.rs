//! Thin reqwest wrapper for the external physics service.
//!
//! Every call carries a bounded timeout and surfaces failure as a typed
//! error, never an unstructured one. No retries happen here — retry and
//! fallback policy belongs to the orchestrator.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use impactsim_catalog::ingestor::RemoteCatalog;
use impactsim_catalog::record::RawNeoRecord;
use impactsim_core::error::{CoreError, CoreResult};
use impactsim_core::types::ImpactParameters;

/// Request body for `POST /impact/calculate`. The wire contract takes
/// velocity in m/s.
#[derive(Debug, Serialize)]
struct ImpactRequest {
    diameter_m: f64,
    velocity_ms: f64,
    angle_deg: f64,
    density_kgm3: f64,
}

impl From<&ImpactParameters> for ImpactRequest {
    fn from(params: &ImpactParameters) -> Self {
        Self {
            diameter_m: params.diameter_m,
            velocity_ms: params.velocity_kms * 1000.0,
            angle_deg: params.angle_deg,
            density_kgm3: params.density_kgm3,
        }
    }
}

/// Effects payload from the physics service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteImpactEffects {
    pub energy_mt: f64,
    pub crater_diameter_km: f64,
    pub fireball_radius_km: f64,
    pub tsunami_height_m: f64,
    pub seismic_magnitude: f64,
    pub affected_population: u64,
    pub mass_kg: Option<f64>,
    pub kinetic_energy_j: Option<f64>,
}

/// Catalog-object impact payload: effects plus an optionally resolved
/// geographic impact point and miss distance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteObjectImpact {
    #[serde(flatten)]
    pub effects: RemoteImpactEffects,
    pub impact_latitude: Option<f64>,
    pub impact_longitude: Option<f64>,
    pub miss_distance_km: Option<f64>,
}

/// The external physics service contract. The orchestrator only ever
/// talks through this trait, so tests substitute in-memory fakes.
#[async_trait]
pub trait PhysicsService: Send + Sync {
    /// Lightweight liveness probe; any 2xx is success.
    async fn health(&self) -> CoreResult<()>;
    /// Scenario-based calculation from manual parameters.
    async fn calculate_impact(&self, params: &ImpactParameters) -> CoreResult<RemoteImpactEffects>;
    /// Catalog-object calculation by NEO id.
    async fn calculate_object_impact(&self, id: &str) -> CoreResult<RemoteObjectImpact>;
}

/// Reqwest-backed implementation of [`PhysicsService`] and the catalog feed.
#[derive(Clone)]
pub struct RemotePhysicsClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl RemotePhysicsClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            timeout,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl PhysicsService for RemotePhysicsClient {
    async fn health(&self) -> CoreResult<()> {
        let res = self
            .http
            .get(self.url("/health"))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(res.status())
    }

    async fn calculate_impact(&self, params: &ImpactParameters) -> CoreResult<RemoteImpactEffects> {
        let res = self
            .http
            .post(self.url("/impact/calculate"))
            .timeout(self.timeout)
            .json(&ImpactRequest::from(params))
            .send()
            .await
            .map_err(transport_error)?;
        check_status(res.status())?;
        res.json::<RemoteImpactEffects>().await.map_err(decode_error)
    }

    async fn calculate_object_impact(&self, id: &str) -> CoreResult<RemoteObjectImpact> {
        let res = self
            .http
            .post(self.url(&format!("/impact/asteroid/{id}")))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(res.status())?;
        res.json::<RemoteObjectImpact>().await.map_err(decode_error)
    }
}

#[async_trait]
impl RemoteCatalog for RemotePhysicsClient {
    async fn fetch_catalog(&self) -> CoreResult<Vec<RawNeoRecord>> {
        let res = self
            .http
            .get(self.url("/asteroids"))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(res.status())?;
        res.json::<Vec<RawNeoRecord>>().await.map_err(decode_error)
    }
}

/// Network-level failures (refused, DNS, timeout) mean the service is
/// unreachable.
fn transport_error(err: reqwest::Error) -> CoreError {
    CoreError::ServiceUnavailable {
        reason: err.to_string(),
    }
}

/// A reply that cannot be decoded is an invalid response.
fn decode_error(err: reqwest::Error) -> CoreError {
    CoreError::InvalidResponse {
        reason: err.to_string(),
    }
}

/// 5xx means the service is down; any other non-success status is a
/// contract violation.
fn check_status(status: StatusCode) -> CoreResult<()> {
    if status.is_success() {
        Ok(())
    } else if status.is_server_error() {
        Err(CoreError::ServiceUnavailable {
            reason: format!("upstream status {status}"),
        })
    } else {
        Err(CoreError::InvalidResponse {
            reason: format!("unexpected status {status}"),
        })
    }
}
