//! Catalog ingestion pipeline: source selection, normalization, ranking.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use impactsim_core::enums::CatalogSource;
use impactsim_core::error::CoreResult;
use impactsim_core::types::NeoRecord;

use crate::parse;
use crate::record::{normalize, RawNeoRecord};
use crate::synthetic;

/// Remote catalog feed. The reqwest-backed client lives in the engine
/// crate; tests substitute in-memory fakes.
#[async_trait]
pub trait RemoteCatalog: Send + Sync {
    async fn fetch_catalog(&self) -> CoreResult<Vec<RawNeoRecord>>;
}

/// The active catalog: ranked records plus the source they came from.
/// Replaced wholesale on reload, never patched in place.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub records: Vec<NeoRecord>,
    pub source: CatalogSource,
}

impl Catalog {
    /// Look up a record by id.
    pub fn find(&self, id: &str) -> Option<&NeoRecord> {
        self.records.iter().find(|record| record.id == id)
    }
}

/// Builds a `Catalog` from the first available source.
pub struct CatalogIngestor {
    remote: Option<Arc<dyn RemoteCatalog>>,
    file_path: Option<PathBuf>,
    seed: u64,
    synthetic_count: usize,
}

impl CatalogIngestor {
    pub fn new(
        remote: Option<Arc<dyn RemoteCatalog>>,
        file_path: Option<PathBuf>,
        seed: u64,
        synthetic_count: usize,
    ) -> Self {
        Self {
            remote,
            file_path,
            seed,
            synthetic_count,
        }
    }

    /// Load the catalog from the highest-priority available source.
    ///
    /// A source is skipped only when it is entirely unavailable (fetch or
    /// read failure); malformed rows within an available source are
    /// handled by the parser and never cause fall-through. Synthetic
    /// generation cannot fail, so this method always yields a catalog.
    pub async fn load(&self) -> Catalog {
        if let Some(remote) = &self.remote {
            match remote.fetch_catalog().await {
                Ok(raws) => {
                    info!(count = raws.len(), "catalog loaded from remote service");
                    return rank(raws, CatalogSource::Remote);
                }
                Err(err) => warn!(%err, "remote catalog unavailable, trying file"),
            }
        }

        if let Some(path) = &self.file_path {
            match tokio::fs::read_to_string(path).await {
                Ok(text) => {
                    let raws = parse::parse_catalog(&text);
                    info!(count = raws.len(), path = %path.display(), "catalog loaded from file");
                    return rank(raws, CatalogSource::File);
                }
                Err(err) => {
                    warn!(%err, path = %path.display(), "catalog file unavailable, generating synthetic data");
                }
            }
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let raws = synthetic::generate(&mut rng, self.synthetic_count, Utc::now().date_naive());
        info!(count = raws.len(), "catalog generated synthetically");
        rank(raws, CatalogSource::Synthetic)
    }
}

/// Normalize, de-duplicate by id (first occurrence wins), and sort by
/// descending risk score. The sort is stable, so ties keep source order.
pub fn rank(raws: Vec<RawNeoRecord>, source: CatalogSource) -> Catalog {
    let mut seen = std::collections::HashSet::new();
    let mut records: Vec<NeoRecord> = raws
        .iter()
        .filter(|raw| seen.insert(raw.id.clone()))
        .map(normalize)
        .collect();
    records.sort_by(|a, b| b.risk.score.cmp(&a.risk.score));
    Catalog { records, source }
}
