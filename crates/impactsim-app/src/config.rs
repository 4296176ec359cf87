//! Runtime configuration from environment variables.

use std::{env, path::PathBuf, time::Duration};

use impactsim_core::constants::SYNTHETIC_CATALOG_SIZE;

pub fn physics_base_url() -> String {
    env::var("IMPACTSIM_PHYSICS_URL").unwrap_or_else(|_| "http://127.0.0.1:8000/api".to_string())
}

pub fn request_timeout() -> Duration {
    let millis = env::var("IMPACTSIM_REQUEST_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(4000);
    Duration::from_millis(millis)
}

/// Local CSV catalog to try when the remote feed is unavailable.
pub fn catalog_file_path() -> Option<PathBuf> {
    env::var("IMPACTSIM_CATALOG_FILE").ok().map(PathBuf::from)
}

pub fn synthetic_seed() -> u64 {
    env::var("IMPACTSIM_SYNTHETIC_SEED")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(42)
}

pub fn synthetic_count() -> usize {
    env::var("IMPACTSIM_SYNTHETIC_COUNT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(SYNTHETIC_CATALOG_SIZE)
}
