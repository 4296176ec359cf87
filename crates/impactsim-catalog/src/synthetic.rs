//! Synthetic catalog generator — the last-resort source.
//!
//! Produces a fixed number of plausible records with uniformly sampled
//! physical attributes and a future approach date. Deterministic given a
//! seed, so catalogs are reproducible in tests and demos. Cannot fail.

use chrono::{Days, NaiveDate};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use impactsim_core::constants::*;

use crate::record::RawNeoRecord;

/// Name stems for synthetic objects.
const NAME_STEMS: [&str; 8] = [
    "Apollo", "Aten", "Amor", "Ceres", "Pallas", "Juno", "Vesta", "Hygiea",
];

/// Generate `count` synthetic records with approach dates after `today`.
pub fn generate(rng: &mut ChaCha8Rng, count: usize, today: NaiveDate) -> Vec<RawNeoRecord> {
    (0..count).map(|i| generate_one(rng, i, today)).collect()
}

fn generate_one(rng: &mut ChaCha8Rng, index: usize, today: NaiveDate) -> RawNeoRecord {
    let stem = NAME_STEMS[rng.gen_range(0..NAME_STEMS.len())];
    let name = format!("{}-{}", stem, index + 1);

    let diameter_m =
        rng.gen_range(SYNTHETIC_DIAMETER_RANGE_M.0..SYNTHETIC_DIAMETER_RANGE_M.1);
    let velocity_kms =
        rng.gen_range(SYNTHETIC_VELOCITY_RANGE_KMS.0..SYNTHETIC_VELOCITY_RANGE_KMS.1);
    let distance_au =
        rng.gen_range(SYNTHETIC_DISTANCE_RANGE_AU.0..SYNTHETIC_DISTANCE_RANGE_AU.1);

    let approach = today
        .checked_add_days(Days::new(rng.gen_range(1..=365)))
        .unwrap_or(today);

    RawNeoRecord {
        id: format!("SYN-{:03}", index + 1),
        neo_reference_id: format!("SYN-{:03}", index + 1),
        designation: name.clone(),
        name,
        absolute_magnitude: rng.gen_range(16.0..28.0),
        is_potentially_hazardous: false,
        is_sentry_object: false,
        diameter_min_m: diameter_m * 0.9,
        diameter_max_m: diameter_m * 1.1,
        diameter_avg_m: diameter_m,
        orbital_period_days: rng.gen_range(200.0..1500.0),
        eccentricity: rng.gen_range(0.0..0.9),
        inclination_deg: rng.gen_range(0.0..30.0),
        perihelion_au: rng.gen_range(0.5..1.3),
        aphelion_au: rng.gen_range(1.3..4.0),
        last_approach_date: approach.format("%Y-%m-%d").to_string(),
        miss_distance_km: distance_au * KM_PER_AU,
        relative_velocity_kmh: velocity_kms * SECONDS_PER_HOUR,
        orbiting_body: "Earth".to_string(),
    }
}
