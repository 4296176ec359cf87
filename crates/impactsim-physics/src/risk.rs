//! NEO risk scorer.
//!
//! Three independently bucketed additive sub-scores (size, proximity,
//! speed) summed into a total in [15, 110], then mapped to a categorical
//! level via fixed cut points. This is the sole classifier in the system;
//! it must stay exact and reproducible.

use impactsim_core::constants::*;
use impactsim_core::enums::RiskLevel;
use impactsim_core::types::RiskAssessment;

/// Score a NEO from its diameter (m), latest miss distance (km), and
/// relative velocity (km/s). Out-of-range inputs fall into the extreme
/// bucket; there are no error conditions.
pub fn assess(diameter_m: f64, miss_distance_km: f64, velocity_kms: f64) -> RiskAssessment {
    let score =
        size_score(diameter_m) + proximity_score(miss_distance_km) + speed_score(velocity_kms);
    RiskAssessment {
        level: level_for(score),
        score,
    }
}

/// Convenience wrapper for callers holding a miss distance in AU.
pub fn assess_au(diameter_m: f64, miss_distance_au: f64, velocity_kms: f64) -> RiskAssessment {
    assess(diameter_m, miss_distance_au * KM_PER_AU, velocity_kms)
}

fn size_score(diameter_m: f64) -> u32 {
    for (threshold, points) in SIZE_BUCKETS {
        if diameter_m > threshold {
            return points;
        }
    }
    SIZE_FLOOR_SCORE
}

fn proximity_score(miss_distance_km: f64) -> u32 {
    for (threshold, points) in PROXIMITY_BUCKETS {
        if miss_distance_km < threshold {
            return points;
        }
    }
    PROXIMITY_FLOOR_SCORE
}

fn speed_score(velocity_kms: f64) -> u32 {
    for (threshold, points) in SPEED_BUCKETS {
        if velocity_kms > threshold {
            return points;
        }
    }
    SPEED_FLOOR_SCORE
}

/// Level is a non-decreasing step function of score.
fn level_for(score: u32) -> RiskLevel {
    if score > RISK_HIGH_CUTOFF {
        RiskLevel::High
    } else if score > RISK_MEDIUM_CUTOFF {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
