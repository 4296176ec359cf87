//! Aggregate statistics over a loaded catalog.

use impactsim_core::constants::CLOSE_APPROACH_AU;
use impactsim_core::enums::RiskLevel;
use impactsim_core::state::CatalogStatistics;
use impactsim_core::types::NeoRecord;

/// Compute display statistics for a ranked catalog.
pub fn statistics(records: &[NeoRecord]) -> CatalogStatistics {
    let mut stats = CatalogStatistics {
        total: records.len(),
        ..Default::default()
    };

    let mut diameter_sum = 0.0;
    let mut diameter_count = 0usize;
    let mut velocity_sum = 0.0;
    let mut velocity_count = 0usize;

    for record in records {
        match record.risk.level {
            RiskLevel::Low => stats.low_risk += 1,
            RiskLevel::Medium => stats.medium_risk += 1,
            RiskLevel::High => stats.high_risk += 1,
        }
        if record.miss_distance_au < CLOSE_APPROACH_AU {
            stats.close_approaches += 1;
        }
        if record.diameter_m > 0.0 {
            stats.largest_diameter_m = stats.largest_diameter_m.max(record.diameter_m);
            diameter_sum += record.diameter_m;
            diameter_count += 1;
        }
        if record.velocity_kms > 0.0 {
            velocity_sum += record.velocity_kms;
            velocity_count += 1;
        }
    }

    if diameter_count > 0 {
        stats.average_diameter_m = diameter_sum / diameter_count as f64;
    }
    if velocity_count > 0 {
        stats.average_velocity_kms = velocity_sum / velocity_count as f64;
    }
    stats
}
