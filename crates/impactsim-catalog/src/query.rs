//! Read-only catalog queries for the shell's list view.

use impactsim_core::enums::RiskLevel;
use impactsim_core::types::NeoRecord;

/// Filter the catalog by a case-insensitive name/designation substring
/// and/or a risk level. Order is preserved; the catalog is not mutated.
pub fn filter<'a>(
    records: &'a [NeoRecord],
    name_query: Option<&str>,
    level: Option<RiskLevel>,
) -> Vec<&'a NeoRecord> {
    let needle = name_query.unwrap_or("").to_lowercase();
    records
        .iter()
        .filter(|record| {
            let matches_name = needle.is_empty()
                || record.name.to_lowercase().contains(&needle)
                || record.designation.to_lowercase().contains(&needle);
            let matches_level = level.map_or(true, |level| record.risk.level == level);
            matches_name && matches_level
        })
        .collect()
}
