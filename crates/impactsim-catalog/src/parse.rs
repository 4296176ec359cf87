//! Delimited-text catalog codec.
//!
//! Fixed 19-column positional schema, comma separated, one header row.
//! A numeric field that fails to parse defaults to zero; a row with fewer
//! fields than the schema is skipped entirely (MalformedRecord, recovered
//! by skipping — it never aborts the ingestion pass).

use tracing::warn;

use impactsim_core::constants::CATALOG_FIELD_COUNT;
use impactsim_core::error::CoreError;

use crate::record::RawNeoRecord;

/// Header row, also written by `format_catalog`.
pub const HEADER: &str = "id,neo_reference_id,name,designation,absolute_magnitude,\
is_potentially_hazardous,is_sentry_object,diameter_min_m,diameter_max_m,diameter_avg_m,\
orbital_period_days,eccentricity,inclination_deg,perihelion_au,aphelion_au,\
last_close_approach_date,last_miss_distance_km,last_relative_velocity_kmh,orbiting_body";

/// Parse a whole catalog file. The header row is ignored; malformed rows
/// are logged and skipped.
pub fn parse_catalog(text: &str) -> Vec<RawNeoRecord> {
    let mut records = Vec::new();
    for (index, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        match parse_row(line, index + 1) {
            Ok(record) => records.push(record),
            Err(err) => warn!(%err, "skipping catalog row"),
        }
    }
    records
}

/// Parse one data row against the positional schema.
pub fn parse_row(line: &str, line_no: usize) -> Result<RawNeoRecord, CoreError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < CATALOG_FIELD_COUNT {
        return Err(CoreError::MalformedRecord {
            line: line_no,
            reason: format!(
                "expected {CATALOG_FIELD_COUNT} fields, found {}",
                fields.len()
            ),
        });
    }

    Ok(RawNeoRecord {
        id: fields[0].trim().to_string(),
        neo_reference_id: fields[1].trim().to_string(),
        name: fields[2].trim().to_string(),
        designation: fields[3].trim().to_string(),
        absolute_magnitude: number(fields[4]),
        is_potentially_hazardous: flag(fields[5]),
        is_sentry_object: flag(fields[6]),
        diameter_min_m: number(fields[7]),
        diameter_max_m: number(fields[8]),
        diameter_avg_m: number(fields[9]),
        orbital_period_days: number(fields[10]),
        eccentricity: number(fields[11]),
        inclination_deg: number(fields[12]),
        perihelion_au: number(fields[13]),
        aphelion_au: number(fields[14]),
        last_approach_date: fields[15].trim().to_string(),
        miss_distance_km: number(fields[16]),
        relative_velocity_kmh: number(fields[17]),
        orbiting_body: fields[18].trim().to_string(),
    })
}

/// Write one record in the positional schema.
pub fn format_record(record: &RawNeoRecord) -> String {
    format!(
        "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
        record.id,
        record.neo_reference_id,
        record.name,
        record.designation,
        record.absolute_magnitude,
        record.is_potentially_hazardous,
        record.is_sentry_object,
        record.diameter_min_m,
        record.diameter_max_m,
        record.diameter_avg_m,
        record.orbital_period_days,
        record.eccentricity,
        record.inclination_deg,
        record.perihelion_au,
        record.aphelion_au,
        record.last_approach_date,
        record.miss_distance_km,
        record.relative_velocity_kmh,
        record.orbiting_body,
    )
}

/// Write a full catalog with header.
pub fn format_catalog(records: &[RawNeoRecord]) -> String {
    let mut out = String::from(HEADER);
    for record in records {
        out.push('\n');
        out.push_str(&format_record(record));
    }
    out.push('\n');
    out
}

fn number(field: &str) -> f64 {
    field.trim().parse().unwrap_or(0.0)
}

fn flag(field: &str) -> bool {
    matches!(field.trim().to_ascii_lowercase().as_str(), "true" | "1")
}
