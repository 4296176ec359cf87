//! Physical constants, scoring thresholds, and tuning parameters.

// --- Physical conversions ---

/// Mean Earth radius in kilometers. A resolved miss distance beyond this
/// is a flyby, not an impact.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Joules per megaton of TNT equivalent.
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Kilometers per astronomical unit (catalog convention: 149.6 million km).
pub const KM_PER_AU: f64 = 149.6e6;

/// Seconds per hour, for km/h → km/s velocity conversion.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

// --- Impact model ---

/// Crater diameter scaling exponent (km per MT^x).
pub const CRATER_EXPONENT: f64 = 0.294;

/// Fireball radius scaling exponent (km per MT^x).
pub const FIREBALL_EXPONENT: f64 = 0.4;

/// Tsunami height scaling exponent.
pub const TSUNAMI_EXPONENT: f64 = 0.5;

/// Tsunami height multiplier (meters at 1 MT).
pub const TSUNAMI_SCALE_M: f64 = 10.0;

/// Affected population scaling exponent.
pub const POPULATION_EXPONENT: f64 = 0.6;

/// Affected population at 1 MT.
pub const POPULATION_SCALE: f64 = 1_000_000.0;

/// Seismic magnitude offset: magnitude = log10(energy_mt) + this.
pub const SEISMIC_OFFSET: f64 = 4.0;

/// Default entry angle when a catalog object supplies none (degrees).
pub const DEFAULT_ENTRY_ANGLE_DEG: f64 = 45.0;

/// Default impactor density when a catalog object supplies none (kg/m³).
pub const DEFAULT_DENSITY_KGM3: f64 = 2500.0;

// --- Risk scoring ---

/// Size sub-score buckets: (diameter threshold in meters, points).
/// Out-of-range diameters fall into the extreme bucket.
pub const SIZE_BUCKETS: [(f64, u32); 3] = [(5000.0, 50), (1000.0, 30), (100.0, 15)];

/// Points for a diameter below every size bucket.
pub const SIZE_FLOOR_SCORE: u32 = 5;

/// Proximity sub-score buckets: (miss distance threshold in km, points).
pub const PROXIMITY_BUCKETS: [(f64, u32); 3] =
    [(1_000_000.0, 40), (10_000_000.0, 25), (50_000_000.0, 15)];

/// Points for a miss distance beyond every proximity bucket.
pub const PROXIMITY_FLOOR_SCORE: u32 = 5;

/// Speed sub-score buckets: (velocity threshold in km/s, points).
pub const SPEED_BUCKETS: [(f64, u32); 3] = [(30.0, 20), (20.0, 15), (10.0, 10)];

/// Points for a velocity below every speed bucket.
pub const SPEED_FLOOR_SCORE: u32 = 5;

/// Total score above which a NEO is classified high risk.
pub const RISK_HIGH_CUTOFF: u32 = 80;

/// Total score above which a NEO is classified medium risk.
pub const RISK_MEDIUM_CUTOFF: u32 = 50;

// --- Catalog ---

/// Number of positional fields in a delimited-text catalog row.
pub const CATALOG_FIELD_COUNT: usize = 19;

/// Records produced by the synthetic generator.
pub const SYNTHETIC_CATALOG_SIZE: usize = 50;

/// Synthetic diameter range (meters).
pub const SYNTHETIC_DIAMETER_RANGE_M: (f64, f64) = (10.0, 2010.0);

/// Synthetic relative velocity range (km/s).
pub const SYNTHETIC_VELOCITY_RANGE_KMS: (f64, f64) = (5.0, 35.0);

/// Synthetic miss distance range (AU).
pub const SYNTHETIC_DISTANCE_RANGE_AU: (f64, f64) = (0.1, 50.1);

/// Miss distance below which an approach counts as "close" (AU).
pub const CLOSE_APPROACH_AU: f64 = 0.1;

// --- Reference impact scenario ---

/// Reference impact point latitude (degrees).
pub const REFERENCE_IMPACT_LAT: f64 = 0.0;

/// Reference impact point longitude (degrees, mid-Pacific).
pub const REFERENCE_IMPACT_LON: f64 = -150.0;

/// Reference impact zone radius (meters).
pub const REFERENCE_ZONE_RADIUS_M: f64 = 500_000.0;

/// Reference scenario energy (MT).
pub const REFERENCE_ENERGY_MT: f64 = 500.0;

/// Reference scenario crater diameter (km).
pub const REFERENCE_CRATER_KM: f64 = 45.0;

/// Reference scenario tsunami height (m).
pub const REFERENCE_TSUNAMI_M: f64 = 200.0;
