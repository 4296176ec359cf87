#[cfg(test)]
mod tests {
    use impactsim_core::enums::{Provenance, RiskLevel};
    use impactsim_core::types::{GeoPoint, ImpactParameters};

    use crate::impact;
    use crate::risk;

    fn params(diameter_m: f64, velocity_kms: f64, density_kgm3: f64) -> ImpactParameters {
        ImpactParameters::new(diameter_m, velocity_kms, 45.0, density_kgm3)
    }

    // ---- Local impact model ----

    /// Reference scenario: 1 km stony impactor at 20 km/s.
    #[test]
    fn test_impact_kilometer_impactor() {
        let result = impact::simulate(&params(1000.0, 20.0, 2500.0), None);

        let mass = result.mass_kg.unwrap();
        let ke = result.kinetic_energy_j.unwrap();
        assert!((mass - 1.309e12).abs() / 1.309e12 < 1e-3, "mass = {mass}");
        assert!((ke - 2.618e20).abs() / 2.618e20 < 1e-3, "ke = {ke}");
        assert!((result.energy_mt - 6.257e4).abs() / 6.257e4 < 1e-3);
        assert_eq!(result.provenance, Provenance::Fallback);
    }

    /// Golden effect values for a ~62.6 MT event (100 m stony impactor at
    /// 20 km/s), hand-computed from the scaling laws.
    #[test]
    fn test_impact_golden_effects() {
        let result = impact::simulate(&params(100.0, 20.0, 2500.0), None);

        assert!((result.energy_mt - 62.57).abs() < 0.05, "energy = {}", result.energy_mt);
        assert!((result.crater_diameter_km - 3.374).abs() < 0.005);
        assert!((result.fireball_radius_km - 5.230).abs() < 0.005);
        assert!((result.tsunami_height_m - 79.10).abs() < 0.05);
        assert!((result.seismic_magnitude - 5.796).abs() < 0.005);
        let population = result.affected_population as f64;
        assert!((population - 1.196e7).abs() / 1.196e7 < 1e-3, "population = {population}");
    }

    #[test]
    fn test_impact_outputs_finite_and_nonnegative() {
        let cases = [
            params(1.0, 0.001, 100.0),
            params(10.0, 11.0, 500.0),
            params(1000.0, 20.0, 2500.0),
            params(10_000.0, 72.0, 8000.0),
        ];
        for p in cases {
            let r = impact::simulate(&p, None);
            for (label, v) in [
                ("energy", r.energy_mt),
                ("crater", r.crater_diameter_km),
                ("fireball", r.fireball_radius_km),
                ("tsunami", r.tsunami_height_m),
                ("seismic", r.seismic_magnitude),
            ] {
                assert!(v.is_finite(), "{label} not finite for {p:?}");
                assert!(v >= 0.0, "{label} negative for {p:?}");
            }
        }
    }

    /// Energy is monotonically non-decreasing in diameter, velocity, and
    /// density independently.
    #[test]
    fn test_impact_energy_monotonic() {
        let base = impact::simulate(&params(500.0, 15.0, 2500.0), None);

        let bigger = impact::simulate(&params(600.0, 15.0, 2500.0), None);
        assert!(bigger.energy_mt > base.energy_mt);

        let faster = impact::simulate(&params(500.0, 18.0, 2500.0), None);
        assert!(faster.energy_mt > base.energy_mt);

        let denser = impact::simulate(&params(500.0, 15.0, 3000.0), None);
        assert!(denser.energy_mt > base.energy_mt);
    }

    /// Tiny impactors produce sub-4 magnitudes but never a negative one.
    #[test]
    fn test_seismic_magnitude_floor() {
        let r = impact::simulate(&params(1.0, 0.001, 100.0), None);
        assert!(r.seismic_magnitude >= 0.0);
        assert!(r.seismic_magnitude.is_finite());
    }

    /// Entry angle is accepted but does not change the outputs (documented
    /// limitation of the simplified model).
    #[test]
    fn test_entry_angle_is_inert() {
        let shallow = impact::simulate(&ImpactParameters::new(800.0, 25.0, 5.0, 3000.0), None);
        let steep = impact::simulate(&ImpactParameters::new(800.0, 25.0, 85.0, 3000.0), None);
        assert_eq!(shallow.energy_mt, steep.energy_mt);
        assert_eq!(shallow.crater_diameter_km, steep.crater_diameter_km);
    }

    #[test]
    fn test_impact_point_passthrough() {
        let point = GeoPoint::new(35.0, 139.0);
        let r = impact::simulate(&params(1000.0, 20.0, 2500.0), Some(point));
        assert_eq!(r.impact_point, Some(point));
    }

    // ---- Risk scorer ----

    /// Worst case: 6 km rock, 500,000 km miss, 35 km/s → 50+40+20 = 110.
    #[test]
    fn test_risk_maximum_scenario() {
        let risk = risk::assess(6000.0, 500_000.0, 35.0);
        assert_eq!(risk.score, 110);
        assert_eq!(risk.level, RiskLevel::High);
    }

    /// Best case: every sub-score bottoms out at 5 → 15 total.
    #[test]
    fn test_risk_minimum_scenario() {
        let risk = risk::assess(50.0, 100_000_000.0, 5.0);
        assert_eq!(risk.score, 15);
        assert_eq!(risk.level, RiskLevel::Low);
    }

    #[test]
    fn test_risk_is_deterministic() {
        let a = risk::assess(1200.0, 5_000_000.0, 22.0);
        let b = risk::assess(1200.0, 5_000_000.0, 22.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_risk_score_always_in_range() {
        let diameters = [0.0, 50.0, 100.0, 101.0, 1000.0, 1001.0, 5000.0, 5001.0, 1e9];
        let distances = [0.0, 1e6 - 1.0, 1e6, 1e7, 5e7, 1e12];
        let velocities = [0.0, 10.0, 10.1, 20.0, 20.1, 30.0, 30.1, 500.0];
        for d in diameters {
            for m in distances {
                for v in velocities {
                    let risk = risk::assess(d, m, v);
                    assert!((15..=110).contains(&risk.score), "score {} out of range", risk.score);
                }
            }
        }
    }

    /// Size buckets use strict greater-than at each threshold.
    #[test]
    fn test_risk_size_bucket_boundaries() {
        assert_eq!(risk::assess(100.0, 1e12, 0.0).score, 5 + 5 + 5);
        assert_eq!(risk::assess(100.1, 1e12, 0.0).score, 15 + 5 + 5);
        assert_eq!(risk::assess(1000.0, 1e12, 0.0).score, 15 + 5 + 5);
        assert_eq!(risk::assess(1000.1, 1e12, 0.0).score, 30 + 5 + 5);
        assert_eq!(risk::assess(5000.0, 1e12, 0.0).score, 30 + 5 + 5);
        assert_eq!(risk::assess(5000.1, 1e12, 0.0).score, 50 + 5 + 5);
    }

    /// Proximity buckets use strict less-than at each threshold.
    #[test]
    fn test_risk_proximity_bucket_boundaries() {
        assert_eq!(risk::assess(0.0, 999_999.0, 0.0).score, 5 + 40 + 5);
        assert_eq!(risk::assess(0.0, 1_000_000.0, 0.0).score, 5 + 25 + 5);
        assert_eq!(risk::assess(0.0, 10_000_000.0, 0.0).score, 5 + 15 + 5);
        assert_eq!(risk::assess(0.0, 50_000_000.0, 0.0).score, 5 + 5 + 5);
    }

    #[test]
    fn test_risk_speed_bucket_boundaries() {
        assert_eq!(risk::assess(0.0, 1e12, 10.0).score, 5 + 5 + 5);
        assert_eq!(risk::assess(0.0, 1e12, 10.1).score, 5 + 5 + 10);
        assert_eq!(risk::assess(0.0, 1e12, 20.1).score, 5 + 5 + 15);
        assert_eq!(risk::assess(0.0, 1e12, 30.1).score, 5 + 5 + 20);
    }

    /// Level cut points: > 80 high, > 50 medium, else low.
    #[test]
    fn test_risk_level_cut_points() {
        // 30 + 40 + 10 = 80 → medium (strictly greater than required).
        let at_high_cut = risk::assess(1001.0, 999_999.0, 10.1);
        assert_eq!(at_high_cut.score, 80);
        assert_eq!(at_high_cut.level, RiskLevel::Medium);

        // 30 + 40 + 15 = 85 → high.
        let above_high_cut = risk::assess(1001.0, 999_999.0, 20.1);
        assert_eq!(above_high_cut.score, 85);
        assert_eq!(above_high_cut.level, RiskLevel::High);

        // 15 + 25 + 10 = 50 → low.
        let at_medium_cut = risk::assess(100.1, 1_000_000.0, 10.1);
        assert_eq!(at_medium_cut.score, 50);
        assert_eq!(at_medium_cut.level, RiskLevel::Low);

        // 15 + 25 + 15 = 55 → medium.
        let above_medium_cut = risk::assess(100.1, 1_000_000.0, 20.1);
        assert_eq!(above_medium_cut.score, 55);
        assert_eq!(above_medium_cut.level, RiskLevel::Medium);
    }

    #[test]
    fn test_risk_au_wrapper_matches_km() {
        let au = risk::assess_au(1200.0, 0.05, 22.0);
        let km = risk::assess(1200.0, 0.05 * 149.6e6, 22.0);
        assert_eq!(au, km);
    }
}
