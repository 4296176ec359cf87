#[cfg(test)]
mod tests {
    use crate::commands::ShellCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::{CoreEvent, LayerEvent};
    use crate::types::*;

    fn sample_result() -> SimulationResult {
        SimulationResult {
            energy_mt: 62.6,
            crater_diameter_km: 3.18,
            fireball_radius_km: 5.95,
            tsunami_height_m: 79.1,
            seismic_magnitude: 5.8,
            affected_population: 11_900_000,
            mass_kg: Some(1.309e12),
            kinetic_energy_j: Some(2.618e20),
            provenance: Provenance::Fallback,
            impact_point: Some(GeoPoint::new(12.5, -45.0)),
        }
    }

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_risk_level_serde() {
        for v in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
            let json = serde_json::to_string(&v).unwrap();
            let back: RiskLevel = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_overlay_group_serde() {
        for v in OverlayGroup::ALL {
            let json = serde_json::to_string(&v).unwrap();
            let back: OverlayGroup = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
        // Kebab-case wire names, matching the shell's toggle ids.
        assert_eq!(
            serde_json::to_string(&OverlayGroup::ReferenceImpact).unwrap(),
            "\"reference-impact\""
        );
    }

    #[test]
    fn test_provenance_serde() {
        for v in [Provenance::Real, Provenance::Fallback] {
            let json = serde_json::to_string(&v).unwrap();
            let back: Provenance = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_simulation_groups() {
        assert!(OverlayGroup::UserSimulation.is_simulation());
        assert!(OverlayGroup::ObjectSimulation.is_simulation());
        assert!(!OverlayGroup::Terrain.is_simulation());
        assert!(!OverlayGroup::ReferenceImpact.is_simulation());
    }

    /// Verify ShellCommand round-trips through serde (tagged union).
    #[test]
    fn test_shell_command_serde() {
        let commands = vec![
            ShellCommand::RunScenario {
                params: ImpactParameters::new(1000.0, 20.0, 45.0, 2500.0),
                impact_point: Some(GeoPoint::new(0.0, -150.0)),
            },
            ShellCommand::RunCatalogObjectScenario {
                id: "2000433".into(),
            },
            ShellCommand::ToggleLayer {
                group: OverlayGroup::Population,
                visible: true,
            },
            ShellCommand::LoadCatalog,
            ShellCommand::ResetLayers,
            ShellCommand::CompareWithReference,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: ShellCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_core_event_serde() {
        let events = vec![
            CoreEvent::ResultReady {
                result: sample_result(),
            },
            CoreEvent::NoImpact {
                id: "42".into(),
                miss_distance_km: 384_400.0,
            },
            CoreEvent::CatalogReady {
                count: 50,
                source: CatalogSource::Synthetic,
            },
            CoreEvent::Layer(LayerEvent::LayerChanged {
                group: OverlayGroup::Coastlines,
                visible: false,
            }),
            CoreEvent::Layer(LayerEvent::GeometryAdded {
                handle: GeometryHandle(7),
                group: OverlayGroup::UserSimulation,
                shape: ZoneGeometry::Circle {
                    center: GeoPoint::new(1.0, 2.0),
                    radius_m: 5950.0,
                    kind: ZoneKind::Fireball,
                },
            }),
            CoreEvent::CommandFailed {
                reason: "diameter must be positive".into(),
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: CoreEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    // ---- Parameter validation ----

    #[test]
    fn test_parameters_valid_range() {
        let params = ImpactParameters::new(1000.0, 20.0, 45.0, 2500.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_parameters_rejects_nonpositive() {
        assert!(ImpactParameters::new(0.0, 20.0, 45.0, 2500.0)
            .validate()
            .is_err());
        assert!(ImpactParameters::new(1000.0, -5.0, 45.0, 2500.0)
            .validate()
            .is_err());
        assert!(ImpactParameters::new(1000.0, 20.0, 45.0, 0.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_parameters_rejects_bad_angle() {
        assert!(ImpactParameters::new(1000.0, 20.0, 91.0, 2500.0)
            .validate()
            .is_err());
        assert!(ImpactParameters::new(1000.0, 20.0, -1.0, 2500.0)
            .validate()
            .is_err());
        // Boundary angles are valid.
        assert!(ImpactParameters::new(1000.0, 20.0, 0.0, 2500.0)
            .validate()
            .is_ok());
        assert!(ImpactParameters::new(1000.0, 20.0, 90.0, 2500.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_comparison_report_uses_reference_constants() {
        let report = ComparisonReport::against_reference(&sample_result());
        assert_eq!(report.reference_energy_mt, REFERENCE_ENERGY_MT);
        assert_eq!(report.reference_crater_km, REFERENCE_CRATER_KM);
        assert_eq!(report.reference_tsunami_m, REFERENCE_TSUNAMI_M);
        assert_eq!(report.energy_mt, 62.6);
    }

    #[test]
    fn test_scenario_outcome_serde() {
        let outcomes = vec![
            ScenarioOutcome::Impact(sample_result()),
            ScenarioOutcome::NoImpact {
                miss_distance_km: 1.2e6,
            },
        ];
        for outcome in &outcomes {
            let json = serde_json::to_string(outcome).unwrap();
            let back: ScenarioOutcome = serde_json::from_str(&json).unwrap();
            assert_eq!(*outcome, back);
        }
    }
}
