//! Application context: command handling and the pollable snapshot.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use impactsim_catalog::ingestor::{Catalog, CatalogIngestor};
use impactsim_catalog::{query, stats};
use impactsim_core::commands::ShellCommand;
use impactsim_core::enums::{OverlayGroup, RiskLevel};
use impactsim_core::events::CoreEvent;
use impactsim_core::state::AppSnapshot;
use impactsim_core::types::{ComparisonReport, NeoRecord, ScenarioOutcome, SimulationResult};
use impactsim_engine::client::PhysicsService;
use impactsim_engine::orchestrator::SimulationOrchestrator;
use impactsim_layers::manager::LayerCompositionManager;

/// Long-lived application state. One instance per process; the shell
/// drives it exclusively through [`AppContext::handle_command`].
pub struct AppContext {
    orchestrator: SimulationOrchestrator,
    ingestor: CatalogIngestor,
    layers: LayerCompositionManager,
    catalog: Option<Catalog>,
    last_result: Option<SimulationResult>,
    /// Sequence tokens for last-request-wins: a response whose token no
    /// longer matches the latest request is dropped without events.
    scenario_seq: u64,
    object_seq: HashMap<String, u64>,
}

impl AppContext {
    pub fn new(service: Arc<dyn PhysicsService>, ingestor: CatalogIngestor) -> Self {
        Self {
            orchestrator: SimulationOrchestrator::new(service),
            ingestor,
            layers: LayerCompositionManager::new(),
            catalog: None,
            last_result: None,
            scenario_seq: 0,
            object_seq: HashMap::new(),
        }
    }

    /// Execute one shell command, returning the events it produced.
    pub async fn handle_command(&mut self, command: ShellCommand) -> Vec<CoreEvent> {
        match command {
            ShellCommand::RunScenario {
                params,
                impact_point,
            } => {
                if let Err(err) = params.validate() {
                    return vec![CoreEvent::CommandFailed {
                        reason: err.to_string(),
                    }];
                }

                self.scenario_seq += 1;
                let token = self.scenario_seq;
                let result = self.orchestrator.run_scenario(&params, impact_point).await;
                if token != self.scenario_seq {
                    debug!(token, "dropping stale scenario result");
                    return Vec::new();
                }
                self.publish_result(OverlayGroup::UserSimulation, result)
            }

            ShellCommand::RunCatalogObjectScenario { id } => {
                let Some(record) = self.find_record(&id) else {
                    return vec![CoreEvent::CommandFailed {
                        reason: format!("unknown catalog object: {id}"),
                    }];
                };

                let token = {
                    let entry = self.object_seq.entry(id.clone()).or_insert(0);
                    *entry += 1;
                    *entry
                };
                let outcome = self.orchestrator.run_object_scenario(&record).await;
                if self.object_seq.get(&id) != Some(&token) {
                    debug!(%id, token, "dropping stale object result");
                    return Vec::new();
                }

                match outcome {
                    ScenarioOutcome::Impact(result) => {
                        self.publish_result(OverlayGroup::ObjectSimulation, result)
                    }
                    ScenarioOutcome::NoImpact { miss_distance_km } => vec![CoreEvent::NoImpact {
                        id,
                        miss_distance_km,
                    }],
                }
            }

            ShellCommand::ToggleLayer { group, visible } => self
                .layers
                .toggle(group, visible)
                .into_iter()
                .map(CoreEvent::from)
                .collect(),

            ShellCommand::LoadCatalog => {
                let catalog = self.ingestor.load().await;
                let count = catalog.records.len();
                let source = catalog.source;
                self.catalog = Some(catalog);
                vec![CoreEvent::CatalogReady { count, source }]
            }

            ShellCommand::ResetLayers => self
                .layers
                .reset_all()
                .into_iter()
                .map(CoreEvent::from)
                .collect(),

            ShellCommand::CompareWithReference => match &self.last_result {
                Some(result) => vec![CoreEvent::ComparisonReady {
                    report: ComparisonReport::against_reference(result),
                }],
                None => vec![CoreEvent::CommandFailed {
                    reason: "no simulation result to compare".to_string(),
                }],
            },
        }
    }

    /// Current state for synchronous shell queries.
    pub fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            statistics: self
                .catalog
                .as_ref()
                .map(|catalog| stats::statistics(&catalog.records))
                .unwrap_or_default(),
            catalog_source: self.catalog.as_ref().map(|catalog| catalog.source),
            visible_layers: self.layers.visible_groups(),
            last_result: self.last_result.clone(),
        }
    }

    /// Filtered view over the loaded catalog for the shell's list.
    pub fn search(&self, name_query: Option<&str>, level: Option<RiskLevel>) -> Vec<&NeoRecord> {
        self.catalog
            .as_ref()
            .map(|catalog| query::filter(&catalog.records, name_query, level))
            .unwrap_or_default()
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    fn find_record(&self, id: &str) -> Option<NeoRecord> {
        self.catalog
            .as_ref()
            .and_then(|catalog| catalog.find(id))
            .cloned()
    }

    fn publish_result(&mut self, group: OverlayGroup, result: SimulationResult) -> Vec<CoreEvent> {
        self.last_result = Some(result.clone());
        let mut events: Vec<CoreEvent> = self
            .layers
            .set_result(group, result.clone())
            .into_iter()
            .map(CoreEvent::from)
            .collect();
        events.push(CoreEvent::ResultReady { result });
        events
    }
}
