use std::sync::Arc;

use impactsim_app::{config, context::AppContext};
use impactsim_catalog::ingestor::CatalogIngestor;
use impactsim_core::commands::ShellCommand;
use impactsim_core::enums::OverlayGroup;
use impactsim_engine::client::RemotePhysicsClient;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

#[tokio::main]
async fn main() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let client = Arc::new(RemotePhysicsClient::new(
        config::physics_base_url(),
        config::request_timeout(),
    ));
    let ingestor = CatalogIngestor::new(
        Some(client.clone()),
        config::catalog_file_path(),
        config::synthetic_seed(),
        config::synthetic_count(),
    );
    let mut context = AppContext::new(client, ingestor);

    for event in context.handle_command(ShellCommand::LoadCatalog).await {
        tracing::info!(?event, "startup");
    }
    context
        .handle_command(ShellCommand::ToggleLayer {
            group: OverlayGroup::ReferenceImpact,
            visible: true,
        })
        .await;

    if let Some(catalog) = context.catalog() {
        for record in catalog.records.iter().take(5) {
            tracing::info!(
                id = %record.id,
                name = %record.name,
                score = record.risk.score,
                level = ?record.risk.level,
                "top risk"
            );
        }
    }

    let snapshot = context.snapshot();
    match serde_json::to_string_pretty(&snapshot) {
        Ok(text) => println!("{text}"),
        Err(err) => tracing::error!(%err, "failed to serialize snapshot"),
    }
}
