use std::sync::Arc;

use merlion::config::AppConfig;
use merlion::nav::LoggingNavigator;
use merlion::notify::TracingSink;
use merlion::store::{DraftStore, LibSqlStore};
use merlion::wizard::routes::{wizard_routes, WizardRouteState};
use merlion::wizard::WizardController;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env()?;

    eprintln!("🦁 Merlion v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Wizard API: http://0.0.0.0:{}/api/wizard/view", config.port);
    eprintln!("   Draft store: {}", config.db_path);

    let store: Arc<dyn DraftStore> = Arc::new(
        LibSqlStore::open(std::path::Path::new(&config.db_path))
            .await
            .unwrap_or_else(|e| {
                eprintln!("Error: Failed to open draft store at {}: {}", config.db_path, e);
                std::process::exit(1);
            }),
    );

    let controller = Arc::new(WizardController::new(
        store,
        Arc::new(TracingSink),
        Arc::new(LoggingNavigator),
    ));

    let app = wizard_routes(WizardRouteState { controller });
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "Wizard server started");
    axum::serve(listener, app).await?;

    Ok(())
}
