use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use last_train::catalog::StationCatalog;
use last_train::config::AppConfig;
use last_train::confirm::InteractionController;
use last_train::reply::Responder;
use last_train::resolve::Resolver;
use last_train::web::{AppState, create_router};

/// How often to evict unanswered confirmations.
const HOUSEKEEPING_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    // A bad data file is fatal: never serve a partial catalog
    let catalog = match StationCatalog::from_path(&config.data_path) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            error!("failed to load station catalog: {e}");
            std::process::exit(1);
        }
    };

    let resolver = Resolver::new(catalog, config.resolver.clone());
    let confirmations = InteractionController::new(&config.confirm);
    let state = AppState::new(Responder::new(resolver, confirmations));

    // Spawn background task to reclaim stale confirmation offers
    let housekeeping = state.responder.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(HOUSEKEEPING_INTERVAL);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            housekeeping.confirmations().run_housekeeping().await;
        }
    });

    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, "failed to bind: {e}");
            std::process::exit(1);
        }
    };

    info!(addr = %config.addr, "last-train bot listening");
    info!("  GET  /health   - Health check");
    info!("  GET  /stations - Station names");
    info!("  POST /query    - Resolve a station query");
    info!("  POST /confirm  - Answer a suggested station");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
