use std::process::ExitCode;

use flight_server::config::ServerConfig;
use flight_server::dataset::Dataset;
use flight_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Read configuration from environment
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Load the flight network (fail fast if unavailable)
    let dataset = match Dataset::load(&config.airports_path, &config.routes_path) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Failed to load flight network: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Build app state and router
    let state = AppState::new(dataset, config.search.clone());
    let app = create_router(state);

    // Bind and serve
    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {e}", config.bind_addr);
            return ExitCode::FAILURE;
        }
    };

    info!("Route calculator listening on http://{}", config.bind_addr);
    info!("API Endpoints:");
    info!("  GET  /health                         - Health check");
    info!("  GET  /route?sou=HEL&dest=IAH&maxs=3  - Shortest route");

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
