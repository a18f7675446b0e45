use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{config::Config, handlers, handlers::AppState, metrics, signals::setup_signal_handlers};

/// Start the estimate service
///
/// This function:
/// 1. Initializes metrics
/// 2. Sets up signal handlers for graceful shutdown and config reload
/// 3. Binds to the configured address
/// 4. Serves requests until a shutdown signal arrives
pub async fn start_server(config: Config, config_path: PathBuf) -> Result<()> {
    info!("Initializing Prometheus metrics...");
    let metrics_handle = Arc::new(metrics::init_metrics()?);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!(
        "Profile: {} Fivetran tiers, {} Airbyte framings, Snowflake storage {}",
        config.profile.fivetran_tiers.len(),
        config.profile.airbyte_framings.len(),
        if config.profile.snowflake_storage { "enabled" } else { "disabled" }
    );

    let state = AppState::new(config);
    let (shutdown_tx, signal_handle) = setup_signal_handlers(state.config.clone(), config_path);
    let mut shutdown_rx = shutdown_tx.subscribe();

    let app = create_router(state, metrics_handle);

    info!("Starting cost estimator on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    signal_handle.await?;
    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(state: AppState, metrics_handle: Arc<PrometheusHandle>) -> Router {
    let api_routes = Router::new()
        .route("/v1/estimate", post(handlers::estimate::handle_estimate))
        .route("/v1/compare", post(handlers::estimate::handle_compare))
        .route("/v1/catalog", get(handlers::catalog::get_catalog))
        .with_state(state);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics_handler::metrics))
        .with_state(metrics_handle)
        .merge(api_routes)
        // Estimate requests are tiny
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
