use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use engine::BetProcessor;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gateway::{build_router, config::Config, seed, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with JSON formatting (configurable via env)
    let use_json = std::env::var("LOG_FORMAT")
        .unwrap_or_else(|_| "text".to_string())
        .eq_ignore_ascii_case("json");

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gateway=info,engine=info,tower_http=info".into());

    if use_json {
        // JSON structured logging for production
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        // Human-readable logging for development
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!(
        service = "gateway",
        version = env!("CARGO_PKG_VERSION"),
        log_format = if use_json { "json" } else { "text" },
        "Starting gateway service"
    );

    // Load configuration
    let config = Config::load()?;
    tracing::info!(
        worker_count = config.engine.worker_count,
        process_delay_ms = config.engine.process_delay_ms,
        "Configuration loaded"
    );

    // Start the processing engine
    let processor = Arc::new(BetProcessor::new(config.engine.to_engine_config()));

    // Seed demonstration bets if requested
    seed::seed_open_bets(&processor, config.engine.seed_bets).await;

    // Initialize application state and router
    let app_state = AppState::new(config.clone(), processor.clone());
    let app = build_router(app_state);

    // Start metrics server
    let metrics_handle = tokio::spawn(start_metrics_server(config.metrics_port));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api_port));
    tracing::info!("Gateway API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await?;

    // Drain the queue before exiting; a no-op if POST /api/shutdown already ran.
    processor.shutdown().await;
    metrics_handle.abort();

    tracing::info!("Gateway stopped");

    Ok(())
}

async fn start_metrics_server(port: u16) -> anyhow::Result<()> {
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
    let handle = builder.install_recorder()?;

    let app = Router::new().route(
        "/metrics",
        get(|| async move { handle.render() }),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Metrics server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
