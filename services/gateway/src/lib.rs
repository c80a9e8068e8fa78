// Library interface for the gateway - exposes modules for testing

pub mod config;
pub mod errors;
pub mod handlers;
pub mod seed;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use state::AppState;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))
        // Bets
        .route("/api/bets", post(handlers::bets::submit_bet))
        .route("/api/bets/review", get(handlers::bets::review_bets))
        // Summary
        .route("/api/summary", get(handlers::summary::get_summary))
        // Shutdown
        .route("/api/shutdown", post(handlers::admin::shutdown))
        // State
        .with_state(state)
        // Middleware
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
