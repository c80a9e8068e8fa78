use axum::extract::State;

use crate::state::AppState;

/// Drain the queue and stop the worker pool.
///
/// Blocks until the drain completes or the configured timeout expires.
/// Idempotent; the HTTP server itself keeps serving reads afterwards.
pub async fn shutdown(State(state): State<AppState>) -> &'static str {
    tracing::info!("Shutdown requested over HTTP");
    state.processor.shutdown().await;
    "System shutdown initiated."
}
