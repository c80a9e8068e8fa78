use axum::extract::State;

use crate::state::AppState;

/// Plain-text report of the aggregate statistics.
pub async fn get_summary(State(state): State<AppState>) -> String {
    state.processor.summary().await
}
