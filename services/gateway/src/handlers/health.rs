use axum::{extract::State, Json};
use engine::ProcessorState;
use serde_json::{json, Value};

use crate::state::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let processor_state = match state.processor.state() {
        ProcessorState::Running => "running",
        ProcessorState::Draining => "draining",
        ProcessorState::Stopped => "stopped",
    };

    Json(json!({
        "status": "healthy",
        "processor": processor_state,
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
