use axum::{extract::State, http::StatusCode, Json};
use engine::{Bet, SubmitOutcome};

use crate::{
    errors::{AppError, Result},
    state::AppState,
};

/// Accept one bet update and hand it to the processor.
///
/// Submission is fire-and-forget: the caller gets 201 whether or not the
/// system is draining, and a drop during shutdown is visible only in the
/// logs. Amount and odds get a transport-level sanity check here; the core
/// deliberately does not enforce them.
pub async fn submit_bet(
    State(state): State<AppState>,
    Json(bet): Json<Bet>,
) -> Result<(StatusCode, Json<Bet>)> {
    if !bet.amount.is_finite() || bet.amount < 0.0 {
        return Err(AppError::InvalidInput(format!(
            "amount must be a non-negative number, got {}",
            bet.amount
        )));
    }
    if !bet.odds.is_finite() {
        return Err(AppError::InvalidInput(format!(
            "odds must be a finite number, got {}",
            bet.odds
        )));
    }

    let echo = bet.clone();
    metrics::counter!("gateway_bets_received_total").increment(1);
    match state.processor.submit(bet).await {
        SubmitOutcome::Accepted => {
            tracing::debug!(bet_id = echo.id, status = ?echo.status, "Bet enqueued");
        }
        SubmitOutcome::RejectedShuttingDown => {
            // Reference contract: the submitter is never told about the drop.
            tracing::info!(bet_id = echo.id, "Bet dropped, system is shutting down");
        }
    }

    Ok((StatusCode::CREATED, Json(echo)))
}

/// Snapshot of the bets flagged for manual review, in insertion order.
pub async fn review_bets(State(state): State<AppState>) -> Json<Vec<Bet>> {
    let bets = state.processor.review_bets().await;
    tracing::debug!(review_count = bets.len(), "Retrieved review bets");
    Json(bets)
}
