//! Worker task: drains one queue shard, validates and folds bets.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Mutex};

use crate::domain::{is_valid_transition, Bet, BetStatus};
use crate::review::ReviewSink;
use crate::stats::StatsAggregator;

/// State shared by every worker in the pool.
#[derive(Debug)]
pub(crate) struct WorkerContext {
    pub stats: StatsAggregator,
    pub review: ReviewSink,
    /// Last accepted status per bet id. Absence means no accepted update
    /// yet. Entries are written only on the accept path and never removed.
    pub last_status: Mutex<HashMap<u64, BetStatus>>,
    pub process_delay: Duration,
}

/// Main loop for one worker.
///
/// Exits when the shard's sender side has been closed (shutdown requested)
/// and every buffered bet has been drained, so queued work is never
/// abandoned on the shutdown signal alone.
pub(crate) async fn run(worker_id: usize, mut shard: mpsc::UnboundedReceiver<Bet>, ctx: Arc<WorkerContext>) {
    tracing::info!(worker_id, "Worker started");

    while let Some(bet) = shard.recv().await {
        if !ctx.process_delay.is_zero() {
            // Simulated settlement latency; zero in tests.
            tokio::time::sleep(ctx.process_delay).await;
        }
        process_bet(&ctx, bet).await;
    }

    tracing::info!(worker_id, "Worker stopped");
}

/// Validate one update against the bet's last accepted status and either
/// fold it into the aggregates or quarantine it.
///
/// Bets are routed to workers by `id % worker_count`, so all updates for one
/// id land on the same worker in submission order. That serializes the
/// read-validate-write sequence below per id; no further locking of the
/// status entry is needed.
async fn process_bet(ctx: &WorkerContext, bet: Bet) {
    let previous = ctx.last_status.lock().await.get(&bet.id).copied();

    if !is_valid_transition(bet.status, previous) {
        tracing::info!(
            bet_id = bet.id,
            status = ?bet.status,
            previous = ?previous,
            "Bet flagged for review due to invalid sequence"
        );
        metrics::counter!("bets_reviewed_total").increment(1);
        ctx.review.flag(bet).await;
        return;
    }

    ctx.last_status.lock().await.insert(bet.id, bet.status);
    ctx.stats.record(&bet).await;

    metrics::counter!("bets_processed_total").increment(1);
    tracing::debug!(bet_id = bet.id, status = ?bet.status, "Bet processed");
}
