//! Processor façade: owns the queue shards, the worker pool, the status
//! table, the aggregator and the review sink.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use tokio::sync::{mpsc, Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::config::EngineConfig;
use crate::domain::Bet;
use crate::review::ReviewSink;
use crate::stats::StatsAggregator;
use crate::summary;
use crate::worker::{self, WorkerContext};

const RUNNING: u8 = 0;
const DRAINING: u8 = 1;
const STOPPED: u8 = 2;

/// Lifecycle of the processor: `Running -> Draining -> Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorState {
    Running,
    Draining,
    Stopped,
}

/// Result of handing a bet to the processor.
///
/// Submission stays fire-and-forget at the transport layer; this outcome is
/// the library-level acknowledgement of the intake decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    RejectedShuttingDown,
}

/// Concurrent bet lifecycle processor.
///
/// Incoming bets are routed to a fixed pool of workers by `id % worker_count`
/// over unbounded channels, so updates for the same bet id are always handled
/// by the same worker in submission order, while different ids proceed in
/// parallel. Shutdown closes the channels, lets the workers drain their
/// backlog, and aborts them if they miss the configured deadline.
pub struct BetProcessor {
    /// `None` once shutdown has been requested; dropping the senders closes
    /// the shards and lets the workers drain to completion.
    shards: RwLock<Option<Vec<mpsc::UnboundedSender<Bet>>>>,
    workers: Mutex<Vec<JoinHandle<()>>>,
    state: AtomicU8,
    ctx: Arc<WorkerContext>,
    config: EngineConfig,
}

impl BetProcessor {
    /// Spawn the worker pool and start accepting submissions.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: EngineConfig) -> Self {
        let worker_count = config.worker_count.max(1);

        let ctx = Arc::new(WorkerContext {
            stats: StatsAggregator::new(),
            review: ReviewSink::new(),
            last_status: Mutex::new(HashMap::new()),
            process_delay: config.process_delay,
        });

        let mut senders = Vec::with_capacity(worker_count);
        let mut workers = Vec::with_capacity(worker_count);

        for worker_id in 0..worker_count {
            let (tx, rx) = mpsc::unbounded_channel();
            senders.push(tx);
            workers.push(tokio::spawn(worker::run(worker_id, rx, ctx.clone())));
        }

        tracing::info!(worker_count, "Bet processor started");

        Self {
            shards: RwLock::new(Some(senders)),
            workers: Mutex::new(workers),
            state: AtomicU8::new(RUNNING),
            ctx,
            config,
        }
    }

    pub fn state(&self) -> ProcessorState {
        match self.state.load(Ordering::SeqCst) {
            RUNNING => ProcessorState::Running,
            DRAINING => ProcessorState::Draining,
            _ => ProcessorState::Stopped,
        }
    }

    /// Enqueue one bet update. Never blocks the caller.
    ///
    /// Once shutdown has been requested the bet is dropped; the intake policy
    /// is best-effort, and the drop surfaces only as a log event plus the
    /// returned outcome.
    pub async fn submit(&self, bet: Bet) -> SubmitOutcome {
        let shards = self.shards.read().await;
        let Some(senders) = shards.as_ref() else {
            tracing::info!(
                bet_id = bet.id,
                "The system is shutting down. New bets are not being accepted"
            );
            metrics::counter!("bets_rejected_shutdown_total").increment(1);
            return SubmitOutcome::RejectedShuttingDown;
        };

        let shard = (bet.id % senders.len() as u64) as usize;
        match senders[shard].send(bet) {
            Ok(()) => {
                metrics::counter!("bets_submitted_total").increment(1);
                SubmitOutcome::Accepted
            }
            Err(err) => {
                // Only possible if the worker died; the bet is lost.
                tracing::error!(bet_id = err.0.id, shard, "Queue shard is closed, bet dropped");
                SubmitOutcome::RejectedShuttingDown
            }
        }
    }

    /// Render the plain-text summary report over the current aggregates.
    pub async fn summary(&self) -> String {
        let snapshot = self.ctx.stats.snapshot().await;
        let review_count = self.ctx.review.len().await;
        summary::render(&snapshot, review_count)
    }

    /// Snapshot of the bets flagged for manual review, in insertion order.
    pub async fn review_bets(&self) -> Vec<Bet> {
        self.ctx.review.snapshot().await
    }

    /// Drain the queue and stop the worker pool.
    ///
    /// New submissions are rejected from this point on. Blocks until every
    /// worker has drained its shard, up to the configured timeout; workers
    /// still busy at the deadline are aborted and any bet they held is lost.
    /// Repeated calls are no-ops.
    pub async fn shutdown(&self) {
        if self
            .state
            .compare_exchange(RUNNING, DRAINING, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("Shutdown already requested, ignoring");
            return;
        }

        tracing::info!("Shutdown requested, draining queue");

        // Closing the senders is what stops the workers: each loop exits once
        // its shard is both closed and empty.
        *self.shards.write().await = None;

        let handles: Vec<JoinHandle<()>> = std::mem::take(&mut *self.workers.lock().await);
        let aborts: Vec<_> = handles.iter().map(|h| h.abort_handle()).collect();

        let drained = futures::future::join_all(handles);
        match tokio::time::timeout(self.config.shutdown_timeout, drained).await {
            Ok(results) => {
                for result in results {
                    if let Err(err) = result {
                        tracing::error!(error = %err, "Worker task failed during drain");
                    }
                }
            }
            Err(_) => {
                tracing::warn!(
                    timeout_secs = self.config.shutdown_timeout.as_secs(),
                    "Workers did not drain in time; aborting, in-flight bets may be lost"
                );
                for abort in aborts {
                    abort.abort();
                }
            }
        }

        self.state.store(STOPPED, Ordering::SeqCst);

        let report = self.summary().await;
        tracing::info!("System shutdown completed");
        tracing::info!(summary = %report, "Final summary");
    }
}
