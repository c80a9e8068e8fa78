//! Running aggregate statistics over accepted bet updates.
//!
//! All operations are additive and commutative, so the order in which
//! concurrent workers fold updates in does not affect the final totals.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use crate::domain::{Bet, BetStatus};

/// How many clients the summary lists per leaderboard.
pub const TOP_CLIENTS: usize = 5;

/// Thread-safe accumulator of process-wide betting statistics.
///
/// Counters are atomics; floating-point sums use a CAS add over the bit
/// representation so no external locking is needed on the hot path. The
/// per-client maps are internally locked and populated lazily.
#[derive(Debug, Default)]
pub struct StatsAggregator {
    processed: AtomicU64,
    total_volume: AtomicU64,
    total_profit_loss: AtomicU64,
    profit_per_client: Mutex<HashMap<String, f64>>,
    loss_per_client: Mutex<HashMap<String, f64>>,
}

/// Point-in-time copy of the aggregate state.
///
/// Not linearizable with in-flight worker updates; each field is read
/// independently.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub processed: u64,
    pub total_volume: f64,
    pub total_profit_loss: f64,
    pub top_winners: Vec<(String, f64)>,
    pub top_losers: Vec<(String, f64)>,
}

fn add_f64(cell: &AtomicU64, value: f64) {
    let mut current = cell.load(Ordering::Relaxed);
    loop {
        let next = (f64::from_bits(current) + value).to_bits();
        match cell.compare_exchange_weak(current, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return,
            Err(actual) => current = actual,
        }
    }
}

fn load_f64(cell: &AtomicU64) -> f64 {
    f64::from_bits(cell.load(Ordering::Relaxed))
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one accepted bet update into the totals.
    ///
    /// Only `Open` updates contribute to volume. `Void` refunds the stake and
    /// touches neither volume nor profit/loss.
    pub async fn record(&self, bet: &Bet) {
        self.processed.fetch_add(1, Ordering::Relaxed);

        match bet.status {
            BetStatus::Open => {
                add_f64(&self.total_volume, bet.amount);
            }
            BetStatus::Winner => {
                let result = bet.amount * (bet.odds - 1.0);
                add_f64(&self.total_profit_loss, result);
                let mut profits = self.profit_per_client.lock().await;
                *profits.entry(bet.client.clone()).or_insert(0.0) += result;
            }
            BetStatus::Loser => {
                add_f64(&self.total_profit_loss, -bet.amount);
                let mut losses = self.loss_per_client.lock().await;
                *losses.entry(bet.client.clone()).or_insert(0.0) += bet.amount;
            }
            BetStatus::Void => {}
        }
    }

    pub fn processed(&self) -> u64 {
        self.processed.load(Ordering::Relaxed)
    }

    /// Copy out the current totals and leaderboards.
    pub async fn snapshot(&self) -> StatsSnapshot {
        let top_winners = top_clients(&*self.profit_per_client.lock().await);
        let top_losers = top_clients(&*self.loss_per_client.lock().await);

        StatsSnapshot {
            processed: self.processed(),
            total_volume: load_f64(&self.total_volume),
            total_profit_loss: load_f64(&self.total_profit_loss),
            top_winners,
            top_losers,
        }
    }
}

/// Top clients by accumulated value, descending; ties broken by client name
/// ascending so repeated renders are deterministic.
fn top_clients(totals: &HashMap<String, f64>) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = totals
        .iter()
        .map(|(client, value)| (client.clone(), *value))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(TOP_CLIENTS);
    ranked
}
