//! Quarantine for updates that failed transition validation.

use tokio::sync::Mutex;

use crate::domain::Bet;

/// Append-only collection of rejected bet updates, kept in insertion order
/// for later manual review. Never pruned for the life of the process.
#[derive(Debug, Default)]
pub struct ReviewSink {
    bets: Mutex<Vec<Bet>>,
}

impl ReviewSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn flag(&self, bet: Bet) {
        self.bets.lock().await.push(bet);
    }

    pub async fn len(&self) -> usize {
        self.bets.lock().await.len()
    }

    /// Point-in-time copy of the flagged bets.
    pub async fn snapshot(&self) -> Vec<Bet> {
        self.bets.lock().await.clone()
    }
}
