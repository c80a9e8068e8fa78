//! Startup seeding of demonstration bets.

use engine::{Bet, BetProcessor, BetStatus};

/// Enqueue `count` OPEN bets, one per synthetic client, so a fresh instance
/// has data to report on.
pub async fn seed_open_bets(processor: &BetProcessor, count: u64) {
    for i in 1..=count {
        let bet = Bet {
            id: i,
            amount: 100.0,
            odds: 1.5,
            client: format!("Client{i}"),
            event: "Event".to_string(),
            market: "Market1".to_string(),
            selection: "Selection1".to_string(),
            status: BetStatus::Open,
        };
        processor.submit(bet).await;
    }

    if count > 0 {
        tracing::info!(count, "Seeded OPEN bets at startup");
    }
}
