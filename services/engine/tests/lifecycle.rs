/// End-to-end tests for the bet processor: submit, drain, inspect.
use std::time::Duration;

use engine::{Bet, BetProcessor, BetStatus, EngineConfig, ProcessorState, SubmitOutcome};

fn test_config() -> EngineConfig {
    EngineConfig {
        worker_count: 4,
        process_delay: Duration::ZERO,
        shutdown_timeout: Duration::from_secs(10),
    }
}

fn bet(id: u64, status: BetStatus, amount: f64, odds: f64, client: &str) -> Bet {
    Bet {
        id,
        amount,
        odds,
        client: client.to_string(),
        event: "Event".to_string(),
        market: "Market1".to_string(),
        selection: "Selection1".to_string(),
        status,
    }
}

#[tokio::test]
async fn single_open_bet_counts_toward_volume() {
    let processor = BetProcessor::new(test_config());

    let outcome = processor.submit(bet(1, BetStatus::Open, 100.0, 1.5, "C1")).await;
    assert_eq!(outcome, SubmitOutcome::Accepted);

    processor.shutdown().await;

    let report = processor.summary().await;
    assert!(report.contains("Total bets processed: 1\n"));
    assert!(report.contains("Total bets amount: 100.0\n"));
    assert!(report.contains("Total result (profit/loss): 0.0\n"));
    assert!(!report.contains("Bets flagged for review"));
}

#[tokio::test]
async fn open_then_winner_settles_profit() {
    let processor = BetProcessor::new(test_config());

    processor.submit(bet(3, BetStatus::Open, 100.0, 1.5, "C1")).await;
    processor.submit(bet(3, BetStatus::Winner, 100.0, 1.5, "C1")).await;
    processor.shutdown().await;

    let report = processor.summary().await;
    assert!(report.contains("Total bets processed: 2\n"));
    // OPEN-only volume rule: the WINNER update does not add to volume. The
    // legacy variant counted every accepted update and would report 200.0.
    assert!(report.contains("Total bets amount: 100.0\n"));
    assert!(report.contains("Total result (profit/loss): 50.0\n"));
    assert!(report.contains("C1: 50.0\n"));
    assert!(processor.review_bets().await.is_empty());
}

#[tokio::test]
async fn first_update_that_is_not_open_goes_to_review() {
    let processor = BetProcessor::new(test_config());

    processor.submit(bet(2, BetStatus::Winner, 100.0, 1.5, "C1")).await;
    processor.shutdown().await;

    let review = processor.review_bets().await;
    assert_eq!(review.len(), 1);
    assert_eq!(review[0].id, 2);
    assert_eq!(review[0].status, BetStatus::Winner);

    let report = processor.summary().await;
    assert!(report.contains("Total bets processed: 0\n"));
    assert!(report.contains("Total bets amount: 0.0\n"));
    assert!(report.contains("Bets flagged for review: 1\n"));
}

#[tokio::test]
async fn loser_settlement_accumulates_client_losses() {
    let processor = BetProcessor::new(test_config());

    processor.submit(bet(5, BetStatus::Open, 150.0, 2.0, "C9")).await;
    processor.submit(bet(5, BetStatus::Loser, 150.0, 2.0, "C9")).await;
    processor.shutdown().await;

    let report = processor.summary().await;
    assert!(report.contains("Total result (profit/loss): -150.0\n"));
    assert!(report.contains("Top 5 customers with the highest losses: \nC9: 150.0\n"));
}

#[tokio::test]
async fn void_settlement_leaves_profit_loss_untouched() {
    let processor = BetProcessor::new(test_config());

    processor.submit(bet(6, BetStatus::Open, 80.0, 3.0, "C2")).await;
    processor.submit(bet(6, BetStatus::Void, 80.0, 3.0, "C2")).await;
    processor.shutdown().await;

    let report = processor.summary().await;
    assert!(report.contains("Total bets processed: 2\n"));
    assert!(report.contains("Total bets amount: 80.0\n"));
    assert!(report.contains("Total result (profit/loss): 0.0\n"));
}

#[tokio::test]
async fn same_id_storm_is_serialized_by_sharding() {
    let processor = BetProcessor::new(test_config());

    processor.submit(bet(7, BetStatus::Open, 100.0, 1.5, "C1")).await;
    // Every update for id 7 lands on the same worker in submission order,
    // so exactly one of these settles and the rest are quarantined.
    for _ in 0..50 {
        processor.submit(bet(7, BetStatus::Winner, 100.0, 1.5, "C1")).await;
    }
    processor.shutdown().await;

    let report = processor.summary().await;
    assert!(report.contains("Total bets processed: 2\n"));
    assert!(report.contains("Total result (profit/loss): 50.0\n"));
    assert_eq!(processor.review_bets().await.len(), 49);
}

#[tokio::test]
async fn independent_ids_all_settle() {
    let processor = BetProcessor::new(test_config());

    for id in 1..=100 {
        processor.submit(bet(id, BetStatus::Open, 10.0, 2.0, &format!("Client{id}"))).await;
    }
    processor.shutdown().await;

    let report = processor.summary().await;
    assert!(report.contains("Total bets processed: 100\n"));
    assert!(report.contains("Total bets amount: 1000.0\n"));
    assert!(processor.review_bets().await.is_empty());
}

#[tokio::test]
async fn shutdown_is_idempotent() {
    let processor = BetProcessor::new(test_config());
    processor.submit(bet(1, BetStatus::Open, 100.0, 1.5, "C1")).await;

    processor.shutdown().await;
    assert_eq!(processor.state(), ProcessorState::Stopped);

    // Second call must neither hang nor change the terminal state.
    processor.shutdown().await;
    assert_eq!(processor.state(), ProcessorState::Stopped);

    let report = processor.summary().await;
    assert!(report.contains("Total bets processed: 1\n"));
}

#[tokio::test]
async fn submissions_after_shutdown_are_dropped() {
    let processor = BetProcessor::new(test_config());
    processor.shutdown().await;

    let outcome = processor.submit(bet(9, BetStatus::Open, 100.0, 1.5, "C1")).await;
    assert_eq!(outcome, SubmitOutcome::RejectedShuttingDown);

    let report = processor.summary().await;
    assert!(report.contains("Total bets processed: 0\n"));
    assert!(processor.review_bets().await.is_empty());
}

#[tokio::test]
async fn summary_is_stable_between_renders() {
    let processor = BetProcessor::new(test_config());
    processor.submit(bet(1, BetStatus::Open, 100.0, 1.5, "C1")).await;
    processor.submit(bet(2, BetStatus::Loser, 50.0, 2.0, "C2")).await;
    processor.shutdown().await;

    assert_eq!(processor.summary().await, processor.summary().await);
}

#[tokio::test]
async fn simulated_delay_still_drains_on_shutdown() {
    let processor = BetProcessor::new(EngineConfig {
        worker_count: 2,
        process_delay: Duration::from_millis(5),
        shutdown_timeout: Duration::from_secs(10),
    });

    for id in 1..=20 {
        processor.submit(bet(id, BetStatus::Open, 1.0, 2.0, "C1")).await;
    }
    processor.shutdown().await;

    let report = processor.summary().await;
    assert!(report.contains("Total bets processed: 20\n"));
}
