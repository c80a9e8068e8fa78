// Concurrent bet lifecycle processing engine.
//
// Accepts a stream of bet updates from any number of producers, validates
// each update against the bet's last accepted lifecycle status, folds valid
// updates into running aggregate statistics and quarantines invalid ones
// for manual review.

pub mod config;
pub mod domain;
pub mod processor;
pub mod review;
pub mod stats;
pub mod summary;

mod worker;

pub use config::EngineConfig;
pub use domain::{is_valid_transition, Bet, BetStatus};
pub use processor::{BetProcessor, ProcessorState, SubmitOutcome};
pub use review::ReviewSink;
pub use stats::{StatsAggregator, StatsSnapshot};
