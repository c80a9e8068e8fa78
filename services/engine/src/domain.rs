//! Bet model and lifecycle transition rules.

use serde::{Deserialize, Serialize};

/// Lifecycle state carried by a single bet update.
///
/// `Open` is the only legal first state for a bet id; the other three are
/// terminal and accept no further transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BetStatus {
    Open,
    Winner,
    Loser,
    Void,
}

impl BetStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, BetStatus::Open)
    }
}

/// One immutable lifecycle update for a wager.
///
/// The same `id` appears across a bet's updates; it is not unique within the
/// input stream. `odds` is decimal odds and only consulted on a win.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bet {
    pub id: u64,
    pub amount: f64,
    pub odds: f64,
    pub client: String,
    pub event: String,
    pub market: String,
    pub selection: String,
    pub status: BetStatus,
}

/// Decide whether `candidate` is a legal successor to `previous`.
///
/// `previous == None` means no update for this id has been accepted yet, in
/// which case only `Open` is valid. Out of `Open` exactly one terminal
/// transition is permitted; terminal states accept nothing.
pub fn is_valid_transition(candidate: BetStatus, previous: Option<BetStatus>) -> bool {
    match previous {
        None => candidate == BetStatus::Open,
        Some(BetStatus::Open) => candidate.is_terminal(),
        Some(_) => false,
    }
}
