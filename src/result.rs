//! Round outcome report types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// A player's verdict against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busted or player has the higher score).
    Win,
    /// Player loses (player busted or dealer has the higher score).
    Lose,
    /// Equal scores, neither busted.
    Tie,
}

/// Per-player outcome report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player's name.
    pub name: String,
    /// The player's final score.
    pub score: u8,
    /// Whether the player busted.
    pub busted: bool,
    /// The verdict against the dealer.
    pub outcome: Outcome,
}

/// Dealer outcome report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerResult {
    /// The dealer's final score.
    pub score: u8,
    /// Whether the dealer busted.
    pub busted: bool,
}

/// Result of one full round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// One report per seated player, in seating order.
    pub players: Vec<PlayerResult>,
    /// The dealer's report. Every player is compared against this same
    /// final dealer hand.
    pub dealer: DealerResult,
}
