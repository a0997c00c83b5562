//! Error types for table and round operations.

use thiserror::Error;

/// Error returned when a draw is attempted on an exhausted deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors produced when a raw decision token cannot be parsed.
///
/// These are always recovered locally by re-requesting a decision; they
/// never abort a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidDecisionError {
    /// The turn decision was not `hit`, `stand`, or `view`.
    #[error("expected 'hit', 'stand' or 'view'")]
    UnknownDecision,
    /// The ace value choice was not 1 or 11.
    #[error("expected 1 or 11")]
    InvalidAceValue,
}

/// Errors that can occur when managing the table roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// The maximum number of players has been reached.
    #[error("maximum number of players reached")]
    TableFull,
    /// A player with this name is already seated.
    #[error("player name already exists")]
    DuplicateName,
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The deck ran out of cards mid-round.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
    /// The table has no seated players.
    #[error("no players at the table")]
    NoPlayers,
}
