//! The decision source seam between the engine and a player.
//!
//! The engine never reads input itself. Each player turn asks a
//! [`DecisionSource`] for raw tokens, parses them, and re-requests on
//! invalid input without mutating any game state.

use alloc::string::String;

use crate::card::Card;
use crate::error::InvalidDecisionError;
use crate::hand::Hand;
use crate::round::TurnState;

/// A parsed turn decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Draw one card.
    Hit,
    /// End the turn, keeping the current score.
    Stand,
    /// Reveal the hidden card. Does not end the turn.
    View,
}

impl Decision {
    /// Parses a raw decision token.
    ///
    /// Tokens are trimmed and matched case-insensitively against `hit`,
    /// `stand`, and `view`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDecisionError::UnknownDecision`] for anything else.
    pub fn parse(token: &str) -> Result<Self, InvalidDecisionError> {
        let token = token.trim();
        if token.eq_ignore_ascii_case("hit") {
            Ok(Self::Hit)
        } else if token.eq_ignore_ascii_case("stand") {
            Ok(Self::Stand)
        } else if token.eq_ignore_ascii_case("view") {
            Ok(Self::View)
        } else {
            Err(InvalidDecisionError::UnknownDecision)
        }
    }
}

/// The counted value chosen for a freshly drawn ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AceValue {
    /// Count the ace as 1.
    One,
    /// Count the ace as 11.
    Eleven,
}

impl AceValue {
    /// Parses a raw ace value token.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDecisionError::InvalidAceValue`] unless the token is
    /// the number 1 or 11.
    pub fn parse(token: &str) -> Result<Self, InvalidDecisionError> {
        match token.trim().parse::<u8>() {
            Ok(1) => Ok(Self::One),
            Ok(11) => Ok(Self::Eleven),
            _ => Err(InvalidDecisionError::InvalidAceValue),
        }
    }
}

/// What a decision source gets to see when prompted: the acting player's
/// name and hand.
#[derive(Debug, Clone, Copy)]
pub struct PlayerView<'a> {
    /// The acting player's name.
    pub name: &'a str,
    /// The acting player's hand.
    pub hand: &'a Hand,
}

impl PlayerView<'_> {
    /// The player's current score (hidden card excluded while hidden).
    #[must_use]
    pub fn score(&self) -> u8 {
        self.hand.score()
    }
}

/// Supplies turn decisions for a player.
///
/// Implementations may block (e.g. waiting on stdin); the engine suspends
/// the round until a token arrives. Returned tokens are parsed by the
/// engine, and invalid ones are re-requested after an
/// [`invalid_input`](Self::invalid_input) notification.
pub trait DecisionSource {
    /// Returns the raw token for the next turn decision (hit/stand/view).
    fn turn_decision(&mut self, view: &PlayerView<'_>) -> String;

    /// Returns the raw token for an ace value choice (1 or 11), requested
    /// immediately after `drawn` (an ace) was added to the hand by a hit.
    fn ace_value(&mut self, view: &PlayerView<'_>, drawn: Card) -> String;

    /// Called when a returned token was rejected, before re-requesting.
    fn invalid_input(&mut self, _error: InvalidDecisionError) {}

    /// Called after a hit, with the card that was drawn.
    fn card_drawn(&mut self, _card: Card) {}

    /// Called when a player's turn reaches a terminal state (stood or
    /// busted).
    fn turn_ended(&mut self, _view: &PlayerView<'_>, _state: TurnState) {}
}
