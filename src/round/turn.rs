use crate::card::Card;
use crate::decision::{AceValue, Decision, DecisionSource, PlayerView};
use crate::error::EmptyDeckError;
use crate::table::Player;

use super::Round;

/// State of a player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// The player may hit, stand, or view the hidden card.
    AwaitingDecision,
    /// Terminal: the player stood.
    Stood,
    /// Terminal: the player busted.
    Busted,
}

/// Requests decision tokens until one parses.
///
/// Rejected tokens are reported through
/// [`invalid_input`](DecisionSource::invalid_input) and do not mutate any
/// state.
fn request_decision<S>(player: &Player, source: &mut S) -> Decision
where
    S: DecisionSource + ?Sized,
{
    loop {
        let view = PlayerView {
            name: player.name(),
            hand: player.hand(),
        };
        let raw = source.turn_decision(&view);
        match Decision::parse(&raw) {
            Ok(decision) => return decision,
            Err(error) => source.invalid_input(error),
        }
    }
}

/// Requests an ace value choice until one parses.
fn request_ace_value<S>(player: &Player, source: &mut S, drawn: Card) -> AceValue
where
    S: DecisionSource + ?Sized,
{
    loop {
        let view = PlayerView {
            name: player.name(),
            hand: player.hand(),
        };
        let raw = source.ace_value(&view, drawn);
        match AceValue::parse(&raw) {
            Ok(value) => return value,
            Err(error) => source.invalid_input(error),
        }
    }
}

impl Round {
    /// Runs one player's turn to a terminal state.
    ///
    /// Hit draws a card and, for an ace, asks for its counted value before
    /// the bust check; stand ends the turn; view reveals the hidden card
    /// and keeps the turn going.
    pub(super) fn run_player_turn<S>(
        &mut self,
        player: &mut Player,
        source: &mut S,
    ) -> Result<TurnState, EmptyDeckError>
    where
        S: DecisionSource + ?Sized,
    {
        let mut state = TurnState::AwaitingDecision;

        while state == TurnState::AwaitingDecision {
            match request_decision(player, source) {
                Decision::Hit => {
                    let card = self.deck.draw()?;
                    player.hand_mut().add_card(card);
                    source.card_drawn(card);

                    if card.is_ace()
                        && request_ace_value(player, source, card) == AceValue::One
                    {
                        player.hand_mut().harden_ace();
                    }

                    if player.hand().is_busted() {
                        state = TurnState::Busted;
                    }
                }
                Decision::Stand => {
                    state = TurnState::Stood;
                }
                Decision::View => {
                    // No-op once the hidden card is already revealed.
                    let _ = player.hand_mut().reveal_hidden();
                }
            }
        }

        let view = PlayerView {
            name: player.name(),
            hand: player.hand(),
        };
        source.turn_ended(&view, state);

        Ok(state)
    }
}
