//! Round orchestration: deal, turns, dealer play, verdicts.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::decision::DecisionSource;
use crate::error::{EmptyDeckError, RoundError};
use crate::result::{DealerResult, Outcome, PlayerResult, RoundResult};
use crate::table::Table;

mod dealer;
mod turn;

pub use turn::TurnState;

/// One round of blackjack.
///
/// A round owns its deck and is consumed by [`play`](Self::play); nothing is
/// carried over between rounds except the table roster itself.
#[derive(Debug)]
pub struct Round {
    deck: Deck,
}

impl Round {
    /// Creates a round with a freshly shuffled standard deck.
    ///
    /// The shuffle is driven by a ChaCha8 RNG seeded from `seed`, so a round
    /// can be replayed deterministically.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);
        Self { deck }
    }

    /// Creates a round over a prepared deck, used verbatim without
    /// shuffling. Intended for scripted decks in tests and demos.
    #[must_use]
    pub const fn with_deck(deck: Deck) -> Self {
        Self { deck }
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Plays the round to completion.
    ///
    /// Resets every hand, deals two cards to each player (first card
    /// hidden) and then to the dealer, runs each player's turn through
    /// `source`, runs the dealer policy, and computes the per-player
    /// verdicts against the final dealer hand.
    ///
    /// # Errors
    ///
    /// Returns an error if no players are seated, or if the deck runs out
    /// of cards mid-round.
    pub fn play<S>(mut self, table: &mut Table, source: &mut S) -> Result<RoundResult, RoundError>
    where
        S: DecisionSource + ?Sized,
    {
        if table.is_empty() {
            return Err(RoundError::NoPlayers);
        }

        table.reset_hands();
        self.deal_initial(table)?;

        for player in table.players_mut().iter_mut() {
            self.run_player_turn(player, source)?;
        }

        let stand = table.options().dealer_stand;
        self.run_dealer_turn(table.dealer_mut(), stand)?;

        Ok(Self::declare_winner(table))
    }

    /// Deals two cards to each player in seating order, then two to the
    /// dealer. The first card of each pair lands hidden.
    fn deal_initial(&mut self, table: &mut Table) -> Result<(), EmptyDeckError> {
        for player in table.players_mut().iter_mut() {
            let hand = player.hand_mut();
            hand.add_card(self.deck.draw()?);
            hand.add_card(self.deck.draw()?);
        }

        let hand = table.dealer_mut().hand_mut();
        hand.add_card(self.deck.draw()?);
        hand.add_card(self.deck.draw()?);

        Ok(())
    }

    /// Compares every player against the final dealer hand.
    ///
    /// Precedence per player: a busted player loses regardless of the
    /// dealer's own bust; otherwise a busted dealer loses; otherwise the
    /// higher score wins and equal scores tie.
    fn declare_winner(table: &Table) -> RoundResult {
        let dealer_hand = table.dealer().hand();
        let dealer = DealerResult {
            score: dealer_hand.score(),
            busted: dealer_hand.is_busted(),
        };

        let players = table
            .players()
            .iter()
            .map(|player| {
                let score = player.hand().score();
                let busted = player.hand().is_busted();

                let outcome = if busted {
                    Outcome::Lose
                } else if dealer.busted || score > dealer.score {
                    Outcome::Win
                } else if dealer.score > score {
                    Outcome::Lose
                } else {
                    Outcome::Tie
                };

                PlayerResult {
                    name: player.name().into(),
                    score,
                    busted,
                    outcome,
                }
            })
            .collect();

        RoundResult { players, dealer }
    }
}
