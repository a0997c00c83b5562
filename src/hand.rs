//! Hand representation and blackjack scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

/// Scores a card sequence with up to `hard_aces` aces forced to count as 1.
///
/// Remaining aces start at 11 and are downgraded one by one while the total
/// exceeds 21.
fn evaluate_cards(cards: &[Card], hard_aces: u8) -> u8 {
    let mut value: u8 = 0;
    let mut soft_aces: u8 = 0;
    let mut forced = hard_aces;

    for card in cards {
        if card.is_ace() && forced > 0 {
            forced -= 1;
            value = value.saturating_add(1);
        } else {
            if card.is_ace() {
                soft_aces += 1;
            }
            value = value.saturating_add(card_value(card.rank));
        }
    }

    while value > 21 && soft_aces > 0 {
        value -= 10;
        soft_aces -= 1;
    }

    value
}

/// A participant's hand.
///
/// The first card dealt to an empty hand becomes the hidden card; every card
/// after that is visible. The hidden card does not count toward the score
/// until it is revealed.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// The hidden card, if one was dealt and has not been revealed.
    hidden: Option<Card>,
    /// Visible cards, in deal order (a revealed hidden card goes first).
    visible: Vec<Card>,
    /// Number of aces explicitly chosen to count as 1.
    hard_aces: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hidden: None,
            visible: Vec::new(),
            hard_aces: 0,
        }
    }

    /// Adds a card to the hand.
    ///
    /// The first card added to an empty hand becomes the hidden card.
    pub fn add_card(&mut self, card: Card) {
        if self.hidden.is_none() && self.visible.is_empty() {
            self.hidden = Some(card);
        } else {
            self.visible.push(card);
        }
    }

    /// Reveals the hidden card, moving it to the front of the visible cards.
    ///
    /// Returns the revealed card, or `None` if nothing was hidden. Calling
    /// this on an already-revealed hand is a no-op.
    pub fn reveal_hidden(&mut self) -> Option<Card> {
        let card = self.hidden.take()?;
        self.visible.insert(0, card);
        Some(card)
    }

    /// Counts one soft ace as hard (value 1) before any automatic
    /// adjustment runs.
    ///
    /// This is the explicit ace-value choice a player makes after drawing an
    /// ace. It has no effect if every ace in the hand is already hard.
    pub fn harden_ace(&mut self) {
        let aces = self.visible.iter().filter(|c| c.is_ace()).count() as u8;
        if self.hard_aces < aces {
            self.hard_aces += 1;
        }
    }

    /// Calculates the hand's score.
    ///
    /// The hidden card is excluded while hidden. Aces count as 11 unless
    /// hardened, and are downgraded automatically one at a time while the
    /// total exceeds 21.
    #[must_use]
    pub fn score(&self) -> u8 {
        evaluate_cards(&self.visible, self.hard_aces)
    }

    /// Returns whether the hand is busted (score over 21).
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.score() > 21
    }

    /// Returns whether the hand scores exactly 21.
    ///
    /// No distinction is made between a two-card natural and a later 21.
    #[must_use]
    pub fn has_blackjack(&self) -> bool {
        self.score() == 21
    }

    /// Returns the visible cards, in deal order.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        &self.visible
    }

    /// Returns the hidden card, if one is still hidden.
    #[must_use]
    pub const fn hidden_card(&self) -> Option<Card> {
        self.hidden
    }

    /// Returns whether the hand still holds a hidden card.
    #[must_use]
    pub const fn has_hidden(&self) -> bool {
        self.hidden.is_some()
    }

    /// Returns the total number of cards, hidden included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len() + usize::from(self.hidden.is_some())
    }

    /// Returns whether the hand holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hidden.is_none() && self.visible.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn reset(&mut self) {
        self.hidden = None;
        self.visible.clear();
        self.hard_aces = 0;
    }
}
