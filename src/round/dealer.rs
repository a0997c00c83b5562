use crate::error::EmptyDeckError;
use crate::table::Dealer;

use super::Round;

impl Round {
    /// Runs the dealer's turn: draw while the score is below `stand`.
    ///
    /// The dealer has no ace choice and never reveals its hidden card; a
    /// bust (score over 21) also clears the threshold and stops the loop.
    pub(super) fn run_dealer_turn(
        &mut self,
        dealer: &mut Dealer,
        stand: u8,
    ) -> Result<(), EmptyDeckError> {
        while dealer.hand().score() < stand {
            let card = self.deck.draw()?;
            dealer.hand_mut().add_card(card);
        }
        Ok(())
    }
}
