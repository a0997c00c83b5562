//! Table configuration options.

/// Configuration options for a blackjack table.
///
/// Defaults match the classic rules: up to four seated players and a dealer
/// that stands at 17.
///
/// ```
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_max_players(2)
///     .with_dealer_stand(18);
/// assert_eq!(options.max_players, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Maximum number of seated players.
    pub max_players: usize,
    /// The dealer draws while its score is below this threshold.
    pub dealer_stand: u8,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            max_players: 4,
            dealer_stand: 17,
        }
    }
}

impl TableOptions {
    /// Sets the maximum number of seated players.
    #[must_use]
    pub const fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }

    /// Sets the score at which the dealer stands.
    #[must_use]
    pub const fn with_dealer_stand(mut self, dealer_stand: u8) -> Self {
        self.dealer_stand = dealer_stand;
        self
    }
}
