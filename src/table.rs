//! Participants and the table roster.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::TableError;
use crate::hand::Hand;
use crate::options::TableOptions;

/// A seated player: a name and a hand.
///
/// Players carry no policy of their own; their turns are driven by the
/// round through a [`DecisionSource`](crate::decision::DecisionSource).
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: Hand,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

/// The dealer: a hand played by the fixed draw-to-threshold policy.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

/// The table roster: seated players plus the dealer.
///
/// The roster outlives individual rounds; hands are reset before each new
/// round.
#[derive(Debug, Clone, Default)]
pub struct Table {
    options: TableOptions,
    players: Vec<Player>,
    dealer: Dealer,
}

impl Table {
    /// Creates an empty table with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(TableOptions::default())
    }

    /// Creates an empty table with the given options.
    #[must_use]
    pub const fn with_options(options: TableOptions) -> Self {
        Self {
            options,
            players: Vec::new(),
            dealer: Dealer::new(),
        }
    }

    /// Seats a new player.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is full or the name is already taken.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<(), TableError> {
        if self.players.len() >= self.options.max_players {
            return Err(TableError::TableFull);
        }

        let name = name.into();
        if self.players.iter().any(|p| p.name == name) {
            return Err(TableError::DuplicateName);
        }

        self.players.push(Player::new(name));
        Ok(())
    }

    /// Removes the player with the given name.
    ///
    /// Returns whether a player was removed.
    pub fn remove_player(&mut self, name: &str) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.name != name);
        self.players.len() != before
    }

    /// Returns the seated players, in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns whether no players are seated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> TableOptions {
        self.options
    }

    /// Resets every hand, player and dealer alike, for a new round.
    pub fn reset_hands(&mut self) {
        for player in &mut self.players {
            player.hand.reset();
        }
        self.dealer.hand.reset();
    }

    pub(crate) const fn players_mut(&mut self) -> &mut Vec<Player> {
        &mut self.players
    }

    pub(crate) const fn dealer_mut(&mut self) -> &mut Dealer {
        &mut self.dealer
    }
}
