//! A turn-based blackjack table engine with optional `no_std` support.
//!
//! A [`Table`] seats up to four named players against one automated dealer.
//! Each [`Round`] owns a freshly shuffled 52-card deck, deals every
//! participant two cards (the first one hidden), drives each player's turn
//! through a pluggable [`DecisionSource`] (hit / stand / view the hidden
//! card, plus an explicit 1-or-11 choice for drawn aces), plays the dealer
//! to its stand threshold, and reports a per-player verdict against the
//! dealer.
//!
//! # Example
//!
//! ```
//! use bjtable::{Card, DecisionSource, PlayerView, Round, Table};
//!
//! /// A player that always stands on its first decision.
//! struct AlwaysStand;
//!
//! impl DecisionSource for AlwaysStand {
//!     fn turn_decision(&mut self, _view: &PlayerView<'_>) -> String {
//!         "stand".into()
//!     }
//!
//!     fn ace_value(&mut self, _view: &PlayerView<'_>, _drawn: Card) -> String {
//!         "11".into()
//!     }
//! }
//!
//! let mut table = Table::new();
//! table.add_player("Ada")?;
//!
//! let result = Round::new(42).play(&mut table, &mut AlwaysStand)?;
//! assert_eq!(result.players.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod card;
pub mod decision;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, SUITS, Suit};
pub use decision::{AceValue, Decision, DecisionSource, PlayerView};
pub use deck::Deck;
pub use error::{EmptyDeckError, InvalidDecisionError, RoundError, TableError};
pub use hand::Hand;
pub use options::TableOptions;
pub use result::{DealerResult, Outcome, PlayerResult, RoundResult};
pub use round::{Round, TurnState};
pub use table::{Dealer, Player, Table};
