//! Round integration tests.

use std::collections::{HashSet, VecDeque};

use bjtable::{
    Card, DECK_SIZE, Deck, DecisionSource, EmptyDeckError, Hand, InvalidDecisionError, Outcome,
    PlayerView, Round, RoundError, Suit, Table, TableError, TableOptions, TurnState,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Builds a deck whose cards come out in the listed order.
fn deck_from_draws(draws: &[Card]) -> Deck {
    let mut cards = draws.to_vec();
    cards.reverse();
    Deck::from_cards(cards)
}

/// A decision source that replays scripted tokens and records engine
/// callbacks.
struct ScriptedSource {
    decisions: VecDeque<String>,
    aces: VecDeque<String>,
    invalid: usize,
    drawn: Vec<Card>,
    ended: Vec<(String, TurnState)>,
}

fn scripted(decisions: &[&str], aces: &[&str]) -> ScriptedSource {
    ScriptedSource {
        decisions: decisions.iter().map(|s| (*s).to_string()).collect(),
        aces: aces.iter().map(|s| (*s).to_string()).collect(),
        invalid: 0,
        drawn: Vec::new(),
        ended: Vec::new(),
    }
}

impl DecisionSource for ScriptedSource {
    fn turn_decision(&mut self, _view: &PlayerView<'_>) -> String {
        self.decisions
            .pop_front()
            .expect("script ran out of turn decisions")
    }

    fn ace_value(&mut self, _view: &PlayerView<'_>, _drawn: Card) -> String {
        self.aces.pop_front().expect("script ran out of ace choices")
    }

    fn invalid_input(&mut self, _error: InvalidDecisionError) {
        self.invalid += 1;
    }

    fn card_drawn(&mut self, card: Card) {
        self.drawn.push(card);
    }

    fn turn_ended(&mut self, view: &PlayerView<'_>, state: TurnState) {
        self.ended.push((view.name.to_string(), state));
    }
}

fn one_player_table() -> Table {
    let mut table = Table::new();
    table.add_player("Ada").unwrap();
    table
}

#[test]
fn hand_hides_first_card_and_downgrades_aces() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, 1));
    hand.add_card(card(Suit::Spades, 1));
    hand.add_card(card(Suit::Clubs, 9));

    // Hidden ace is excluded: 11 + 9.
    assert_eq!(hand.score(), 20);
    assert!(hand.has_hidden());

    assert_eq!(hand.reveal_hidden(), Some(card(Suit::Hearts, 1)));
    // 11 + 11 + 9 = 31, one automatic downgrade lands on 21.
    assert_eq!(hand.score(), 21);
    assert!(hand.has_blackjack());
    assert!(!hand.is_busted());
}

#[test]
fn king_and_ace_score_twenty_one() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Spades, 13));
    hand.add_card(card(Suit::Hearts, 1));

    assert_eq!(hand.score(), 11);

    assert_eq!(hand.reveal_hidden(), Some(card(Suit::Spades, 13)));
    assert_eq!(hand.score(), 21);
    assert!(hand.has_blackjack());
    assert!(!hand.is_busted());
}

#[test]
fn busted_matches_score_over_twenty_one() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, 10));
    hand.add_card(card(Suit::Spades, 10));
    hand.add_card(card(Suit::Diamonds, 9));
    hand.add_card(card(Suit::Clubs, 5));

    // Hidden 10 excluded: 10 + 9 + 5.
    assert_eq!(hand.score(), 24);
    assert_eq!(hand.is_busted(), hand.score() > 21);
    assert!(hand.is_busted());
}

#[test]
fn harden_ace_without_aces_is_a_no_op() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, 2));
    hand.add_card(card(Suit::Spades, 10));
    hand.add_card(card(Suit::Diamonds, 9));

    hand.harden_ace();
    assert_eq!(hand.score(), 19);
}

#[test]
fn standard_deck_is_complete_and_unique() {
    let mut deck = Deck::standard();
    assert_eq!(deck.len(), DECK_SIZE);

    let mut seen = HashSet::new();
    for remaining in (0..DECK_SIZE).rev() {
        let card = deck.draw().unwrap();
        assert!((1..=13).contains(&card.rank));
        assert!(seen.insert(card), "duplicate card drawn: {card}");
        assert_eq!(deck.len(), remaining);
    }

    assert!(deck.is_empty());
    assert_eq!(deck.draw().unwrap_err(), EmptyDeckError);
}

#[test]
fn decision_tokens_parse_case_insensitively() {
    use bjtable::{AceValue, Decision};

    assert_eq!(Decision::parse("HIT").unwrap(), Decision::Hit);
    assert_eq!(Decision::parse(" Stand ").unwrap(), Decision::Stand);
    assert_eq!(Decision::parse("view").unwrap(), Decision::View);
    assert_eq!(
        Decision::parse("double").unwrap_err(),
        InvalidDecisionError::UnknownDecision
    );

    assert_eq!(AceValue::parse("1").unwrap(), AceValue::One);
    assert_eq!(AceValue::parse(" 11 ").unwrap(), AceValue::Eleven);
    assert_eq!(
        AceValue::parse("2").unwrap_err(),
        InvalidDecisionError::InvalidAceValue
    );
    assert_eq!(
        AceValue::parse("ace").unwrap_err(),
        InvalidDecisionError::InvalidAceValue
    );
}

#[test]
fn dealer_stops_at_seventeen() {
    let mut table = one_player_table();
    let mut source = scripted(&["stand"], &[]);

    // Exactly five cards: one extra dealer draw would empty-deck the round.
    let deck = deck_from_draws(&[
        card(Suit::Hearts, 2),    // Ada hidden
        card(Suit::Spades, 13),   // Ada visible
        card(Suit::Diamonds, 5),  // dealer hidden
        card(Suit::Clubs, 10),    // dealer visible
        card(Suit::Hearts, 7),    // dealer draw -> 17
    ]);

    let result = Round::with_deck(deck).play(&mut table, &mut source).unwrap();

    assert_eq!(result.dealer.score, 17);
    assert!(!result.dealer.busted);
    assert_eq!(result.players[0].score, 10);
    assert_eq!(result.players[0].outcome, Outcome::Lose);
    assert_eq!(source.ended, vec![("Ada".to_string(), TurnState::Stood)]);
}

#[test]
fn dealer_hidden_card_never_counts() {
    let mut table = one_player_table();
    let mut source = scripted(&["stand"], &[]);

    let deck = deck_from_draws(&[
        card(Suit::Hearts, 2),    // Ada hidden
        card(Suit::Spades, 13),   // Ada visible
        card(Suit::Diamonds, 13), // dealer hidden, excluded from its score
        card(Suit::Clubs, 10),    // dealer visible
        card(Suit::Hearts, 7),    // dealer draw -> visible 17
    ]);

    let result = Round::with_deck(deck).play(&mut table, &mut source).unwrap();

    assert_eq!(result.dealer.score, 17);
    assert!(!result.dealer.busted);
}

#[test]
fn player_bust_loses_even_when_dealer_busts() {
    let mut table = one_player_table();
    let mut source = scripted(&["hit", "hit"], &[]);

    let deck = deck_from_draws(&[
        card(Suit::Hearts, 2),   // Ada hidden
        card(Suit::Spades, 13),  // Ada visible
        card(Suit::Diamonds, 5), // dealer hidden
        card(Suit::Clubs, 10),   // dealer visible
        card(Suit::Hearts, 12),  // Ada hit -> 20
        card(Suit::Clubs, 3),    // Ada hit -> 23, bust
        card(Suit::Spades, 6),   // dealer draw -> 16
        card(Suit::Diamonds, 8), // dealer draw -> 24, bust
    ]);

    let result = Round::with_deck(deck).play(&mut table, &mut source).unwrap();

    assert!(result.players[0].busted);
    assert_eq!(result.players[0].score, 23);
    assert!(result.dealer.busted);
    assert_eq!(result.dealer.score, 24);
    // Player bust is checked first.
    assert_eq!(result.players[0].outcome, Outcome::Lose);
    assert_eq!(source.ended, vec![("Ada".to_string(), TurnState::Busted)]);
}

#[test]
fn higher_score_wins_and_equal_scores_tie() {
    let mut table = Table::new();
    table.add_player("Ada").unwrap();
    table.add_player("Grace").unwrap();
    let mut source = scripted(&["hit", "stand", "hit", "stand"], &[]);

    let deck = deck_from_draws(&[
        card(Suit::Hearts, 2),    // Ada hidden
        card(Suit::Spades, 13),   // Ada visible
        card(Suit::Hearts, 3),    // Grace hidden
        card(Suit::Spades, 9),    // Grace visible
        card(Suit::Diamonds, 4),  // dealer hidden
        card(Suit::Clubs, 10),    // dealer visible
        card(Suit::Diamonds, 10), // Ada hit -> 20
        card(Suit::Hearts, 10),   // Grace hit -> 19
        card(Suit::Clubs, 9),     // dealer draw -> 19
    ]);

    let result = Round::with_deck(deck).play(&mut table, &mut source).unwrap();

    assert_eq!(result.dealer.score, 19);
    assert_eq!(result.players[0].name, "Ada");
    assert_eq!(result.players[0].score, 20);
    assert_eq!(result.players[0].outcome, Outcome::Win);
    assert_eq!(result.players[1].name, "Grace");
    assert_eq!(result.players[1].score, 19);
    assert_eq!(result.players[1].outcome, Outcome::Tie);
}

#[test]
fn view_reveals_hidden_and_repeats_as_no_op() {
    let mut table = one_player_table();
    let mut source = scripted(&["view", "view", "stand"], &[]);

    let deck = deck_from_draws(&[
        card(Suit::Hearts, 13),  // Ada hidden
        card(Suit::Spades, 5),   // Ada visible
        card(Suit::Diamonds, 9), // dealer hidden
        card(Suit::Clubs, 10),   // dealer visible
        card(Suit::Hearts, 8),   // dealer draw -> 18
    ]);

    let result = Round::with_deck(deck).play(&mut table, &mut source).unwrap();

    // Revealed king counts once.
    assert_eq!(result.players[0].score, 15);
    assert!(!table.players()[0].hand().has_hidden());
    assert_eq!(source.invalid, 0);
}

#[test]
fn invalid_decision_reprompts_without_state_change() {
    let mut table = one_player_table();
    let mut source = scripted(&["flip", "hit", "stand"], &[]);

    let deck = deck_from_draws(&[
        card(Suit::Hearts, 2),   // Ada hidden
        card(Suit::Spades, 13),  // Ada visible
        card(Suit::Diamonds, 9), // dealer hidden
        card(Suit::Clubs, 10),   // dealer visible
        card(Suit::Diamonds, 5), // Ada hit -> 15
        card(Suit::Hearts, 8),   // dealer draw -> 18
    ]);

    let result = Round::with_deck(deck).play(&mut table, &mut source).unwrap();

    assert_eq!(source.invalid, 1);
    // The rejected token drew no card.
    assert_eq!(source.drawn, vec![card(Suit::Diamonds, 5)]);
    assert_eq!(result.players[0].score, 15);
}

#[test]
fn drawn_ace_hardened_to_one_is_honored() {
    let mut table = one_player_table();
    let mut source = scripted(&["hit", "hit", "stand"], &["7", "x", "1"]);

    let deck = deck_from_draws(&[
        card(Suit::Hearts, 2),   // Ada hidden
        card(Suit::Spades, 10),  // Ada visible
        card(Suit::Diamonds, 3), // dealer hidden
        card(Suit::Clubs, 10),   // dealer visible
        card(Suit::Diamonds, 9), // Ada hit -> 19
        card(Suit::Hearts, 1),   // Ada hit, ace chosen as 1 -> 20
        card(Suit::Clubs, 8),    // dealer draw -> 18
    ]);

    let result = Round::with_deck(deck).play(&mut table, &mut source).unwrap();

    // Two bad ace tokens were re-prompted without costing a turn.
    assert_eq!(source.invalid, 2);
    assert_eq!(result.players[0].score, 20);
    assert!(!result.players[0].busted);
    assert_eq!(result.players[0].outcome, Outcome::Win);
}

#[test]
fn drawn_ace_kept_at_eleven_stays_soft() {
    let mut table = one_player_table();
    let mut source = scripted(&["hit", "hit", "stand"], &["11"]);

    let deck = deck_from_draws(&[
        card(Suit::Hearts, 2),   // Ada hidden
        card(Suit::Spades, 5),   // Ada visible
        card(Suit::Diamonds, 4), // dealer hidden
        card(Suit::Clubs, 10),   // dealer visible
        card(Suit::Hearts, 1),   // Ada hit, kept at 11 -> 16
        card(Suit::Diamonds, 9), // Ada hit -> 25, auto-downgrade -> 15
        card(Suit::Spades, 7),   // dealer draw -> 17
    ]);

    let result = Round::with_deck(deck).play(&mut table, &mut source).unwrap();

    assert_eq!(result.players[0].score, 15);
    assert!(!result.players[0].busted);
    assert_eq!(result.players[0].outcome, Outcome::Lose);
}

#[test]
fn exhausted_deck_surfaces_round_error() {
    let mut table = one_player_table();
    let mut source = scripted(&["stand"], &[]);

    // Enough for the deal, nothing left for the dealer's forced draw.
    let deck = deck_from_draws(&[
        card(Suit::Hearts, 2),
        card(Suit::Spades, 13),
        card(Suit::Diamonds, 5),
        card(Suit::Clubs, 10),
    ]);

    let err = Round::with_deck(deck)
        .play(&mut table, &mut source)
        .unwrap_err();
    assert_eq!(err, RoundError::EmptyDeck(EmptyDeckError));
}

#[test]
fn empty_table_cannot_play() {
    let mut table = Table::new();
    let mut source = scripted(&[], &[]);

    let err = Round::new(1).play(&mut table, &mut source).unwrap_err();
    assert_eq!(err, RoundError::NoPlayers);
}

#[test]
fn table_enforces_cap_and_unique_names() {
    let mut table = Table::new();
    for name in ["Ada", "Grace", "Edsger", "Barbara"] {
        table.add_player(name).unwrap();
    }

    assert_eq!(table.add_player("Alan").unwrap_err(), TableError::TableFull);
    assert_eq!(table.player_count(), 4);

    assert!(table.remove_player("Grace"));
    assert!(!table.remove_player("Grace"));
    assert_eq!(
        table.add_player("Ada").unwrap_err(),
        TableError::DuplicateName
    );
    assert_eq!(table.player_count(), 3);
}

#[test]
fn hands_reset_between_rounds() {
    let mut table = one_player_table();

    let first = deck_from_draws(&[
        card(Suit::Hearts, 2),
        card(Suit::Spades, 13),
        card(Suit::Diamonds, 9),
        card(Suit::Clubs, 10),
        card(Suit::Hearts, 8),
    ]);
    let mut source = scripted(&["stand"], &[]);
    let result = Round::with_deck(first).play(&mut table, &mut source).unwrap();
    assert_eq!(result.players[0].score, 10);

    let second = deck_from_draws(&[
        card(Suit::Hearts, 3),
        card(Suit::Spades, 9),
        card(Suit::Diamonds, 2),
        card(Suit::Clubs, 10),
        card(Suit::Spades, 7),
    ]);
    let mut source = scripted(&["stand"], &[]);
    let result = Round::with_deck(second)
        .play(&mut table, &mut source)
        .unwrap();

    // No cards carried over from the first round.
    assert_eq!(result.players[0].score, 9);
    assert_eq!(table.players()[0].hand().len(), 2);
    assert!(table.players()[0].hand().has_hidden());
}

#[test]
fn seeded_rounds_are_deterministic() {
    let play = || {
        let mut table = one_player_table();
        let mut source = scripted(&["stand"], &[]);
        Round::new(7).play(&mut table, &mut source).unwrap()
    };

    assert_eq!(play(), play());
}

#[test]
fn options_raise_dealer_stand_threshold() {
    let mut table = Table::with_options(TableOptions::default().with_dealer_stand(18));
    table.add_player("Ada").unwrap();
    let mut source = scripted(&["stand"], &[]);

    let deck = deck_from_draws(&[
        card(Suit::Hearts, 2),   // Ada hidden
        card(Suit::Spades, 13),  // Ada visible
        card(Suit::Diamonds, 5), // dealer hidden
        card(Suit::Clubs, 10),   // dealer visible
        card(Suit::Hearts, 7),   // dealer draw -> 17, below threshold
        card(Suit::Spades, 2),   // dealer draw -> 19
    ]);

    let result = Round::with_deck(deck).play(&mut table, &mut source).unwrap();
    assert_eq!(result.dealer.score, 19);
}

#[test]
fn options_lower_player_cap() {
    let mut table = Table::with_options(TableOptions::default().with_max_players(1));
    table.add_player("Ada").unwrap();
    assert_eq!(
        table.add_player("Grace").unwrap_err(),
        TableError::TableFull
    );
}

#[test]
fn card_display_uses_rank_labels() {
    assert_eq!(card(Suit::Hearts, 1).to_string(), "A of Hearts");
    assert_eq!(card(Suit::Spades, 10).to_string(), "10 of Spades");
    assert_eq!(card(Suit::Diamonds, 12).to_string(), "Q of Diamonds");
    assert!(card(Suit::Clubs, 13).is_face());
    assert!(card(Suit::Hearts, 1).is_ace());
}
