//! CLI blackjack example: the add-player menu and a stdin decision source.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{
    Card, DecisionSource, Hand, InvalidDecisionError, Outcome, PlayerView, Round, RoundResult,
    Table, TurnState,
};

fn main() {
    println!("\nWelcome to Blackjack!");

    let mut table = Table::new();

    loop {
        print_players(&table);
        println!("Options:");
        println!("1. Add New Player");
        println!("2. Remove Player");
        println!("3. Start Game");
        println!("4. Exit");

        match prompt_line("Enter your choice: ").as_str() {
            "1" => {
                let name = prompt_line("Enter player name: ");
                if name.is_empty() {
                    println!("Name cannot be empty.");
                } else {
                    match table.add_player(name.clone()) {
                        Ok(()) => println!("{name} has been added."),
                        Err(err) => println!("Cannot add {name}: {err}."),
                    }
                }
            }
            "2" => {
                let name = prompt_line("Enter player name: ");
                if table.remove_player(&name) {
                    println!("{name} has been removed.");
                } else {
                    println!("No player named {name}.");
                }
            }
            "3" => {
                if table.is_empty() {
                    println!("At least one player needs to be added to start the game!");
                    continue;
                }

                let seed = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap_or_default()
                    .as_secs();

                let round = Round::new(seed);
                println!("\nDeck shuffled ({} cards).", round.cards_remaining());

                match round.play(&mut table, &mut StdinSource) {
                    Ok(result) => print_results(&result),
                    Err(err) => println!("Round error: {err}."),
                }
            }
            "4" => {
                println!("Thanks for playing!");
                return;
            }
            _ => println!("Invalid choice!"),
        }
    }
}

/// Reads turn decisions from stdin, rendering the acting player's hand
/// before each prompt.
struct StdinSource;

impl DecisionSource for StdinSource {
    fn turn_decision(&mut self, view: &PlayerView<'_>) -> String {
        println!("\nIt's {}'s turn:", view.name);
        println!("Current hand: {}", format_hand(view.hand));
        println!("Current score: {}", view.score());
        prompt_line("Do you want to hit, stand, or view hidden card? (Enter 'hit', 'stand' or 'view'): ")
    }

    fn ace_value(&mut self, _view: &PlayerView<'_>, drawn: Card) -> String {
        println!("You drew an Ace ({drawn})! Would you like its value to be 1 or 11?");
        prompt_line("> ")
    }

    fn invalid_input(&mut self, error: InvalidDecisionError) {
        println!("Invalid choice: {error}.");
    }

    fn card_drawn(&mut self, card: Card) {
        println!("You drew: {card}");
    }

    fn turn_ended(&mut self, view: &PlayerView<'_>, state: TurnState) {
        match state {
            TurnState::Busted => {
                println!("{} busted with a score of {}!", view.name, view.score());
            }
            _ => {
                println!("{} stands with a score of {}.", view.name, view.score());
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn print_players(table: &Table) {
    if table.is_empty() {
        println!("\nNo players added yet.\n");
    } else {
        println!("\nList of Players:");
        for player in table.players() {
            println!(" -{}", player.name());
        }
        println!();
    }
}

fn format_hand(hand: &Hand) -> String {
    let mut parts: Vec<String> = hand
        .visible_cards()
        .iter()
        .map(ToString::to_string)
        .collect();
    if hand.has_hidden() {
        parts.push("[hidden]".to_string());
    }
    if parts.is_empty() {
        return "(empty)".to_string();
    }
    parts.join(", ")
}

fn print_results(result: &RoundResult) {
    println!("\nDealer's score: {}", result.dealer.score);
    if result.dealer.busted {
        println!("Dealer busted!");
    }
    println!();

    for player in &result.players {
        match player.outcome {
            Outcome::Lose if player.busted => {
                println!(
                    "Dealer wins against {}! Player busted with a score of {}",
                    player.name, player.score
                );
            }
            Outcome::Lose => {
                println!(
                    "Dealer wins against {} with a score of {} to {}",
                    player.name, result.dealer.score, player.score
                );
            }
            Outcome::Win if result.dealer.busted => {
                println!(
                    "{} wins! Dealer busted with a score of {}",
                    player.name, result.dealer.score
                );
            }
            Outcome::Win => {
                println!(
                    "{} wins with a score of {} to {}",
                    player.name, player.score, result.dealer.score
                );
            }
            Outcome::Tie => {
                println!(
                    "It's a tie between {} and the dealer! Both have a score of {}",
                    player.name, player.score
                );
            }
        }
    }
    println!();
}
