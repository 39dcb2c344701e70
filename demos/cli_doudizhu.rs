//! Hot-seat CLI Dou Dizhu example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use doudizhu::{Card, Game, GameOptions, GameState, ObservedGame, StateObserver, Suit};
use tracing_subscriber::EnvFilter;

/// Prints the table after every accepted move.
struct TableView;

impl StateObserver for TableView {
    fn on_state_changed(&mut self, game: &Game) {
        print_table(game);
    }

    fn on_game_over(&mut self, winner: usize) {
        println!("{}", colorize(&format!("Player {} wins!", winner + 1), "33"));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Dou Dizhu CLI example (type 'q' to quit)");
    println!("Play cards with their names, e.g. `♠3 ♥3`, `S10 H10` or `jk`; `pass` to pass.");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut table = ObservedGame::new(Game::new(GameOptions::default(), seed), TableView);

    if let Err(err) = table.start() {
        println!("Deal error: {err}");
        return;
    }

    while table.game().state() == GameState::InProgress {
        let player = table.game().current_player();
        let input = prompt_line(&format!("Player {} > ", player + 1));

        match input.as_str() {
            "q" | "quit" => return,
            "pass" | "x" => {
                if let Err(err) = table.pass() {
                    println!("Pass error: {err}");
                }
            }
            "" => {}
            text => match parse_cards(text) {
                Ok(cards) => {
                    if let Err(err) = table.play(&cards) {
                        println!("Play error: {err}");
                    }
                }
                Err(token) => println!("Unknown card: {token}"),
            },
        }
    }
}

fn parse_cards(text: &str) -> Result<Vec<Card>, String> {
    text.split_whitespace()
        .map(|token| token.parse().map_err(|_| token.to_string()))
        .collect()
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

fn print_table(game: &Game) {
    println!();
    match game.last_played() {
        Some(play) => println!(
            "Table: {} ({} by player {})",
            format_cards(&play.cards),
            play.combination.kind.name(),
            play.player + 1
        ),
        None => println!("Table: (open)"),
    }

    for (player, hand) in game.hands.iter().enumerate() {
        let marker = if player == game.current_player() && game.winner().is_none() {
            "*"
        } else {
            " "
        };
        println!(
            "{} Player {}: {} ({} cards)",
            marker,
            player + 1,
            format_cards(hand.cards()),
            hand.len()
        );
    }
    println!("  Bonus: {}", format_cards(game.bonus_cards()));
    println!();
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Some(Suit::Hearts | Suit::Diamonds) => "31",
        Some(Suit::Spades | Suit::Clubs) => "34",
        None => "35",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
