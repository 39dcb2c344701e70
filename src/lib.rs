//! A three-player Dou Dizhu card game engine with optional `no_std` support.
//!
//! The crate deals a 54-card deck to three players, classifies the cards a
//! player puts down into a [`Combination`], and referees whether the play
//! beats the one on the table. [`Game`] drives the turn order and declares
//! the winner once a hand is empty.
//!
//! # Example
//!
//! ```
//! use doudizhu::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.start().unwrap();
//!
//! let lowest = game.hands[0].cards()[0];
//! let outcome = game.play(&[lowest]).unwrap();
//! assert_eq!(outcome.next_player, 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pattern;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{BONUS_SIZE, Deal, HAND_SIZE, PLAYER_COUNT, deal, shuffle, standard_deck};
pub use error::{DealError, ParseCardError, PlayError};
pub use game::{Game, GameState, ObservedGame, StateObserver};
pub use hand::Hand;
pub use options::GameOptions;
pub use pattern::{
    ComboKind, Combination, check_play, classify, classify_with, is_legal_play,
    is_legal_play_with,
};
pub use result::{PassOutcome, Play, PlayOutcome};
