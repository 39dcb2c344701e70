//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while dealing.
///
/// These indicate a broken deck rather than a player mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The deck does not hold exactly one full deck of cards.
    #[error("deck must hold {expected} cards, found {actual}")]
    WrongDeckSize {
        /// Required number of cards.
        expected: usize,
        /// Number of cards supplied.
        actual: usize,
    },
    /// The same card appears twice in the deck.
    #[error("card {0} appears more than once in the deck")]
    DuplicateCard(Card),
    /// The card does not belong to a standard deck, such as a suited joker.
    #[error("card {0:?} is not part of a standard deck")]
    InvalidCard(Card),
}

/// Errors that can occur when playing, passing, or selecting cards.
///
/// A rejected play never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Cards have not been dealt yet.
    #[error("the game has not started")]
    NotStarted,
    /// A winner has already been declared.
    #[error("the game is over")]
    GameOver,
    /// No cards were offered.
    #[error("no cards selected")]
    Empty,
    /// The same card was offered twice.
    #[error("card {0} was offered more than once")]
    DuplicateCard(Card),
    /// The current player does not hold this card.
    #[error("card {0} is not in the current player's hand")]
    CardNotInHand(Card),
    /// The cards do not form a recognized combination.
    #[error("cards do not form a recognized combination")]
    Unrecognized,
    /// The combination does not beat the last play.
    #[error("combination does not beat the last play")]
    TooWeak,
    /// The player leading a trick must play.
    #[error("the leading player cannot pass")]
    CannotPassLead,
}

/// Errors that can occur when parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input was empty.
    #[error("empty card text")]
    Empty,
    /// Suit symbol was not recognized.
    #[error("unknown suit")]
    UnknownSuit,
    /// Rank label was not recognized.
    #[error("unknown rank")]
    UnknownRank,
}
