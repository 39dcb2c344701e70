//! Result types for accepted turns.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::pattern::Combination;

/// A play that is on the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play {
    /// The player who made the play.
    pub player: usize,
    /// The cards played.
    pub cards: Vec<Card>,
    /// The classification of the cards.
    pub combination: Combination,
}

/// Result of an accepted play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The play that was accepted.
    pub play: Play,
    /// Cards left in the player's hand.
    pub cards_left: usize,
    /// The player whose turn it is now.
    pub next_player: usize,
    /// The winner, if this play emptied the player's hand.
    pub winner: Option<usize>,
}

/// Result of an accepted pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassOutcome {
    /// The player who passed.
    pub player: usize,
    /// The player whose turn it is now.
    pub next_player: usize,
    /// Whether the pass ended the trick, clearing the table.
    pub trick_over: bool,
}
