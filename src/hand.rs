//! Player hands.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// A player's hand.
///
/// Cards enter a hand only when it is dealt and leave it when they are
/// played.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, strongest last.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards, sorted by strength.
    #[must_use]
    pub fn from_cards(mut cards: Vec<Card>) -> Self {
        cards.sort_by_key(|card| (card.rank, card.suit));
        Self { cards }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the hand holds the card.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the first card of `cards` missing from the hand, if any.
    #[must_use]
    pub fn find_missing(&self, cards: &[Card]) -> Option<Card> {
        cards.iter().copied().find(|card| !self.contains(card))
    }

    /// Removes every card in `cards` from the hand.
    ///
    /// Cards the hand does not hold are ignored. Callers check with
    /// [`Hand::find_missing`] first.
    pub fn remove_cards(&mut self, cards: &[Card]) {
        self.cards.retain(|card| !cards.contains(card));
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
