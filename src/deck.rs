//! Deck construction, shuffling, and dealing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// Number of players at the table.
pub const PLAYER_COUNT: usize = 3;

/// Number of cards dealt to each player.
pub const HAND_SIZE: usize = 17;

/// Number of cards held aside after dealing.
pub const BONUS_SIZE: usize = DECK_SIZE - PLAYER_COUNT * HAND_SIZE;

/// The result of dealing a full deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// One hand per player, in seat order.
    pub hands: [Vec<Card>; PLAYER_COUNT],
    /// The cards not dealt to any player.
    pub bonus: [Card; BONUS_SIZE],
}

/// Builds the standard 54-card deck in a fixed order.
///
/// Suits come in [`Suit::ALL`] order with ranks from 3 up to 2, followed by
/// the small and the big joker.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ORDINARY {
            cards.push(Card::new(suit, rank));
        }
    }

    cards.push(Card::SMALL_JOKER);
    cards.push(Card::BIG_JOKER);
    cards
}

/// Shuffles the cards in place with a uniform Fisher–Yates permutation.
pub fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}

/// Deals a full deck to the table.
///
/// The card at position `i` (for `i < 51`) goes to player `i % 3`; the last
/// three cards form the bonus set.
///
/// # Errors
///
/// Returns an error if the deck does not hold exactly [`DECK_SIZE`] cards,
/// holds a card that is not [well formed](Card::is_well_formed), or contains
/// the same card twice.
pub fn deal(cards: &[Card]) -> Result<Deal, DealError> {
    if cards.len() != DECK_SIZE {
        return Err(DealError::WrongDeckSize {
            expected: DECK_SIZE,
            actual: cards.len(),
        });
    }

    let mut seen = [false; DECK_SIZE];
    for card in cards {
        if !card.is_well_formed() {
            return Err(DealError::InvalidCard(*card));
        }
        let slot = &mut seen[card.index()];
        if *slot {
            return Err(DealError::DuplicateCard(*card));
        }
        *slot = true;
    }

    let mut hands: [Vec<Card>; PLAYER_COUNT] =
        core::array::from_fn(|_| Vec::with_capacity(HAND_SIZE));
    let (dealt, rest) = cards.split_at(PLAYER_COUNT * HAND_SIZE);
    for (i, &card) in dealt.iter().enumerate() {
        hands[i % PLAYER_COUNT].push(card);
    }

    let bonus = [rest[0], rest[1], rest[2]];

    Ok(Deal { hands, bonus })
}
