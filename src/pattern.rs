//! Card combination classification and comparison.
//!
//! A set of cards is either one of the recognized [`ComboKind`]s or
//! unplayable. Combinations only compete with the same kind (and, for
//! sequences, the same length); bombs cut across every other kind.

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::error::PlayError;
use crate::options::GameOptions;

/// Kind of a recognized combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComboKind {
    /// One card.
    Single,
    /// Two cards of the same rank.
    Pair,
    /// Four cards of the same rank.
    Bomb,
    /// Consecutive distinct ranks, no jokers.
    Sequence,
    /// Both jokers. Only recognized when [`GameOptions::rocket`] is set.
    Rocket,
}

impl ComboKind {
    /// Returns a display name for the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Pair => "Pair",
            Self::Bomb => "Bomb",
            Self::Sequence => "Sequence",
            Self::Rocket => "Rocket",
        }
    }
}

/// A classified set of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combination {
    /// The kind of combination.
    pub kind: ComboKind,
    /// The rank the combination is compared by: the shared rank for singles,
    /// pairs and bombs, the lowest rank for sequences.
    pub value: Rank,
    /// Number of cards in the combination.
    pub length: usize,
}

impl Combination {
    /// Returns whether this combination may be played on top of `previous`.
    ///
    /// # Example
    ///
    /// ```
    /// use doudizhu::{ComboKind, Combination, Rank};
    ///
    /// let bomb = Combination { kind: ComboKind::Bomb, value: Rank::Seven, length: 4 };
    /// let pair = Combination { kind: ComboKind::Pair, value: Rank::King, length: 2 };
    /// assert!(bomb.beats(&pair));
    /// assert!(!pair.beats(&bomb));
    /// ```
    #[must_use]
    pub fn beats(&self, previous: &Self) -> bool {
        match (self.kind, previous.kind) {
            (_, ComboKind::Rocket) => false,
            (ComboKind::Rocket, _) => true,
            (ComboKind::Bomb, ComboKind::Bomb) => self.value > previous.value,
            (ComboKind::Bomb, _) => true,
            (ComboKind::Sequence, ComboKind::Sequence) => {
                self.length == previous.length && self.value > previous.value
            }
            (kind, previous_kind) => kind == previous_kind && self.value > previous.value,
        }
    }
}

/// Classifies cards with the default options.
///
/// The order of `cards` does not matter.
///
/// # Example
///
/// ```
/// use doudizhu::{classify, Card, ComboKind, Rank, Suit};
///
/// let pair = [Card::new(Suit::Spades, Rank::Seven), Card::new(Suit::Hearts, Rank::Seven)];
/// let combo = classify(&pair).unwrap();
/// assert_eq!(combo.kind, ComboKind::Pair);
/// assert_eq!(combo.value, Rank::Seven);
/// ```
#[must_use]
pub fn classify(cards: &[Card]) -> Option<Combination> {
    classify_with(cards, &GameOptions::default())
}

/// Classifies cards into a combination, or `None` if they form no
/// recognized shape.
#[must_use]
pub fn classify_with(cards: &[Card], options: &GameOptions) -> Option<Combination> {
    let mut ranks: Vec<Rank> = cards.iter().map(|card| card.rank).collect();
    ranks.sort_unstable();

    let (&lowest, &highest) = (ranks.first()?, ranks.last()?);
    let length = ranks.len();
    let combo = |kind, value| Combination {
        kind,
        value,
        length,
    };

    match length {
        1 => return Some(combo(ComboKind::Single, lowest)),
        2 if lowest == highest => return Some(combo(ComboKind::Pair, lowest)),
        2 if options.rocket && lowest == Rank::SmallJoker && highest == Rank::BigJoker => {
            return Some(combo(ComboKind::Rocket, highest));
        }
        4 if lowest == highest => return Some(combo(ComboKind::Bomb, lowest)),
        _ => {}
    }

    if length >= options.min_sequence_len.max(2) && is_run(&ranks, options) {
        return Some(combo(ComboKind::Sequence, lowest));
    }

    None
}

/// Checks that sorted ranks step up by exactly one with no jokers.
fn is_run(sorted: &[Rank], options: &GameOptions) -> bool {
    let allowed = |rank: &Rank| !rank.is_joker() && (options.two_in_sequence || *rank != Rank::Two);

    sorted.iter().all(allowed)
        && sorted
            .windows(2)
            .all(|pair| pair[1].strength() == pair[0].strength() + 1)
}

/// Classifies `candidate` and checks it against the combination on the table.
///
/// `previous` is `None` when the trick is empty, in which case any recognized
/// combination is accepted.
///
/// # Errors
///
/// Returns [`PlayError::Unrecognized`] if the cards form no combination and
/// [`PlayError::TooWeak`] if the combination does not beat `previous`.
pub fn check_play(
    candidate: &[Card],
    previous: Option<&Combination>,
    options: &GameOptions,
) -> Result<Combination, PlayError> {
    let combo = classify_with(candidate, options).ok_or(PlayError::Unrecognized)?;

    match previous {
        Some(previous) if !combo.beats(previous) => Err(PlayError::TooWeak),
        _ => Ok(combo),
    }
}

/// Returns whether `candidate` may be played on top of `previous` under the
/// default options.
///
/// An empty `previous` means the trick is open. A `previous` that is not a
/// recognized combination cannot be beaten.
///
/// # Example
///
/// ```
/// use doudizhu::{is_legal_play, Card, Rank, Suit};
///
/// let low = [Card::new(Suit::Spades, Rank::Seven), Card::new(Suit::Hearts, Rank::Seven)];
/// let high = [Card::new(Suit::Clubs, Rank::King), Card::new(Suit::Diamonds, Rank::King)];
/// assert!(is_legal_play(&high, &low));
/// assert!(!is_legal_play(&low, &high));
/// assert!(is_legal_play(&low, &[]));
/// ```
#[must_use]
pub fn is_legal_play(candidate: &[Card], previous: &[Card]) -> bool {
    is_legal_play_with(candidate, previous, &GameOptions::default())
}

/// Like [`is_legal_play`], with explicit options.
#[must_use]
pub fn is_legal_play_with(candidate: &[Card], previous: &[Card], options: &GameOptions) -> bool {
    if previous.is_empty() {
        return classify_with(candidate, options).is_some();
    }

    classify_with(previous, options)
        .is_some_and(|previous| check_play(candidate, Some(&previous), options).is_ok())
}
