//! Card types and their text form.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Clubs, Self::Diamonds];

    /// Returns the suit symbol used in the card text form.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
        }
    }

    const fn from_char(c: char) -> Option<Self> {
        match c {
            '♠' | 'S' | 's' => Some(Self::Spades),
            '♥' | 'H' | 'h' => Some(Self::Hearts),
            '♣' | 'C' | 'c' => Some(Self::Clubs),
            '♦' | 'D' | 'd' => Some(Self::Diamonds),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, declared in playing strength from weakest to strongest.
///
/// The discriminant is the rank's strength: `3` for Three up to `14` for Ace,
/// then `15` for Two and `16`/`17` for the small and big joker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// 3, the weakest rank.
    Three = 3,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
    /// 2, ranked above the Ace.
    Two,
    /// Small (black) joker.
    SmallJoker,
    /// Big (red) joker, the strongest rank.
    BigJoker,
}

impl Rank {
    /// The 13 ordinary ranks in strength order.
    pub const ORDINARY: [Self; 13] = [
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
        Self::Two,
    ];

    /// Returns the playing strength (3..=17).
    #[must_use]
    pub const fn strength(self) -> u8 {
        self as u8
    }

    /// Returns the rank with the given strength, if any.
    #[must_use]
    pub const fn from_strength(strength: u8) -> Option<Self> {
        match strength {
            3..=15 => Some(Self::ORDINARY[(strength - 3) as usize]),
            16 => Some(Self::SmallJoker),
            17 => Some(Self::BigJoker),
            _ => None,
        }
    }

    /// Returns whether this is one of the two joker ranks.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Self::SmallJoker | Self::BigJoker)
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
            Self::Two => "2",
            Self::SmallJoker => "jk",
            Self::BigJoker => "JK",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        let rank = match label {
            "3" => Self::Three,
            "4" => Self::Four,
            "5" => Self::Five,
            "6" => Self::Six,
            "7" => Self::Seven,
            "8" => Self::Eight,
            "9" => Self::Nine,
            "10" | "T" => Self::Ten,
            "J" => Self::Jack,
            "Q" => Self::Queen,
            "K" => Self::King,
            "A" => Self::Ace,
            "2" => Self::Two,
            _ => return None,
        };
        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card.
///
/// Jokers carry no suit. Equality is structural, so two cards compare equal
/// exactly when suit and rank match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card, `None` for jokers.
    pub suit: Option<Suit>,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// The small joker.
    pub const SMALL_JOKER: Self = Self {
        suit: None,
        rank: Rank::SmallJoker,
    };

    /// The big joker.
    pub const BIG_JOKER: Self = Self {
        suit: None,
        rank: Rank::BigJoker,
    };

    /// Creates a new suited card.
    ///
    /// Jokers have no suit, so a joker rank drops `suit` and yields
    /// [`Card::SMALL_JOKER`] or [`Card::BIG_JOKER`].
    ///
    /// ```
    /// use doudizhu::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Spades, Rank::SmallJoker), Card::SMALL_JOKER);
    /// ```
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        let suit = if rank.is_joker() { None } else { Some(suit) };
        Self { suit, rank }
    }

    /// Returns whether the card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.rank.is_joker()
    }

    /// Returns whether the card exists in a standard deck: jokers carry no
    /// suit and every other rank carries one.
    ///
    /// Cards built from the public fields can break this.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.is_joker() == self.suit.is_none()
    }

    /// Returns the card's slot in the standard deck order (`0..DECK_SIZE`).
    ///
    /// Suited cards are numbered suit by suit, jokers take the last two
    /// slots. The slot is only unique among cards that are
    /// [well formed](Card::is_well_formed): a suited joker shares its
    /// joker's slot, and a suitless ordinary card lands on the big joker's.
    #[must_use]
    pub const fn index(&self) -> usize {
        match (self.rank, self.suit) {
            (Rank::SmallJoker, _) => DECK_SIZE - 2,
            (Rank::BigJoker, _) | (_, None) => DECK_SIZE - 1,
            (rank, Some(suit)) => suit as usize * 13 + (rank.strength() - 3) as usize,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit {
            Some(suit) if !self.is_joker() => write!(f, "{suit}{}", self.rank),
            _ => write!(f, "{}", self.rank),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses `♠10`, `S10`, `hT`, `♦A`, or a joker written as `jk` / `JK`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "" => return Err(ParseCardError::Empty),
            "jk" => return Ok(Self::SMALL_JOKER),
            "JK" => return Ok(Self::BIG_JOKER),
            _ => {}
        }

        let mut chars = s.chars();
        let suit = chars
            .next()
            .and_then(Suit::from_char)
            .ok_or(ParseCardError::UnknownSuit)?;
        let rank = Rank::from_label(chars.as_str()).ok_or(ParseCardError::UnknownRank)?;

        Ok(Self::new(suit, rank))
    }
}

/// Number of cards in a deck (13 ranks × 4 suits + 2 jokers).
pub const DECK_SIZE: usize = 54;
