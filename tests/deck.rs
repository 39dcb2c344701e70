//! Deck construction, shuffle, and deal tests.

use std::collections::HashSet;

use doudizhu::{
    BONUS_SIZE, Card, DECK_SIZE, DealError, HAND_SIZE, PLAYER_COUNT, ParseCardError, Rank, Suit,
    deal, shuffle, standard_deck,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn sorted_by_index(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_by_key(Card::index);
    cards
}

#[test]
fn standard_deck_is_complete() {
    let deck = standard_deck();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    assert_eq!(deck.iter().filter(|card| card.is_joker()).count(), 2);
    assert!(deck.contains(&Card::SMALL_JOKER));
    assert!(deck.contains(&Card::BIG_JOKER));

    for suit in Suit::ALL {
        assert_eq!(
            deck.iter().filter(|card| card.suit == Some(suit)).count(),
            13
        );
    }
}

#[test]
fn card_index_matches_standard_order() {
    for (i, card) in standard_deck().iter().enumerate() {
        assert_eq!(card.index(), i);
    }
}

#[test]
fn shuffle_is_a_permutation() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = standard_deck();
    shuffle(&mut deck, &mut rng);

    assert_ne!(deck, standard_deck());
    assert_eq!(sorted_by_index(deck), standard_deck());
}

#[test]
fn shuffle_is_reproducible_per_seed() {
    let shuffled = |seed| {
        let mut deck = standard_deck();
        shuffle(&mut deck, &mut ChaCha8Rng::seed_from_u64(seed));
        deck
    };

    assert_eq!(shuffled(11), shuffled(11));
    assert_ne!(shuffled(11), shuffled(12));
}

#[test]
fn shuffle_spreads_cards_evenly() {
    const ROUNDS: usize = 200 * DECK_SIZE;

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut positions = [0_usize; DECK_SIZE];

    for _ in 0..ROUNDS {
        let mut deck = standard_deck();
        shuffle(&mut deck, &mut rng);
        let position = deck.iter().position(|card| *card == Card::BIG_JOKER).unwrap();
        positions[position] += 1;
    }

    // Each position expects 200 hits; the bounds sit about eight standard
    // deviations out.
    for count in positions {
        assert!((90..=310).contains(&count), "skewed position count {count}");
    }
}

#[test]
fn deal_splits_round_robin() {
    let deck = standard_deck();
    let dealt = deal(&deck).unwrap();

    for hand in &dealt.hands {
        assert_eq!(hand.len(), HAND_SIZE);
    }
    assert_eq!(dealt.bonus.len(), BONUS_SIZE);

    for (i, card) in deck.iter().take(PLAYER_COUNT * HAND_SIZE).enumerate() {
        assert_eq!(dealt.hands[i % PLAYER_COUNT][i / PLAYER_COUNT], *card);
    }
    assert_eq!(dealt.bonus, [
        Card::new(Suit::Diamonds, Rank::Two),
        Card::SMALL_JOKER,
        Card::BIG_JOKER,
    ]);
}

#[test]
fn deal_reconstructs_the_deck() {
    let mut deck = standard_deck();
    shuffle(&mut deck, &mut ChaCha8Rng::seed_from_u64(99));
    let dealt = deal(&deck).unwrap();

    let mut union: Vec<Card> = dealt.hands.iter().flatten().copied().collect();
    union.extend(dealt.bonus);
    assert_eq!(sorted_by_index(union), sorted_by_index(deck));
}

#[test]
fn deal_rejects_wrong_size() {
    let mut deck = standard_deck();
    deck.pop();

    assert_eq!(
        deal(&deck),
        Err(DealError::WrongDeckSize {
            expected: DECK_SIZE,
            actual: DECK_SIZE - 1,
        })
    );
    assert!(matches!(
        deal(&[]),
        Err(DealError::WrongDeckSize { actual: 0, .. })
    ));
}

#[test]
fn deal_rejects_duplicates() {
    let mut deck = standard_deck();
    deck[10] = deck[0];

    assert_eq!(deal(&deck), Err(DealError::DuplicateCard(deck[0])));
}

#[test]
fn deal_rejects_malformed_cards() {
    let suited_joker = Card {
        suit: Some(Suit::Spades),
        rank: Rank::SmallJoker,
    };
    let suitless_three = Card {
        suit: None,
        rank: Rank::Three,
    };
    assert!(!suited_joker.is_well_formed());
    assert!(!suitless_three.is_well_formed());
    assert!(standard_deck().iter().all(Card::is_well_formed));

    let mut deck = standard_deck();
    deck[52] = suited_joker;
    deck[53] = suitless_three;
    assert_eq!(deal(&deck), Err(DealError::InvalidCard(suited_joker)));

    let mut deck = standard_deck();
    deck[53] = suitless_three;
    assert_eq!(deal(&deck), Err(DealError::InvalidCard(suitless_three)));
}

#[test]
fn new_drops_the_suit_of_jokers() {
    assert_eq!(Card::new(Suit::Spades, Rank::SmallJoker), Card::SMALL_JOKER);
    assert_eq!(Card::new(Suit::Hearts, Rank::BigJoker), Card::BIG_JOKER);
    assert_eq!(
        Card::new(Suit::Clubs, Rank::Five).suit,
        Some(Suit::Clubs)
    );
}

#[test]
fn card_text_round_trips_for_the_whole_deck() {
    for card in standard_deck() {
        let text = card.to_string();
        assert_eq!(text.parse::<Card>(), Ok(card), "{text}");
    }
}

#[test]
fn card_text_accepts_ascii_suits() {
    assert_eq!("S10".parse::<Card>(), Ok(Card::new(Suit::Spades, Rank::Ten)));
    assert_eq!("hT".parse::<Card>(), Ok(Card::new(Suit::Hearts, Rank::Ten)));
    assert_eq!("DA".parse::<Card>(), Ok(Card::new(Suit::Diamonds, Rank::Ace)));
    assert_eq!(
        Card::new(Suit::Clubs, Rank::Queen).to_string(),
        "♣Q".to_string()
    );
    assert_eq!(Card::BIG_JOKER.to_string(), "JK");
}

#[test]
fn card_text_errors() {
    assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
    assert_eq!("X3".parse::<Card>(), Err(ParseCardError::UnknownSuit));
    assert_eq!("♠1".parse::<Card>(), Err(ParseCardError::UnknownRank));
    assert_eq!("♠".parse::<Card>(), Err(ParseCardError::UnknownRank));
}

#[test]
fn rank_strength_order() {
    assert!(Rank::Two > Rank::Ace);
    assert!(Rank::SmallJoker > Rank::Two);
    assert!(Rank::BigJoker > Rank::SmallJoker);
    assert_eq!(Rank::Three.strength(), 3);
    assert_eq!(Rank::Ace.strength(), 14);
    assert_eq!(Rank::BigJoker.strength(), 17);
    assert_eq!(Rank::from_strength(15), Some(Rank::Two));
    assert_eq!(Rank::from_strength(2), None);
}
