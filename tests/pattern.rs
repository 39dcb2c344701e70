//! Combination classification and comparison tests.

use doudizhu::{
    Card, ComboKind, Combination, GameOptions, PlayError, Rank, check_play, classify,
    classify_with, is_legal_play, is_legal_play_with,
};
use rstest::rstest;

fn cards(text: &str) -> Vec<Card> {
    text.split_whitespace()
        .map(|card| card.parse().unwrap())
        .collect()
}

#[rstest]
#[case("♠7", ComboKind::Single, Rank::Seven, 1)]
#[case("JK", ComboKind::Single, Rank::BigJoker, 1)]
#[case("♠7 ♥7", ComboKind::Pair, Rank::Seven, 2)]
#[case("♠2 ♥2 ♣2 ♦2", ComboKind::Bomb, Rank::Two, 4)]
#[case("♠3 ♠4 ♠5 ♠6 ♠7", ComboKind::Sequence, Rank::Three, 5)]
#[case("♦9 ♣K ♠10 ♥Q ♠J ♦A", ComboKind::Sequence, Rank::Nine, 6)]
#[case("♠10 ♥J ♣Q ♦K ♠A ♥2", ComboKind::Sequence, Rank::Ten, 6)]
#[case(
    "♠3 ♠4 ♠5 ♠6 ♠7 ♠8 ♠9 ♠10 ♠J ♠Q ♠K ♠A ♠2",
    ComboKind::Sequence,
    Rank::Three,
    13
)]
fn recognized_combinations(
    #[case] text: &str,
    #[case] kind: ComboKind,
    #[case] value: Rank,
    #[case] length: usize,
) {
    let combo = classify(&cards(text)).unwrap();
    assert_eq!(combo.kind, kind);
    assert_eq!(combo.value, value);
    assert_eq!(combo.length, length);
}

#[rstest]
#[case("")]
#[case("♠7 ♥8")]
#[case("♠7 ♥7 ♣7")]
#[case("♠7 ♥7 ♣7 ♦8")]
#[case("♠3 ♠4 ♠5 ♠6")]
#[case("♠3 ♠4 ♠5 ♠6 ♠8")]
#[case("♠3 ♠4 ♠5 ♠6 ♠6 ♠7")]
#[case("♠J ♠Q ♠K ♠A ♠2 jk")]
#[case("♠Q ♠K ♠A ♠2 ♠3")]
#[case("♠7 ♥7 ♣7 ♦7 ♠8 ♥8")]
#[case("jk JK")]
fn unrecognized_combinations(#[case] text: &str) {
    assert_eq!(classify(&cards(text)), None);
}

#[test]
fn classification_ignores_card_order() {
    let mut run = cards("♠8 ♥3 ♣6 ♦4 ♠7 ♥5");
    let expected = classify(&run).unwrap();

    run.reverse();
    assert_eq!(classify(&run), Some(expected));

    run.swap(0, 3);
    run.swap(1, 5);
    assert_eq!(classify(&run), Some(expected));

    assert_eq!(classify(&cards("♥K ♠K")), classify(&cards("♠K ♥K")));
}

#[test]
fn rocket_requires_opt_in() {
    let jokers = cards("JK jk");
    assert_eq!(classify(&jokers), None);

    let options = GameOptions::default().with_rocket(true);
    let rocket = classify_with(&jokers, &options).unwrap();
    assert_eq!(rocket.kind, ComboKind::Rocket);

    let top_bomb = classify(&cards("♠2 ♥2 ♣2 ♦2")).unwrap();
    assert!(rocket.beats(&top_bomb));
    assert!(!top_bomb.beats(&rocket));
    assert!(is_legal_play_with(&jokers, &cards("♠2 ♥2 ♣2 ♦2"), &options));
}

#[test]
fn sequence_options() {
    let with_two = cards("♠10 ♥J ♣Q ♦K ♠A ♥2");
    let strict = GameOptions::default().with_two_in_sequence(false);
    assert_eq!(classify_with(&with_two, &strict), None);
    assert!(classify_with(&cards("♠10 ♥J ♣Q ♦K ♠A"), &strict).is_some());

    let long = GameOptions::default().with_min_sequence_len(6);
    assert_eq!(classify_with(&cards("♠3 ♠4 ♠5 ♠6 ♠7"), &long), None);
    assert_eq!(
        classify_with(&cards("♠3 ♠4 ♠5 ♠6 ♠7 ♠8"), &long).map(|combo| combo.kind),
        Some(ComboKind::Sequence)
    );

    let short = GameOptions::default().with_min_sequence_len(0);
    assert_eq!(
        classify_with(&cards("♠3 ♥4"), &short).map(|combo| combo.kind),
        Some(ComboKind::Sequence)
    );
    assert_eq!(
        classify_with(&cards("♠3 ♥3"), &short).map(|combo| combo.kind),
        Some(ComboKind::Pair)
    );
    assert_eq!(
        classify_with(&cards("♠3"), &short).map(|combo| combo.kind),
        Some(ComboKind::Single)
    );
}

#[test]
fn bombs_beat_everything_else() {
    let bomb = cards("♠7 ♥7 ♣7 ♦7");
    assert!(is_legal_play(&bomb, &cards("♠K ♥K")));
    assert!(is_legal_play(&bomb, &cards("JK")));
    assert!(is_legal_play(&bomb, &cards("♠3 ♠4 ♠5 ♠6 ♠7 ♠8 ♠9")));

    let higher = cards("♠9 ♥9 ♣9 ♦9");
    assert!(is_legal_play(&higher, &bomb));
    assert!(!is_legal_play(&bomb, &higher));
    assert!(!is_legal_play(&bomb, &bomb));
}

#[test]
fn same_shape_needs_higher_value() {
    assert!(!is_legal_play(&cards("♠7 ♥7"), &cards("♠K ♥K")));
    assert!(is_legal_play(&cards("♠K ♥K"), &cards("♠7 ♥7")));
    assert!(!is_legal_play(&cards("♣K ♦K"), &cards("♠K ♥K")));

    assert!(is_legal_play(&cards("♠2"), &cards("♠A")));
    assert!(is_legal_play(&cards("jk"), &cards("♠2")));
    assert!(is_legal_play(&cards("JK"), &cards("jk")));
    assert!(!is_legal_play(&cards("♠A"), &cards("♠2")));
}

#[test]
fn sequences_compare_by_length_and_lowest_rank() {
    let low = cards("♠3 ♥4 ♣5 ♦6 ♠7");
    let high = cards("♠5 ♥6 ♣7 ♦8 ♠9");
    assert!(!is_legal_play(&low, &high));
    assert!(is_legal_play(&high, &low));

    let longer = cards("♠5 ♥6 ♣7 ♦8 ♠9 ♥10");
    assert!(!is_legal_play(&longer, &low));
}

#[test]
fn shape_mismatch_is_rejected() {
    assert!(!is_legal_play(&cards("♠2"), &cards("♠3 ♥3")));
    assert!(!is_legal_play(&cards("♠2 ♥2"), &cards("♠3")));
    assert!(!is_legal_play(&cards("♠2 ♥2"), &cards("♠3 ♥4 ♣5 ♦6 ♠7")));
}

#[test]
fn open_table_accepts_any_recognized_combination() {
    assert!(is_legal_play(&cards("♠3"), &[]));
    assert!(is_legal_play(&cards("♠3 ♥4 ♣5 ♦6 ♠7"), &[]));
    assert!(!is_legal_play(&cards("♠3 ♥4"), &[]));
    assert!(!is_legal_play(&[], &[]));
}

#[test]
fn unrecognized_previous_cannot_be_beaten() {
    assert!(!is_legal_play(&cards("♠2"), &cards("♠3 ♥4")));
}

#[test]
fn check_play_reports_reason() {
    let options = GameOptions::default();
    let pair_of_kings = Combination {
        kind: ComboKind::Pair,
        value: Rank::King,
        length: 2,
    };

    assert_eq!(
        check_play(&cards("♠3 ♥4"), None, &options),
        Err(PlayError::Unrecognized)
    );
    assert_eq!(
        check_play(&cards("♠7 ♥7"), Some(&pair_of_kings), &options),
        Err(PlayError::TooWeak)
    );
    assert_eq!(
        check_play(&cards("♠A ♥A"), Some(&pair_of_kings), &options).map(|combo| combo.value),
        Ok(Rank::Ace)
    );
}
