use poker_equity::cards::{all_card_strings, parse_cards, Card, CardParseError, Rank, Suit};
use poker_equity::deck::{Deck, DeckError};
use poker_equity::hand::{validate_heads_up, Board, HandError, HoleCards};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

#[test]
fn every_card_string_round_trips() {
    let all = all_card_strings();
    assert_eq!(all.len(), 52);
    assert_eq!(all.first().map(String::as_str), Some("2c"));
    assert_eq!(all.last().map(String::as_str), Some("As"));
    for s in &all {
        let card: Card = s.parse().unwrap();
        assert_eq!(&card.to_string(), s);
    }
    let uniq: HashSet<&String> = all.iter().collect();
    assert_eq!(uniq.len(), 52);
}

#[test]
fn numeric_parts_are_checked() {
    assert_eq!(Card::from_parts(14, 's').unwrap(), Card::new(Rank::Ace, Suit::Spades));
    assert_eq!(Card::from_parts(10, 'D').unwrap().to_string(), "Td");
    assert!(matches!(Card::from_parts(1, 's'), Err(CardParseError::Rank(_))));
    assert!(matches!(Card::from_parts(15, 's'), Err(CardParseError::Rank(_))));
    assert!(matches!(Card::from_parts(9, 'x'), Err(CardParseError::Suit(_))));
}

#[test]
fn card_lists_reject_any_bad_entry() {
    assert!(parse_cards("As Kd 10h").is_err());
    assert_eq!(parse_cards("").unwrap(), Vec::<Card>::new());
    assert_eq!(parse_cards("  As,,Kd ").unwrap().len(), 2);
}

#[test]
fn deck_matches_card_strings() {
    let deck = Deck::standard();
    let from_deck: Vec<String> = deck.iter().map(|c| c.to_string()).collect();
    assert_eq!(from_deck, all_card_strings());
}

#[test]
fn shuffling_keeps_the_same_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let shuffled = Deck::shuffled(&mut rng);
    assert_eq!(shuffled.len(), 52);
    let a: HashSet<Card> = shuffled.iter().copied().collect();
    let b: HashSet<Card> = Deck::standard().iter().copied().collect();
    assert_eq!(a, b);
}

#[test]
fn dealing_a_hand_then_a_board() {
    let deck = Deck::standard();
    let (hole, rest) = deck.deal_seeded(4, 99).unwrap();
    let (board, rest) = rest.deal_seeded(5, 100).unwrap();
    assert_eq!(rest.len(), 43);

    let (hero, villain, board) = validate_heads_up(&hole[..2], &hole[2..], &board).unwrap();
    assert_eq!(board.missing(), 0);
    for card in hero.as_array().iter().chain(&villain.as_array()).chain(board.as_slice()) {
        assert!(!rest.contains(*card));
    }

    let err = rest.deal_seeded(44, 1).unwrap_err();
    assert_eq!(err, DeckError::Overdraw { requested: 44, available: 43 });
}

#[test]
fn hand_types_parse_and_validate() {
    let hole: HoleCards = "Ks Kd".parse().unwrap();
    assert_eq!(hole.to_string(), "KsKd");
    assert!(matches!("Ks".parse::<HoleCards>(), Err(HandError::HoleCount(1))));

    let board: Board = "2c 3c".parse().unwrap();
    assert_eq!(board.missing(), 3);
    assert!(matches!("2c 2c".parse::<Board>(), Err(HandError::DuplicateCard(_))));
}
