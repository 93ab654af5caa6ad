use poker_equity::cards::{parse_cards, Card};
use poker_equity::equity::enumerate_runouts;
use poker_equity::range::{expand_token, parse_range, range_to_combos, RangeError};
use std::collections::HashSet;

fn combos(tokens: &[&str]) -> usize {
    range_to_combos(tokens, &[]).unwrap().len()
}

#[test]
fn documented_combo_counts() {
    let cases = [
        (&["AA"][..], 6),
        (&["AQs"][..], 4),
        (&["AQo"][..], 12),
        (&["AQ"][..], 16),
        (&["22+"][..], 78),
        (&["A9s+"][..], 20),
        (&["KTs+"][..], 12),
        (&["AQ", "AQs"][..], 16),
    ];
    for (tokens, expected) in cases {
        assert_eq!(combos(tokens), expected, "{tokens:?}");
    }
}

#[test]
fn blockers_leave_two_suited_aq() {
    let blockers = parse_cards("As Qh").unwrap();
    let left = range_to_combos(&["AQs"], &blockers).unwrap();
    let names: HashSet<String> = left.iter().map(|h| h.to_string()).collect();
    assert_eq!(names, HashSet::from(["AdQd".to_string(), "AcQc".to_string()]));
}

#[test]
fn combos_are_distinct_and_well_formed() {
    let all = range_to_combos(&["22+", "A2+", "K2+", "Q9s+", "T9o"], &[]).unwrap();
    let uniq: HashSet<_> = all.iter().collect();
    assert_eq!(uniq.len(), all.len());
    for hole in &all {
        assert_ne!(hole.first(), hole.second());
        assert!(hole.first().rank() >= hole.second().rank());
    }
}

#[test]
fn every_starting_hand_is_1326_combos() {
    let tokens: Vec<String> = ["22+", "32+", "42+", "52+", "62+", "72+", "82+", "92+"]
        .iter()
        .chain(&["T2+", "J2+", "Q2+", "K2+", "A2+"])
        .map(|s| s.to_string())
        .collect();
    let all = range_to_combos(&tokens, &[]).unwrap();
    assert_eq!(all.len(), 1326);
}

#[test]
fn blocking_a_card_removes_every_combo_that_holds_it() {
    let dead: Vec<Card> = parse_cards("Kd").unwrap();
    let left = range_to_combos(&["KK", "AK"], &dead).unwrap();
    assert_eq!(left.len(), 3 + 12);
    assert!(left.iter().all(|h| !h.contains(dead[0])));
}

#[test]
fn invalid_tokens_report_the_token() {
    for bad in ["10h", "AQQ", "A2x"] {
        let err = range_to_combos(&[bad], &[]).unwrap_err();
        match err {
            RangeError::InvalidToken { token, .. } => assert_eq!(token, bad),
            other => panic!("unexpected error {other:?}"),
        }
    }
    assert!(expand_token("88s").is_err());
}

#[test]
fn range_strings_split_and_dedup() {
    assert_eq!(parse_range("QQ+, AKs AKs,AQo").unwrap(), ["QQ+", "AKs", "AQo"]);
    assert!(parse_range("QQ+, 1Ks").is_err());
}

#[test]
fn range_combos_feed_the_enumerator() {
    let hero = parse_cards("Ah Kh").unwrap();
    let board = parse_cards("2h 7h Jc 4s").unwrap();
    let mut dead = hero.clone();
    dead.extend_from_slice(&board);

    let villains = range_to_combos(&["QQ"], &dead).unwrap();
    assert_eq!(villains.len(), 6);
    for villain in villains {
        let counts = enumerate_runouts(&hero, &villain.as_array(), &board, false).unwrap();
        assert_eq!(counts.total, 44);
    }
}
