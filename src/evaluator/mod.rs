pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::hand::first_duplicate;
use core::cmp::Ordering;
use std::fmt;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Number of tiebreak ranks emitted for this category.
    pub const fn tiebreak_len(self) -> usize {
        match self {
            Category::StraightFlush | Category::Straight => 1,
            Category::FourOfAKind | Category::FullHouse => 2,
            Category::ThreeOfAKind | Category::TwoPair => 3,
            Category::Pair => 4,
            Category::Flush | Category::HighCard => 5,
        }
    }
}

/// Comparable hand strength: a category followed by its tiebreak ranks.
///
/// Ordering is lexicographic: category first, then each tiebreak in the
/// order the evaluator emits them. The number and meaning of the tiebreaks
/// depend only on the category (full house is always `(6, trips, pair)`),
/// so two ranks are equal exactly when the hands chop.
///
/// ```
/// use poker_equity::cards::parse_cards;
/// use poker_equity::evaluator::rank5;
///
/// let full = rank5(&parse_cards("Kh Kd Kc 2s 2d").unwrap()).unwrap();
/// assert_eq!(full.to_vec(), vec![6, 13, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank {
    category: Category,
    // Unused slots stay zero; the length is fixed by the category.
    tiebreak: [u8; 5],
}

impl HandRank {
    pub(crate) fn new(category: Category, ranks: &[Rank]) -> Self {
        debug_assert_eq!(ranks.len(), category.tiebreak_len());
        let mut tiebreak = [0u8; 5];
        for (slot, r) in tiebreak.iter_mut().zip(ranks) {
            *slot = r.value();
        }
        Self { category, tiebreak }
    }

    pub const fn category(&self) -> Category {
        self.category
    }

    /// Tiebreak rank values (2..=14), most significant first.
    pub fn tiebreak(&self) -> &[u8] {
        &self.tiebreak[..self.category.tiebreak_len()]
    }

    /// The full descriptor: category ordinal followed by the tiebreaks.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(6);
        out.push(self.category.ordinal());
        out.extend_from_slice(self.tiebreak());
        out
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.category.ordinal())?;
        for v in self.tiebreak() {
            write!(f, ", {v}")?;
        }
        write!(f, ")")
    }
}

/// Detailed evaluation result. `rank` drives ordering.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub rank: HandRank,
    pub best_five: [Card; 5],
}

impl Evaluation {
    pub const fn category(&self) -> Category {
        self.rank.category
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Evaluation {}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("expected exactly {expected} cards, got {got}")]
    CardCount { expected: usize, got: usize },
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
}

/// Rank exactly five cards.
///
/// Duplicates are not checked here; callers hand in distinct cards.
///
/// ```
/// use poker_equity::cards::parse_cards;
/// use poker_equity::evaluator::{rank5, Category};
///
/// let wheel = rank5(&parse_cards("Ad 2s 3h 4c 5d").unwrap()).unwrap();
/// assert_eq!(wheel.category(), Category::Straight);
/// assert_eq!(wheel.tiebreak(), &[5]);
/// ```
pub fn rank5(cards: &[Card]) -> Result<HandRank, EvalError> {
    let five: &[Card; 5] =
        cards.try_into().map_err(|_| EvalError::CardCount { expected: 5, got: cards.len() })?;
    Ok(evaluate_five(five).rank)
}

/// Rank exactly seven distinct cards by their best five-card subset.
///
/// ```
/// use poker_equity::cards::parse_cards;
/// use poker_equity::evaluator::{rank7, Category};
///
/// let r = rank7(&parse_cards("9h 9d 9s 5c 2d 5s Ah").unwrap()).unwrap();
/// assert_eq!(r.category(), Category::FullHouse);
/// assert_eq!(r.tiebreak(), &[9, 5]);
/// ```
pub fn rank7(cards: &[Card]) -> Result<HandRank, EvalError> {
    let seven: &[Card; 7] =
        cards.try_into().map_err(|_| EvalError::CardCount { expected: 7, got: cards.len() })?;
    if let Some(card) = first_duplicate(seven) {
        return Err(EvalError::DuplicateCard(card));
    }
    Ok(evaluate_seven(seven).rank)
}

/// Evaluate exactly five cards; detects category and encodes tie-breakers.
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);

    // Highest category first; high card always matches.
    let rank = DETECTORS
        .iter()
        .find_map(|detector| detector.detect(&analysis))
        .unwrap_or_else(|| HandRank::new(Category::HighCard, &analysis.ranks));

    Evaluation { rank, best_five: analysis.sorted_cards }
}

/// Evaluate seven cards by trying all 21 five-card subsets and keeping the best.
pub fn evaluate_seven(cards: &[Card; 7]) -> Evaluation {
    use combinations::Combinations7Choose5;

    let mut best: Option<Evaluation> = None;

    for indices in Combinations7Choose5::new() {
        let hand = [
            cards[indices[0]],
            cards[indices[1]],
            cards[indices[2]],
            cards[indices[3]],
            cards[indices[4]],
        ];
        let eval = evaluate_five(&hand);

        if best.as_ref().map_or(true, |b| eval > *b) {
            best = Some(eval);
        }
    }

    best.unwrap_or_else(|| evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]))
}
