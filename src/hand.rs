use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("too many board cards: {0} (at most 5)")]
    TooManyBoardCards(usize),
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's two private hole cards. Also used for a concrete range combo.
///
/// ```
/// use poker_equity::cards::{Card, Rank, Suit};
/// use poker_equity::hand::HoleCards;
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ).unwrap();
/// assert_eq!(hole.to_string(), "AsKs");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    /// Return the first (left) hole card.
    pub fn first(&self) -> Card {
        self.0
    }

    /// Return the second (right) hole card.
    pub fn second(&self) -> Card {
        self.1
    }

    /// Return both hole cards as a fixed array.
    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0 == card || self.1 == card
    }

    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateCard(a));
        }
        Ok(Self(a, b))
    }

    /// Pair two cards already known to differ.
    pub(crate) fn from_distinct(a: Card, b: Card) -> Self {
        debug_assert_ne!(a, b);
        Self(a, b)
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match slice {
            [a, b] => Self::try_new(*a, *b),
            _ => Err(HandError::HoleCount(slice.len())),
        }
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Community cards known so far (0 to 5).
///
/// ```
/// use poker_equity::hand::Board;
///
/// let board: Board = "2c 3c 4c".parse().unwrap();
/// assert_eq!(board.len(), 3);
/// assert_eq!(board.missing(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub const MAX_CARDS: usize = 5;

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > Self::MAX_CARDS {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        ensure_distinct(&cards)?;
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of community cards still to come.
    pub fn missing(&self) -> usize {
        Self::MAX_CARDS - self.cards.len()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}

/// The first card that appears a second time, if any.
pub fn first_duplicate<'a, I>(cards: I) -> Option<Card>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut seen = HashSet::new();
    cards.into_iter().find(|card| !seen.insert(**card)).copied()
}

fn ensure_distinct<'a, I>(cards: I) -> Result<(), HandError>
where
    I: IntoIterator<Item = &'a Card>,
{
    match first_duplicate(cards) {
        Some(card) => Err(HandError::DuplicateCard(card)),
        None => Ok(()),
    }
}

/// Validate a heads-up spot: two hole hands and a partial board with no card
/// shared between any of them.
///
/// ```
/// use poker_equity::cards::parse_cards;
/// use poker_equity::hand::validate_heads_up;
///
/// let hero = parse_cards("As Kd").unwrap();
/// let villain = parse_cards("9h 9d").unwrap();
/// let board = parse_cards("Ah 8s 2c").unwrap();
/// let (h, v, b) = validate_heads_up(&hero, &villain, &board).unwrap();
/// assert_eq!(h.first(), hero[0]);
/// assert_eq!(v.second(), villain[1]);
/// assert_eq!(b.len(), 3);
/// ```
pub fn validate_heads_up(
    hero: &[Card],
    villain: &[Card],
    board: &[Card],
) -> Result<(HoleCards, HoleCards, Board), HandError> {
    let hero = HoleCards::from_slice(hero)?;
    let villain = HoleCards::from_slice(villain)?;
    if board.len() > Board::MAX_CARDS {
        return Err(HandError::TooManyBoardCards(board.len()));
    }
    let hole = [hero.first(), hero.second(), villain.first(), villain.second()];
    ensure_distinct(hole.iter().chain(board))?;
    Ok((hero, villain, Board { cards: board.to_vec() }))
}
