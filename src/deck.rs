use crate::cards::{Card, Rank, Suit};
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("cannot deal {requested} cards from a deck of {available}")]
    Overdraw { requested: usize, available: usize },
}

/// A set of distinct cards drawn from the standard 52.
///
/// Decks are values: dealing and shuffling return new decks and never
/// mutate the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use poker_equity::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        Self::excluding(&[])
    }

    /// A standard deck without the given cards (dealt or visible elsewhere).
    ///
    /// ```
    /// use poker_equity::cards::parse_cards;
    /// use poker_equity::deck::Deck;
    ///
    /// let seen = parse_cards("Ah Td 7s").unwrap();
    /// let deck = Deck::excluding(&seen);
    /// assert_eq!(deck.len(), 49);
    /// assert!(!deck.contains(seen[0]));
    /// ```
    pub fn excluding(exclude: &[Card]) -> Self {
        let excluded: HashSet<Card> = exclude.iter().copied().collect();
        let mut cards = Vec::with_capacity(52);
        for &r in Rank::ALL.iter() {
            for &s in Suit::ALL.iter() {
                let card = Card::new(r, s);
                if !excluded.contains(&card) {
                    cards.push(card);
                }
            }
        }
        Self { cards }
    }

    /// A full deck in random order.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.cards.shuffle(rng);
        deck
    }

    /// A full deck shuffled with a seeded RNG for reproducibility.
    pub fn shuffled_seeded(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Draw `n` distinct cards without replacement.
    ///
    /// Returns the drawn cards and the remaining deck, both in the source
    /// deck's order. `self` is left untouched.
    pub fn deal<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<(Vec<Card>, Deck), DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::Overdraw { requested: n, available: self.cards.len() });
        }
        let mut picked = vec![false; self.cards.len()];
        for i in index::sample(rng, self.cards.len(), n).into_vec() {
            picked[i] = true;
        }

        let mut drawn = Vec::with_capacity(n);
        let mut remaining = Vec::with_capacity(self.cards.len() - n);
        for (card, take) in self.cards.iter().zip(picked) {
            if take {
                drawn.push(*card);
            } else {
                remaining.push(*card);
            }
        }
        Ok((drawn, Deck { cards: remaining }))
    }

    /// [`Deck::deal`] with a seeded RNG.
    pub fn deal_seeded(&self, n: usize, seed: u64) -> Result<(Vec<Card>, Deck), DeckError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.deal(n, &mut rng)
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
