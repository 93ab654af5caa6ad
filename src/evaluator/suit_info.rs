use crate::cards::{Card, Suit};

/// Whether all cards share one suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card]) -> Self {
        let flush_suit = match cards.split_first() {
            Some((first, rest)) if rest.iter().all(|c| c.suit() == first.suit()) => {
                Some(first.suit())
            }
            _ => None,
        };
        SuitInfo { flush_suit }
    }

    #[cfg(test)]
    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }
}
