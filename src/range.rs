//! Starting-hand range notation.
//!
//! A token is two rank symbols, an optional suitedness flag (`s` suited,
//! `o` offsuit, none for both) and an optional `+`:
//!
//! - `"QQ"` is one pocket pair (6 combos); `"QQ+"` is QQ, KK and AA.
//! - `"AQs"` is 4 combos, `"AQo"` 12, `"AQ"` 16.
//! - `"A9s+"` raises the kicker up to one below the top card: A9s..AKs.
//!
//! Expansion runs in two pure steps: [`expand_token`] turns a token into
//! [`HandSpec`]s, and [`HandSpec::combos`] turns a spec into hole cards.

use crate::cards::{Card, Rank, Suit};
use crate::hand::HoleCards;
use std::collections::HashSet;
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RangeError {
    #[error("invalid range token '{token}': {reason}")]
    InvalidToken { token: String, reason: &'static str },
}

fn invalid(token: &str, reason: &'static str) -> RangeError {
    RangeError::InvalidToken { token: token.to_string(), reason }
}

/// Which suit combinations of an unpaired hand a token covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suitedness {
    Suited,
    Offsuit,
    Any,
}

/// One rank pair with a suit constraint, e.g. `AKs` or `77`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandSpec {
    Pair(Rank),
    Unpaired { high: Rank, low: Rank, suitedness: Suitedness },
}

impl HandSpec {
    /// All concrete hole-card combos, high card first.
    ///
    /// ```
    /// use poker_equity::cards::Rank;
    /// use poker_equity::range::{HandSpec, Suitedness};
    ///
    /// let suited = Suitedness::Suited;
    /// let aks = HandSpec::Unpaired { high: Rank::Ace, low: Rank::King, suitedness: suited };
    /// assert_eq!(aks.combos().len(), 4);
    /// assert_eq!(HandSpec::Pair(Rank::Two).combos().len(), 6);
    /// ```
    pub fn combos(&self) -> Vec<HoleCards> {
        let mut out = Vec::with_capacity(16);
        match *self {
            HandSpec::Pair(rank) => {
                for (i, &s1) in Suit::ALL.iter().enumerate() {
                    for &s2 in &Suit::ALL[i + 1..] {
                        let (a, b) = (Card::new(rank, s1), Card::new(rank, s2));
                        out.push(HoleCards::from_distinct(a, b));
                    }
                }
            }
            HandSpec::Unpaired { high, low, suitedness } => {
                for &s1 in Suit::ALL.iter() {
                    for &s2 in Suit::ALL.iter() {
                        let keep = match suitedness {
                            Suitedness::Suited => s1 == s2,
                            Suitedness::Offsuit => s1 != s2,
                            Suitedness::Any => true,
                        };
                        if keep {
                            out.push(HoleCards::from_distinct(
                                Card::new(high, s1),
                                Card::new(low, s2),
                            ));
                        }
                    }
                }
            }
        }
        out
    }
}

impl fmt::Display for HandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandSpec::Pair(r) => write!(f, "{r}{r}"),
            HandSpec::Unpaired { high, low, suitedness } => {
                write!(f, "{high}{low}")?;
                match suitedness {
                    Suitedness::Suited => write!(f, "s"),
                    Suitedness::Offsuit => write!(f, "o"),
                    Suitedness::Any => Ok(()),
                }
            }
        }
    }
}

/// Expand one token into the rank pairs it names.
///
/// ```
/// use poker_equity::range::expand_token;
///
/// let specs = expand_token("KTs+").unwrap();
/// let names: Vec<String> = specs.iter().map(|s| s.to_string()).collect();
/// assert_eq!(names, ["KTs", "KJs", "KQs"]);
/// ```
pub fn expand_token(token: &str) -> Result<Vec<HandSpec>, RangeError> {
    let t = token.trim();
    let (t, plus) = match t.strip_suffix('+') {
        Some(rest) => (rest, true),
        None => (t, false),
    };
    let (t, flag) = if let Some(rest) = t.strip_suffix('s') {
        (rest, Some(Suitedness::Suited))
    } else if let Some(rest) = t.strip_suffix('o') {
        (rest, Some(Suitedness::Offsuit))
    } else {
        (t, None)
    };

    let mut chars = t.chars();
    let (r1, r2) = match (chars.next(), chars.next(), chars.next()) {
        (Some(a), Some(b), None) => (a, b),
        _ => return Err(invalid(token, "expected two ranks, an optional s/o and an optional +")),
    };
    let r1 = Rank::try_from(r1).map_err(|_| invalid(token, "unknown rank symbol"))?;
    let r2 = Rank::try_from(r2).map_err(|_| invalid(token, "unknown rank symbol"))?;
    let (high, low) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };

    if high == low {
        if flag.is_some() {
            return Err(invalid(token, "pocket pairs take no suitedness flag"));
        }
        let top = if plus { Rank::Ace } else { high };
        return Ok(Rank::ALL
            .iter()
            .filter(|&&r| r >= high && r <= top)
            .map(|&r| HandSpec::Pair(r))
            .collect());
    }

    let suitedness = flag.unwrap_or(Suitedness::Any);
    let kicker_top = if plus { high } else { low };
    Ok(Rank::ALL
        .iter()
        .filter(|&&r| r >= low && (r < kicker_top || r == low))
        .map(|&r| HandSpec::Unpaired { high, low: r, suitedness })
        .collect())
}

/// Validate tokens and drop exact repeats, keeping first-seen order.
///
/// ```
/// use poker_equity::range::parse_range_tokens;
///
/// let toks = parse_range_tokens(&["22", "AQs", " AQs ", "A9s+"]).unwrap();
/// assert_eq!(toks, ["22", "AQs", "A9s+"]);
/// assert!(parse_range_tokens(&["10h"]).is_err());
/// ```
pub fn parse_range_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<String>, RangeError> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        let t = token.as_ref().trim();
        expand_token(t)?;
        if seen.insert(t) {
            out.push(t.to_string());
        }
    }
    Ok(out)
}

/// Split a comma or whitespace separated range string into validated tokens.
pub fn parse_range(input: &str) -> Result<Vec<String>, RangeError> {
    let tokens: Vec<&str> =
        input.split(|c: char| c == ',' || c.is_whitespace()).filter(|s| !s.is_empty()).collect();
    parse_range_tokens(&tokens)
}

/// Every distinct hole-card combo the tokens cover, minus any combo holding
/// an excluded (blocked) card.
///
/// ```
/// use poker_equity::cards::parse_cards;
/// use poker_equity::range::range_to_combos;
///
/// assert_eq!(range_to_combos(&["AQ", "AQs"], &[]).unwrap().len(), 16);
///
/// let blockers = parse_cards("As Qh").unwrap();
/// let left = range_to_combos(&["AQs"], &blockers).unwrap();
/// let names: Vec<String> = left.iter().map(|c| c.to_string()).collect();
/// assert_eq!(names, ["AcQc", "AdQd"]);
/// ```
pub fn range_to_combos<S: AsRef<str>>(
    tokens: &[S],
    exclude: &[Card],
) -> Result<Vec<HoleCards>, RangeError> {
    let blocked: HashSet<Card> = exclude.iter().copied().collect();
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for token in parse_range_tokens(tokens)? {
        for spec in expand_token(&token)? {
            for combo in spec.combos() {
                if blocked.contains(&combo.first()) || blocked.contains(&combo.second()) {
                    continue;
                }
                if seen.insert(combo) {
                    out.push(combo);
                }
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn count(tokens: &[&str]) -> usize {
        range_to_combos(tokens, &[]).unwrap().len()
    }

    #[test]
    fn combo_counts() {
        assert_eq!(count(&["AA"]), 6);
        assert_eq!(count(&["AQs"]), 4);
        assert_eq!(count(&["AQo"]), 12);
        assert_eq!(count(&["AQ"]), 16);
        assert_eq!(count(&["22+"]), 78);
        assert_eq!(count(&["A9s+"]), 20);
        assert_eq!(count(&["KTs+"]), 12);
        assert_eq!(count(&["AQ+"]), 32);
        assert_eq!(count(&["QQ+"]), 18);
    }

    #[test]
    fn overlapping_tokens_dedup_by_combo() {
        assert_eq!(count(&["AQ", "AQs"]), 16);
        assert_eq!(count(&["AQs", "QAs"]), 4);
        assert_eq!(count(&["TT+", "QQ"]), 30);
    }

    #[test]
    fn blockers_remove_combos() {
        let blockers = parse_cards("As Qh").unwrap();
        let left = range_to_combos(&["AQs"], &blockers).unwrap();
        assert_eq!(left.len(), 2);
        assert_eq!(count(&["AA"]) - 3, range_to_combos(&["AA"], &blockers[..1]).unwrap().len());
    }

    #[test]
    fn rank_order_in_token_does_not_matter() {
        assert_eq!(expand_token("QA").unwrap(), expand_token("AQ").unwrap());
    }

    #[test]
    fn token_validation_and_normalization() {
        let ok = parse_range_tokens(&["22", "TT+", "AQ", "AQs", "AQo", "A9s+", "KTs+", "AQ+"])
            .unwrap();
        assert_eq!(ok, ["22", "TT+", "AQ", "AQs", "AQo", "A9s+", "KTs+", "AQ+"]);

        for bad in ["10h", "AQQ", "A2x", "", "A", "AAs", "KKo+", "AK+s", "ZZ"] {
            assert!(parse_range_tokens(&[bad]).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn parse_range_splits_on_commas() {
        assert_eq!(parse_range("AA, KK,AKs").unwrap(), ["AA", "KK", "AKs"]);
    }

    #[test]
    fn specs_display_as_tokens() {
        let specs = expand_token("JJ+").unwrap();
        let names: Vec<String> = specs.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["JJ", "QQ", "KK", "AA"]);
        assert_eq!(expand_token("T9").unwrap()[0].to_string(), "T9");
        assert_eq!(expand_token("T9o").unwrap()[0].to_string(), "T9o");
    }
}
