//! Exact heads-up equity by exhaustive runout enumeration.
//!
//! Every unknown board completion is drawn from the cards nobody can see,
//! both hands are ranked with [`evaluate_seven`], and the results are tallied
//! from the hero's point of view.

use crate::cards::{Card, Rank, Suit};
use crate::deck::Deck;
use crate::evaluator::combinations::{choose, Combinations};
use crate::evaluator::{evaluate_seven, EvalError};
use crate::hand::{validate_heads_up, Board, HandError, HoleCards};
use log::{debug, warn};
use std::ops::{Add, AddAssign};

/// Unknown board cards enumerated without an explicit opt-in.
pub const MAX_UNKNOWN_DEFAULT: usize = 2;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EquityError {
    #[error("invalid spot: {0}")]
    Hand(#[from] HandError),
    #[error("{unknown} unknown board cards ({runouts} runouts) require allow_large")]
    EnumerationTooLarge { unknown: usize, runouts: u64 },
    #[error("evaluation failed: {0}")]
    Eval(#[from] EvalError),
}

/// Result of one fully dealt board, from the hero's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HeroWin,
    Tie,
    VillainWin,
}

/// Hero wins, ties and the number of runouts enumerated.
///
/// Villain wins are `total - wins - ties`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunoutCounts {
    pub wins: u64,
    pub ties: u64,
    pub total: u64,
}

impl RunoutCounts {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::HeroWin => self.wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::VillainWin => {}
        }
        self.total += 1;
    }

    /// `(wins + ties / 2) / total`, or 0 for an empty enumeration.
    pub fn equity(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.wins as f64 + 0.5 * self.ties as f64) / self.total as f64
    }
}

impl Add for RunoutCounts {
    type Output = RunoutCounts;

    fn add(self, rhs: Self) -> Self::Output {
        RunoutCounts {
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
            total: self.total + rhs.total,
        }
    }
}

impl AddAssign for RunoutCounts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Exact heads-up equity together with the counts it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquityResult {
    pub equity: f64,
    pub wins: u64,
    pub ties: u64,
    pub total: u64,
}

impl From<RunoutCounts> for EquityResult {
    fn from(counts: RunoutCounts) -> Self {
        EquityResult {
            equity: counts.equity(),
            wins: counts.wins,
            ties: counts.ties,
            total: counts.total,
        }
    }
}

/// Compare two hole hands on a complete board.
///
/// ```
/// use poker_equity::cards::parse_cards;
/// use poker_equity::equity::{showdown, Outcome};
///
/// let hero = parse_cards("As Kd").unwrap();
/// let villain = parse_cards("9h 9d").unwrap();
/// let board = parse_cards("Ah 8s 2c 7d 3h").unwrap();
/// assert_eq!(showdown(&hero, &villain, &board).unwrap(), Outcome::HeroWin);
/// ```
pub fn showdown(hero: &[Card], villain: &[Card], board: &[Card]) -> Result<Outcome, EquityError> {
    let (hero, villain, board) = validate_heads_up(hero, villain, board)?;
    let board: &[Card; 5] = board
        .as_slice()
        .try_into()
        .map_err(|_| EvalError::CardCount { expected: 5, got: board.len() })?;
    Ok(compare_on_board(&hero, &villain, board))
}

fn compare_on_board(hero: &HoleCards, villain: &HoleCards, board: &[Card; 5]) -> Outcome {
    let seven = |hole: &HoleCards| {
        [hole.first(), hole.second(), board[0], board[1], board[2], board[3], board[4]]
    };
    let h = evaluate_seven(&seven(hero));
    let v = evaluate_seven(&seven(villain));
    match h.cmp(&v) {
        std::cmp::Ordering::Greater => Outcome::HeroWin,
        std::cmp::Ordering::Equal => Outcome::Tie,
        std::cmp::Ordering::Less => Outcome::VillainWin,
    }
}

/// A validated spot, ready to enumerate.
struct Spot {
    hero: HoleCards,
    villain: HoleCards,
    board: Board,
    remaining: Deck,
}

impl Spot {
    fn new(hero: &[Card], villain: &[Card], board: &[Card]) -> Result<Self, EquityError> {
        let (hero, villain, board) = validate_heads_up(hero, villain, board)?;
        let mut known = vec![hero.first(), hero.second(), villain.first(), villain.second()];
        known.extend_from_slice(board.as_slice());
        Ok(Spot { hero, villain, board, remaining: Deck::excluding(&known) })
    }

    fn unknown(&self) -> usize {
        self.board.missing()
    }

    fn runouts(&self) -> u64 {
        choose(self.remaining.len(), self.unknown())
    }

    /// Score every completion whose drawn indices are `prefix` followed by a
    /// `k`-combination of `remaining[start..]`.
    fn enumerate_from(&self, prefix: &[usize], start: usize, k: usize) -> RunoutCounts {
        let deck = self.remaining.as_slice();
        let known = self.board.as_slice();
        // Every slot is overwritten: known + prefix + k == 5
        let mut board = [Card::new(Rank::Two, Suit::Clubs); 5];
        board[..known.len()].copy_from_slice(known);
        for (slot, &i) in board[known.len()..].iter_mut().zip(prefix) {
            *slot = deck[i];
        }
        let fill_from = known.len() + prefix.len();

        let mut counts = RunoutCounts::default();
        let mut combos = Combinations::new(deck.len().saturating_sub(start), k);
        while let Some(drawn) = combos.next_combination() {
            for (slot, &i) in board[fill_from..].iter_mut().zip(drawn) {
                *slot = deck[start + i];
            }
            counts.record(compare_on_board(&self.hero, &self.villain, &board));
        }
        counts
    }
}

fn prepare(
    hero: &[Card],
    villain: &[Card],
    board: &[Card],
    allow_large: bool,
) -> Result<Spot, EquityError> {
    let spot = Spot::new(hero, villain, board)?;
    let unknown = spot.unknown();
    if unknown > MAX_UNKNOWN_DEFAULT {
        let runouts = spot.runouts();
        if !allow_large {
            return Err(EquityError::EnumerationTooLarge { unknown, runouts });
        }
        warn!("enumerating {runouts} runouts for {unknown} unknown board cards");
    }
    Ok(spot)
}

/// Number of runouts [`enumerate_runouts`] would score for this spot.
///
/// Validates the spot but ignores the size guard, so it can be asked before
/// deciding whether to pass `allow_large`.
///
/// ```
/// use poker_equity::cards::parse_cards;
/// use poker_equity::equity::count_runouts;
///
/// let hero = parse_cards("As Kd").unwrap();
/// let villain = parse_cards("Qh Qs").unwrap();
/// assert_eq!(count_runouts(&hero, &villain, &[]).unwrap(), 1_712_304);
/// ```
pub fn count_runouts(hero: &[Card], villain: &[Card], board: &[Card]) -> Result<u64, EquityError> {
    Ok(Spot::new(hero, villain, board)?.runouts())
}

/// Enumerate every completion of `board` from the unseen cards and tally the
/// hero's wins and ties.
///
/// Fails before any work if either hand is not exactly two cards, the board
/// has more than five cards, any card repeats, or more than two board cards
/// are unknown and `allow_large` is false.
///
/// ```
/// use poker_equity::cards::parse_cards;
/// use poker_equity::equity::enumerate_runouts;
///
/// let hero = parse_cards("Ah Qh").unwrap();
/// let villain = parse_cards("Jd 9d").unwrap();
/// let board = parse_cards("Jh 7c 2h").unwrap();
/// let counts = enumerate_runouts(&hero, &villain, &board, false).unwrap();
/// assert_eq!(counts.total, 990);
/// ```
pub fn enumerate_runouts(
    hero: &[Card],
    villain: &[Card],
    board: &[Card],
    allow_large: bool,
) -> Result<RunoutCounts, EquityError> {
    let spot = prepare(hero, villain, board, allow_large)?;
    debug!(
        "enumerating {} runouts ({} unknown) for {} vs {}",
        spot.runouts(),
        spot.unknown(),
        spot.hero,
        spot.villain
    );
    let counts = spot.enumerate_from(&[], 0, spot.unknown());
    debug!("runouts done: wins={} ties={} total={}", counts.wins, counts.ties, counts.total);
    Ok(counts)
}

/// [`enumerate_runouts`] reduced to a scalar equity.
///
/// ```
/// use poker_equity::cards::parse_cards;
/// use poker_equity::equity::equity_hu_exact;
///
/// let hero = parse_cards("2c 3d").unwrap();
/// let villain = parse_cards("4s 5c").unwrap();
/// let board = parse_cards("Ah Kh Qh Jh Th").unwrap();
/// let res = equity_hu_exact(&hero, &villain, &board, false).unwrap();
/// assert_eq!((res.wins, res.ties, res.total), (0, 1, 1));
/// assert_eq!(res.equity, 0.5);
/// ```
pub fn equity_hu_exact(
    hero: &[Card],
    villain: &[Card],
    board: &[Card],
    allow_large: bool,
) -> Result<EquityResult, EquityError> {
    enumerate_runouts(hero, villain, board, allow_large).map(EquityResult::from)
}

#[cfg(feature = "parallel")]
mod par {
    use super::*;
    use rayon::prelude::*;

    /// Parallel [`enumerate_runouts`]: shards the runouts by the first drawn
    /// card and sums the partial counts. Counts are identical to the
    /// sequential version.
    pub fn enumerate_runouts_par(
        hero: &[Card],
        villain: &[Card],
        board: &[Card],
        allow_large: bool,
    ) -> Result<RunoutCounts, EquityError> {
        let spot = prepare(hero, villain, board, allow_large)?;
        let unknown = spot.unknown();
        debug!("enumerating {} runouts ({unknown} unknown) in parallel", spot.runouts());
        if unknown == 0 {
            return Ok(spot.enumerate_from(&[], 0, 0));
        }

        let counts = (0..spot.remaining.len())
            .into_par_iter()
            .map(|first| spot.enumerate_from(&[first], first + 1, unknown - 1))
            .reduce(RunoutCounts::default, |a, b| a + b);
        debug!("runouts done: wins={} ties={} total={}", counts.wins, counts.ties, counts.total);
        Ok(counts)
    }

    /// Parallel [`equity_hu_exact`].
    pub fn equity_hu_exact_par(
        hero: &[Card],
        villain: &[Card],
        board: &[Card],
        allow_large: bool,
    ) -> Result<EquityResult, EquityError> {
        enumerate_runouts_par(hero, villain, board, allow_large).map(EquityResult::from)
    }
}

#[cfg(feature = "parallel")]
pub use par::{enumerate_runouts_par, equity_hu_exact_par};
