//! poker-equity: Texas Hold'em hand ranking and exact heads-up equity
//!
//! Goals:
//! - Deterministic, exact results: ranks are total orders, equity is enumerated
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: rank a hand
//! ```
//! use poker_equity::cards::parse_cards;
//! use poker_equity::evaluator::{rank7, Category};
//!
//! let cards = parse_cards("As Ah Kc Qd Jh 3s 2c").unwrap();
//! let rank = rank7(&cards).unwrap();
//! assert_eq!(rank.category(), Category::Pair);
//! assert_eq!(rank.tiebreak(), &[14, 13, 12, 11]);
//! ```
//!
//! ## Exact equity on the flop
//! ```
//! use poker_equity::cards::parse_cards;
//! use poker_equity::equity::equity_hu_exact;
//!
//! let hero = parse_cards("Ah Kh").unwrap();
//! let villain = parse_cards("Qs Qd").unwrap();
//! let board = parse_cards("2h 7h Jc").unwrap();
//! let res = equity_hu_exact(&hero, &villain, &board, false).unwrap();
//! assert_eq!(res.total, 990);
//! assert!(res.equity > 0.0 && res.equity < 1.0);
//! ```
//!
//! ## Ranges
//! ```
//! use poker_equity::range::range_to_combos;
//!
//! assert_eq!(range_to_combos(&["22+", "AKs"], &[]).unwrap().len(), 82);
//! ```
//!
//! Preflop and two-card boards need `allow_large = true`; see
//! [`equity::count_runouts`] for the cost up front. Enable the `parallel`
//! feature for rayon-sharded enumeration.

pub mod cards;
pub mod deck;
pub mod equity;
pub mod evaluator;
pub mod hand;
pub mod range;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
