use super::hand_analysis::HandAnalysis;
use crate::evaluator::{Category, HandRank};

/// Strategy pattern: each detector recognises one category and emits its
/// tiebreaks, or declines with `None`.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Straight Flush: Five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        analysis.suit_info.flush_suit?;
        let top = analysis.straight_info.top_rank?;
        Some(HandRank::new(Category::StraightFlush, &[top]))
    }
}

/// Four of a Kind: quad rank, then the best remaining kicker
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let quad = analysis.rank_groups.quad()?;
        let kicker = *analysis.rank_groups.others(&[quad]).first()?;
        Some(HandRank::new(Category::FourOfAKind, &[quad, kicker]))
    }
}

/// Full House: trip rank, then pair rank
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let trips = analysis.rank_groups.trips()?;
        let pair = *analysis.rank_groups.pairs().first()?;
        Some(HandRank::new(Category::FullHouse, &[trips, pair]))
    }
}

/// Flush: all five ranks are kickers
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        analysis.suit_info.flush_suit?;
        Some(HandRank::new(Category::Flush, &analysis.ranks))
    }
}

/// Straight: only the top rank matters (Five for the wheel)
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let top = analysis.straight_info.top_rank?;
        Some(HandRank::new(Category::Straight, &[top]))
    }
}

/// Three of a Kind: trip rank, then the two highest others
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let trips = analysis.rank_groups.trips()?;
        let kickers = analysis.rank_groups.kickers();
        let [k1, k2] = <[_; 2]>::try_from(kickers.get(..2)?).ok()?;
        Some(HandRank::new(Category::ThreeOfAKind, &[trips, k1, k2]))
    }
}

/// Two Pair: higher pair, lower pair, kicker
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let pairs = analysis.rank_groups.pairs();
        let [high, low] = <[_; 2]>::try_from(pairs.as_slice()).ok()?;
        let kicker = *analysis.rank_groups.others(&[high, low]).first()?;
        Some(HandRank::new(Category::TwoPair, &[high, low, kicker]))
    }
}

/// One Pair: pair rank, then the three highest others
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let pairs = analysis.rank_groups.pairs();
        let [pair] = <[_; 1]>::try_from(pairs.as_slice()).ok()?;
        let kickers = analysis.rank_groups.kickers();
        let [k1, k2, k3] = <[_; 3]>::try_from(kickers.get(..3)?).ok()?;
        Some(HandRank::new(Category::Pair, &[pair, k1, k2, k3]))
    }
}

/// High Card: all five ranks, descending
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        Some(HandRank::new(Category::HighCard, &analysis.ranks))
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn analyze(s: &str) -> HandAnalysis {
        let cards = parse_cards(s).unwrap();
        HandAnalysis::new(&[cards[0], cards[1], cards[2], cards[3], cards[4]])
    }

    fn first_match(analysis: &HandAnalysis) -> HandRank {
        DETECTORS.iter().find_map(|d| d.detect(analysis)).unwrap()
    }

    #[test]
    fn test_straight_flush_detector() {
        let rank = StraightFlushDetector.detect(&analyze("9h 8h 7h 6h 5h")).unwrap();
        assert_eq!(rank.category(), Category::StraightFlush);
        assert_eq!(rank.tiebreak(), &[9]);
    }

    #[test]
    fn test_four_of_a_kind_detector() {
        let rank = FourOfAKindDetector.detect(&analyze("As Ah Ad Ac Ks")).unwrap();
        assert_eq!(rank.tiebreak(), &[14, 13]);
    }

    #[test]
    fn test_full_house_detector() {
        let rank = FullHouseDetector.detect(&analyze("Ks Kh Kd Qc Qs")).unwrap();
        assert_eq!(rank.tiebreak(), &[13, 12]);
        assert!(FullHouseDetector.detect(&analyze("Ks Kh Kd Qc Js")).is_none());
    }

    #[test]
    fn test_three_of_a_kind_detector() {
        let rank = ThreeOfAKindDetector.detect(&analyze("Js Jh Jd 9c 7s")).unwrap();
        assert_eq!(rank.tiebreak(), &[11, 9, 7]);
    }

    #[test]
    fn test_two_pair_detector() {
        let rank = TwoPairDetector.detect(&analyze("As Ah Kd Kc Qs")).unwrap();
        assert_eq!(rank.tiebreak(), &[14, 13, 12]);
        assert!(TwoPairDetector.detect(&analyze("As Ah Kd Qc Js")).is_none());
    }

    #[test]
    fn test_one_pair_detector() {
        let rank = OnePairDetector.detect(&analyze("Js Jh 9d 7c 3s")).unwrap();
        assert_eq!(rank.tiebreak(), &[11, 9, 7, 3]);
    }

    #[test]
    fn test_detector_priority() {
        // Straight and flush both match; the straight flush comes first.
        let analysis = analyze("9h 8h 7h 6h 5h");
        assert!(FlushDetector.detect(&analysis).is_some());
        assert!(StraightDetector.detect(&analysis).is_some());
        assert_eq!(first_match(&analysis).category(), Category::StraightFlush);

        // Trips inside a full house never surface as three of a kind.
        assert_eq!(first_match(&analyze("Ks Kh Kd Qc Qs")).category(), Category::FullHouse);
        assert_eq!(first_match(&analyze("Ah Kd 7s 5c 2d")).category(), Category::HighCard);
    }
}
