use crate::cards::Rank;

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Count the given ranks and group them.
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; 15];
        for r in ranks {
            counts[r.value() as usize] += 1;
        }

        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .filter_map(|&r| {
                let count = counts[r.value() as usize];
                (count > 0).then_some((r, count))
            })
            .collect();

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Returns the rank of a four-of-a-kind, if present.
    pub fn quad(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    /// Returns the highest three-of-a-kind rank, if present.
    pub fn trips(&self) -> Option<Rank> {
        self.with_count(3).next()
    }

    /// Returns all pair ranks, in descending order.
    pub fn pairs(&self) -> Vec<Rank> {
        self.with_count(2).collect()
    }

    /// Returns all singleton (kicker) ranks, in descending order.
    pub fn kickers(&self) -> Vec<Rank> {
        self.with_count(1).collect()
    }

    /// All ranks except `skip`, highest first, regardless of multiplicity.
    pub fn others(&self, skip: &[Rank]) -> Vec<Rank> {
        let mut out: Vec<Rank> =
            self.groups.iter().map(|(r, _)| *r).filter(|r| !skip.contains(r)).collect();
        out.sort_by(|a, b| b.cmp(a));
        out
    }

    fn with_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |(_, count)| *count == n).map(|(rank, _)| *rank)
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
