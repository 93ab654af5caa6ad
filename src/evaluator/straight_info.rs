use crate::cards::Rank;

/// Whether a set of ranks contains a straight, and its top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Find the highest rank ending a run of five consecutive distinct ranks.
    ///
    /// The Ace also counts as 1, so A-2-3-4-5 (the wheel) is a straight
    /// topped by the Five.
    pub fn detect(ranks: &[Rank]) -> Self {
        // present[1] mirrors the Ace for the wheel
        let mut present = [false; 15];
        for r in ranks {
            present[r.value() as usize] = true;
        }
        present[1] = present[Rank::Ace.value() as usize];

        let mut run = 0;
        let mut top = None;
        for (v, &here) in present.iter().enumerate().skip(1) {
            if here {
                run += 1;
                if run >= 5 {
                    top = Some(v as u8);
                }
            } else {
                run = 0;
            }
        }

        StraightInfo { top_rank: top.and_then(|v| Rank::from_value(v).ok()) }
    }

    #[cfg(test)]
    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }
}
