/// Iterator that generates all C(7,5) = 21 combinations of choosing 5 indices from 7.
///
/// The combinations are generated in lexicographic order.
pub struct Combinations7Choose5 {
    indices: [usize; 5],
    remaining: usize,
}

impl Combinations7Choose5 {
    pub fn new() -> Self {
        Self { indices: [0, 1, 2, 3, 4], remaining: 21 }
    }
}

impl Default for Combinations7Choose5 {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Combinations7Choose5 {
    type Item = [usize; 5];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let result = self.indices;
        if self.remaining > 0 {
            advance(&mut self.indices, 7);
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Combinations7Choose5 {}

/// All k-element index combinations of `0..n`, in lexicographic order.
///
/// Not an `Iterator`: each combination is lent out as a slice so that
/// enumerating large spaces does not allocate per item.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self { n, indices: (0..k).collect(), started: false, done: k > n }
    }

    /// Step to the next combination. The first call yields `[0, 1, .., k-1]`.
    pub fn next_combination(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.indices);
        }
        if advance(&mut self.indices, self.n) {
            Some(&self.indices)
        } else {
            self.done = true;
            None
        }
    }
}

/// Move `indices` to the next k-combination of `0..n`; false once exhausted.
fn advance(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();
    // Rightmost index that can still move right
    let Some(i) = (0..k).rev().find(|&i| indices[i] < n - k + i) else {
        return false;
    };
    indices[i] += 1;
    for j in (i + 1)..k {
        indices[j] = indices[j - 1] + 1;
    }
    true
}

/// Binomial coefficient C(n, k); zero when k > n.
pub fn choose(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1u64, |acc, i| acc * (n - i) as u64 / (i + 1) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn collect(n: usize, k: usize) -> Vec<Vec<usize>> {
        let mut it = Combinations::new(n, k);
        let mut out = Vec::new();
        while let Some(c) = it.next_combination() {
            out.push(c.to_vec());
        }
        out
    }

    #[test]
    fn test_generates_21_combinations() {
        let combos: Vec<[usize; 5]> = Combinations7Choose5::new().collect();
        assert_eq!(combos.len(), 21);
        assert_eq!(combos.first(), Some(&[0, 1, 2, 3, 4]));
        assert_eq!(combos.last(), Some(&[2, 3, 4, 5, 6]));
        let seen: HashSet<[usize; 5]> = combos.iter().copied().collect();
        assert_eq!(seen.len(), 21);
    }

    #[test]
    fn test_lexicographic_order() {
        let combos: Vec<[usize; 5]> = Combinations7Choose5::new().collect();
        for w in combos.windows(2) {
            assert!(w[0] < w[1], "Not in lexicographic order: {:?} then {:?}", w[0], w[1]);
        }
    }

    #[test]
    fn test_iterator_exhausts() {
        let mut iter = Combinations7Choose5::new();
        assert_eq!(iter.len(), 21);
        for _ in 0..21 {
            assert!(iter.next().is_some());
        }
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_generic_counts_match_binomial() {
        for n in 0..10 {
            for k in 0..=n + 1 {
                assert_eq!(collect(n, k).len() as u64, choose(n, k), "C({n},{k})");
            }
        }
    }

    #[test]
    fn test_generic_specific() {
        assert_eq!(
            collect(4, 2),
            vec![vec![0, 1], vec![0, 2], vec![0, 3], vec![1, 2], vec![1, 3], vec![2, 3]]
        );
        assert_eq!(collect(3, 0), vec![Vec::<usize>::new()]);
        assert!(collect(2, 3).is_empty());
    }

    #[test]
    fn test_choose_values() {
        assert_eq!(choose(45, 2), 990);
        assert_eq!(choose(48, 5), 1_712_304);
        assert_eq!(choose(44, 1), 44);
        assert_eq!(choose(5, 0), 1);
        assert_eq!(choose(3, 4), 0);
    }
}
