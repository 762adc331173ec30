//! Upper-triangle pair enumeration, diagonal included.

use std::iter::FusedIterator;

/// Number of pairs `(i, j)` with `0 <= i <= j < m`.
#[must_use]
pub fn pair_count(m: usize) -> usize {
    m * (m + 1) / 2
}

/// Iterator over `(i, j)` with `0 <= i <= j < m` in row-major order:
/// `(0,0), (0,1), .., (0,m-1), (1,1), .., (m-1,m-1)`.
///
/// Each unordered pair appears once; `(j, i)` is never yielded for `i < j`.
#[derive(Debug, Clone)]
pub struct UpperTrianglePairs {
    m: usize,
    i: usize,
    j: usize,
}

impl UpperTrianglePairs {
    /// Enumerate the pairs of a collection of `m` elements.
    #[must_use]
    pub fn new(m: usize) -> Self {
        Self { m, i: 0, j: 0 }
    }

    fn remaining(&self) -> usize {
        if self.i >= self.m {
            return 0;
        }
        // Rest of row i plus every later row.
        (self.m - self.j) + pair_count(self.m - self.i - 1)
    }
}

impl Iterator for UpperTrianglePairs {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.m {
            return None;
        }
        let pair = (self.i, self.j);
        self.j += 1;
        if self.j == self.m {
            self.i += 1;
            self.j = self.i;
        }
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for UpperTrianglePairs {}

impl FusedIterator for UpperTrianglePairs {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_order_with_self_pairs() {
        let pairs: Vec<_> = UpperTrianglePairs::new(3).collect();
        assert_eq!(pairs, vec![(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn count_matches_formula() {
        for m in 0..20 {
            let iter = UpperTrianglePairs::new(m);
            assert_eq!(iter.len(), pair_count(m));
            assert_eq!(iter.count(), pair_count(m));
        }
    }

    #[test]
    fn every_unordered_pair_exactly_once() {
        let m = 7;
        let mut seen = vec![vec![0u32; m]; m];
        for (i, j) in UpperTrianglePairs::new(m) {
            assert!(i <= j);
            seen[i][j] += 1;
        }
        for i in 0..m {
            for j in i..m {
                assert_eq!(seen[i][j], 1, "pair ({i}, {j})");
            }
        }
    }

    #[test]
    fn size_hint_shrinks_as_consumed() {
        let mut iter = UpperTrianglePairs::new(4);
        assert_eq!(iter.len(), 10);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 8);
        iter.by_ref().take(4).for_each(drop);
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some((1, 3)));
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(UpperTrianglePairs::new(0).next(), None);
        let pairs: Vec<_> = UpperTrianglePairs::new(1).collect();
        assert_eq!(pairs, vec![(0, 0)]);
    }
}
