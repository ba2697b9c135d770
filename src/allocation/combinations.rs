//! Lazy k-combinations over index tuples
//!
//! `Combinations` yields every strictly increasing `k`-tuple of indices into
//! `0..n` in lexicographic order, holding only the current tuple in memory.
//! The number of tuples is `C(n, k)`; see [`combination_count`].

use std::iter::FusedIterator;

/// Iterator over the `k`-subsets of `0..n`, as sorted index vectors
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    /// Enumerate the `k`-subsets of `0..n`
    ///
    /// Yields nothing when `k > n` and a single empty tuple when `k == 0`.
    pub fn new(n: usize, k: usize) -> Self {
        Self { n, indices: (0..k).collect(), started: false, done: k > n }
    }

    /// Size of the tuples this iterator yields
    pub fn k(&self) -> usize {
        self.indices.len()
    }

    fn advance(&mut self) -> bool {
        let k = self.indices.len();
        // Rightmost index that can still move right
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            return false;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
        } else if !self.advance() {
            self.done = true;
            return None;
        }
        Some(self.indices.clone())
    }
}

impl FusedIterator for Combinations {}

/// Number of `k`-subsets of an `n`-set, `None` on overflow
pub fn combination_count(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        // result == C(n, i) here, so the division is exact
        result = result.checked_mul((n - i) as u128)? / (i as u128 + 1);
    }
    Some(result)
}
