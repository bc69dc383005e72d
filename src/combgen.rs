//! Exhaustive lazy generator over all k-subsets of `{0, .., n-1}`.
//!
//! Enumerates combinations in revolving-door order (Knuth, algorithm R from
//! 7.2.1.3, vol 4A): successive combinations differ by a minimal swap. The
//! advance step is two-phase: first a local adjustment of element 0 whose
//! direction depends on the parity of `k`, and on failure an upward search
//! alternating the R4 and R5 conditions until a position can be adjusted or
//! the search index passes `k`, which ends the pass.
//!
//! Exactly `C(n, k)` distinct states are produced before wraparound.

use log::trace;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CombinationsGen {
    // k chosen values in increasing order plus the sentinel n at the end
    comb: Vec<usize>,
    n: usize,
    k: usize,
    proceed: bool,
}

impl CombinationsGen {
    /// Starts from the combination `{0, .., k-1}`.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= k <= n`.
    pub fn new(n: usize, k: usize) -> Self {
        Self::with_flag(n, k, true)
    }

    fn with_flag(n: usize, k: usize, proceed: bool) -> Self {
        assert!(k >= 1, "Combination size must be at least 1");
        assert!(k <= n, "Combination size must not exceed the set size");
        let mut comb: Vec<usize> = (0..=k).collect();
        comb[k] = n;
        Self {
            comb,
            n,
            k,
            proceed,
        }
    }

    fn restart(&mut self, proceed: bool) {
        *self = Self::with_flag(self.n, self.k, proceed);
    }

    /// The current combination, ascending, without the sentinel.
    pub fn current(&self) -> &[usize] {
        &self.comb[..self.k]
    }

    /// False exactly when the last advance wrapped around.
    pub fn continuing(&self) -> bool {
        self.proceed
    }

    /// Steps to the revolving-door successor, wrapping past the last one.
    pub fn advance(&mut self) {
        let mut skip_r4 = false;

        // phase A: local adjustment of element 0, direction set by parity of k
        if self.k % 2 == 1 {
            if self.comb[0] + 1 < self.comb[1] {
                self.comb[0] += 1;
                return;
            }
        } else {
            if self.comb[0] > 0 {
                self.comb[0] -= 1;
                return;
            }
            skip_r4 = true;
        }

        if self.k == 1 {
            self.proceed = false;
            self.restart(false);
            return;
        }

        // phase B: search upward through the R4/R5 pair
        let mut j = 2;
        loop {
            if !skip_r4 {
                // step R4: try to decrease c[j-1]
                debug_assert_eq!(self.comb[j - 1], self.comb[j - 2] + 1);
                if self.comb[j - 1] >= j {
                    self.comb[j - 1] = self.comb[j - 2];
                    self.comb[j - 2] = j - 2;
                    break;
                }
                j += 1;
            }

            // step R5: try to increase c[j-1]
            debug_assert_eq!(self.comb[j - 2], j - 2);
            if self.comb[j - 1] + 1 < self.comb[j] {
                self.comb[j - 2] = self.comb[j - 1];
                self.comb[j - 1] += 1;
                break;
            }

            j += 1;
            self.proceed = j <= self.k;
            if !self.proceed {
                trace!("combinations({}, {}) wrapped", self.n, self.k);
                self.restart(false);
                break;
            }
            skip_r4 = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::counts::binomial;
    use num_bigint::BigUint;

    fn full_pass(n: usize, k: usize) -> Vec<Vec<usize>> {
        let mut gen = CombinationsGen::new(n, k);
        let mut pass = Vec::new();
        loop {
            pass.push(gen.current().to_vec());
            gen.advance();
            if !gen.continuing() {
                break;
            }
        }
        pass
    }

    #[test]
    fn test_revolving_door_order_5_2() {
        // the exact revolving-door order is part of the contract
        let pass = full_pass(5, 2);
        assert_eq!(
            pass,
            vec![
                vec![0, 1],
                vec![1, 2],
                vec![0, 2],
                vec![2, 3],
                vec![1, 3],
                vec![0, 3],
                vec![3, 4],
                vec![2, 4],
                vec![1, 4],
                vec![0, 4],
            ]
        );
    }

    #[test]
    fn test_counts_match_binomial() {
        for (n, k) in [(5, 2), (6, 3), (7, 4), (6, 1), (6, 6), (8, 5)] {
            let pass = full_pass(n, k);
            let distinct: HashSet<_> = pass.iter().cloned().collect();
            assert_eq!(distinct.len(), pass.len(), "repeat in pass ({n}, {k})");
            assert_eq!(
                BigUint::from(pass.len()),
                binomial(n as u64, k as u64),
                "wrong count for ({n}, {k})"
            );
        }
    }

    #[test]
    fn test_successors_differ_minimally() {
        // consecutive combinations share k - 1 elements
        let pass = full_pass(6, 3);
        for pair in pass.windows(2) {
            let a: HashSet<_> = pair[0].iter().collect();
            let b: HashSet<_> = pair[1].iter().collect();
            assert_eq!(a.intersection(&b).count(), 2);
        }
    }

    #[test]
    fn test_wrap_restores_first() {
        let mut gen = CombinationsGen::new(5, 3);
        let first = gen.current().to_vec();
        loop {
            gen.advance();
            if !gen.continuing() {
                break;
            }
        }
        assert_eq!(gen.current(), &first[..]);
    }

    #[test]
    fn test_k_equals_one() {
        let pass = full_pass(4, 1);
        assert_eq!(pass, vec![vec![0], vec![1], vec![2], vec![3]]);
    }

    #[test]
    #[should_panic(expected = "must not exceed")]
    fn test_k_too_big_panics() {
        CombinationsGen::new(3, 4);
    }
}
