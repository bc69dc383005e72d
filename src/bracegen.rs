//! Exhaustive lazy generator over balanced bracket sequences.
//!
//! Enumerates every sequence of `n` matched bracket pairs following TAOCP
//! 7.2.1.6, algorithm P. The successor step places the rightmost closing
//! position; if the position just before it already closes, the closing
//! boundary simply shifts left. Otherwise the active tail is scanned
//! leftward, flipping positions until an opening one is found, which gets
//! promoted while the rightmost boundary resets. The pass ends (and the
//! state wraps to `()()..()`) once no active tail remains.
//!
//! Exactly Catalan(n) distinct sequences are produced before wraparound.

use log::trace;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BracesGen {
    n: usize,
    // index of the closing position worked on by the simple case
    leftmost_closing: usize,
    braces: Vec<u8>,
    proceed: bool,
}

impl BracesGen {
    /// Starts from `()()..()`.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn new(n: usize) -> Self {
        Self::with_flag(n, true)
    }

    fn with_flag(n: usize, proceed: bool) -> Self {
        assert!(n >= 1, "Bracket pair count must be at least 1");
        let mut braces = vec![b'('; 2 * n];
        for i in 0..n {
            braces[2 * i + 1] = b')';
        }
        Self {
            n,
            leftmost_closing: 2 * (n - 1),
            braces,
            proceed,
        }
    }

    fn restart(&mut self, proceed: bool) {
        *self = Self::with_flag(self.n, proceed);
    }

    /// The current sequence as a bracket string slice.
    pub fn current(&self) -> &str {
        // the buffer only ever holds b'(' and b')'
        std::str::from_utf8(&self.braces).unwrap()
    }

    /// False exactly when the last advance wrapped around.
    pub fn continuing(&self) -> bool {
        self.proceed
    }

    /// Steps to the successor sequence, wrapping past the last one.
    pub fn advance(&mut self) {
        let m = self.leftmost_closing;
        trace!("P3, m = {}", m);

        // P3: simple case, shift the closing boundary left
        self.braces[m] = b')';
        if m > 0 && self.braces[m - 1] == b')' {
            self.leftmost_closing = m - 1;
            self.braces[m - 1] = b'(';
            return;
        }

        // P4: look up a new active tail, flipping opening positions on the way
        trace!("P4 start: {}", self.current());
        let mut active_tail = m as isize - 1;
        let mut k = 2 * (self.n - 1) as isize;
        while active_tail >= 0 && self.braces[active_tail as usize] == b'(' {
            self.braces[active_tail as usize] = b')';
            self.braces[k as usize] = b'(';
            active_tail -= 1;
            k -= 2;
        }

        // P5: promote the active tail position and reset the boundary
        trace!("P5 start: {}", self.current());
        if active_tail > 0 {
            self.braces[active_tail as usize] = b'(';
        }
        self.leftmost_closing = 2 * (self.n - 1);

        self.proceed = active_tail != -1;
        if !self.proceed {
            self.restart(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::counts::catalan;
    use num_bigint::BigUint;
    use test_log::test;

    fn full_pass(n: usize) -> Vec<String> {
        let mut gen = BracesGen::new(n);
        let mut pass = Vec::new();
        loop {
            pass.push(gen.current().to_string());
            gen.advance();
            if !gen.continuing() {
                break;
            }
        }
        pass
    }

    #[test]
    fn test_successor_order_3() {
        // the exact successor order is part of the contract
        assert_eq!(
            full_pass(3),
            vec!["()()()", "()(())", "(())()", "(()())", "((()))"]
        );
    }

    #[test]
    fn test_counts_match_catalan() {
        for n in 1..=6 {
            let pass = full_pass(n);
            let distinct: HashSet<_> = pass.iter().cloned().collect();
            assert_eq!(distinct.len(), pass.len(), "repeat in pass for n = {n}");
            assert_eq!(
                BigUint::from(pass.len()),
                catalan(n as u64),
                "wrong count for n = {n}"
            );
        }
    }

    #[test]
    fn test_all_sequences_balanced() {
        for seq in full_pass(5) {
            let mut depth = 0i32;
            for c in seq.bytes() {
                depth += if c == b'(' { 1 } else { -1 };
                assert!(depth >= 0, "unbalanced prefix in {seq}");
            }
            assert_eq!(depth, 0, "unbalanced sequence {seq}");
        }
    }

    #[test]
    fn test_single_pair() {
        let mut gen = BracesGen::new(1);
        assert_eq!(gen.current(), "()");
        gen.advance();
        assert!(!gen.continuing());
        assert_eq!(gen.current(), "()");
    }

    #[test]
    fn test_wrap_restores_first() {
        let mut gen = BracesGen::new(4);
        let first = gen.current().to_string();
        loop {
            gen.advance();
            if !gen.continuing() {
                break;
            }
        }
        assert_eq!(gen.current(), first);
    }
}
