//! Exhaustive lazy generator over all permutations of a domain.
//!
//! Enumerates explicit image arrays (not loop form) in lexicographic order
//! using the classical next-permutation step. The generator is cyclic: once
//! the descending arrangement has been produced, the next advance wraps back
//! to the ascending one and [`PermutationsGen::continuing`] turns false for
//! that step, so callers can tell the end of a pass from a fresh one.

use crate::domain::{Domain, Elt};

/// One lexicographic next-permutation step.
///
/// Locates the longest non-increasing suffix, swaps the pivot with the
/// smallest suffix element larger than it and reverses the suffix. Returns
/// `false` (leaving the slice sorted ascending) when no successor exists.
pub fn next_permutation<T: Ord>(state: &mut [T]) -> bool {
    if state.len() < 2 {
        return false;
    }

    // pivot: last position with state[i] < state[i + 1]
    let pivot = match (0..state.len() - 1).rev().find(|&i| state[i] < state[i + 1]) {
        Some(i) => i,
        None => {
            state.reverse();
            return false;
        }
    };

    // smallest suffix element greater than the pivot is the rightmost one,
    // since the suffix is non-increasing
    let swap = (pivot + 1..state.len())
        .rev()
        .find(|&j| state[j] > state[pivot])
        .unwrap();
    state.swap(pivot, swap);
    state[pivot + 1..].reverse();
    true
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PermutationsGen {
    state: Vec<Elt>,
    proceed: bool,
}

impl PermutationsGen {
    /// Starts from the ascending arrangement of the domain values.
    pub fn new(domain: &Domain) -> Self {
        Self {
            state: domain.values().collect(),
            proceed: true,
        }
    }

    /// Starts from an arbitrary arrangement.
    pub fn from_state(state: Vec<Elt>) -> Self {
        Self {
            state,
            proceed: true,
        }
    }

    /// The current permutation as an image array.
    pub fn current(&self) -> &[Elt] {
        &self.state
    }

    /// Steps to the lexicographic successor, wrapping to the ascending
    /// arrangement past the last one.
    pub fn advance(&mut self) {
        self.proceed = next_permutation(&mut self.state);
    }

    /// False exactly when the last advance wrapped around.
    pub fn continuing(&self) -> bool {
        self.proceed
    }
}
