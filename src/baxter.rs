//! Structural Baxter-permutation predicate.
//!
//! A permutation is Baxter when no adjacent pair of values crosses: for
//! every pair `(i, i+1)`, look at the positions strictly between them.
//! If `i` occurs first, the pair is violated when somewhere in that inner
//! range a value below `i` comes after a value above `i`; if `i+1` occurs
//! first, the symmetric order (a value above after a value below) is the
//! violation. Equivalently, Baxter permutations avoid the vincular
//! patterns 2-41-3 and 3-14-2.
//!
//! The property is declared meaningless below 4 elements: the predicate
//! returns `false` for any shorter input. This is an explicit boundary of
//! the checker, not a mathematical fact.

use crate::domain::{Domain, Elt};

/// Checks the Baxter property of an explicit permutation array over a
/// domain. `perm[p]` is the value at position `p`; every domain value must
/// appear exactly once, otherwise the input is not a permutation and the
/// answer is `false`.
pub fn is_baxter(domain: &Domain, perm: &[Elt]) -> bool {
    if domain.size() < 4 || perm.len() != domain.size() {
        return false;
    }

    // search for counterexamples among adjacent value pairs
    for i in domain.min()..domain.max() {
        let Some(pos_lo) = perm.iter().position(|e| e.get() == i) else {
            return false;
        };
        let Some(pos_hi) = perm.iter().position(|e| e.get() == i + 1) else {
            return false;
        };

        let big = |e: &Elt| e.get() > i;
        let small = |e: &Elt| e.get() < i;

        if pos_lo < pos_hi {
            // i .. big .. small .. i+1 is the violation
            let inner = &perm[pos_lo + 1..pos_hi];
            if let Some(first_big) = inner.iter().position(big) {
                if inner[first_big..].iter().any(small) {
                    return false;
                }
            }
        } else {
            // i+1 .. small .. big .. i is the violation
            let inner = &perm[pos_hi + 1..pos_lo];
            if let Some(first_small) = inner.iter().position(small) {
                if inner[first_small..].iter().any(big) {
                    return false;
                }
            }
        }
    }
    true
}

/// Checks the Baxter property of a plain integer sequence, deriving the
/// domain from the smallest and largest values present. Handy for the
/// output of [`TwinTree::into_baxters`][crate::twin::TwinTree::into_baxters].
pub fn is_baxter_seq(values: &[i64]) -> bool {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return false;
    };
    let domain = Domain::with_min(min, max);
    let Ok(perm) = values
        .iter()
        .map(|&v| domain.value(v))
        .collect::<crate::error::Result<Vec<_>>>()
    else {
        return false;
    };
    is_baxter(&domain, &perm)
}
