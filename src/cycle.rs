//! A single permutation cycle.
//!
//! A cycle like `(a c d)` encodes the permutation that fixes every
//! unmentioned point and sends `a -> c -> d -> a`. The rotations
//! `(a c d)`, `(c d a)` and `(d a c)` are equivalent; the representative
//! with the smallest element first is the canonical one, and every
//! constructor and modifier re-rolls to it.
//!
//! # Invariants
//!
//! - the cycle is non-empty
//! - all elements are unique
//! - the first element is the smallest
//!
//! The invariants are not re-checked on every operation; call
//! [`Cycle::validate`] to check them explicitly (tests do).

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use crate::domain::{Domain, Elt};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Cycle {
    elems: Vec<Elt>,
}

impl Cycle {
    /// Builds a cycle from a sequence of elements and canonicalizes it.
    ///
    /// The caller is expected to pass a non-empty sequence of unique
    /// elements; [`Cycle::validate`] reports violations.
    pub fn new(elems: impl Into<Vec<Elt>>) -> Self {
        let mut cycle = Self { elems: elems.into() };
        cycle.reroll();
        cycle
    }

    /// Convenience constructor going through the domain bound check.
    pub fn of(domain: &Domain, values: &[i64]) -> Result<Self> {
        let elems = values
            .iter()
            .map(|&v| domain.value(v))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(elems))
    }

    /// Appends an element and re-canonicalizes.
    pub fn add(&mut self, x: Elt) {
        self.elems.push(x);
        self.reroll();
    }

    /// Reverses the cycle direction: `(a b c)` becomes `(a c b)`.
    ///
    /// The canonical first element stays fixed, so the result is still
    /// canonical.
    pub fn inverse(&mut self) {
        if self.elems.len() < 3 {
            return;
        }
        self.elems[1..].reverse();
    }

    /// Smallest element (the canonical head).
    pub fn smallest(&self) -> Elt {
        self.elems[0]
    }

    pub fn contains(&self, x: Elt) -> bool {
        self.elems.contains(&x)
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Elt> + '_ {
        self.elems.iter().copied()
    }

    /// Cyclic successor of `x`, or `x` itself if absent.
    pub fn apply(&self, x: Elt) -> Elt {
        match self.elems.iter().position(|&e| e == x) {
            None => x,
            Some(i) => self.elems[(i + 1) % self.elems.len()],
        }
    }

    /// Applies the cycle rotation directly to a positional table.
    ///
    /// `table` must cover the whole domain (`table.len() == domain.size()`),
    /// with slot `i` holding the image of `domain.at(i)`. This runs in time
    /// proportional to the cycle length instead of the domain size.
    pub fn apply_table(&self, domain: &Domain, table: &mut [Elt]) {
        assert_eq!(table.len(), domain.size());
        let head = self.elems[0];
        let mut nxt = domain.index(head);
        let tmp = table[nxt];
        for &e in &self.elems {
            let prev = nxt;
            nxt = domain.index(e);
            if e == head {
                continue;
            }
            table[prev] = table[nxt];
        }
        table[nxt] = tmp;
    }

    /// Checks the cycle invariants, for use by tests and debugging.
    pub fn validate(&self) -> Result<()> {
        if self.elems.is_empty() {
            return Err(Error::Consistency("cycle is empty"));
        }
        let uniq: HashSet<Elt> = self.elems.iter().copied().collect();
        if uniq.len() != self.elems.len() {
            return Err(Error::Consistency("cycle has duplicate elements"));
        }
        let smallest = self.elems.iter().min().copied();
        if smallest != Some(self.elems[0]) {
            return Err(Error::Consistency("cycle is not canonically rotated"));
        }
        Ok(())
    }

    // roll to canonical: smallest element first
    fn reroll(&mut self) {
        let mut pos = 0;
        for i in 1..self.elems.len() {
            if self.elems[i] < self.elems[pos] {
                pos = i;
            }
        }
        if pos > 0 {
            self.elems.rotate_left(pos);
        }
    }
}

impl Ord for Cycle {
    /// Cycles compare by length first, then lexicographically.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.elems.len(), &self.elems).cmp(&(other.elems.len(), &other.elems))
    }
}

impl PartialOrd for Cycle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, e) in self.elems.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, ")")
    }
}
