//! Permutations in canonical disjoint-cycle form.
//!
//! A permutation over a domain is stored as a set of disjoint cycles that
//! together cover every domain value. Canonicalization means:
//!
//! - all singleton cycles are written explicitly,
//! - every cycle is canonically rotated (smallest element first),
//! - cycles are sorted by their smallest element in decreasing order.
//!
//! E.g. the canonical form of `(3 1 6)(5 4)` over `[1, 6]` is
//! `(4 5)(2)(1 6 3)`.
//!
//! Arbitrary (overlapping, redundant) cycle lists are normalized with the
//! loop-simplification algorithm (TAOCP, Alg. 1.3.3B): apply the inputs to an
//! identity table in reverse order, then re-extract disjoint cycles from the
//! table.

use std::fmt;

use crate::cycle::Cycle;
use crate::domain::{Domain, Elt};
use crate::error::{Error, Result};

/// Extracts the disjoint cycles of the permutation given by `table`.
///
/// `table[i]` holds the image of `domain.at(i)`. Say `[d, c, e, g, b, f, a]`
/// over `[a, g]` gives `[(a d g), (b c e), (f)]`. The cycles come out
/// sorted by smallest element in increasing order, since positions are
/// scanned left to right.
pub fn create_loops(domain: &Domain, table: &[Elt]) -> Vec<Cycle> {
    assert_eq!(table.len(), domain.size());
    let mut marked = vec![false; table.len()];
    let mut loops = Vec::new();

    for start in 0..table.len() {
        if marked[start] {
            continue;
        }
        let first = domain.at(start);
        let mut elems = vec![first];
        marked[start] = true;
        let mut nxt = table[start];
        while nxt != first {
            elems.push(nxt);
            marked[domain.index(nxt)] = true;
            nxt = table[domain.index(nxt)];
        }
        loops.push(Cycle::new(elems));
    }

    loops
}

/// Multiplies out a cycle list into its minimal disjoint form.
///
/// For example `(a c f g)(b c d)(a e d)(f a d e)(b g f a e)` simplifies to
/// `(a d g)(b c e)(f)`. Input cycles are applied to an identity table in
/// reverse order (last cycle first), then the table is re-read as loops.
pub fn simplify_loops(domain: &Domain, loops: &[Cycle]) -> Vec<Cycle> {
    let mut table: Vec<Elt> = domain.values().collect();
    for cycle in loops.iter().rev() {
        cycle.apply_table(domain, &mut table);
    }
    create_loops(domain, &table)
}

/// A permutation of the values of one [`Domain`], kept in canonical
/// disjoint-cycle form at all times.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Permutation {
    domain: Domain,
    loops: Vec<Cycle>,
}

impl Permutation {
    /// Identity permutation: one singleton cycle per domain value.
    pub fn identity(domain: Domain) -> Self {
        let loops = domain.values().map(|x| Cycle::new(vec![x])).collect();
        let mut perm = Self { domain, loops };
        perm.sort_loops();
        perm
    }

    /// Builds a permutation from an arbitrary cycle list and simplifies it.
    pub fn from_loops(domain: Domain, loops: impl IntoIterator<Item = Cycle>) -> Self {
        let input: Vec<Cycle> = loops.into_iter().collect();
        let mut perm = Self {
            domain,
            loops: simplify_loops(&domain, &input),
        };
        perm.sort_loops();
        perm
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// The canonical cycles, sorted by smallest element in decreasing order.
    pub fn loops(&self) -> &[Cycle] {
        &self.loops
    }

    /// Applies the permutation to one element.
    pub fn apply(&self, x: Elt) -> Elt {
        self.loops.iter().fold(x, |acc, c| c.apply(acc))
    }

    /// Applies all cycles in stored order to a positional table.
    pub fn apply_table(&self, table: &mut [Elt]) {
        for cycle in &self.loops {
            cycle.apply_table(&self.domain, table);
        }
    }

    /// Right multiplication: `self` followed by `rhs`.
    pub fn rmul(&mut self, rhs: &Permutation) -> &mut Self {
        assert_eq!(self.domain, rhs.domain, "Permutation domains differ");
        self.loops.extend(rhs.loops.iter().cloned());
        self.resimplify();
        self
    }

    /// Left multiplication: `rhs` followed by `self`.
    pub fn lmul(&mut self, rhs: &Permutation) -> &mut Self {
        assert_eq!(self.domain, rhs.domain, "Permutation domains differ");
        self.loops.splice(0..0, rhs.loops.iter().cloned());
        self.resimplify();
        self
    }

    /// Inverts every cycle in place. Cycle membership is unchanged, only
    /// the direction flips, so the form stays canonical.
    pub fn inverse(&mut self) {
        for cycle in &mut self.loops {
            cycle.inverse();
        }
    }

    pub fn contains(&self, x: Elt) -> bool {
        self.loops.iter().any(|c| c.contains(x))
    }

    /// Materializes the explicit image array, e.g. `7 1 5 3 2 8 4 6`.
    pub fn present_as_perm(&self) -> Vec<Elt> {
        let mut table: Vec<Elt> = self.domain.values().collect();
        self.apply_table(&mut table);
        table
    }

    /// Space-separated image array form.
    pub fn to_perm_string(&self) -> String {
        let images: Vec<String> = self.present_as_perm().iter().map(Elt::to_string).collect();
        images.join(" ")
    }

    /// Checks the canonical-form invariants, for use by tests and debugging.
    pub fn validate(&self) -> Result<()> {
        if self.loops.is_empty() {
            return Err(Error::Consistency("permutation has no cycles"));
        }
        for cycle in &self.loops {
            cycle.validate()?;
        }
        let mut covered = vec![0usize; self.domain.size()];
        for cycle in &self.loops {
            for e in cycle.iter() {
                covered[self.domain.index(e)] += 1;
            }
        }
        if covered.iter().any(|&c| c == 0) {
            return Err(Error::Consistency("domain value not covered by any cycle"));
        }
        if covered.iter().any(|&c| c > 1) {
            return Err(Error::Consistency("domain value covered more than once"));
        }
        for pair in self.loops.windows(2) {
            if pair[0].smallest() == pair[1].smallest() {
                return Err(Error::Consistency("cycles with equal smallest element"));
            }
            if pair[0].smallest() < pair[1].smallest() {
                return Err(Error::Consistency("cycles not in decreasing order"));
            }
        }
        Ok(())
    }

    /// Parses the loop text form, e.g. `"(1 6 3)(4 5)(2)"`.
    ///
    /// Mentioned cycles may overlap; the result is simplified and
    /// canonical. Unmentioned domain values become fixed points.
    pub fn parse_loops(domain: Domain, text: &str) -> Result<Self> {
        let mut loops = Vec::new();
        let mut current: Option<Vec<Elt>> = None;
        let mut token = String::new();

        let flush_token = |current: &mut Option<Vec<Elt>>, token: &mut String| -> Result<()> {
            if token.is_empty() {
                return Ok(());
            }
            let elems = current
                .as_mut()
                .ok_or_else(|| Error::MalformedInput("value outside of a loop".to_string()))?;
            elems.push(domain.parse(token)?);
            token.clear();
            Ok(())
        };

        for c in text.chars() {
            match c {
                '(' => {
                    if current.is_some() {
                        return Err(Error::MalformedInput("nested '(' in loop form".to_string()));
                    }
                    current = Some(Vec::new());
                }
                ')' => {
                    flush_token(&mut current, &mut token)?;
                    let elems = current
                        .take()
                        .ok_or_else(|| Error::MalformedInput("unmatched ')'".to_string()))?;
                    if elems.is_empty() {
                        return Err(Error::MalformedInput("empty loop '()'".to_string()));
                    }
                    loops.push(Cycle::new(elems));
                }
                c if c.is_whitespace() => flush_token(&mut current, &mut token)?,
                c if c.is_ascii_digit() || c == '-' => token.push(c),
                c => {
                    return Err(Error::MalformedInput(format!("unexpected symbol {:?}", c)));
                }
            }
        }
        if current.is_some() {
            return Err(Error::MalformedInput("unterminated loop".to_string()));
        }
        Ok(Self::from_loops(domain, loops))
    }

    fn resimplify(&mut self) {
        self.loops = simplify_loops(&self.domain, &self.loops);
        self.sort_loops();
    }

    // canonical order: by smallest element, decreasing
    fn sort_loops(&mut self) {
        self.loops.sort_by(|a, b| b.smallest().cmp(&a.smallest()));
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cycle in &self.loops {
            write!(f, "{}", cycle)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(domain: Domain, loops: &[&[i64]]) -> Permutation {
        let cycles: Vec<Cycle> = loops
            .iter()
            .map(|vals| Cycle::of(&domain, vals).unwrap())
            .collect();
        Permutation::from_loops(domain, cycles)
    }

    #[test]
    fn test_identity() {
        let dom = Domain::new(4);
        let id = Permutation::identity(dom);
        assert!(id.validate().is_ok());
        assert_eq!(id.to_string(), "(4)(3)(2)(1)");
        for x in dom.values() {
            assert_eq!(id.apply(x), x);
        }
        assert_eq!(id.to_perm_string(), "1 2 3 4");
    }

    #[test]
    fn test_canonical_form_example() {
        // documented example: (3 1 6)(5 4) over [1, 6] is (4 5)(2)(1 6 3)
        let dom = Domain::new(6);
        let p = perm(dom, &[&[3, 1, 6], &[5, 4]]);
        assert!(p.validate().is_ok());
        assert_eq!(p.to_string(), "(4 5)(2)(1 6 3)");
    }

    #[test]
    fn test_simplify_example() {
        // documented example over a..g mapped to 1..7:
        // (a c f g)(b c d)(a e d)(f a d e)(b g f a e) -> (a d g)(b c e)(f)
        let dom = Domain::new(7);
        let p = perm(
            dom,
            &[
                &[1, 3, 6, 7],
                &[2, 3, 4],
                &[1, 5, 4],
                &[6, 1, 4, 5],
                &[2, 7, 6, 1, 5],
            ],
        );
        assert!(p.validate().is_ok());
        assert_eq!(p.to_string(), "(6)(2 3 5)(1 4 7)");
    }

    #[test]
    fn test_create_loops_from_table() {
        // [d, c, e, g, b, f, a] over a..g gives (a d g)(b c e)(f)
        let dom = Domain::new(7);
        let table: Vec<Elt> = [4, 3, 5, 7, 2, 6, 1]
            .iter()
            .map(|&v| dom.value(v).unwrap())
            .collect();
        let loops = create_loops(&dom, &table);
        let texts: Vec<String> = loops.iter().map(Cycle::to_string).collect();
        assert_eq!(texts, vec!["(1 4 7)", "(2 3 5)", "(6)"]);
    }

    #[test]
    fn test_rmul_composes_left_to_right() {
        let dom = Domain::new(3);
        let mut p = perm(dom, &[&[1, 2]]);
        let q = perm(dom, &[&[2, 3]]);
        p.rmul(&q);
        // apply p then q: 1 -> 2 -> 3, 2 -> 1 -> 1, 3 -> 3 -> 2
        assert_eq!(p.to_perm_string(), "3 1 2");
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_lmul_composes_right_to_left() {
        let dom = Domain::new(3);
        let mut p = perm(dom, &[&[1, 2]]);
        let q = perm(dom, &[&[2, 3]]);
        p.lmul(&q);
        // apply q then p: 1 -> 1 -> 2, 2 -> 3 -> 3, 3 -> 2 -> 1
        assert_eq!(p.to_perm_string(), "2 3 1");
    }

    #[test]
    fn test_inverse_law() {
        let dom = Domain::new(8);
        let p = perm(dom, &[&[1, 5, 2], &[3, 8], &[4, 7, 6]]);
        let mut inv = p.clone();
        inv.inverse();
        assert!(inv.validate().is_ok());
        for x in dom.values() {
            assert_eq!(inv.apply(p.apply(x)), x);
        }
    }

    #[test]
    fn test_rmul_associativity() {
        let dom = Domain::new(5);
        let p = perm(dom, &[&[1, 2, 3]]);
        let q = perm(dom, &[&[2, 4], &[3, 5]]);
        let r = perm(dom, &[&[1, 5, 4, 2]]);

        let mut left = p.clone();
        left.rmul(&q);
        left.rmul(&r);

        let mut qr = q.clone();
        qr.rmul(&r);
        let mut right = p.clone();
        right.rmul(&qr);

        assert_eq!(left, right);
    }

    #[test]
    fn test_present_as_perm_roundtrip() {
        let dom = Domain::new(6);
        let p = perm(dom, &[&[1, 3], &[2, 6, 5]]);
        let table = p.present_as_perm();
        let rebuilt = Permutation::from_loops(dom, create_loops(&dom, &table));
        assert_eq!(p, rebuilt);
    }

    #[test]
    fn test_parse_loops() {
        let dom = Domain::new(6);
        let p = Permutation::parse_loops(dom, "(3 1 6)(5 4)").unwrap();
        assert_eq!(p.to_string(), "(4 5)(2)(1 6 3)");

        // round trip through the dump form
        let q = Permutation::parse_loops(dom, &p.to_string()).unwrap();
        assert_eq!(p, q);
    }

    #[test]
    fn test_parse_loops_errors() {
        let dom = Domain::new(6);
        assert!(matches!(
            Permutation::parse_loops(dom, "(1 2"),
            Err(Error::MalformedInput(_))
        ));
        assert!(matches!(
            Permutation::parse_loops(dom, "1 2)"),
            Err(Error::MalformedInput(_))
        ));
        assert!(matches!(
            Permutation::parse_loops(dom, "(1 x)"),
            Err(Error::MalformedInput(_))
        ));
        assert!(matches!(
            Permutation::parse_loops(dom, "(1 9)"),
            Err(Error::Domain { .. })
        ));
    }
}
