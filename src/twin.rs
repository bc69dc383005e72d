//! Twin tree: the intermediate representation for Baxter-permutation
//! synthesis.
//!
//! A twin tree pairs two [`TabTree`][crate::tabtree::TabTree] topologies
//! over one shared payload array: a forward tree built by inserting a value
//! sequence in the given order, and a backward tree built by inserting the
//! same values in reverse order, with every backward id remapped
//! `i -> n-1-i` so both trees live on one id space.
//!
//! [`TwinTree::into_baxters`] is Knuth's destructive conversion: repeatedly
//! emit the forward root's payload and remove the node, using the parent
//! link recovered from the backward tree to decide which forward child gets
//! promoted into the vacated slot. The output is a permutation of the input
//! values and always satisfies the Baxter property. The conversion consumes
//! the tree by value, so a converted twin tree cannot be reused.
//!
//! See <https://www-cs-faculty.stanford.edu/~knuth/programs/twintree-to-baxter.w>
//! for why this works.

use std::fmt::Write as _;

use log::debug;

use crate::error::Result;
use crate::tabtree::TabTree;

#[derive(Debug, Clone)]
pub struct TwinTree {
    t0: Option<usize>,
    t1: Option<usize>,
    data: Vec<i64>,
    l0: Vec<Option<usize>>,
    r0: Vec<Option<usize>>,
    l1: Vec<Option<usize>>,
    r1: Vec<Option<usize>>,
}

impl TwinTree {
    /// Builds the forward and backward trees from a value sequence.
    ///
    /// Fails with [`Error::DuplicateKey`][crate::error::Error::DuplicateKey]
    /// if the sequence repeats a value.
    pub fn from_perm(values: &[i64]) -> Result<Self> {
        let n = values.len();

        let mut forward = TabTree::with_capacity(n);
        for &v in values {
            forward.insert_ordered(v)?;
        }
        let (t0, l0, r0, data) = forward.into_parts();

        let mut backward = TabTree::with_capacity(n);
        for &v in values.iter().rev() {
            backward.insert_ordered(v)?;
        }
        let (t1, mut l1, mut r1, _) = backward.into_parts();

        // align the backward tree on the forward id space: reversing the
        // insertion order means backward node i is forward node n-1-i
        let remap = |link: Option<usize>| link.map(|k| n - 1 - k);
        l1.reverse();
        r1.reverse();
        for link in l1.iter_mut().chain(r1.iter_mut()) {
            *link = remap(*link);
        }
        let t1 = remap(t1);

        Ok(Self {
            t0,
            t1,
            data,
            l0,
            r0,
            l1,
            r1,
        })
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Pretty dump: both root payloads, then the payload array, then the
    /// four link tables with absent links printed as zeroes.
    pub fn dump_table(&self) -> String {
        let mut out = String::new();
        let root_data = |t: Option<usize>| t.map_or(0, |k| self.data[k]);
        let _ = writeln!(out, "{} {}", root_data(self.t0), root_data(self.t1));

        let mut dump_row = |row: &[i64]| {
            for v in row {
                let _ = write!(out, "{} ", v);
            }
            let _ = writeln!(out);
        };
        dump_row(&self.data);
        for links in [&self.l0, &self.r0, &self.l1, &self.r1] {
            let row: Vec<i64> = links.iter().map(|&k| root_data(k)).collect();
            dump_row(&row);
        }
        out
    }

    /// Converts the twin tree into a Baxter permutation of its values.
    ///
    /// The algorithm is destructive, which is why it consumes the tree:
    /// repeatedly emit the forward root's payload, then remove the node
    /// guided by its backward parent link. When the backward parent relation
    /// says "left child", the forward right child (if any) is promoted into
    /// the vacated slot and the walk descends into the forward left child;
    /// the other case is symmetric. The loop ends at the node with no
    /// backward parent.
    pub fn into_baxters(mut self) -> Vec<i64> {
        let n = self.size();
        let Some(mut t0) = self.t0 else {
            return Vec::new();
        };
        // ordered insertion always places the first value at id 0
        assert_eq!(t0, 0);

        // backward parent of each node: (parent id, +1 left / -1 right),
        // 0 marking the backward root
        let mut parent = vec![(0usize, 0i8); n];
        for k in 0..n {
            if let Some(c) = self.l1[k] {
                parent[c] = (k, 1);
            }
            if let Some(c) = self.r1[k] {
                parent[c] = (k, -1);
            }
        }

        let mut baxters = Vec::with_capacity(n);
        loop {
            debug!("emitting {}", self.data[t0]);
            baxters.push(self.data[t0]);
            let (i, lr) = parent[t0];
            if lr == 0 {
                break;
            }
            debug!("backward parent is {} ({})", self.data[i], lr);

            if lr > 0 {
                self.l1[i] = None;
                match self.r0[t0] {
                    None => t0 = self.l0[t0].expect("twin tree out of forward children"),
                    Some(r) => {
                        self.l0[i] = self.l0[t0];
                        t0 = r;
                    }
                }
            } else {
                self.r1[i] = None;
                match self.l0[t0] {
                    None => t0 = self.r0[t0].expect("twin tree out of forward children"),
                    Some(l) => {
                        self.r0[i] = self.r0[t0];
                        t0 = l;
                    }
                }
            }
        }
        baxters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baxter::is_baxter_seq;
    use crate::error::Error;
    use crate::permgen::next_permutation;
    use test_log::test;

    #[test]
    fn test_empty_and_tiny() {
        assert_eq!(TwinTree::from_perm(&[]).unwrap().into_baxters(), vec![]);
        assert_eq!(TwinTree::from_perm(&[1]).unwrap().into_baxters(), vec![1]);

        let out = TwinTree::from_perm(&[2, 1]).unwrap().into_baxters();
        let mut sorted = out.clone();
        sorted.sort();
        assert_eq!(sorted, vec![1, 2]);
    }

    #[test]
    fn test_duplicate_values_rejected() {
        assert_eq!(
            TwinTree::from_perm(&[1, 2, 1]).map(|_| ()),
            Err(Error::DuplicateKey(1))
        );
    }

    #[test]
    fn test_output_is_permutation_of_input() {
        let input = [3, 1, 4, 2, 5];
        let out = TwinTree::from_perm(&input).unwrap().into_baxters();
        let mut sorted = out.clone();
        sorted.sort();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_every_output_is_baxter_n4() {
        let mut perm: Vec<i64> = vec![1, 2, 3, 4];
        loop {
            let out = TwinTree::from_perm(&perm).unwrap().into_baxters();
            let mut sorted = out.clone();
            sorted.sort();
            assert_eq!(sorted, vec![1, 2, 3, 4], "not a permutation: {:?}", out);
            assert!(is_baxter_seq(&out), "{:?} gave non-Baxter {:?}", perm, out);
            if !next_permutation(&mut perm) {
                break;
            }
        }
    }

    #[test]
    fn test_every_output_is_baxter_n5() {
        let mut perm: Vec<i64> = vec![1, 2, 3, 4, 5];
        loop {
            let out = TwinTree::from_perm(&perm).unwrap().into_baxters();
            assert!(is_baxter_seq(&out), "{:?} gave non-Baxter {:?}", perm, out);
            if !next_permutation(&mut perm) {
                break;
            }
        }
    }

    #[test]
    fn test_known_non_baxter_input_converts() {
        // 2 4 1 3 is not Baxter; the conversion must still produce one
        let out = TwinTree::from_perm(&[2, 4, 1, 3]).unwrap().into_baxters();
        assert!(is_baxter_seq(&out));
    }

    #[test]
    fn test_dump_table_shape() {
        let twin = TwinTree::from_perm(&[2, 1, 3]).unwrap();
        let dump = twin.dump_table();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 6);
        // forward root is the first inserted value, backward root the last
        assert_eq!(lines[0], "2 3");
        assert_eq!(lines[1], "2 1 3 ");
    }
}
