//! Tabulated binary search tree.
//!
//! A [`TabTree`] keeps its topology in parallel `left`/`right` arrays
//! addressed by dense node ids, with payloads in a matching `data` array.
//! Nothing is ever relinked after insertion, which makes the layout ideal
//! for almost-immutable trees and lets other structures (the twin tree)
//! take the raw arrays apart and do index arithmetic on them.
//!
//! Two construction modes are supported:
//!
//! 1. ordered insertion of a value sequence by binary-search descent, and
//! 2. reconstruction from a topology (bracket) encoding: a pre-order
//!    traversal serialized as "descend" / "return to parent" markers,
//!    equivalent to a balanced-bracket string, with payloads `1..=n`
//!    assigned in-order afterwards so the result is a valid BST.
//!
//! All traversals are iterative with explicit stacks; nothing here recurses
//! on the call stack.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TabTree {
    left: Vec<Option<usize>>,
    right: Vec<Option<usize>>,
    data: Vec<i64>,
    root: Option<usize>,
    free_pos: usize,
}

impl TabTree {
    /// An empty tree with room for `size` nodes.
    pub fn with_capacity(size: usize) -> Self {
        Self {
            left: vec![None; size],
            right: vec![None; size],
            data: vec![0; size],
            root: None,
            free_pos: 0,
        }
    }

    /// Reconstructs tree shape from a topology encoding (`true` = descend
    /// into a new child, `false` = return to parent), then assigns payloads
    /// `1..=n` in-order.
    ///
    /// The encoding must be a balanced sequence of length `2n`; anything
    /// else fails with [`Error::MalformedInput`].
    pub fn from_topology(topology: &[bool]) -> Result<Self> {
        if topology.len() % 2 != 0 {
            return Err(Error::MalformedInput(
                "topology length must be even".to_string(),
            ));
        }
        let size = topology.len() / 2;
        let mut tree = Self::with_capacity(size);
        if size == 0 {
            return Ok(tree);
        }
        tree.reconstruct_topology(topology)?;

        let mut next = 1i64;
        tree.visit_inorder_mut(|data| {
            *data = next;
            next += 1;
        });
        Ok(tree)
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts a value by standard binary-search descent.
    ///
    /// Fails with [`Error::DuplicateKey`] if the value is already present.
    ///
    /// # Panics
    ///
    /// Panics if the tree is already full.
    pub fn insert_ordered(&mut self, value: i64) -> Result<()> {
        assert!(self.free_pos < self.size(), "TabTree is full");

        let Some(root) = self.root else {
            self.data[0] = value;
            self.root = Some(0);
            self.free_pos = 1;
            return Ok(());
        };

        // find the empty link to hang the new node on
        let mut node = root;
        loop {
            if value == self.data[node] {
                return Err(Error::DuplicateKey(value));
            }
            let link = if value < self.data[node] {
                &mut self.left[node]
            } else {
                &mut self.right[node]
            };
            match *link {
                Some(next) => node = next,
                None => {
                    *link = Some(self.free_pos);
                    self.data[self.free_pos] = value;
                    self.free_pos += 1;
                    return Ok(());
                }
            }
        }
    }

    /// Payloads in symmetric (sorted) order.
    pub fn inorder(&self) -> Vec<i64> {
        let mut values = Vec::with_capacity(self.size());
        self.visit_inorder(|data| values.push(data));
        values
    }

    /// Dumps every parent->child edge, ordered by the child's payload and
    /// then stably by the parent's payload, prepended with the edge count
    /// and the root payload. An empty tree dumps as `[niltree]`.
    pub fn dump_edge_list(&self) -> String {
        let mut edges: Vec<(i64, i64)> = Vec::with_capacity(self.size().saturating_sub(1));
        for i in 0..self.size() {
            if let Some(l) = self.left[i] {
                edges.push((self.data[i], self.data[l]));
            }
            if let Some(r) = self.right[i] {
                edges.push((self.data[i], self.data[r]));
            }
        }

        if edges.is_empty() {
            return "[niltree]\n".to_string();
        }

        edges.sort_by_key(|&(_, child)| child);
        edges.sort_by_key(|&(parent, _)| parent); // stable

        let root = self.root.expect("non-empty tree has a root");
        let mut out = format!("{}\n{}\n", edges.len(), self.data[root]);
        for (parent, child) in edges {
            let _ = writeln!(out, "{} -- {}", parent, child);
        }
        out
    }

    /// Dumps the tree in dot format: same-rank groupings from a leaves-first
    /// rank assignment (child rank = parent rank + 1), left links red, right
    /// links blue, missing links dotted to a shared `nil` node.
    pub fn to_dot(&self) -> std::result::Result<String, std::fmt::Error> {
        let mut dot = String::new();
        writeln!(dot, "graph {{")?;
        let Some(root) = self.root else {
            writeln!(dot, "}}")?;
            return Ok(dot);
        };

        writeln!(dot, "{{ rank=source {} }}", self.data[root])?;
        writeln!(dot, "{{ rank=sink nil }}")?;

        // child rank = parent rank + 1, assigned with an explicit worklist
        let mut ranks = vec![0usize; self.size()];
        let mut work = vec![root];
        while let Some(node) = work.pop() {
            for child in [self.left[node], self.right[node]].into_iter().flatten() {
                ranks[child] = ranks[node] + 1;
                work.push(child);
            }
        }

        let mut by_rank = BTreeMap::<usize, Vec<usize>>::new();
        for (node, &rank) in ranks.iter().enumerate() {
            by_rank.entry(rank).or_default().push(node);
        }
        let max_rank = ranks.iter().copied().max().unwrap_or(0);
        for (&rank, nodes) in &by_rank {
            if rank == 0 || rank >= max_rank {
                continue;
            }
            write!(dot, "{{ rank=same ")?;
            for &node in nodes {
                write!(dot, "{} ", self.data[node])?;
            }
            writeln!(dot, " }}")?;
        }

        for i in 0..self.size() {
            match self.left[i] {
                Some(l) => writeln!(dot, "{} -- {} [color = red]", self.data[i], self.data[l])?,
                None => writeln!(dot, "{} -- nil [style=dotted]", self.data[i])?,
            }
            match self.right[i] {
                Some(r) => writeln!(dot, "{} -- {} [color = blue]", self.data[i], self.data[r])?,
                None => writeln!(dot, "{} -- nil [style=dotted]", self.data[i])?,
            }
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }

    /// Re-serializes the tree shape into the pre-order bracket encoding
    /// accepted by [`TabTree::from_topology`].
    pub fn topology(&self) -> Vec<bool> {
        let mut out = Vec::with_capacity(self.size() * 2);
        let Some(root) = self.root else {
            return out;
        };

        let mut stack = Vec::new();
        out.push(true);
        stack.push(self.right[root]);
        stack.push(self.left[root]);

        while let Some(cur) = stack.pop() {
            match cur {
                Some(node) => {
                    out.push(true);
                    stack.push(self.right[node]);
                    stack.push(self.left[node]);
                }
                None => out.push(false),
            }
        }
        // the trailing return-to-parent of the root is implied
        out.pop();
        out
    }

    /// The topology as a bracket string like `(()())()`.
    pub fn dump_topology(&self) -> String {
        to_brace_string(&self.topology())
    }

    /// Takes the raw structure apart: `(root, left, right, data)`.
    pub fn into_parts(self) -> (Option<usize>, Vec<Option<usize>>, Vec<Option<usize>>, Vec<i64>) {
        (self.root, self.left, self.right, self.data)
    }

    // main idea: push the pending right and left links of each node
    fn reconstruct_topology(&mut self, topology: &[bool]) -> Result<()> {
        if topology.first() != Some(&true) {
            return Err(Error::MalformedInput(
                "topology must start with an opening bracket".to_string(),
            ));
        }
        self.root = Some(0);
        let mut cur_node = 0usize;
        // (parent id, is-left-link)
        let mut stack = vec![(0usize, false), (0usize, true)];

        for &descend in &topology[1..] {
            let Some((parent, is_left)) = stack.pop() else {
                return Err(Error::MalformedInput(
                    "unbalanced topology encoding".to_string(),
                ));
            };
            if descend {
                cur_node += 1;
                if cur_node >= self.size() {
                    return Err(Error::MalformedInput(
                        "topology encodes too many nodes".to_string(),
                    ));
                }
                let link = if is_left {
                    &mut self.left[parent]
                } else {
                    &mut self.right[parent]
                };
                debug_assert!(link.is_none());
                *link = Some(cur_node);
                stack.push((cur_node, false));
                stack.push((cur_node, true));
            }
        }

        // exactly the root's right link must remain pending
        if stack.len() != 1 || cur_node + 1 != self.size() {
            return Err(Error::MalformedInput(
                "unbalanced topology encoding".to_string(),
            ));
        }
        Ok(())
    }

    fn visit_inorder(&self, mut visitor: impl FnMut(i64)) {
        let mut stack = Vec::new();
        let mut node = self.root;
        while !stack.is_empty() || node.is_some() {
            match node {
                Some(n) => {
                    stack.push(n);
                    node = self.left[n];
                }
                None => {
                    let n = stack.pop().expect("stack checked non-empty");
                    visitor(self.data[n]);
                    node = self.right[n];
                }
            }
        }
    }

    fn visit_inorder_mut(&mut self, mut visitor: impl FnMut(&mut i64)) {
        let mut stack = Vec::new();
        let mut node = self.root;
        while !stack.is_empty() || node.is_some() {
            match node {
                Some(n) => {
                    stack.push(n);
                    node = self.left[n];
                }
                None => {
                    let n = stack.pop().expect("stack checked non-empty");
                    visitor(&mut self.data[n]);
                    node = self.right[n];
                }
            }
        }
    }
}

/// Reverses a topology sequence.
///
/// This is not plain array reversal, because `()` reversed is not `)(`:
/// the element order reverses *and* every element flips its open/close
/// sense. E.g. `(())` as `1100` reverses to `1010`, i.e. `()()`.
pub fn brace_reverse(topology: &mut [bool]) {
    topology.reverse();
    for b in topology.iter_mut() {
        *b = !*b;
    }
}

/// Renders a topology sequence as a bracket string.
pub fn to_brace_string(topology: &[bool]) -> String {
    topology.iter().map(|&b| if b { '(' } else { ')' }).collect()
}

/// Parses exactly `2n` bracket characters (whitespace is skipped) into a
/// topology sequence.
pub fn parse_braces(text: &str, pairs: usize) -> Result<Vec<bool>> {
    let mut out = Vec::with_capacity(2 * pairs);
    let mut chars = text.chars();
    while out.len() < 2 * pairs {
        match chars.next() {
            Some('(') => out.push(true),
            Some(')') => out.push(false),
            Some(c) if c.is_whitespace() => continue,
            Some(c) => {
                return Err(Error::MalformedInput(format!("unexpected symbol {:?}", c)));
            }
            None => {
                return Err(Error::MalformedInput(format!(
                    "expected {} bracket characters, got {}",
                    2 * pairs,
                    out.len()
                )));
            }
        }
    }
    Ok(out)
}

/// Parses `count` whitespace-separated integers.
pub fn parse_order(text: &str, count: usize) -> Result<Vec<i64>> {
    let mut values = Vec::with_capacity(count);
    let mut tokens = text.split_whitespace();
    for _ in 0..count {
        let token = tokens.next().ok_or_else(|| {
            Error::MalformedInput(format!("expected {} integers, got {}", count, values.len()))
        })?;
        let value = token
            .parse::<i64>()
            .map_err(|_| Error::MalformedInput(format!("expected integer, got {:?}", token)))?;
        values.push(value);
    }
    Ok(values)
}

/// Reads a tree of `pairs` nodes from a bracket string. With `back` set, the
/// encoding is brace-reversed first, which builds the mirror-order tree.
pub fn read_bst_braced(text: &str, pairs: usize, back: bool) -> Result<TabTree> {
    let mut topology = parse_braces(text, pairs)?;
    if back {
        brace_reverse(&mut topology);
    }
    TabTree::from_topology(&topology)
}

/// Reads a tree by ordered insertion of `count` integers. With `back` set,
/// the values are inserted in reverse order.
pub fn read_bst_ordered(text: &str, count: usize, back: bool) -> Result<TabTree> {
    let mut values = parse_order(text, count)?;
    if back {
        values.reverse();
    }
    let mut tree = TabTree::with_capacity(count);
    for value in values {
        tree.insert_ordered(value)?;
    }
    Ok(tree)
}
